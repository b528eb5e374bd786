//! UUID Generation Domain
//!
//! This crate builds RFC 4122 UUIDs for the generator tools.
//!
//! # Versions
//!
//! | version | source of bits |
//! |---|---|
//! | v1 | Gregorian 100 ns timestamp, random clock sequence and node |
//! | v3 | MD5 of namespace bytes followed by the UTF-8 name |
//! | v4 | random |
//! | v5 | SHA-1 of namespace bytes followed by the UTF-8 name |
//! | v7 | Unix millisecond timestamp, random tail |
//!
//! v3 and v5 are deterministic and interoperate with any other RFC 4122
//! implementation. Random and time-based versions take their randomness from
//! an injected [`core_kernel::RandomSource`] and their time from an injected
//! [`core_kernel::Clock`].
//!
//! # Example
//!
//! ```rust
//! use domain_uuid::{generate_v5, to_canonical};
//! use uuid::Uuid;
//!
//! let id = generate_v5(&Uuid::NAMESPACE_DNS, "python.org");
//! assert_eq!(to_canonical(&id), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! ```

pub mod version;
pub mod namespace;
pub mod generator;
pub mod error;

pub use version::UuidVersion;
pub use namespace::{NamespacePreset, parse_namespace, resolve_namespace};
pub use generator::{
    UuidGenerator, UuidInput, UuidResult, GREGORIAN_OFFSET_MILLIS,
    generate_uuid, generate_v1, generate_v3, generate_v4, generate_v5, generate_v7, to_canonical,
};
pub use error::UuidError;
