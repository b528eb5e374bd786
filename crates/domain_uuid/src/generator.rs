//! UUID construction
//!
//! Every version is assembled byte by byte and then stamped with its version
//! nibble (high nibble of byte 6) and the RFC 4122 variant (`10` in the top
//! bits of byte 8).
//!
//! # Known limitations
//!
//! - **v7** carries no counter, so two values minted in the same millisecond
//!   are ordered only by their random tail. Ordering is non-decreasing by
//!   timestamp, not strictly increasing.
//! - **v1** fills the clock sequence and node fields from the random source
//!   instead of a stored clock sequence and a MAC address.

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use tracing::debug;
use uuid::Uuid;

use core_kernel::{Clock, OsRandom, RandomSource, SystemClock};

use crate::version::UuidVersion;

/// Milliseconds between 1582-10-15 and the Unix epoch
pub const GREGORIAN_OFFSET_MILLIS: u64 = 12_219_292_800_000;

/// 100-nanosecond intervals per millisecond
const TICKS_PER_MILLI: u64 = 10_000;

const V1_TICK_MASK: u64 = (1 << 60) - 1;

fn stamp(bytes: &mut [u8; 16], version: u8) {
    bytes[6] = (bytes[6] & 0x0f) | (version << 4);
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
}

fn random_block<R: RandomSource + ?Sized>(rng: &mut R) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes
}

fn name_digest<D: Digest>(namespace: &Uuid, name: &str) -> [u8; 16] {
    let mut hasher = D::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes
}

/// Renders the canonical lowercase `8-4-4-4-12` form
pub fn to_canonical(uuid: &Uuid) -> String {
    uuid.hyphenated().to_string()
}

/// Random UUID (version 4)
pub fn generate_v4<R: RandomSource + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = random_block(rng);
    stamp(&mut bytes, 4);
    Uuid::from_bytes(bytes)
}

/// Unix-time-ordered UUID (version 7)
///
/// The first 48 bits hold the big-endian Unix timestamp in milliseconds.
pub fn generate_v7<R, C>(rng: &mut R, clock: &C) -> Uuid
where
    R: RandomSource + ?Sized,
    C: Clock + ?Sized,
{
    let mut bytes = random_block(rng);
    let millis = clock.unix_millis();
    bytes[..6].copy_from_slice(&millis.to_be_bytes()[2..]);
    stamp(&mut bytes, 7);
    Uuid::from_bytes(bytes)
}

/// Gregorian-time UUID (version 1)
///
/// The 60-bit count of 100 ns intervals since 1582-10-15 is split into
/// `time_low` (bytes 0..4), `time_mid` (bytes 4..6) and `time_hi`
/// (low 12 bits of bytes 6..8).
pub fn generate_v1<R, C>(rng: &mut R, clock: &C) -> Uuid
where
    R: RandomSource + ?Sized,
    C: Clock + ?Sized,
{
    let mut bytes = random_block(rng);
    let ticks = clock
        .unix_millis()
        .wrapping_add(GREGORIAN_OFFSET_MILLIS)
        .wrapping_mul(TICKS_PER_MILLI)
        & V1_TICK_MASK;

    let time_low = (ticks & 0xffff_ffff) as u32;
    let time_mid = ((ticks >> 32) & 0xffff) as u16;
    let time_hi = ((ticks >> 48) & 0x0fff) as u16;

    bytes[0..4].copy_from_slice(&time_low.to_be_bytes());
    bytes[4..6].copy_from_slice(&time_mid.to_be_bytes());
    bytes[6..8].copy_from_slice(&time_hi.to_be_bytes());
    stamp(&mut bytes, 1);
    Uuid::from_bytes(bytes)
}

/// Name-based UUID using MD5 (version 3)
pub fn generate_v3(namespace: &Uuid, name: &str) -> Uuid {
    let mut bytes = name_digest::<Md5>(namespace, name);
    stamp(&mut bytes, 3);
    Uuid::from_bytes(bytes)
}

/// Name-based UUID using SHA-1 (version 5)
pub fn generate_v5(namespace: &Uuid, name: &str) -> Uuid {
    let mut bytes = name_digest::<Sha1>(namespace, name);
    stamp(&mut bytes, 5);
    Uuid::from_bytes(bytes)
}

/// Generates one UUID of the requested version
///
/// `namespace` and `name` only matter for v3 and v5; they default to the DNS
/// namespace and the empty name.
pub fn generate_uuid<R, C>(
    version: UuidVersion,
    namespace: Option<&Uuid>,
    name: Option<&str>,
    rng: &mut R,
    clock: &C,
) -> Uuid
where
    R: RandomSource + ?Sized,
    C: Clock + ?Sized,
{
    let namespace = namespace.unwrap_or(&Uuid::NAMESPACE_DNS);
    let name = name.unwrap_or("");

    match version {
        UuidVersion::V1 => generate_v1(rng, clock),
        UuidVersion::V3 => generate_v3(namespace, name),
        UuidVersion::V4 => generate_v4(rng),
        UuidVersion::V5 => generate_v5(namespace, name),
        UuidVersion::V7 => generate_v7(rng, clock),
    }
}

/// A batch generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidInput {
    pub version: UuidVersion,
    /// Namespace for v3/v5; DNS when absent
    pub namespace: Option<Uuid>,
    /// Name for v3/v5; empty when absent
    pub name: Option<String>,
    /// Number of UUIDs to generate
    pub count: usize,
}

impl UuidInput {
    /// Creates a request for `count` UUIDs of `version`
    pub fn new(version: UuidVersion, count: usize) -> Self {
        Self {
            version,
            namespace: None,
            name: None,
            count,
        }
    }

    /// Sets the namespace and name used by v3/v5
    pub fn with_name(mut self, namespace: Uuid, name: impl Into<String>) -> Self {
        self.namespace = Some(namespace);
        self.name = Some(name.into());
        self
    }
}

/// Generated UUIDs in canonical form, in generation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidResult {
    pub uuids: Vec<String>,
    pub version: UuidVersion,
}

/// Generator bound to a random source and a clock
#[derive(Debug, Clone)]
pub struct UuidGenerator<R, C> {
    rng: R,
    clock: C,
}

impl UuidGenerator<OsRandom, SystemClock> {
    /// Generator backed by the OS CSPRNG and the system clock
    pub fn system() -> Self {
        Self::new(OsRandom, SystemClock)
    }
}

impl<R: RandomSource, C: Clock> UuidGenerator<R, C> {
    pub fn new(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    /// Generates a single UUID
    pub fn generate(&mut self, version: UuidVersion, namespace: Option<&Uuid>, name: Option<&str>) -> Uuid {
        generate_uuid(version, namespace, name, &mut self.rng, &self.clock)
    }

    /// Generates `input.count` independent UUIDs
    pub fn generate_batch(&mut self, input: &UuidInput) -> UuidResult {
        debug!(version = %input.version, count = input.count, "generating uuids");

        let uuids = (0..input.count)
            .map(|_| {
                let uuid = self.generate(input.version, input.namespace.as_ref(), input.name.as_deref());
                to_canonical(&uuid)
            })
            .collect();

        UuidResult {
            uuids,
            version: input.version,
        }
    }
}
