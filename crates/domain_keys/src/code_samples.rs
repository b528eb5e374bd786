//! Signature verification snippets
//!
//! Copy-paste examples handed to integrators alongside a webhook secret.
//! They are text only and never executed here.

use serde::{Deserialize, Serialize};

use crate::webhook::WebhookAlgorithm;

/// Replay window, in seconds, enforced by the generated snippets
pub const TOLERANCE_SECONDS: u64 = 300;

const SECRET_MARKER: &str = "__SECRET__";
const HASH_MARKER: &str = "__HASH__";
const TOLERANCE_MARKER: &str = "__TOLERANCE__";

const NODEJS_TEMPLATE: &str = r#"const crypto = require('crypto');

const SECRET = '__SECRET__';
const TOLERANCE_SECONDS = __TOLERANCE__; // 5 minutes

function verifyWebhookSignature(payload, signature, timestamp) {
  // Validate timestamp to prevent replay attacks
  const currentTime = Math.floor(Date.now() / 1000);
  if (Math.abs(currentTime - parseInt(timestamp)) > TOLERANCE_SECONDS) {
    throw new Error('Timestamp outside tolerance window');
  }

  // Create signature
  const signedPayload = `${timestamp}.${payload}`;
  const expectedSignature = crypto
    .createHmac('__HASH__', SECRET)
    .update(signedPayload)
    .digest('hex');

  // Compare signatures (timing-safe)
  return crypto.timingSafeEqual(
    Buffer.from(signature),
    Buffer.from(expectedSignature)
  );
}

// Usage with Express
app.post('/webhook', (req, res) => {
  const signature = req.headers['x-signature'];
  const timestamp = req.headers['x-timestamp'];
  const payload = JSON.stringify(req.body);

  try {
    if (verifyWebhookSignature(payload, signature, timestamp)) {
      // Process webhook
      res.status(200).send('OK');
    } else {
      res.status(401).send('Invalid signature');
    }
  } catch (error) {
    res.status(401).send(error.message);
  }
});"#;

const PYTHON_TEMPLATE: &str = r#"import hmac
import hashlib
import time

SECRET = '__SECRET__'
TOLERANCE_SECONDS = __TOLERANCE__  # 5 minutes

def verify_webhook_signature(payload: str, signature: str, timestamp: str) -> bool:
    # Validate timestamp to prevent replay attacks
    current_time = int(time.time())
    if abs(current_time - int(timestamp)) > TOLERANCE_SECONDS:
        raise ValueError('Timestamp outside tolerance window')

    # Create signature
    signed_payload = f"{timestamp}.{payload}"
    expected_signature = hmac.new(
        SECRET.encode(),
        signed_payload.encode(),
        hashlib.__HASH__
    ).hexdigest()

    # Compare signatures (timing-safe)
    return hmac.compare_digest(signature, expected_signature)

# Usage with Flask
from flask import Flask, request

app = Flask(__name__)

@app.route('/webhook', methods=['POST'])
def webhook():
    signature = request.headers.get('X-Signature')
    timestamp = request.headers.get('X-Timestamp')
    payload = request.get_data(as_text=True)

    try:
        if verify_webhook_signature(payload, signature, timestamp):
            # Process webhook
            return 'OK', 200
        else:
            return 'Invalid signature', 401
    except ValueError as e:
        return str(e), 401"#;

/// Verification snippets for two ecosystems
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSamples {
    /// Node.js with Express
    pub nodejs: String,
    /// Python with Flask
    pub python: String,
}

fn render(template: &str, secret: &str, hash_name: &str) -> String {
    template
        .replace(SECRET_MARKER, secret)
        .replace(HASH_MARKER, hash_name)
        .replace(TOLERANCE_MARKER, &TOLERANCE_SECONDS.to_string())
}

/// Builds the snippets for `secret` signed with `algorithm`
pub fn signature_code_samples(secret: &str, algorithm: WebhookAlgorithm) -> CodeSamples {
    let hash_name = algorithm.hash_name();
    CodeSamples {
        nodejs: render(NODEJS_TEMPLATE, secret, hash_name),
        python: render(PYTHON_TEMPLATE, secret, hash_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_fully_replaced() {
        let samples = signature_code_samples("abc123", WebhookAlgorithm::HmacSha384);
        for text in [&samples.nodejs, &samples.python] {
            assert!(!text.contains("__SECRET__"));
            assert!(!text.contains("__HASH__"));
            assert!(!text.contains("__TOLERANCE__"));
        }
    }

    #[test]
    fn test_nodejs_sample() {
        let samples = signature_code_samples("s3cr3t", WebhookAlgorithm::HmacSha256);
        assert!(samples.nodejs.contains("const SECRET = 's3cr3t';"));
        assert!(samples.nodejs.contains(".createHmac('sha256', SECRET)"));
        assert!(samples.nodejs.contains("const TOLERANCE_SECONDS = 300;"));
        assert!(samples.nodejs.contains("`${timestamp}.${payload}`"));
        assert!(samples.nodejs.contains("crypto.timingSafeEqual"));
        assert!(samples.nodejs.contains("req.headers['x-signature']"));
    }

    #[test]
    fn test_python_sample() {
        let samples = signature_code_samples("s3cr3t", WebhookAlgorithm::HmacSha512);
        assert!(samples.python.contains("SECRET = 's3cr3t'"));
        assert!(samples.python.contains("hashlib.sha512"));
        assert!(samples.python.contains("TOLERANCE_SECONDS = 300"));
        assert!(samples.python.contains("hmac.compare_digest"));
        assert!(samples.python.contains("request.headers.get('X-Timestamp')"));
    }
}
