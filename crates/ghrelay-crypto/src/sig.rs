use hmac::{Mac, SimpleHmac};
use sha2::Sha256;

use super::errors::{CryptoError, Result};

/// Signature scheme expected in webhook signature headers.
pub const SIGNATURE_SCHEME: &str = "sha256";

/// Webhook signature header value, in `sha256=<hex-digest>` form.
pub struct Signature<'a>(pub &'a str);

impl Signature<'_> {
    /// Check if a signature is valid for a raw body and a secret.
    ///
    /// Fails closed: an unknown scheme, a missing `=` separator or a
    /// non-hexadecimal digest all yield `false`. The digest comparison is
    /// constant-time through the `hmac` verification API.
    pub fn is_valid(&self, body: &[u8], secret: &[u8]) -> Result<bool> {
        let Some((scheme, digest)) = self.0.split_once('=') else {
            return Ok(false);
        };

        if scheme != SIGNATURE_SCHEME {
            return Ok(false);
        }

        let Ok(decoded_digest) = hex::decode(digest) else {
            return Ok(false);
        };

        let mut hmac = SimpleHmac::<Sha256>::new_from_slice(secret)
            .map_err(|_| CryptoError::InvalidSecretKeyLength)?;
        hmac.update(body);
        Ok(hmac.verify_slice(&decoded_digest).is_ok())
    }

    /// Compute the signature header value for a raw body and a secret.
    pub fn generate(body: &[u8], secret: &[u8]) -> Result<String> {
        let mut hmac = SimpleHmac::<Sha256>::new_from_slice(secret)
            .map_err(|_| CryptoError::InvalidSecretKeyLength)?;
        hmac.update(body);

        Ok(format!(
            "{}={}",
            SIGNATURE_SCHEME,
            hex::encode(hmac.finalize().into_bytes())
        ))
    }
}
