//! Svix-scheme webhook signature verification.
//!
//! The provider signs `{msg_id}.{timestamp}.{raw body}` with HMAC-SHA256
//! using the shared `whsec_`-prefixed base64 secret. The `svix-signature`
//! header carries one or more space-separated `{version},{base64 mac}`
//! entries; the payload is accepted if any `v1` entry matches.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;
use time::OffsetDateTime;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("webhook secret is not valid base64")]
    BadSecret,
    #[error("timestamp header is not a unix timestamp")]
    BadTimestamp,
    #[error("timestamp outside tolerance")]
    TimestampOutOfRange,
    #[error("no matching signature")]
    Mismatch,
}

#[derive(Debug)]
pub struct WebhookVerifier {
    key: Vec<u8>,
    tolerance_secs: i64,
}

impl WebhookVerifier {
    pub fn new(secret: &str, tolerance_secs: i64) -> Result<Self, SignatureError> {
        let encoded = secret.strip_prefix("whsec_").unwrap_or(secret);
        let key = STANDARD
            .decode(encoded)
            .map_err(|_| SignatureError::BadSecret)?;
        Ok(Self {
            key,
            tolerance_secs,
        })
    }

    pub fn verify(
        &self,
        msg_id: &str,
        timestamp: &str,
        signatures: &str,
        body: &[u8],
    ) -> Result<(), SignatureError> {
        self.verify_at(
            msg_id,
            timestamp,
            signatures,
            body,
            OffsetDateTime::now_utc().unix_timestamp(),
        )
    }

    fn verify_at(
        &self,
        msg_id: &str,
        timestamp: &str,
        signatures: &str,
        body: &[u8],
        now: i64,
    ) -> Result<(), SignatureError> {
        let ts: i64 = timestamp.parse().map_err(|_| SignatureError::BadTimestamp)?;
        if (now - ts).abs() > self.tolerance_secs {
            return Err(SignatureError::TimestampOutOfRange);
        }

        for entry in signatures.split_whitespace() {
            let Some((version, sig_b64)) = entry.split_once(',') else {
                continue;
            };
            if version != "v1" {
                continue;
            }
            let Ok(expected) = STANDARD.decode(sig_b64) else {
                continue;
            };
            // Mac::verify_slice is constant-time.
            if self
                .mac_for(msg_id, timestamp, body)
                .verify_slice(&expected)
                .is_ok()
            {
                return Ok(());
            }
        }
        Err(SignatureError::Mismatch)
    }

    fn mac_for(&self, msg_id: &str, timestamp: &str, body: &[u8]) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC accepts keys of any length");
        mac.update(msg_id.as_bytes());
        mac.update(b".");
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(body);
        mac
    }

    /// Produce a `v1,...` entry for the given message, as the provider would.
    #[cfg(test)]
    pub fn sign(&self, msg_id: &str, timestamp: &str, body: &[u8]) -> String {
        let mac = self.mac_for(msg_id, timestamp, body).finalize();
        format!("v1,{}", STANDARD.encode(mac.into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_dGVzdC13ZWJob29rLXNlY3JldA==";
    const BODY: &[u8] = br#"{"type":"user.created","data":{"id":"user_1","username":"ann"}}"#;

    fn verifier() -> WebhookVerifier {
        WebhookVerifier::new(SECRET, 300).expect("valid secret")
    }

    #[test]
    fn accepts_valid_signature() {
        let v = verifier();
        let sig = v.sign("msg_1", "1700000000", BODY);
        assert_eq!(
            v.verify_at("msg_1", "1700000000", &sig, BODY, 1_700_000_010),
            Ok(())
        );
    }

    #[test]
    fn accepts_when_any_entry_matches() {
        let v = verifier();
        let good = v.sign("msg_1", "1700000000", BODY);
        let header = format!("v1,AAAAaW52YWxpZA== {good}");
        assert_eq!(
            v.verify_at("msg_1", "1700000000", &header, BODY, 1_700_000_000),
            Ok(())
        );
    }

    #[test]
    fn rejects_tampered_body() {
        let v = verifier();
        let sig = v.sign("msg_1", "1700000000", BODY);
        let err = v
            .verify_at("msg_1", "1700000000", &sig, b"{}", 1_700_000_000)
            .unwrap_err();
        assert_eq!(err, SignatureError::Mismatch);
    }

    #[test]
    fn rejects_wrong_secret() {
        let v = verifier();
        let other = WebhookVerifier::new("whsec_b3RoZXItc2VjcmV0", 300).expect("valid secret");
        let sig = other.sign("msg_1", "1700000000", BODY);
        assert_eq!(
            v.verify_at("msg_1", "1700000000", &sig, BODY, 1_700_000_000),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn rejects_unknown_scheme_version() {
        let v = verifier();
        let sig = v.sign("msg_1", "1700000000", BODY).replace("v1,", "v2,");
        assert_eq!(
            v.verify_at("msg_1", "1700000000", &sig, BODY, 1_700_000_000),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn rejects_stale_timestamp() {
        let v = verifier();
        let sig = v.sign("msg_1", "1700000000", BODY);
        assert_eq!(
            v.verify_at("msg_1", "1700000000", &sig, BODY, 1_700_000_000 + 301),
            Err(SignatureError::TimestampOutOfRange)
        );
    }

    #[test]
    fn rejects_malformed_timestamp() {
        let v = verifier();
        assert_eq!(
            v.verify_at("msg_1", "yesterday", "v1,AA==", BODY, 1_700_000_000),
            Err(SignatureError::BadTimestamp)
        );
    }

    #[test]
    fn rejects_malformed_secret() {
        assert_eq!(
            WebhookVerifier::new("whsec_???", 300).unwrap_err(),
            SignatureError::BadSecret
        );
    }
}
