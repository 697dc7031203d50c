use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::SignatureError;

type HmacSha256 = Hmac<Sha256>;

/// Maximum distance, in seconds, between a signed timestamp and the local clock.
pub const SIGNATURE_WINDOW_SECS: u64 = 300;

fn recipient_mac(secret: &str, email: &str, timestamp: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(email.as_bytes());
    mac.update(timestamp.as_bytes());
    mac
}

/// Signs a recipient check the way the remote API does.
///
/// The signed message is the email immediately followed by the timestamp
/// string, keyed with the site secret as ASCII. Returns lowercase hex.
///
/// # Example
/// ```
/// use nanopost_types::{sign_recipient_check, verify_recipient_signature};
///
/// let sig = sign_recipient_check("secret", "user@example.com", "1706500000");
/// assert_eq!(sig.len(), 64);
/// assert!(verify_recipient_signature("secret", "user@example.com", "1706500000", &sig));
/// ```
pub fn sign_recipient_check(secret: &str, email: &str, timestamp: &str) -> String {
    hex::encode(recipient_mac(secret, email, timestamp).finalize().into_bytes())
}

/// Verifies a hex signature in constant time.
///
/// Only lowercase hex of the right length is accepted, the exact form
/// `sign_recipient_check` produces.
pub fn verify_recipient_signature(
    secret: &str,
    email: &str,
    timestamp: &str,
    signature: &str,
) -> bool {
    if !signature
        .bytes()
        .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    {
        return false;
    }
    let Ok(provided) = hex::decode(signature) else {
        return false;
    };
    recipient_mac(secret, email, timestamp)
        .verify_slice(&provided)
        .is_ok()
}

/// Returns true when `timestamp` is at most `SIGNATURE_WINDOW_SECS` away from `now`.
pub fn is_within_signature_window(timestamp: i64, now: i64) -> bool {
    now.abs_diff(timestamp) <= SIGNATURE_WINDOW_SECS
}

/// Full recipient-check authorization: presence, freshness, then signature.
pub fn check_recipient_request(
    secret: Option<&str>,
    email: &str,
    timestamp: Option<&str>,
    signature: Option<&str>,
    now: i64,
) -> Result<(), SignatureError> {
    let (Some(secret), Some(timestamp), Some(signature)) = (
        secret.filter(|s| !s.is_empty()),
        timestamp.filter(|t| !t.is_empty()),
        signature.filter(|s| !s.is_empty()),
    ) else {
        return Err(SignatureError::Missing);
    };

    let ts: i64 = timestamp
        .trim()
        .parse()
        .map_err(|_| SignatureError::MalformedTimestamp)?;
    if !is_within_signature_window(ts, now) {
        return Err(SignatureError::Expired);
    }

    if !verify_recipient_signature(secret, email, timestamp, signature) {
        return Err(SignatureError::Mismatch);
    }

    Ok(())
}
