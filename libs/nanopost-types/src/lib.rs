//! Shared types and signature primitives for the nanoPost delivery API.
//!
//! This crate provides:
//! - Request payloads sent to the remote API (`RegisterRequest`, `MailPayload`, `UpdateDomainRequest`)
//! - A loosely-typed view of remote replies (`ApiReply`)
//! - Response bodies served to the remote API (`DomainChallenge`, `RecipientVerdict`)
//! - HMAC-SHA256 signing and verification for recipient checks

mod content_type;
mod crypto;
mod errors;
mod replies;
mod requests;

pub use content_type::ContentType;
pub use crypto::{
    SIGNATURE_WINDOW_SECS, check_recipient_request, is_within_signature_window,
    sign_recipient_check, verify_recipient_signature,
};
pub use errors::{ErrorCode, SignatureError};
pub use replies::{ApiReply, DomainChallenge, RecipientVerdict, is_truthy};
pub use requests::{MailPayload, RegisterRequest, UpdateDomainRequest};
