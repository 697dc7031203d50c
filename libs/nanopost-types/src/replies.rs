use serde::{Deserialize, Serialize};
use serde_json::Value;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Raw reply from the remote API.
///
/// The remote API is loosely typed: acknowledgement flags may be booleans,
/// numbers or strings, and error bodies are not guaranteed to be JSON. The
/// reply keeps the status and raw body and exposes field lookups with the
/// same emptiness rules the API was designed around.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub raw_body: String,
    pub body: Option<Value>,
}

impl ApiReply {
    pub fn new(status: u16, raw_body: impl Into<String>) -> Self {
        let raw_body = raw_body.into();
        let body = serde_json::from_str(&raw_body).ok();
        Self {
            status,
            raw_body,
            body,
        }
    }

    /// Looks up a top-level field when the body is a JSON object.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.as_ref()?.as_object()?.get(name)
    }

    pub fn is_truthy(&self, name: &str) -> bool {
        self.field(name).is_some_and(is_truthy)
    }

    /// Non-empty string (or number) value of a field.
    pub fn non_empty_str(&self, name: &str) -> Option<String> {
        let value = self.field(name)?;
        if !is_truthy(value) {
            return None;
        }
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// True when the remote API acknowledged delivery, synchronously
    /// (`success`) or by queueing it (`queued`).
    pub fn is_accepted(&self) -> bool {
        self.is_truthy("success") || self.is_truthy("queued")
    }

    pub fn has_error(&self) -> bool {
        self.field("error").is_some_and(|v| !v.is_null())
    }

    /// The remote `error` message, or "Unknown error".
    pub fn error_message(&self) -> String {
        match self.field("error") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => UNKNOWN_ERROR.to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// Emptiness rules used for acknowledgement flags and tokens.
///
/// `null`, `false`, `0`, `""`, `"0"`, `[]` and `{}` are empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Body of `GET /nanopost/v1/verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainChallenge {
    pub challenge: String,
    pub site_url: String,
}

/// Body of `GET /nanopost/v1/verify-recipient` once the signature is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientVerdict {
    pub allowed: bool,
    pub reason: String,
}

impl RecipientVerdict {
    pub fn allowed(reason: &str) -> Self {
        Self {
            allowed: true,
            reason: reason.to_string(),
        }
    }

    pub fn denied(reason: &str) -> Self {
        Self {
            allowed: false,
            reason: reason.to_string(),
        }
    }
}
