use serde::{Deserialize, Serialize};

/// A value the caller may give either as one string or as a list.
///
/// Recipients and headers arrive in both shapes; this is the only place the
/// distinction is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Comma-joined form. A single string is returned untouched.
    pub fn joined(&self) -> String {
        match self {
            OneOrMany::One(s) => s.clone(),
            OneOrMany::Many(items) => items.join(","),
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(s: &str) -> Self {
        OneOrMany::One(s.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(s: String) -> Self {
        OneOrMany::One(s)
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(items: Vec<String>) -> Self {
        OneOrMany::Many(items)
    }
}

/// An outgoing message as handed over by the host at send time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMail {
    pub to: OneOrMany,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub headers: Option<OneOrMany>,
}

impl OutgoingMail {
    pub fn new(to: impl Into<OneOrMany>, subject: &str, message: &str) -> Self {
        Self {
            to: to.into(),
            subject: Some(subject.to_string()),
            message: Some(message.to_string()),
            headers: None,
        }
    }

    /// Recipients as one comma-separated string.
    pub fn recipients(&self) -> String {
        self.to.joined()
    }
}
