use nanopost_types::ContentType;

/// Structured view of the free-form headers of one outgoing message.
///
/// Derived fresh for every message and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHeaders {
    /// Address part of the From header
    pub from: String,

    /// Display name of the From header, without surrounding quotes
    pub from_name: String,

    pub reply_to: String,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub content_type: ContentType,
}
