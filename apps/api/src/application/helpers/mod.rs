pub mod domain_parsing;
pub mod mail_headers;
pub mod redact;
