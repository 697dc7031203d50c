pub mod outgoing_mail;
pub mod parsed_headers;
pub mod setting_key;
