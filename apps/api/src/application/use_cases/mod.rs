pub mod domain;
pub mod mail_relay;
pub mod registration;
pub mod settings;
pub mod verification;
