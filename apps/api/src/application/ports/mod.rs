pub mod delivery_api;
pub mod log_verbosity;
