//! Test utilities for use case and route tests.
//!
//! This module provides:
//! - Test data factories for site identities and outgoing mail
//! - In-memory implementations of the settings, delivery and account ports
//! - `LogBuffer` for asserting on formatted log output
//! - `TestAppStateBuilder` for constructing an `AppState` over those mocks

mod account_mocks;
mod app_state_builder;
mod delivery_mocks;
mod factories;
mod log_capture;
mod settings_mocks;

pub use account_mocks::*;
pub use app_state_builder::*;
pub use delivery_mocks::*;
pub use factories::*;
pub use log_capture::*;
pub use settings_mocks::*;
