//! Rust client for the nanoPost delivery API.
//!
//! # Features
//!
//! - **Registration** - exchange a site secret for a site token
//! - **Mail submission** - post one outgoing message as JSON
//! - **Domain update** - re-point a registered site at its new URL
//!
//! Replies are returned as [`ApiReply`] so the caller decides what counts as
//! acceptance; only transport failures become errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use nanopost_sdk::{NanopostClient, NanopostConfig};
//!
//! let client = NanopostClient::new(NanopostConfig::new("https://api.example.com/api"))?;
//! let reply = client.register(&request).await?;
//! println!("site_token: {:?}", reply.non_empty_str("site_token"));
//! ```

mod client;
mod endpoints;
mod error;

pub use client::{NanopostClient, NanopostConfig};
pub use endpoints::{Endpoint, endpoint_url};
pub use error::NanopostError;

pub use nanopost_types::{ApiReply, MailPayload, RegisterRequest, UpdateDomainRequest};
