//! # signalhub-core
//!
//! Core crate for Signalhub. Contains the transport capability traits,
//! configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Signalhub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use config::ConnectorConfig;
pub use error::{ErrorKind, HubError};
pub use result::HubResult;
