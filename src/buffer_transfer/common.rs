//! Common utilities module
//!
//! This module contains the error types shared across the transfer path.

pub mod error;

pub use error::{Result, TransferError, TransportError};
