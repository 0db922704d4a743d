//! Transfer engine module
//!
//! Drives image buffer transactions and memory dumps from the camera into a sink.

mod transfer_engine;
mod report;
pub mod types;

pub use transfer_engine::TransferEngine;
pub use report::{TransferReport, TransferStatus, Timer};
pub use types::{ChunkBuffer, TransferConfig, TransferConfigBuilder};
