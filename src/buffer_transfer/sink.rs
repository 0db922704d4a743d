//! Output sink module
//!
//! Where downloaded chunks go, and how saved files are named and created.

mod writer;
mod output;

pub use writer::{SinkWrite, TransferSink};
pub use output::{create_output_file, output_path};
