//! Transfer source module
//!
//! Describes what to download and maps image formats to device buffer types.

mod format_resolver;
pub mod types;

pub use format_resolver::FormatResolver;
pub use types::{BufferTypeTag, ContainerFormat, TransferSource};
