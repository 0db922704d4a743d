//! Camera transport module
//!
//! The transport trait the transfer engine drives, the exclusive device
//! handle, the open-buffer session guard and a directory-backed replay device.

mod device;
mod handle;
mod session;
mod replay;

pub use device::CameraTransport;
pub use handle::DeviceHandle;
pub use session::{SessionState, TransferSession};
pub use replay::ReplayTransport;
