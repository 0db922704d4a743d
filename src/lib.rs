//! Host-side download of image buffers and memory dumps from a tethered
//! Pentax camera.

pub mod buffer_transfer;
pub mod logger;
