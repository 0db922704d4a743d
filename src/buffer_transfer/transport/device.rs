use crate::buffer_transfer::common::error::TransportError;
use crate::buffer_transfer::source::types::BufferTypeTag;

/// Primitives a connected camera offers for downloading data.
///
/// Only one buffer transaction can be open at a time. Reads never fail
/// loudly: a transport that hits an error reports zero bytes, which ends
/// the transfer.
pub trait CameraTransport {
    /// Starts a buffer transaction.
    fn open_buffer(
        &mut self,
        buffer_index: u32,
        tag: BufferTypeTag,
        resolution: u32,
    ) -> Result<(), TransportError>;

    /// Total length of the open buffer as announced by the camera.
    fn buffer_size(&mut self) -> u32;

    /// Reads up to `buf.len()` bytes from the open buffer. Zero means end of data.
    fn read_buffer(&mut self, buf: &mut [u8]) -> usize;

    /// Ends the transaction started by [`CameraTransport::open_buffer`].
    fn close_buffer(&mut self);

    /// Stateless read of `buf.len()` bytes of camera memory at `address`.
    fn read_memory(&mut self, address: u32, buf: &mut [u8]) -> usize;

    /// Buffer type of the JPEG variant for a quality tier (star rating).
    fn jpeg_buffer_type(&mut self, quality_tier: i32) -> BufferTypeTag;
}

impl<T: CameraTransport + ?Sized> CameraTransport for &mut T {
    fn open_buffer(
        &mut self,
        buffer_index: u32,
        tag: BufferTypeTag,
        resolution: u32,
    ) -> Result<(), TransportError> {
        (**self).open_buffer(buffer_index, tag, resolution)
    }

    fn buffer_size(&mut self) -> u32 {
        (**self).buffer_size()
    }

    fn read_buffer(&mut self, buf: &mut [u8]) -> usize {
        (**self).read_buffer(buf)
    }

    fn close_buffer(&mut self) {
        (**self).close_buffer()
    }

    fn read_memory(&mut self, address: u32, buf: &mut [u8]) -> usize {
        (**self).read_memory(address, buf)
    }

    fn jpeg_buffer_type(&mut self, quality_tier: i32) -> BufferTypeTag {
        (**self).jpeg_buffer_type(quality_tier)
    }
}
