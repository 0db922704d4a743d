use tracing::{debug, warn};

use crate::buffer_transfer::common::error::TransportError;
use crate::buffer_transfer::source::types::BufferTypeTag;
use crate::buffer_transfer::transport::device::CameraTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Transaction started, nothing read yet
    Opened,
    /// At least one read issued
    Draining,
    Closed,
}

/// One open buffer transaction on the camera.
///
/// The transaction is closed by [`TransferSession::close`] or, failing that,
/// when the session is dropped.
#[derive(Debug)]
pub struct TransferSession<'a, T: CameraTransport + ?Sized> {
    transport: &'a mut T,
    buffer_index: u32,
    state: SessionState,
}

impl<'a, T: CameraTransport + ?Sized> TransferSession<'a, T> {
    /// Opens `buffer_index`. On failure nothing is open and nothing needs closing.
    pub fn open(
        transport: &'a mut T,
        buffer_index: u32,
        tag: BufferTypeTag,
        resolution: u32,
    ) -> Result<Self, TransportError> {
        debug!(buffer_index, %tag, resolution, "Opening buffer");
        transport.open_buffer(buffer_index, tag, resolution)?;
        Ok(Self {
            transport,
            buffer_index,
            state: SessionState::Opened,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn size(&mut self) -> u32 {
        self.transport.buffer_size()
    }

    /// Reads the next chunk. Zero means the buffer is drained.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        if self.state == SessionState::Closed {
            return 0;
        }
        self.state = SessionState::Draining;
        self.transport.read_buffer(buf)
    }

    pub fn close(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        if self.state != SessionState::Closed {
            self.transport.close_buffer();
            self.state = SessionState::Closed;
            debug!(buffer_index = self.buffer_index, "Buffer closed");
        }
    }
}

impl<T: CameraTransport + ?Sized> Drop for TransferSession<'_, T> {
    fn drop(&mut self) {
        if self.state != SessionState::Closed {
            warn!(buffer_index = self.buffer_index, "Closing abandoned buffer transaction");
            self.finish();
        }
    }
}
