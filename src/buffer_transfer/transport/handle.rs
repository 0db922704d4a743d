use crate::buffer_transfer::transport::device::CameraTransport;

/// Exclusive ownership of a connected camera.
///
/// Not `Clone` or `Copy`: every transfer borrows the handle mutably, so two
/// downloads can never run against the same device at once.
#[derive(Debug)]
pub struct DeviceHandle<T: CameraTransport> {
    transport: T,
}

impl<T: CameraTransport> DeviceHandle<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}
