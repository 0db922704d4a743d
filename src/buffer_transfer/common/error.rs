use thiserror::Error;

/// Failures reported by a camera transport.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Buffer {0} is not available on the camera")]
    InvalidBuffer(u32),

    #[error("Camera rejected the request: {0}")]
    Device(String),

    #[error("Transport IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Failed to open buffer {buffer_index}: {source}")]
    OpenFailed {
        buffer_index: u32,
        #[source]
        source: TransportError,
    },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid transfer configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to create output file: {0}")]
    OutputCreate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransferError>;
