//! Buffer transfer module
//!
//! This module downloads numbered image buffers and raw memory ranges from a
//! camera transport and relays the bytes, chunk by chunk, into a writable sink.

pub mod common;
pub mod source;
pub mod transport;
pub mod sink;
pub mod engine;


pub use common::{
    TransferError,
    TransportError,
    Result,
};

pub use source::{
    BufferTypeTag,
    ContainerFormat,
    FormatResolver,
    TransferSource,
};

pub use transport::{
    CameraTransport,
    DeviceHandle,
    ReplayTransport,
    SessionState,
    TransferSession,
};

pub use sink::{
    SinkWrite,
    TransferSink,
    create_output_file,
    output_path,
};

pub use engine::{
    ChunkBuffer,
    TransferConfig,
    TransferConfigBuilder,
    TransferEngine,
    TransferReport,
    TransferStatus,
};
