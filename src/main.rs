use pslr_download::buffer_transfer::{
    ContainerFormat, DeviceHandle, ReplayTransport, TransferConfig, TransferEngine, TransferSource,
    output_path,
};
use pslr_download::logger;

use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting pslr_download...");

    let config = TransferConfig::builder()
        .default_quality_tier(3)
        .resolution_hint(0)
        .build();
    let engine = TransferEngine::new(config)?;
    let mut camera = DeviceHandle::new(ReplayTransport::new("camera"));

    info!("Replaying camera from {}", camera.transport().root().display());
    info!("Chunk size: {} bytes", engine.config().chunk_capacity);

    let format = ContainerFormat::Raw;
    let frames = 2;
    for frame in 0..frames {
        let source = TransferSource::image(frame, format);
        let path = output_path("pslr", frame, frames, format);
        match engine.save_to_file(&mut camera, &source, &path) {
            Ok(report) if report.is_complete() => info!("Saved {}: {}", path.display(), report),
            Ok(report) => warn!("Saved {} with gaps: {}", path.display(), report),
            Err(e) => error!("Download of buffer {} failed: {}", frame, e),
        }
    }

    let report = engine.save_to_file(&mut camera, &TransferSource::memory(0, 0x10000), "memory.dump")?;
    info!("Memory dump: {}", report);

    Ok(())
}
