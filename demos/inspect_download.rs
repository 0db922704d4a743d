//! Downloads a raw buffer from a replay directory and checks that the saved
//! file decodes as a raw image.

use std::fs::File;
use std::io::BufReader;

use pslr_download::buffer_transfer::{
    ContainerFormat, DeviceHandle, ReplayTransport, TransferConfig, TransferEngine, TransferSource,
};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let root = args.next().unwrap_or_else(|| "camera".to_string());
    let format: ContainerFormat = args.next().as_deref().unwrap_or("pef").parse()?;

    let engine = TransferEngine::new(TransferConfig::default())?;
    let mut camera = DeviceHandle::new(ReplayTransport::new(&root));

    let output = format!("inspect.{}", format.extension());
    let report = engine.save_to_file(&mut camera, &TransferSource::image(0, format), &output)?;
    println!("Downloaded {}: {}", output, report);

    if format == ContainerFormat::Jpeg {
        println!("JPEG download, nothing to decode");
        return Ok(());
    }

    let mut reader = BufReader::new(File::open(&output)?);
    let image = rawloader::decode(&mut reader).map_err(|e| anyhow::anyhow!("Decode failed: {}", e))?;

    println!("Camera: {} {}", image.make, image.model);
    println!("Image: {}x{} pixels, {} components", image.width, image.height, image.cpp);
    println!("White levels: {:?}", image.whitelevels);
    println!("Black levels: {:?}", image.blacklevels);

    if let Some(size) = report.reported_size {
        if u64::from(size) != report.bytes_written {
            println!("Warning: camera announced {} bytes, saved {}", size, report.bytes_written);
        }
    }

    Ok(())
}
