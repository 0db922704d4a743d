use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pslr_download::buffer_transfer::{
    BufferTypeTag, CameraTransport, DeviceHandle, TransferConfig, TransferEngine, TransportError,
};

/// Camera stand-in serving one in-memory buffer.
struct MemoryCamera {
    image: Vec<u8>,
    position: usize,
}

impl MemoryCamera {
    fn new(size: usize) -> Self {
        Self {
            image: (0..size).map(|i| (i % 256) as u8).collect(),
            position: 0,
        }
    }
}

impl CameraTransport for MemoryCamera {
    fn open_buffer(&mut self, _: u32, _: BufferTypeTag, _: u32) -> Result<(), TransportError> {
        self.position = 0;
        Ok(())
    }

    fn buffer_size(&mut self) -> u32 {
        self.image.len() as u32
    }

    fn read_buffer(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.image.len() - self.position);
        buf[..n].copy_from_slice(&self.image[self.position..self.position + n]);
        self.position += n;
        n
    }

    fn close_buffer(&mut self) {}

    fn read_memory(&mut self, address: u32, buf: &mut [u8]) -> usize {
        let start = (address as usize).min(self.image.len());
        let n = buf.len().min(self.image.len() - start);
        buf[..n].copy_from_slice(&self.image[start..start + n]);
        n
    }

    fn jpeg_buffer_type(&mut self, _: i32) -> BufferTypeTag {
        BufferTypeTag::JPEG_MAX
    }
}

fn benchmark_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_buffer_by_chunk_size");
    let image_size = 16 * 1024 * 1024;

    for chunk_capacity in [4096usize, 16384, 65536, 262144] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_capacity),
            &chunk_capacity,
            |b, &capacity| {
                let config = TransferConfig::builder().chunk_capacity(capacity).build();
                let engine = TransferEngine::new(config).unwrap();
                let mut device = DeviceHandle::new(MemoryCamera::new(image_size));
                let mut scratch = engine.chunk_buffer();
                let mut output = Vec::with_capacity(image_size);

                b.iter(|| {
                    output.clear();
                    let _ = engine.transfer_image_buffer(
                        &mut device,
                        black_box(0),
                        BufferTypeTag::PEF,
                        0,
                        &mut scratch,
                        &mut output,
                    );
                });
            },
        );
    }

    group.finish();
}

fn benchmark_memory_dump(c: &mut Criterion) {
    let size = 8 * 1024 * 1024;
    let engine = TransferEngine::new(TransferConfig::default()).unwrap();
    let mut device = DeviceHandle::new(MemoryCamera::new(size));
    let mut scratch = engine.chunk_buffer();
    let mut output = Vec::with_capacity(size);

    c.bench_function("memory_dump_8mib", |b| {
        b.iter(|| {
            output.clear();
            engine.transfer_memory_range(&mut device, 0, black_box(size as u32), &mut scratch, &mut output)
        });
    });
}

criterion_group!(benches, benchmark_chunk_sizes, benchmark_memory_dump);
criterion_main!(benches);
