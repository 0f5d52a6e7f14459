//! Async masking example using tokio.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io -- /path/to/file

use std::env;

use futures_util::StreamExt;
use maskrs::{Key, MaskConfig, mask_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Masking file: {}\n", path);

    let file = tokio::fs::File::open(&path).await?;
    let total = file.metadata().await?.len();

    let key = Key::from_passphrase("hunter2")?;
    let mut stream = mask_async(file.compat(), key, MaskConfig::new(8 * 1024)?);

    let mut chunks = 0usize;
    let mut processed = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        chunks += 1;
        processed += chunk.len() as u64;
        println!(
            "Chunk {}: {} bytes ({} / {} total)",
            chunks,
            chunk.len(),
            processed,
            total
        );
    }

    println!("\nTotal: {} chunks, {} bytes", chunks, processed);

    Ok(())
}
