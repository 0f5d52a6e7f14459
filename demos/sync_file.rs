//! File masking example with percentage output.
//!
//! Masks (or unmasks - same operation) a file into `<path>.masked`.
//!
//! Run with:
//!     cargo run --example sync_file -- /path/to/file passphrase

use std::env;
use std::fs::File;

use maskrs::{Control, Key, MaskConfig, StreamTransformer, percent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());
    let passphrase = env::args().nth(2).unwrap_or_else(|| "hunter2".to_string());

    let out_path = format!("{}.masked", path);
    println!("Masking {} -> {}\n", path, out_path);

    let source = File::open(&path)?;
    // Total is sampled once, before the run; it is only used for the
    // percentage display
    let total = source.metadata()?.len();
    println!("File size: {} bytes\n", total);

    let dest = File::create(&out_path)?;

    let transformer = StreamTransformer::new(
        Key::from_passphrase(&passphrase)?,
        MaskConfig::default(),
    );

    let mut last_pct = u8::MAX;
    let processed = transformer.run(source, dest, total, |processed: u64, total: u64| {
        let pct = percent(processed, total);
        if pct != last_pct {
            println!("  {:>3}%", pct);
            last_pct = pct;
        }
        Control::Continue
    })?;

    println!("\nDone: {} bytes written to {}", processed, out_path);
    println!("Run the same command on {} to restore the original.", out_path);

    Ok(())
}
