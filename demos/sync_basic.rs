//! Basic in-memory mask/unmask example.
//!
//! Run with:
//!     cargo run --example sync_basic

use std::io::Cursor;

use maskrs::{Control, Key, MaskConfig, StreamTransformer, percent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create some sample data
    let data = vec![0u8; 1024 * 1024]; // 1 MB of zeros
    let total = data.len() as u64;

    let transformer = StreamTransformer::new(
        Key::from_passphrase("hunter2")?,
        MaskConfig::new(128 * 1024)?,
    );

    println!("Masking {} bytes of data...\n", data.len());

    let mut masked = Vec::with_capacity(data.len());
    transformer.run(
        Cursor::new(data.clone()),
        &mut masked,
        total,
        |processed: u64, total: u64| {
            println!(
                "  {:>3}% ({} / {} bytes)",
                percent(processed, total),
                processed,
                total
            );
            Control::Continue
        },
    )?;

    println!("\nUnmasking (same operation, same key)...\n");

    let mut restored = Vec::with_capacity(masked.len());
    transformer.run(
        Cursor::new(masked),
        &mut restored,
        total,
        |processed: u64, total: u64| {
            println!(
                "  {:>3}% ({} / {} bytes)",
                percent(processed, total),
                processed,
                total
            );
            Control::Continue
        },
    )?;

    assert_eq!(restored, data);
    println!("\nRound trip OK: {} bytes restored", restored.len());

    Ok(())
}
