#![no_main]

use libfuzzer_sys::fuzz_target;
use maskrs::{Key, MaskConfig, NoProgress, StreamTransformer};
use std::io::Cursor;

fuzz_target!(|data: Vec<u8>| {
    let key = Key::from_passphrase("fuzz-key").unwrap();

    // Test with various chunk configurations
    let configs = vec![
        MaskConfig::new(1).unwrap(),
        MaskConfig::new(7).unwrap(),
        MaskConfig::new(64).unwrap(),
        MaskConfig::default(),
    ];

    let reference = StreamTransformer::new(key.clone(), MaskConfig::default())
        .transform_bytes(&data);

    for config in configs {
        let transformer = StreamTransformer::new(key.clone(), config);

        // Iterator path
        let chunks: Vec<_> = transformer
            .transform(Cursor::new(data.clone()))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        // Verify: every chunk respects the configured bound
        for chunk in &chunks {
            assert!(chunk.len() <= config.chunk_size());
            assert!(!chunk.is_empty());
        }

        // Verify: chunk-size independence
        let joined: Vec<u8> = chunks.iter().flat_map(|c| c.to_vec()).collect();
        assert_eq!(&joined[..], &reference[..]);

        // Pump path must agree with the iterator path
        let mut pumped = Vec::new();
        transformer
            .run(
                Cursor::new(data.clone()),
                &mut pumped,
                data.len() as u64,
                NoProgress,
            )
            .unwrap();
        assert_eq!(pumped, joined);
    }
});
