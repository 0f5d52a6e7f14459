#![no_main]

use libfuzzer_sys::fuzz_target;
use maskrs::{Key, StreamTransformer};

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (key_bytes, data) = input;
    let Ok(key) = Key::new(key_bytes) else {
        // Empty keys are rejected; nothing further to check
        return;
    };

    let transformer = StreamTransformer::new(key.clone(), maskrs::MaskConfig::default());

    let masked = transformer.transform_bytes(&data);

    // Verify: length preservation
    assert_eq!(masked.len(), data.len());

    // Verify: per-byte key cycling
    for (i, (&inp, &outp)) in data.iter().zip(masked.iter()).enumerate() {
        assert_eq!(outp, inp ^ key.byte_at(i as u64));
    }

    // Verify: involution - transforming twice recovers the input
    let restored = transformer.transform_bytes(&masked);
    assert_eq!(&restored[..], &data[..]);

    // Verify: determinism - same input produces same output
    let masked2 = transformer.transform_bytes(&data);
    assert_eq!(masked, masked2);
});
