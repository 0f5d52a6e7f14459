// Integration tests for the streaming transform API
// Tests cover: involution, chunk-size independence, progress contract,
// key cycling, error paths

use std::io::{Cursor, Read, Write};

use maskrs::{Control, Key, MaskConfig, MaskError, NoProgress, StreamTransformer, percent};

fn transformer(pass: &str, chunk_size: usize) -> StreamTransformer {
    StreamTransformer::new(
        Key::from_passphrase(pass).unwrap(),
        MaskConfig::new(chunk_size).unwrap(),
    )
}

fn run_to_vec(t: &StreamTransformer, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    t.run(Cursor::new(data.to_vec()), &mut out, data.len() as u64, NoProgress)
        .unwrap();
    out
}

// ============================================================================
// Construction Validation
// ============================================================================

#[test]
fn test_empty_key_rejected_before_io() {
    assert!(matches!(Key::from_passphrase(""), Err(MaskError::EmptyKey)));
    assert!(matches!(Key::new(Vec::new()), Err(MaskError::EmptyKey)));
}

#[test]
fn test_zero_chunk_size_rejected() {
    assert!(matches!(
        MaskConfig::new(0),
        Err(MaskError::InvalidConfig { .. })
    ));
}

// ============================================================================
// Core Transform Properties
// ============================================================================

#[test]
fn test_involution() {
    let data: Vec<u8> = (0..10_000).map(|i| (i * 31 + 7) as u8).collect();
    let t = transformer("round trip key", 4096);

    let masked = run_to_vec(&t, &data);
    assert_ne!(masked, data, "Mask must change a non-degenerate input");

    let restored = run_to_vec(&t, &masked);
    assert_eq!(restored, data, "Running twice must recover the input");
}

#[test]
fn test_chunk_size_independence() {
    let data: Vec<u8> = (0..5000).map(|i| (i % 256) as u8).collect();

    let reference = run_to_vec(&transformer("pw", 5000), &data);

    for chunk_size in [1, 3, 7, 64, 1024, 65536] {
        let out = run_to_vec(&transformer("pw", chunk_size), &data);
        assert_eq!(
            out, reference,
            "Output must be identical at chunk size {}",
            chunk_size
        );
    }
}

#[test]
fn test_mixed_chunk_size_roundtrip() {
    // Mask with one chunk size, unmask with another
    let data = b"chunk size must not matter for the inverse".to_vec();

    let masked = run_to_vec(&transformer("pw", 8), &data);
    let restored = run_to_vec(&transformer("pw", 3), &masked);
    assert_eq!(restored, data);
}

#[test]
fn test_length_preservation() {
    let t = transformer("pw", 64);
    for len in [0usize, 1, 63, 64, 65, 1000] {
        let data = vec![0x5Au8; len];
        let out = run_to_vec(&t, &data);
        assert_eq!(out.len(), len, "Output length must equal input length");
    }
}

#[test]
fn test_key_cycling_correctness() {
    let key_bytes = b"keyz";
    let data: Vec<u8> = (0..100).map(|i| (i * 13 + 5) as u8).collect();

    let t = StreamTransformer::new(
        Key::new(key_bytes.to_vec()).unwrap(),
        MaskConfig::new(17).unwrap(),
    );
    let out = run_to_vec(&t, &data);

    for (i, (&inp, &outp)) in data.iter().zip(out.iter()).enumerate() {
        assert_eq!(
            outp,
            inp ^ key_bytes[i % key_bytes.len()],
            "Byte {} must be XORed with key[{} mod {}]",
            i,
            i,
            key_bytes.len()
        );
    }
}

#[test]
fn test_known_answer_ab() {
    // key "AB" (0x41, 0x42) over [0x00, 0x00, 0x00]
    let t = transformer("AB", 64 * 1024);

    let masked = run_to_vec(&t, &[0x00, 0x00, 0x00]);
    assert_eq!(masked, vec![0x41, 0x42, 0x41]);

    let restored = run_to_vec(&t, &masked);
    assert_eq!(restored, vec![0x00, 0x00, 0x00]);
}

// ============================================================================
// Progress Contract
// ============================================================================

#[test]
fn test_progress_monotonic_and_complete() {
    let data = vec![1u8; 1000];
    let t = transformer("pw", 256);

    let mut reports = Vec::new();
    let mut out = Vec::new();
    t.run(
        Cursor::new(data.clone()),
        &mut out,
        data.len() as u64,
        |processed: u64, total: u64| {
            reports.push((processed, total));
            Control::Continue
        },
    )
    .unwrap();

    // One report per chunk, including the final short one (1000 = 3*256 + 232)
    assert_eq!(reports.len(), 4);

    let mut last = 0;
    for &(processed, total) in &reports {
        assert!(processed > last, "Progress must be strictly increasing");
        assert_eq!(total, 1000, "Total must be passed through unchanged");
        last = processed;
    }
    assert_eq!(
        reports.last().unwrap().0,
        1000,
        "Final report must equal the total"
    );
}

#[test]
fn test_empty_input_reports_nothing() {
    // Convention: a zero-length source invokes the sink zero times; the
    // loop exits on the first zero-byte read before any chunk exists.
    let t = transformer("pw", 64);

    let mut calls = 0;
    let mut out = Vec::new();
    let processed = t
        .run(Cursor::new(Vec::new()), &mut out, 0, |_p: u64, _t: u64| {
            calls += 1;
            Control::Continue
        })
        .unwrap();

    assert_eq!(processed, 0);
    assert!(out.is_empty(), "Empty source must produce empty destination");
    assert_eq!(calls, 0, "Empty source must invoke no progress callback");
}

#[test]
fn test_percent_helper() {
    assert_eq!(percent(0, 0), 0);
    assert_eq!(percent(500, 1000), 50);
    assert_eq!(percent(1000, 1000), 100);
}

#[test]
fn test_abort_from_sink() {
    let data = vec![9u8; 1000];
    let t = transformer("pw", 100);

    let mut out = Vec::new();
    let err = t
        .run(
            Cursor::new(data),
            &mut out,
            1000,
            |processed: u64, _total: u64| {
                if processed >= 300 {
                    Control::Abort
                } else {
                    Control::Continue
                }
            },
        )
        .unwrap_err();

    match err {
        MaskError::Aborted { processed } => assert_eq!(processed, 300),
        other => panic!("Expected Aborted, got {:?}", other),
    }
    // The chunk that triggered the abort was already written
    assert_eq!(out.len(), 300);
}

// ============================================================================
// I/O Failure Paths
// ============================================================================

/// Counts reads so tests can assert the engine stops pulling after a
/// write failure.
struct CountingReader<R> {
    inner: R,
    reads: usize,
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reads += 1;
        self.inner.read(buf)
    }
}

/// Accepts the first `full_writes` writes, then truncates the next one.
struct ShortWriter {
    accepted: Vec<u8>,
    full_writes: usize,
    writes: usize,
}

impl Write for ShortWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writes += 1;
        if self.writes > self.full_writes {
            let n = buf.len() / 2;
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        } else {
            self.accepted.extend_from_slice(buf);
            Ok(buf.len())
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_short_write_on_second_chunk_aborts() {
    let data = vec![0xAAu8; 300];
    let t = transformer("pw", 100);

    let mut source = CountingReader {
        inner: Cursor::new(data),
        reads: 0,
    };
    let mut dest = ShortWriter {
        accepted: Vec::new(),
        full_writes: 1,
        writes: 0,
    };

    let err = t.run(&mut source, &mut dest, 300, NoProgress).unwrap_err();

    match err {
        MaskError::ShortWrite { written, requested } => {
            assert_eq!(written, 50);
            assert_eq!(requested, 100);
        }
        other => panic!("Expected ShortWrite, got {:?}", other),
    }
    assert_eq!(
        source.reads, 2,
        "No further reads may happen after the failed write"
    );
}

#[test]
fn test_read_error_propagates() {
    struct FailAfter {
        remaining: usize,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.remaining == 0 {
                return Err(std::io::Error::other("disk gone"));
            }
            let n = self.remaining.min(buf.len());
            buf[..n].fill(0x11);
            self.remaining -= n;
            Ok(n)
        }
    }

    let t = transformer("pw", 64);
    let mut out = Vec::new();
    let err = t
        .run(FailAfter { remaining: 64 }, &mut out, 128, NoProgress)
        .unwrap_err();

    assert!(matches!(err, MaskError::Read(_)));
    // The first chunk made it out before the failure; destination is
    // left truncated, cleanup is the caller's job.
    assert_eq!(out.len(), 64);
}

#[test]
fn test_write_error_propagates() {
    struct RefusingWriter;

    impl Write for RefusingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("read-only filesystem"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let t = transformer("pw", 64);
    let err = t
        .run(Cursor::new(vec![1u8; 10]), RefusingWriter, 10, NoProgress)
        .unwrap_err();
    assert!(matches!(err, MaskError::Write(_)));
}

// ============================================================================
// Total-Bytes Handling
// ============================================================================

#[test]
fn test_total_is_not_validated_against_stream() {
    // A stale total (source changed after the size query) passes
    // through untouched; the run still completes.
    let data = vec![2u8; 200];
    let t = transformer("pw", 64);

    let mut last_report = (0, 0);
    let mut out = Vec::new();
    let processed = t
        .run(Cursor::new(data), &mut out, 100, |p: u64, total: u64| {
            last_report = (p, total);
            Control::Continue
        })
        .unwrap();

    assert_eq!(processed, 200);
    assert_eq!(last_report, (200, 100), "Processed may exceed a stale total");
    assert_eq!(percent(last_report.0, last_report.1), 100, "Percent clamps");
}
