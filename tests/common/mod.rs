#![allow(dead_code)]

/// Reads 28 bytes back as seven little-endian i32s.
pub fn decode(bytes: &[u8]) -> Vec<i32> {
    assert_eq!(bytes.len(), 28, "config record must be 28 bytes");
    bytes
        .chunks_exact(4)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

pub const REFERENCE: [i32; 7] = [768, 3072, 12, 12, 12, 50257, 1024];
