//! Content hashing with blake3.

/// 64-bit content hash, used to detect config changes.
pub fn compute(bytes: &[u8]) -> u64 {
    let hash = blake3::hash(bytes);
    let mut head = [0u8; 8];
    head.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(head)
}

/// Short hex fingerprint for cache-busting filenames (8 chars).
pub fn fingerprint(content: &str) -> String {
    let hash = blake3::hash(content.as_bytes());
    hex::encode(&hash.as_bytes()[..4])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_stable() {
        assert_eq!(compute(b"[base]"), compute(b"[base]"));
        assert_ne!(compute(b"[base]"), compute(b"[build]"));
    }

    #[test]
    fn test_fingerprint_format() {
        let fp = fingerprint("body { margin: 0px; }");
        assert_eq!(fp.len(), 8);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(fp, fingerprint("body { margin: 0px; }"));
    }
}
