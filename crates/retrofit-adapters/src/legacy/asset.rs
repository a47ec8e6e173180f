//! Legacy asset buffers.
//!
//! ```text
//! offset  size  content
//! 0       4     magic "LGCY"
//! 4       1     format version
//! 5       4     body length (u32, big-endian)
//! 9       n     body (UTF-8 resource name)
//! ```

pub const MAGIC: [u8; 4] = *b"LGCY";
pub const VERSION: u8 = 1;
pub const HEADER_LEN: usize = 9;

/// Build the asset buffer the legacy engine derives from a resource name.
pub fn encode_asset(name: &str) -> Vec<u8> {
    let body = name.as_bytes();
    // Names are per-call identifiers; anything near 4 GiB is not one.
    let len = u32::try_from(body.len()).unwrap_or(u32::MAX);

    let mut buf = Vec::with_capacity(HEADER_LEN + body.len());
    buf.extend_from_slice(&MAGIC);
    buf.push(VERSION);
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(body);
    buf
}

/// Recover the resource name from an asset buffer.
///
/// Returns `None` for anything that is not a well-formed asset.
pub fn decode_asset(buf: &[u8]) -> Option<&str> {
    let (header, body) = buf.split_at_checked(HEADER_LEN)?;
    if header[..4] != MAGIC || header[4] != VERSION {
        return None;
    }
    let len = u32::from_be_bytes(header[5..9].try_into().ok()?) as usize;
    if body.len() != len {
        return None;
    }
    std::str::from_utf8(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_attack_is_21_bytes() {
        let buf = encode_asset("enemy_attack");
        assert_eq!(buf.len(), 21);
        assert_eq!(&buf[..4], b"LGCY");
        assert_eq!(&buf[5..9], &[0, 0, 0, 12]);
        assert_eq!(&buf[9..], b"enemy_attack");
    }

    #[test]
    fn decode_recovers_name() {
        let buf = encode_asset("héros");
        assert_eq!(decode_asset(&buf), Some("héros"));
    }

    #[test]
    fn decode_rejects_foreign_buffers() {
        assert_eq!(decode_asset(&[]), None);
        assert_eq!(decode_asset(b"PNG\x00\x01\x00\x00\x00\x00"), None);

        let mut truncated = encode_asset("coin");
        truncated.pop();
        assert_eq!(decode_asset(&truncated), None);
    }

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(encode_asset("coin"), encode_asset("coin"));
    }
}
