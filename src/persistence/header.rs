//! Fixed 16 byte little-endian header in front of every route file
//!
//! ```text
//! [0..4]   magic "RTES"
//! [4..8]   format version
//! [8..12]  payload length
//! [12..16] xxHash32 of the payload
//! ```
use xxhash_rust::xxh32::xxh32;

use super::PersistenceError;

pub const MAGIC: [u8; 4] = *b"RTES";
pub const HEADER_SIZE: usize = 16;
pub const FORMAT_VERSION: u32 = 1;
const XXHASH_SEED: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub format_version: u32,
    pub payload_len: u32,
    pub checksum: u32,
}

impl FileHeader {
    /// Fails for payloads whose length doesn't fit the 32 bit length field.
    pub fn new(payload: &[u8]) -> Result<Self, PersistenceError> {
        Ok(FileHeader {
            format_version: FORMAT_VERSION,
            payload_len: checked_len(payload.len())?,
            checksum: xxh32(payload, XXHASH_SEED),
        })
    }
}

fn checked_len(len: usize) -> Result<u32, PersistenceError> {
    u32::try_from(len).map_err(|_| PersistenceError::TooLarge { len })
}

pub fn wrap_with_header(payload: &[u8]) -> Result<Vec<u8>, PersistenceError> {
    let header = FileHeader::new(payload)?;
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());

    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&header.format_version.to_le_bytes());
    out.extend_from_slice(&header.payload_len.to_le_bytes());
    out.extend_from_slice(&header.checksum.to_le_bytes());
    out.extend_from_slice(payload);
    Ok(out)
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Validates the header and returns it together with the payload it guards.
pub fn unwrap_header(bytes: &[u8]) -> Result<(FileHeader, &[u8]), PersistenceError> {
    if bytes.len() < MAGIC.len() || bytes[..MAGIC.len()] != MAGIC {
        return Err(PersistenceError::BadMagic);
    }
    if bytes.len() < HEADER_SIZE {
        return Err(PersistenceError::Truncated { len: bytes.len() });
    }

    let header = FileHeader {
        format_version: read_u32(bytes, 4),
        payload_len: read_u32(bytes, 8),
        checksum: read_u32(bytes, 12),
    };

    // the checksum doesn't cover the header, so anything unexpected here is corruption
    if header.format_version != FORMAT_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: header.format_version,
            supported: FORMAT_VERSION,
        });
    }

    let payload = &bytes[HEADER_SIZE..];
    if payload.len() != header.payload_len as usize {
        return Err(PersistenceError::Truncated { len: bytes.len() });
    }

    let computed = xxh32(payload, XXHASH_SEED);
    if computed != header.checksum {
        return Err(PersistenceError::ChecksumMismatch {
            expected: header.checksum,
            computed,
        });
    }

    Ok((header, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_and_unwrap() -> Result<(), anyhow::Error> {
        let data = b"some route bytes";
        let wrapped = wrap_with_header(data)?;

        assert_eq!(&wrapped[..4], b"RTES");
        assert_eq!(wrapped.len(), HEADER_SIZE + data.len());

        let (header, payload) = unwrap_header(&wrapped)?;
        assert_eq!(header.format_version, FORMAT_VERSION);
        assert_eq!(header.payload_len, data.len() as u32);
        assert_eq!(payload, data);
        Ok(())
    }

    #[test]
    fn test_bad_magic() {
        let err = unwrap_header(b"NOPE and then some").unwrap_err();
        assert!(matches!(err, PersistenceError::BadMagic));

        let err = unwrap_header(b"RT").unwrap_err();
        assert!(matches!(err, PersistenceError::BadMagic));
    }

    #[test]
    fn test_short_header() {
        let err = unwrap_header(b"RTES\x01\x00").unwrap_err();
        assert!(matches!(err, PersistenceError::Truncated { len: 6 }));
    }

    #[test]
    fn test_missing_payload_bytes() -> Result<(), anyhow::Error> {
        let mut wrapped = wrap_with_header(b"0123456789")?;
        wrapped.truncate(wrapped.len() - 3);

        let err = unwrap_header(&wrapped).unwrap_err();
        assert!(matches!(err, PersistenceError::Truncated { .. }));
        Ok(())
    }

    #[test]
    fn test_newer_version_rejected() -> Result<(), anyhow::Error> {
        let mut wrapped = wrap_with_header(b"data")?;
        wrapped[4..8].copy_from_slice(&(FORMAT_VERSION + 1).to_le_bytes());

        let err = unwrap_header(&wrapped).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::UnsupportedVersion { found, supported }
                if found == FORMAT_VERSION + 1 && supported == FORMAT_VERSION
        ));
        Ok(())
    }

    #[test]
    fn test_version_zero_rejected() -> Result<(), anyhow::Error> {
        let mut wrapped = wrap_with_header(b"data")?;
        wrapped[4..8].copy_from_slice(&0u32.to_le_bytes());

        let err = unwrap_header(&wrapped).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::UnsupportedVersion { found: 0, .. }
        ));
        Ok(())
    }

    #[test]
    fn test_flipped_payload_byte() -> Result<(), anyhow::Error> {
        let mut wrapped = wrap_with_header(b"data")?;
        let last = wrapped.len() - 1;
        wrapped[last] ^= 0xFF;

        let err = unwrap_header(&wrapped).unwrap_err();
        assert!(matches!(err, PersistenceError::ChecksumMismatch { .. }));
        Ok(())
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_oversized_payload_rejected() {
        assert!(matches!(checked_len(u32::MAX as usize), Ok(u32::MAX)));

        let len = u32::MAX as usize + 1;
        let err = checked_len(len).unwrap_err();
        assert!(matches!(err, PersistenceError::TooLarge { len: l } if l == len));
    }
}
