use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error encoding the routes: {0}")]
    Encode(#[source] bitcode::Error),

    #[error("error decoding the routes: {0}")]
    Decode(#[source] bitcode::Error),

    #[error("not a route file, magic bytes don't match")]
    BadMagic,

    #[error("route file is truncated ({len} bytes)")]
    Truncated { len: usize },

    #[error("encoded routes are too large for a route file ({len} bytes)")]
    TooLarge { len: usize },

    #[error("route file format v{found} is not supported, expected v{supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("route file is corrupted, checksum mismatch (expected {expected:#010X}, got {computed:#010X})")]
    ChecksumMismatch { expected: u32, computed: u32 },
}

impl PersistenceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PersistenceError::Io {
            path: path.into(),
            source,
        }
    }
}
