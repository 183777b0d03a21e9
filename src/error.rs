//! Contains the Error and Result type used when building and encoding tags.
use crate::Tag;

/// Various errors that can occur while building or encoding NBT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`. Errors in this category may be moved to new variants.
    Other,

    /// A byte that is not one of the NBT tag values.
    InvalidTag,

    /// A name longer than the 65535 bytes its length prefix can describe.
    NameTooLong,

    /// A string, byte array or list with more elements than its length
    /// prefix can describe.
    LengthOverflow,

    /// A list was given elements with different tags. Lists must be
    /// homogeneous.
    MixedList,

    /// A compound was given two children with the same name.
    DuplicateName,

    /// The tree nests lists and compounds deeper than the encoder allows.
    DepthLimit,

    /// The writer failed. Contains the kind of the underlying IO error.
    Io(std::io::ErrorKind),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn invalid_tag(tag: u8) -> Self {
        Self {
            msg: format!("invalid nbt tag value: {}", tag),
            kind: ErrorKind::InvalidTag,
        }
    }

    pub(crate) fn name_too_long(len: usize) -> Self {
        Self {
            msg: format!("name too long: {} bytes, max is {}", len, u16::MAX),
            kind: ErrorKind::NameTooLong,
        }
    }

    pub(crate) fn length_overflow(tag: Tag, len: usize) -> Self {
        Self {
            msg: format!("{} too long: length {} does not fit its prefix", tag, len),
            kind: ErrorKind::LengthOverflow,
        }
    }

    pub(crate) fn mixed_list(expected: Tag, found: Tag) -> Self {
        Self {
            msg: format!("cannot add {} to list of {}", found, expected),
            kind: ErrorKind::MixedList,
        }
    }

    pub(crate) fn duplicate_name(name: &str) -> Self {
        Self {
            msg: format!("duplicate name in compound: {:?}", name),
            kind: ErrorKind::DuplicateName,
        }
    }

    pub(crate) fn depth_limit(max: usize) -> Self {
        Self {
            msg: format!("nbt nested deeper than the limit of {}", max),
            kind: ErrorKind::DepthLimit,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self {
            msg: format!("io error: {}", e),
            kind: ErrorKind::Io(e.kind()),
        }
    }
}
