//! nbtag builds trees of Named Binary Tag (NBT) data and encodes them to the
//! binary NBT format. This format is best known from *Minecraft: Java
//! Edition*, where it stores world data and player inventories, but it is a
//! compact way of writing any structured data.
//!
//! * For the tree types see [`NamedTag`], [`Value`], [`List`] and
//!   [`Compound`].
//! * For writing the binary format see [`ser`], or the shortcuts
//!   [`to_bytes`] and [`to_writer`].
//! * For encoder configuration see [`EncOpts`].
//!
//! There is no decoder here. The byte layout written is documented in
//! [`ser`] and is what a decoder has to invert.
//!
//! # Quick example
//!
//! ```
//! use nbtag::{NamedTag, to_bytes};
//!
//! # fn main() -> nbtag::error::Result<()> {
//! let root = NamedTag::compound("root", vec![
//!     NamedTag::short("hp", 100)?,
//! ])?;
//!
//! let bytes = to_bytes(&root)?;
//! assert_eq!(
//!     bytes,
//!     [10, 0, 4, b'r', b'o', b'o', b't', 2, 0, 2, b'h', b'p', 0, 100, 0]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Compression is left to the caller. Wrap the writer in a
//! `flate2::write::GzEncoder` to produce the usual `.dat` files.

use std::convert::TryFrom;

pub mod error;
pub mod ser;

mod value;

pub use ser::{to_bytes, to_bytes_with_opts, to_writer, to_writer_with_opts};
pub use value::*;

#[cfg(test)]
mod test;

use error::Error;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of raw bytes.
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of unnamed values that all share one tag.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
}

// Written out by hand rather than pulling in a derive crate. The set of tags
// is fixed by the format.
impl TryFrom<u8> for Tag {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11..=u8::MAX => return Err(Error::invalid_tag(value)),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// How names and strings are turned into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// The UTF-8 bytes of the Rust string, unmodified.
    Utf8,
    /// Java's modified UTF-8, as written by `DataOutputStream::writeUTF`.
    /// Nul and characters outside the BMP are encoded differently from
    /// standard UTF-8. This is what the game itself writes.
    JavaCesu8,
}

/// Options for customizing encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncOpts {
    pub(crate) max_depth: usize,
    pub(crate) text: TextEncoding,
}

impl EncOpts {
    pub fn new() -> Self {
        Default::default()
    }

    /// Options that write text the way Java does. See
    /// [`TextEncoding::JavaCesu8`].
    pub fn java() -> Self {
        Self::new().text(TextEncoding::JavaCesu8)
    }

    /// Maximum number of lists and compounds that can be open at once. The
    /// root counts as one. Trees nested deeper than this fail to encode with
    /// [`ErrorKind::DepthLimit`][`crate::error::ErrorKind::DepthLimit`].
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Set the encoding used for names and strings.
    pub fn text(mut self, value: TextEncoding) -> Self {
        self.text = value;
        self
    }
}

impl Default for EncOpts {
    fn default() -> Self {
        Self {
            max_depth: 512,
            text: TextEncoding::Utf8,
        }
    }
}
