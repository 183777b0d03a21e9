//! This module writes NBT trees in the binary NBT format. Use
//! [`to_bytes`][`crate::to_bytes`] or [`to_writer`][`crate::to_writer`], or
//! an [`Encoder`] to write several tags to one writer.
//!
//! # Format
//!
//! All numbers are big-endian. A named tag is written as
//!
//! | Field | Size |
//! |---|---|
//! | tag | 1 byte, 0-10 |
//! | name length | 2 bytes, unsigned |
//! | name | name length bytes |
//! | payload | depends on tag |
//!
//! and payloads as
//!
//! | Tag | Payload |
//! |---|---|
//! | Byte, Short, Int, Long | 1, 2, 4, 8 byte integer |
//! | Float, Double | 4, 8 byte IEEE 754 |
//! | ByteArray | 4 byte signed length, then the bytes |
//! | String | 2 byte length, then the text bytes |
//! | List | 1 byte element tag, 4 byte signed length, then each element's payload |
//! | Compound | each child as a named tag, then a single End (0) byte |
//!
//! List elements have no tag or name of their own. An empty list still has
//! the 5 byte header; its element tag is End unless one was declared with
//! [`List::of`][`crate::List::of`].
//!
//! Errors from the writer are returned as soon as they happen. What has been
//! written by then is unspecified.
mod encoder;
mod write_nbt;

pub use encoder::Encoder;

use std::io::Write;

use crate::{error::Result, EncOpts, NamedTag};

/// Encode a tag to a byte vector.
pub fn to_bytes(tag: &NamedTag) -> Result<Vec<u8>> {
    to_bytes_with_opts(tag, EncOpts::default())
}

/// Encode a tag to a byte vector, with the given options.
pub fn to_bytes_with_opts(tag: &NamedTag, opts: EncOpts) -> Result<Vec<u8>> {
    let mut result = vec![];
    to_writer_with_opts(&mut result, tag, opts)?;
    Ok(result)
}

/// Encode a tag to a writer.
pub fn to_writer<W: Write>(writer: W, tag: &NamedTag) -> Result<()> {
    to_writer_with_opts(writer, tag, EncOpts::default())
}

/// Encode a tag to a writer, with the given options.
pub fn to_writer_with_opts<W: Write>(writer: W, tag: &NamedTag, opts: EncOpts) -> Result<()> {
    Encoder::with_opts(writer, opts).encode(tag)
}
