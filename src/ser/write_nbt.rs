use std::borrow::Cow;
use std::convert::TryInto;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{Tag, TextEncoding};

fn encode_text(s: &str, text: TextEncoding) -> Cow<'_, [u8]> {
    match text {
        TextEncoding::Utf8 => Cow::Borrowed(s.as_bytes()),
        TextEncoding::JavaCesu8 => cesu8::to_java_cesu8(s),
    }
}

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag.into())?;
        Ok(())
    }

    fn write_name(&mut self, name: &str, text: TextEncoding) -> Result<()> {
        let name = encode_text(name, text);
        let len: u16 = name
            .len()
            .try_into()
            .map_err(|_| Error::name_too_long(name.len()))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(&name)?;
        Ok(())
    }

    fn write_string(&mut self, s: &str, text: TextEncoding) -> Result<()> {
        let s = encode_text(s, text);
        let len: u16 = s
            .len()
            .try_into()
            .map_err(|_| Error::length_overflow(Tag::String, s.len()))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(&s)?;
        Ok(())
    }

    /// Length prefix of byte arrays and lists, a signed 32 bit int.
    fn write_len(&mut self, tag: Tag, len: usize) -> Result<()> {
        let len: i32 = len
            .try_into()
            .map_err(|_| Error::length_overflow(tag, len))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}
