use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::{EncOpts, NamedTag, Tag, Value};

use super::write_nbt::WriteNbt;

/// Writes [`NamedTag`]s to a writer in the binary NBT format.
///
/// The tree is walked depth first with an explicit stack rather than by
/// recursion, so deep trees cannot overflow the call stack. Instead nesting
/// is limited by [`EncOpts::max_depth`].
///
/// ```
/// use nbtag::{ser::Encoder, NamedTag};
///
/// # fn main() -> nbtag::error::Result<()> {
/// let mut encoder = Encoder::new(Vec::new());
/// encoder.encode(&NamedTag::int("a", 1)?)?;
/// encoder.encode(&NamedTag::int("b", 2)?)?;
///
/// assert_eq!(encoder.into_inner().len(), 2 * (1 + 2 + 1 + 4));
/// # Ok(())
/// # }
/// ```
pub struct Encoder<W: Write> {
    writer: W,
    opts: EncOpts,
}

/// An open list or compound, and the children still to be written.
enum Frame<'a> {
    Compound(indexmap::map::Iter<'a, String, Value>),
    List(std::slice::Iter<'a, Value>),
}

enum Step<'a> {
    Named(&'a str, &'a Value),
    Unnamed(&'a Value),
    Close(Tag),
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Self::with_opts(writer, EncOpts::default())
    }

    pub fn with_opts(writer: W, opts: EncOpts) -> Self {
        Self { writer, opts }
    }

    /// Write a complete tag: its tag byte, its name, then its payload.
    pub fn encode(&mut self, tag: &NamedTag) -> Result<()> {
        debug!("encoding {} {:?}", tag.tag(), tag.name());

        self.writer.write_tag(tag.tag())?;
        self.writer.write_name(tag.name(), self.opts.text)?;
        self.encode_value(tag.value())
    }

    /// Write only the payload of a value, as it appears inside a list.
    pub fn encode_value(&mut self, value: &Value) -> Result<()> {
        let mut stack = Vec::new();
        self.write_payload(value, &mut stack)?;

        while let Some(step) = next_step(&mut stack) {
            match step {
                Step::Named(name, value) => {
                    self.writer.write_tag(value.tag())?;
                    self.writer.write_name(name, self.opts.text)?;
                    self.write_payload(value, &mut stack)?;
                }
                Step::Unnamed(value) => self.write_payload(value, &mut stack)?,
                Step::Close(tag) => {
                    trace!("closing {} at depth {}", tag, stack.len());
                    if tag == Tag::Compound {
                        self.writer.write_tag(Tag::End)?;
                    }
                }
            }
        }

        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_payload<'a>(&mut self, value: &'a Value, stack: &mut Vec<Frame<'a>>) -> Result<()> {
        match value {
            Value::Byte(v) => self.writer.write_i8(*v)?,
            Value::Short(v) => self.writer.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => self.writer.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => self.writer.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => self.writer.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => self.writer.write_f64::<BigEndian>(*v)?,
            Value::ByteArray(v) => {
                self.writer.write_len(Tag::ByteArray, v.len())?;
                self.writer.write_all(v)?;
            }
            Value::String(v) => self.writer.write_string(v, self.opts.text)?,
            Value::List(list) => {
                self.check_depth(stack.len())?;
                trace!("opening list of {} at depth {}", list.element_tag(), stack.len());

                // Empty lists still get a header so readers need no special
                // case. Undeclared element tags are written as End.
                self.writer.write_tag(list.element_tag())?;
                self.writer.write_len(Tag::List, list.len())?;
                stack.push(Frame::List(list.iter()));
            }
            Value::Compound(compound) => {
                self.check_depth(stack.len())?;
                trace!("opening compound at depth {}", stack.len());

                stack.push(Frame::Compound(compound.entries()));
            }
        }
        Ok(())
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= self.opts.max_depth {
            debug!("refusing to nest past depth {}", self.opts.max_depth);
            return Err(Error::depth_limit(self.opts.max_depth));
        }
        Ok(())
    }
}

fn next_step<'a>(stack: &mut Vec<Frame<'a>>) -> Option<Step<'a>> {
    let closed = match stack.last_mut()? {
        Frame::Compound(children) => match children.next() {
            Some((name, value)) => return Some(Step::Named(name, value)),
            None => Tag::Compound,
        },
        Frame::List(items) => match items.next() {
            Some(value) => return Some(Step::Unnamed(value)),
            None => Tag::List,
        },
    };
    stack.pop();
    Some(Step::Close(closed))
}
