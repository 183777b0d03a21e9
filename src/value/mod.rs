mod compound;
mod display;
mod list;

use serde::Serialize;

use crate::{
    error::{Error, Result},
    Tag,
};

pub use self::compound::Compound;
pub use self::list::List;

/// The payload of an NBT tag. Each variant owns its data, so the kind of a
/// value can never disagree with what it holds. There is no variant for
/// [`Tag::End`], which only ever appears on the wire.
///
/// Values are usually built with [`NamedTag`]'s constructors or the `From`
/// impls:
///
/// ```
/// # use nbtag::Value;
/// assert_eq!(Value::from(100i16), Value::Short(100));
/// assert_eq!(Value::from(true), Value::Byte(1));
/// assert_eq!(Value::from("hi"), Value::String("hi".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(#[serde(with = "serde_bytes")] Vec<u8>),
    String(String),
    List(List),
    Compound(Compound),
}

impl Value {
    /// The tag written in front of this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    /// Length of the payload as the format counts it: the byte width for
    /// numbers, the number of bytes for byte arrays and strings, and the number
    /// of children for lists and compounds.
    pub fn stored_len(&self) -> usize {
        match self {
            Value::Byte(_) => 1,
            Value::Short(_) => 2,
            Value::Int(_) => 4,
            Value::Long(_) => 8,
            Value::Float(_) => 4,
            Value::Double(_) => 8,
            Value::ByteArray(v) => v.len(),
            Value::String(v) => v.len(),
            Value::List(v) => v.len(),
            Value::Compound(v) => v.len(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    /// Checks the length prefixes of strings and byte arrays. Lists and
    /// compounds check their own contents as they are built.
    fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Compound(_))
    }

    pub(crate) fn check(&self) -> Result<()> {
        match self {
            Value::ByteArray(v) => check_len(Tag::ByteArray, v.len()),
            Value::String(v) => check_len(Tag::String, v.len()),
            _ => Ok(()),
        }
    }
}

// The default drop glue recurses once per level of nesting. Moving children
// onto a heap stack first keeps dropping deep trees off the call stack.
fn drop_nested(children: impl Iterator<Item = Value>) {
    let mut pending: Vec<Value> = children.filter(Value::is_container).collect();
    while let Some(value) = pending.pop() {
        match value {
            Value::List(mut list) => pending.extend(list.take_values().filter(Value::is_container)),
            Value::Compound(mut compound) => {
                pending.extend(compound.take_values().filter(Value::is_container))
            }
            _ => {}
        }
    }
}

pub(crate) fn check_name(name: &str) -> Result<()> {
    if name.len() > u16::MAX as usize {
        return Err(Error::name_too_long(name.len()));
    }
    Ok(())
}

pub(crate) fn check_len(tag: Tag, len: usize) -> Result<()> {
    let max = match tag {
        Tag::String => u16::MAX as usize,
        _ => i32::MAX as usize,
    };
    if len > max {
        return Err(Error::length_overflow(tag, len));
    }
    Ok(())
}

/// A complete NBT tag: a name and the value it holds. This is what gets
/// encoded at the root of an NBT stream, and what compounds are made of.
///
/// Every constructor validates its input, so a `NamedTag` always has a name
/// that fits the format and a value whose length prefixes fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedTag {
    name: String,
    value: Value,
}

impl NamedTag {
    /// Create a tag from any value.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        let name = name.into();
        let value = value.into();
        check_name(&name)?;
        value.check()?;
        Ok(Self { name, value })
    }

    pub fn byte(name: impl Into<String>, v: i8) -> Result<Self> {
        Self::new(name, Value::Byte(v))
    }

    pub fn short(name: impl Into<String>, v: i16) -> Result<Self> {
        Self::new(name, Value::Short(v))
    }

    pub fn int(name: impl Into<String>, v: i32) -> Result<Self> {
        Self::new(name, Value::Int(v))
    }

    pub fn long(name: impl Into<String>, v: i64) -> Result<Self> {
        Self::new(name, Value::Long(v))
    }

    pub fn float(name: impl Into<String>, v: f32) -> Result<Self> {
        Self::new(name, Value::Float(v))
    }

    pub fn double(name: impl Into<String>, v: f64) -> Result<Self> {
        Self::new(name, Value::Double(v))
    }

    pub fn byte_array(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Result<Self> {
        Self::new(name, Value::ByteArray(data.into()))
    }

    pub fn string(name: impl Into<String>, s: impl Into<String>) -> Result<Self> {
        Self::new(name, Value::String(s.into()))
    }

    /// Create a list tag. Every value must have the same tag as the first,
    /// otherwise this fails with
    /// [`ErrorKind::MixedList`][`crate::error::ErrorKind::MixedList`].
    pub fn list<I>(name: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        Self::new(name, List::from_values(values)?)
    }

    /// Create a compound tag holding `children` in the given order. Two
    /// children with the same name fail with
    /// [`ErrorKind::DuplicateName`][`crate::error::ErrorKind::DuplicateName`].
    pub fn compound<I>(name: impl Into<String>, children: I) -> Result<Self>
    where
        I: IntoIterator<Item = NamedTag>,
    {
        Self::new(name, Compound::from_tags(children)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn tag(&self) -> Tag {
        self.value.tag()
    }

    /// See [`Value::stored_len`].
    pub fn stored_len(&self) -> usize {
        self.value.stored_len()
    }

    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(Vec<u8>, ByteArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

impl From<&[u8]> for Value {
    fn from(val: &[u8]) -> Self {
        Self::ByteArray(val.to_vec())
    }
}

#[cfg(feature = "arbitrary1")]
pub(crate) fn arbitrary_of(u: &mut arbitrary::Unstructured<'_>, tag: Tag) -> arbitrary::Result<Value> {
    Ok(match tag {
        Tag::End => return Err(arbitrary::Error::IncorrectFormat),
        Tag::Byte => Value::Byte(u.arbitrary()?),
        Tag::Short => Value::Short(u.arbitrary()?),
        Tag::Int => Value::Int(u.arbitrary()?),
        Tag::Long => Value::Long(u.arbitrary()?),
        Tag::Float => Value::Float(u.arbitrary()?),
        Tag::Double => Value::Double(u.arbitrary()?),
        Tag::ByteArray => Value::ByteArray(u.arbitrary()?),
        Tag::String => Value::String(u.arbitrary()?),
        Tag::List => Value::List(u.arbitrary()?),
        Tag::Compound => Value::Compound(u.arbitrary()?),
    })
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let tag = u.arbitrary()?;
        arbitrary_of(u, tag)
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for NamedTag {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let name: String = u.arbitrary()?;
        let value: Value = u.arbitrary()?;
        NamedTag::new(name, value).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}
