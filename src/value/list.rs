use serde::Serialize;

use crate::{
    error::{Error, Result},
    Tag,
};

use super::{check_len, Compound, Value};

/// An NBT list: unnamed values that all share one tag.
///
/// The element tag is fixed by the first value pushed, or declared up front
/// with [`List::of`]. An empty list with no declared tag reports
/// [`Tag::End`], which is also what gets written for it.
///
/// ```
/// # use nbtag::{List, Tag, Value};
/// # fn main() -> nbtag::error::Result<()> {
/// let mut list = List::new();
/// list.push(Value::Int(1))?;
/// list.push(Value::Int(2))?;
/// assert_eq!(list.element_tag(), Tag::Int);
///
/// // Lists can only hold one kind of value.
/// assert!(list.push(Value::Byte(3)).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: Tag,
    items: Vec<Value>,
}

impl List {
    pub fn new() -> Self {
        Self::of(Tag::End)
    }

    /// An empty list that will only accept values with tag `element`.
    /// `Tag::End` leaves the element tag undeclared.
    pub fn of(element: Tag) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// Build a list from values. The first value decides the element tag.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut list = Self::new();
        for value in values {
            list.push(value)?;
        }
        Ok(list)
    }

    /// Append a value. Fails if its tag differs from the element tag, or if
    /// the list or the value is too long for its length prefix.
    pub fn push(&mut self, value: Value) -> Result<()> {
        let tag = value.tag();
        if self.element != Tag::End && self.element != tag {
            return Err(Error::mixed_list(self.element, tag));
        }
        value.check()?;
        check_len(Tag::List, self.items.len() + 1)?;

        self.element = tag;
        self.items.push(value);
        Ok(())
    }

    /// Remove the value at `index`, if it exists. The element tag stays
    /// as it was, even if the list becomes empty.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The tag shared by every element, or `Tag::End` for an empty list with
    /// no declared tag.
    pub fn element_tag(&self) -> Tag {
        self.element
    }

    pub(super) fn take_values(&mut self) -> std::vec::Drain<'_, Value> {
        self.items.drain(..)
    }
}

impl Drop for List {
    fn drop(&mut self) {
        super::drop_nested(self.take_values());
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.items)
    }
}

// Homogeneous by construction, so these cannot mix tags. Lengths are checked
// again when the list is encoded.
macro_rules! list_from {
    ($type:ty, $tag:ident $(, $($part:tt)+)?) => {
        impl From<Vec<$type>> for List {
            fn from(vals: Vec<$type>) -> Self {
                Self {
                    element: Tag::$tag,
                    items: vals.into_iter().map(|v| Value::$tag(v$($($part)+)?)).collect(),
                }
            }
        }
    };
}
list_from!(i8, Byte);
list_from!(i16, Short);
list_from!(i32, Int);
list_from!(i64, Long);
list_from!(f32, Float);
list_from!(f64, Double);
list_from!(Vec<u8>, ByteArray);
list_from!(String, String);
list_from!(&str, String, .to_owned());
list_from!(List, List);
list_from!(Compound, Compound);

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for List {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let tag: Tag = u.arbitrary()?;
        let mut list = List::of(tag);
        if tag == Tag::End {
            return Ok(list);
        }

        let len = u.arbitrary_len::<Value>()?;
        for _ in 0..len {
            let value = super::arbitrary_of(u, tag)?;
            list.push(value)
                .map_err(|_| arbitrary::Error::IncorrectFormat)?;
        }
        Ok(list)
    }
}
