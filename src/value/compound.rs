use std::ops::Index;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};

use super::{check_name, NamedTag, Value};

/// An NBT compound: named values of any kind.
///
/// Children keep the order they were inserted in, which is the order they
/// are encoded in. Names are unique; inserting an existing name replaces the
/// value in place. Equality takes the order into account, since it changes
/// the encoded bytes.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Compound(IndexMap<String, Value>);

impl Compound {
    pub fn new() -> Self {
        Default::default()
    }

    pub(crate) fn from_tags<I>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = NamedTag>,
    {
        let mut compound = Self::new();
        for tag in tags {
            let (name, value) = tag.into_parts();
            if compound.0.contains_key(&name) {
                return Err(Error::duplicate_name(&name));
            }
            compound.0.insert(name, value);
        }
        Ok(compound)
    }

    /// Insert a child. If the name is already present its value is replaced,
    /// keeping its position, and the old value is returned.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>> {
        let name = name.into();
        let value = value.into();
        check_name(&name)?;
        value.check()?;
        Ok(self.0.insert(name, value))
    }

    /// Insert a complete tag, see [`Compound::insert`].
    pub fn insert_tag(&mut self, tag: NamedTag) -> Option<Value> {
        let (name, value) = tag.into_parts();
        self.0.insert(name, value)
    }

    /// Remove a child by name. The remaining children keep their order.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.0.get_mut(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Find the first value called `name`. Direct children are checked first,
    /// then each nested compound in order, depth first. Lists are not
    /// searched.
    pub fn find(&self, name: &str) -> Option<&Value> {
        let mut pending = vec![self];
        while let Some(compound) = pending.pop() {
            if let Some(v) = compound.get(name) {
                return Some(v);
            }
            let nested = compound.0.values().rev().filter_map(Value::as_compound);
            pending.extend(nested);
        }
        None
    }

    /// Remove the first value called `name`, searching in the same order as
    /// [`Compound::find`].
    pub fn remove_nested(&mut self, name: &str) -> Option<Value> {
        let mut pending = vec![self];
        while let Some(compound) = pending.pop() {
            if compound.0.contains_key(name) {
                return compound.0.shift_remove(name);
            }
            let nested = compound.0.values_mut().rev().filter_map(|v| match v {
                Value::Compound(c) => Some(c),
                _ => None,
            });
            pending.extend(nested);
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn entries(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub(super) fn take_values(&mut self) -> impl Iterator<Item = Value> + '_ {
        self.0.drain(..).map(|(_, v)| v)
    }
}

impl Drop for Compound {
    fn drop(&mut self) {
        super::drop_nested(self.take_values());
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Index<&str> for Compound {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        &self.0[name]
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut compound = Compound::new();
        let len = u.arbitrary_len::<(String, Value)>()?;
        for _ in 0..len {
            let name: String = u.arbitrary()?;
            let value: Value = u.arbitrary()?;
            compound
                .insert(name, value)
                .map_err(|_| arbitrary::Error::IncorrectFormat)?;
        }
        Ok(compound)
    }
}
