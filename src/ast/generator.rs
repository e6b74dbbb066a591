use std::collections::HashMap;

use crate::{literal::Scalar, value::Value};

/// The roots produced by one parse, in input order.
pub type Forest = Vec<Generator>;

/// A node of the parsed tree.
///
/// A generator can produce a [`Value`] and can be merged with another
/// generator that was written under the same field name.
///
/// # Merge rules
///
/// | existing | incoming | result |
/// |----------|----------|--------|
/// | Object   | Object   | deep union, shared fields merged recursively |
/// | Object   | Scalar / Array | incoming |
/// | Scalar   | anything | incoming |
/// | Array    | anything | incoming |
#[derive(Debug, Clone, PartialEq)]
pub enum Generator {
    Scalar(Scalar),
    Object(Object),
    Array(Array),
}

impl Generator {
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        Generator::Scalar(value.into())
    }

    /// Produce the value tree rooted at this generator.
    pub fn produce(&self) -> Value {
        match self {
            Generator::Scalar(scalar) => Value::from(scalar.clone()),
            Generator::Object(object) => object.produce(),
            Generator::Array(array) => array.produce(),
        }
    }

    /// Merge `incoming` into `self`, consuming both.
    pub fn merge(self, incoming: Generator) -> Generator {
        match (self, incoming) {
            (Generator::Object(mut existing), Generator::Object(incoming)) => {
                existing.absorb(incoming);
                Generator::Object(existing)
            }
            (_, incoming) => incoming,
        }
    }
}

impl From<Object> for Generator {
    fn from(object: Object) -> Self {
        Generator::Object(object)
    }
}

impl From<Array> for Generator {
    fn from(array: Array) -> Self {
        Generator::Array(array)
    }
}

impl From<Scalar> for Generator {
    fn from(scalar: Scalar) -> Self {
        Generator::Scalar(scalar)
    }
}

/// Fields keyed by name, kept in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct Object {
    fields: Vec<(String, Generator)>,
    index: HashMap<String, usize>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// An object holding exactly one field.
    pub fn with_field(name: impl Into<String>, child: Generator) -> Self {
        let mut object = Object::new();
        object.insert(name, child);
        object
    }

    /// Add a field. If `name` already exists the existing child is merged
    /// with `child` and the result replaces it in place.
    pub fn insert(&mut self, name: impl Into<String>, child: Generator) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => {
                tracing::debug!(field = %name, "merging repeated field");
                let entry = &mut self.fields[slot].1;
                let existing = std::mem::replace(entry, Generator::Scalar(Scalar::Null));
                *entry = existing.merge(child);
            }
            None => {
                self.index.insert(name.clone(), self.fields.len());
                self.fields.push((name, child));
            }
        }
    }

    /// Builder form of [`Object::insert`].
    pub fn field(mut self, name: impl Into<String>, child: Generator) -> Self {
        self.insert(name, child);
        self
    }

    fn absorb(&mut self, other: Object) {
        for (name, child) in other.fields {
            self.insert(name, child);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Generator> {
        self.index.get(name).map(|&slot| &self.fields[slot].1)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Generator)> {
        self.fields.iter().map(|(name, child)| (name.as_str(), child))
    }

    pub fn produce(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, child)| (name.clone(), child.produce()))
                .collect(),
        )
    }
}

// Field order is presentation only; two objects are equal when they hold
// the same keys with equal children.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, child)| other.get(name) == Some(child))
    }
}

/// Ordered elements. Arrays never merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    elements: Vec<Generator>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Generator) {
        self.elements.push(element);
    }

    /// Builder form of [`Array::push`].
    pub fn element(mut self, element: Generator) -> Self {
        self.push(element);
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Generator> {
        self.elements.iter()
    }

    pub fn produce(&self) -> Value {
        Value::Array(self.elements.iter().map(Generator::produce).collect())
    }
}

impl FromIterator<Generator> for Array {
    fn from_iter<I: IntoIterator<Item = Generator>>(iter: I) -> Self {
        Array {
            elements: iter.into_iter().collect(),
        }
    }
}
