//! Classification of `@graph` elements into graph roles
//!
//! Precedence, first match wins:
//! 1. `snap:has-bond` or an associated-place predicate: a node that owns links
//! 2. `snap:bond-with`: a relationship element
//! 3. anything else: a plain node
//!
//! A predicate value is either one referenced object or an array of them.
//! The array form is treated as to-many whatever its length.

use super::error::{DocumentError, DocumentResult};
use super::vocab;
use serde_json::{Map, Value};

type Fields = Map<String, Value>;

/// An object a predicate points at: `{"@id": ..., "rdfs:label": ...}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    pub id: &'a str,
    pub label: Option<&'a str>,
}

/// What an element contributes to the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role<'a> {
    /// A node with outgoing bonds and/or associated places
    LinkedNode {
        bonds: Vec<Reference<'a>>,
        places: Vec<Reference<'a>>,
    },
    /// A bond, keyed by the element's own id, pointing at its partner
    Relationship { partners: Vec<Reference<'a>> },
    /// A node and nothing else
    Node,
}

/// A classified view over one element of the document
#[derive(Debug, Clone)]
pub struct Element<'a> {
    /// Position in `@graph`
    pub index: usize,
    pub id: &'a str,
    pub label: Option<&'a str>,
    pub kind: Option<&'a str>,
    pub role: Role<'a>,
    raw: &'a Value,
}

impl<'a> Element<'a> {
    /// Read and classify the element at `index`
    pub fn parse(index: usize, value: &'a Value) -> DocumentResult<Self> {
        let fields = value
            .as_object()
            .ok_or_else(|| DocumentError::element(index, "element is not an object"))?;
        let id = string_id(fields)
            .ok_or_else(|| DocumentError::element(index, "missing string `@id`"))?;

        Ok(Self {
            index,
            id,
            label: label(fields),
            kind: kind(fields),
            role: classify(index, fields)?,
            raw: value,
        })
    }

    /// The element exactly as it appeared in the document
    pub fn raw(&self) -> &'a Value {
        self.raw
    }
}

fn classify<'a>(index: usize, fields: &'a Fields) -> DocumentResult<Role<'a>> {
    let bond_value = fields.get(vocab::HAS_BOND);
    let place_values: Vec<(&str, &'a Value)> = vocab::ASSOCIATED_PLACE
        .iter()
        .filter_map(|key| fields.get(*key).map(|value| (*key, value)))
        .collect();

    if bond_value.is_some() || !place_values.is_empty() {
        let bonds = match bond_value {
            Some(value) => references(index, vocab::HAS_BOND, value)?,
            None => Vec::new(),
        };
        let mut places = Vec::new();
        for (key, value) in place_values {
            places.extend(references(index, key, value)?);
        }
        return Ok(Role::LinkedNode { bonds, places });
    }

    if let Some(value) = fields.get(vocab::BOND_WITH) {
        let partners = references(index, vocab::BOND_WITH, value)?;
        return Ok(Role::Relationship { partners });
    }

    Ok(Role::Node)
}

fn references<'a>(
    index: usize,
    predicate: &str,
    value: &'a Value,
) -> DocumentResult<Vec<Reference<'a>>> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| reference(index, predicate, item))
            .collect(),
        single => Ok(vec![reference(index, predicate, single)?]),
    }
}

fn reference<'a>(index: usize, predicate: &str, value: &'a Value) -> DocumentResult<Reference<'a>> {
    let fields = value.as_object().ok_or_else(|| {
        DocumentError::element(index, format!("`{predicate}` must reference an object"))
    })?;
    let id = string_id(fields).ok_or_else(|| {
        DocumentError::element(index, format!("`{predicate}` reference has no string `@id`"))
    })?;
    Ok(Reference {
        id,
        label: label(fields),
    })
}

fn string_id(fields: &Fields) -> Option<&str> {
    fields.get(vocab::ID)?.as_str()
}

/// `rdfs:label` as a plain string, a `{"@value": ...}` literal, or the first of an array of either
fn label(fields: &Fields) -> Option<&str> {
    literal(fields.get(vocab::LABEL)?)
}

fn literal(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(obj) => obj.get("@value")?.as_str(),
        Value::Array(items) => items.iter().find_map(literal),
        _ => None,
    }
}

/// `@type` as a string, or the first string of an array
fn kind(fields: &Fields) -> Option<&str> {
    match fields.get(vocab::TYPE)? {
        Value::String(s) => Some(s.as_str()),
        Value::Array(items) => items.iter().find_map(Value::as_str),
        _ => None,
    }
}
