//! One turn's observation: named fields resolved against positional arrays.
//!
//! The simulator hands over an ordered list of field names (fixed per
//! session) and a positional list of arrays (refreshed every turn). The
//! name-to-position index is built once at construction, so lookups are an
//! explicit map hit rather than a repeated linear scan.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ScribeError, ScribeResult};
use crate::grid::CharGrid;

/// One observation field's payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldArray {
    /// 1-D byte sequence (e.g. "message", "inv_letters").
    Bytes(Vec<u8>),
    /// 2-D character grid (e.g. "chars", "tty_chars", "inv_strs").
    Grid(CharGrid),
    /// Present in the observation but not byte-shaped; carried so the
    /// name/array lists stay parallel, never rendered.
    Opaque,
}

/// Read-only snapshot of one turn's named arrays.
#[derive(Debug, Clone)]
pub struct Observation {
    names: Vec<String>,
    arrays: Vec<FieldArray>,
    index: HashMap<String, usize>,
}

impl Observation {
    /// Pair field names with arrays positionally.
    ///
    /// The lists must have equal length. On duplicate names the first
    /// occurrence wins, matching first-match positional lookup upstream.
    pub fn new(names: Vec<String>, arrays: Vec<FieldArray>) -> ScribeResult<Self> {
        if names.len() != arrays.len() {
            return Err(ScribeError::MismatchedFields {
                names: names.len(),
                arrays: arrays.len(),
            });
        }
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }
        Ok(Self {
            names,
            arrays,
            index,
        })
    }

    /// Field names in observation order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Resolve a field by name.
    pub fn field(&self, name: &str) -> ScribeResult<&FieldArray> {
        self.index
            .get(name)
            .map(|&i| &self.arrays[i])
            .ok_or_else(|| ScribeError::FieldNotFound {
                name: name.to_string(),
            })
    }

    /// Resolve a field expected to be a 1-D byte sequence.
    pub fn bytes_field(&self, name: &str) -> ScribeResult<&[u8]> {
        match self.field(name)? {
            FieldArray::Bytes(b) => Ok(b),
            _ => Err(ScribeError::MalformedGrid {
                message: format!("field '{}' is not a 1-D byte sequence", name),
            }),
        }
    }

    /// Resolve a field expected to be a 2-D character grid.
    pub fn grid_field(&self, name: &str) -> ScribeResult<&CharGrid> {
        match self.field(name)? {
            FieldArray::Grid(g) => Ok(g),
            _ => Err(ScribeError::MalformedGrid {
                message: format!("field '{}' is not a 2-D grid", name),
            }),
        }
    }
}
