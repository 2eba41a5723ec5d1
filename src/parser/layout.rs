//! Name to position lookup for self-describing flat records.

use crate::utils::error::ParseError;
use std::collections::HashMap;

/// Positions of the named fields inside one fixed-stride record
///
/// Built once from a `*_fields` descriptor, then used positionally for
/// every record of the array.
#[derive(Debug, Clone)]
pub struct FieldLayout {
    section: &'static str,
    positions: HashMap<String, usize>,
    stride: usize,
}

impl FieldLayout {
    pub fn new(section: &'static str, fields: &[String]) -> Self {
        // Later duplicates win, like a field-by-field overwrite would
        let positions = fields
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect();

        Self {
            section,
            positions,
            stride: fields.len(),
        }
    }

    /// Record length in values
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Position of a field the decoder cannot work without
    pub fn require(&self, name: &str) -> Result<usize, ParseError> {
        self.position(name)
            .ok_or_else(|| ParseError::missing_field(self.section, name))
    }

    /// Read a required value from one record
    ///
    /// Fails when the record is truncated before `position`.
    pub fn read(&self, record: &[i64], position: usize, index: usize) -> Result<i64, ParseError> {
        record.get(position).copied().ok_or_else(|| {
            ParseError::Schema(format!(
                "{} record {} is truncated (expected {} values, found {})",
                self.section,
                index,
                self.stride,
                record.len()
            ))
        })
    }

    /// Slice out record `index`, possibly shorter than the stride at the end of the array
    pub fn record<'a>(&self, values: &'a [i64], index: usize) -> &'a [i64] {
        let start = index.saturating_mul(self.stride);
        let end = start.saturating_add(self.stride).min(values.len());
        values.get(start..end).unwrap_or_default()
    }
}
