//! Per-run registry of struct declarations and the capabilities found for them.

use crate::common::Position;
use std::collections::HashMap;

/// A struct declaration and which of the required methods it has.
///
/// Both flags start false and only ever flip to true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructRecord {
    pub name: String,
    pub position: Position,
    has_validate: bool,
    has_resource_mappings: bool,
}

impl StructRecord {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            has_validate: false,
            has_resource_mappings: false,
        }
    }

    pub fn has_validate(&self) -> bool {
        self.has_validate
    }

    pub fn has_resource_mappings(&self) -> bool {
        self.has_resource_mappings
    }

    pub fn mark_validate(&mut self) {
        self.has_validate = true;
    }

    pub fn mark_resource_mappings(&mut self) {
        self.has_resource_mappings = true;
    }

    pub fn is_complete(&self) -> bool {
        self.has_validate && self.has_resource_mappings
    }
}

/// Struct records keyed by type name
#[derive(Debug, Default)]
pub struct Registry {
    records: HashMap<String, StructRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record; a later declaration with the same name replaces the earlier one
    pub fn insert(&mut self, record: StructRecord) {
        self.records.insert(record.name.clone(), record);
    }

    pub fn get(&self, name: &str) -> Option<&StructRecord> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut StructRecord> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by declaration position, then name
    pub fn sorted(&self) -> Vec<&StructRecord> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.name.cmp(&b.name))
        });
        records
    }
}
