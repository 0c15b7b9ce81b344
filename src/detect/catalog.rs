//! Whole-tree type catalog for override resolution.

use std::collections::HashMap;

use tracing::debug;

use crate::analysis::{ClassDeclaration, SourceFile};

/// Simple type name to declaration, across every parsed file of a scan.
///
/// Names are not qualified by package: when two files declare the same
/// simple name, the one seen last wins.
#[derive(Debug, Default)]
pub struct TypeCatalog {
    types: HashMap<String, ClassDeclaration>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog from all loaded files.
    ///
    /// Files that failed to parse contribute nothing. Only top-level classes
    /// and interfaces are recorded.
    pub fn build(files: &[SourceFile]) -> Self {
        let mut catalog = Self::new();

        for file in files {
            let unit = match file.unit() {
                Some(unit) => unit,
                None => continue,
            };
            for decl in unit.top_level_types() {
                if decl.kind.is_catalogued() {
                    catalog.insert(decl.clone());
                }
            }
        }

        debug!(types = catalog.len(), "built type catalog");
        catalog
    }

    /// Insert a declaration, replacing any earlier one with the same name.
    pub fn insert(&mut self, decl: ClassDeclaration) {
        if let Some(previous) = self.types.insert(decl.name.clone(), decl) {
            debug!(name = %previous.name, "type name shadowed by later declaration");
        }
    }

    /// Look up a type by simple name.
    pub fn get(&self, name: &str) -> Option<&ClassDeclaration> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
