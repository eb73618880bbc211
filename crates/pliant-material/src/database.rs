//! Material catalog.
//!
//! The four built-in presets (metal, wood, plastic, rubber) are always
//! available. Entries are stored behind `Arc` so every body built from the
//! same preset shares one immutable record.

use std::collections::HashMap;
use std::sync::Arc;

use pliant_types::PliantResult;

use crate::properties::{Material, MaterialKind};

/// A named collection of material presets.
#[derive(Debug, Clone)]
pub struct MaterialDatabase {
    materials: HashMap<String, Arc<Material>>,
}

impl MaterialDatabase {
    /// Creates a new database with the 4 built-in presets.
    pub fn with_defaults() -> Self {
        let mut db = Self::empty();
        for material in [
            Material::metal(),
            Material::wood(),
            Material::plastic(),
            Material::rubber(),
        ] {
            db.materials
                .insert(material.name.clone(), Arc::new(material));
        }
        db
    }

    /// Creates an empty database.
    pub fn empty() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Validates and registers a material. Overwrites if the name already
    /// exists; bodies holding the old handle keep the old values.
    pub fn register(&mut self, material: Material) -> PliantResult<Arc<Material>> {
        material.validate()?;
        let handle = Arc::new(material);
        self.materials
            .insert(handle.name.clone(), Arc::clone(&handle));
        Ok(handle)
    }

    /// Looks up a material by name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<Arc<Material>> {
        self.materials.get(name).cloned()
    }

    /// Looks up a built-in preset by kind.
    pub fn by_kind(&self, kind: MaterialKind) -> Option<Arc<Material>> {
        self.get(kind.name())
    }

    /// Returns all registered material names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.materials.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if the database is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialDatabase {
    fn default() -> Self {
        Self::with_defaults()
    }
}
