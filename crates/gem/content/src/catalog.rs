//! In-memory gem catalog.

use gem_core::Entity;

/// Loaded gems, looked up by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GemCatalog {
    gems: Vec<Entity>,
}

impl GemCatalog {
    pub fn new(gems: Vec<Entity>) -> Self {
        Self { gems }
    }

    pub fn len(&self) -> usize {
        self.gems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gems.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.gems.iter()
    }

    /// Finds a gem by exact name, ignoring ASCII case and surrounding space.
    pub fn find(&self, name: &str) -> Option<&Entity> {
        let name = name.trim();
        self.gems.iter().find(|gem| gem.name.eq_ignore_ascii_case(name))
    }
}
