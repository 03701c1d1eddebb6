// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sequential identifier assignment.

/// Identifier assigned to the first asset of every registry.
///
/// The Windows resource script reserves lower ids for icons and manifests.
pub const BASE_ID: u32 = 300;

/// One registered asset: its verbatim name and the identifier it was assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetEntry {
    name: String,
    id: u32,
}

impl AssetEntry {
    /// Asset name as given on input (a path relative to the assets directory).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resource identifier.
    pub fn id(&self) -> u32 {
        self.id
    }
}

/// Ordered `(name, id)` assignments produced by one generation run.
///
/// Invariant: `entries[i].id == BASE_ID + i` for every `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<AssetEntry>,
}

impl Registry {
    /// Assign `BASE_ID + index` to each name, following input order.
    ///
    /// Duplicate names are kept: each occurrence gets its own identifier.
    pub fn build<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .zip(BASE_ID..)
            .map(|(name, id)| AssetEntry {
                name: name.into(),
                id,
            })
            .collect();
        Self { entries }
    }

    /// Iterate over entries in identifier order.
    pub fn iter(&self) -> std::slice::Iter<'_, AssetEntry> {
        self.entries.iter()
    }

    /// Number of registered assets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no asset was registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifier of the first entry named `name`, if any.
    pub fn id_of(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(AssetEntry::id)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a AssetEntry;
    type IntoIter = std::slice::Iter<'a, AssetEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_base_in_input_order() {
        let registry = Registry::build(["image1.png", "sound2.wav", "fonts/large.ttf"]);
        let pairs: Vec<(&str, u32)> = registry.iter().map(|e| (e.name(), e.id())).collect();
        assert_eq!(
            pairs,
            vec![
                ("image1.png", 300),
                ("sound2.wav", 301),
                ("fonts/large.ttf", 302)
            ]
        );
    }

    #[test]
    fn empty_input_yields_empty_registry() {
        let registry = Registry::build(Vec::<String>::new());
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry, Registry::default());
    }

    #[test]
    fn duplicates_get_distinct_ids() {
        let registry = Registry::build(["a.png", "a.png"]);
        let ids: Vec<u32> = registry.iter().map(AssetEntry::id).collect();
        assert_eq!(ids, vec![300, 301]);
        assert_eq!(registry.id_of("a.png"), Some(300));
    }

    #[test]
    fn large_input_keeps_invariant() {
        let names: Vec<String> = (0..1000).map(|i| format!("asset_{i}.png")).collect();
        let registry = Registry::build(names.clone());
        assert_eq!(registry.len(), names.len());
        for (index, (entry, name)) in registry.iter().zip(&names).enumerate() {
            assert_eq!(entry.name(), name);
            assert_eq!(u64::from(entry.id()), u64::from(BASE_ID) + index as u64);
        }
    }

    #[test]
    fn id_of_unknown_name_is_none() {
        let registry = Registry::build(["logo.png"]);
        assert_eq!(registry.id_of("missing.png"), None);
    }
}
