//! Fixed linguistic tables of the French annotation scheme.
//!
//! The tables are plain immutable values. Consumers own a copy (usually
//! through the chunker configuration) instead of reading module state.

use std::collections::{BTreeSet, HashMap};

use crate::roles::ChunkRole;

const FRENCH_ROLES: &[(&str, ChunkRole)] = &[
    ("mod", ChunkRole::Context),
    ("suj", ChunkRole::Subject),
    ("obj", ChunkRole::Object),
    ("coord", ChunkRole::Coordination),
    ("ponct", ChunkRole::Unknown),
    ("aff", ChunkRole::Verb),
    ("ats", ChunkRole::Verb),
    ("ato", ChunkRole::Verb),
    ("p_obj", ChunkRole::Object),
    ("a_obj", ChunkRole::Object),
    ("mod_rel", ChunkRole::Context),
    ("prep", ChunkRole::Object),
    ("root", ChunkRole::Object),
    ("dep", ChunkRole::Object),
    ("det", ChunkRole::Subject),
];

/// Finite, participle, subjunctive, present participle and imperative tags.
const FRENCH_VERB_TAGS: &[&str] = &["V", "VPP", "VS", "VPR", "VIMP"];

/// Labels linking an auxiliary (tense, passive, causative) to its verb.
const FRENCH_AUXILIARY_LABELS: &[&str] = &["aux_tps", "aux_pass", "aux_caus"];

/// Dependency label -> chunk role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleTable {
    entries: HashMap<String, ChunkRole>,
}

impl RoleTable {
    pub fn french() -> Self {
        FRENCH_ROLES.iter().map(|&(label, role)| (label, role)).collect()
    }

    pub fn lookup(&self, label: &str) -> Option<ChunkRole> {
        self.entries.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        Self::french()
    }
}

impl<S: Into<String>> FromIterator<(S, ChunkRole)> for RoleTable {
    fn from_iter<I: IntoIterator<Item = (S, ChunkRole)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(label, role)| (label.into(), role)).collect(),
        }
    }
}

/// A closed set of tags or labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet {
    tags: BTreeSet<String>,
}

impl TagSet {
    pub fn french_verbs() -> Self {
        FRENCH_VERB_TAGS.iter().copied().collect()
    }

    pub fn french_auxiliaries() -> Self {
        FRENCH_AUXILIARY_LABELS.iter().copied().collect()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_role_table() {
        let table = RoleTable::french();
        assert_eq!(table.len(), 15);
        assert_eq!(table.lookup("suj"), Some(ChunkRole::Subject));
        assert_eq!(table.lookup("det"), Some(ChunkRole::Subject));
        assert_eq!(table.lookup("p_obj"), Some(ChunkRole::Object));
        assert_eq!(table.lookup("mod_rel"), Some(ChunkRole::Context));
        assert_eq!(table.lookup("ponct"), Some(ChunkRole::Unknown));
        assert_eq!(table.lookup("ato"), Some(ChunkRole::Verb));
        // Auxiliaries are folded into verb chunks, never looked up.
        assert_eq!(table.lookup("aux_tps"), None);
        assert_eq!(table.lookup("xyz"), None);
    }

    #[test]
    fn french_tag_sets() {
        let verbs = TagSet::french_verbs();
        assert!(verbs.contains("V"));
        assert!(verbs.contains("VIMP"));
        assert!(!verbs.contains("VINF"));
        assert!(!verbs.contains("NC"));

        let aux = TagSet::french_auxiliaries();
        assert_eq!(aux.iter().collect::<Vec<_>>(), vec!["aux_caus", "aux_pass", "aux_tps"]);
    }
}
