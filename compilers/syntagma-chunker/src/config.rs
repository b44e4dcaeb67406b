use syntagma_protocol::{RoleTable, TagSet};

/// Tables driving the chunker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkerConfig {
    /// Dependency label -> role of the chunk it heads.
    pub roles: RoleTable,
    /// Part-of-speech tags that make a root start a verb chunk.
    pub verb_tags: TagSet,
    /// Labels folded into the verb chunk of their head.
    pub auxiliaries: TagSet,
}

impl ChunkerConfig {
    /// The French annotation scheme of the analyzer.
    pub fn french() -> Self {
        Self {
            roles: RoleTable::french(),
            verb_tags: TagSet::french_verbs(),
            auxiliaries: TagSet::french_auxiliaries(),
        }
    }

    pub fn with_roles(mut self, roles: RoleTable) -> Self {
        self.roles = roles;
        self
    }

    pub fn with_verb_tags(mut self, verb_tags: TagSet) -> Self {
        self.verb_tags = verb_tags;
        self
    }

    pub fn with_auxiliaries(mut self, auxiliaries: TagSet) -> Self {
        self.auxiliaries = auxiliaries;
        self
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self::french()
    }
}
