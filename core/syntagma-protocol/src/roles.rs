use core::fmt;
use core::str::FromStr;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Phrase role carried by a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum ChunkRole {
    Subject = 0,
    Object = 1,
    Verb = 2,
    Context = 3,
    Coordination = 4,
    Unknown = 5,
}

impl ChunkRole {
    pub const ALL: [ChunkRole; 6] = [
        ChunkRole::Subject,
        ChunkRole::Object,
        ChunkRole::Verb,
        ChunkRole::Context,
        ChunkRole::Coordination,
        ChunkRole::Unknown,
    ];

    /// Short tag used in renderings and in the token's derived `type` feature.
    pub const fn tag(self) -> &'static str {
        match self {
            ChunkRole::Subject => "SUJ",
            ChunkRole::Object => "OBJ",
            ChunkRole::Verb => "VRB",
            ChunkRole::Context => "CONT",
            ChunkRole::Coordination => "COORD",
            ChunkRole::Unknown => "UNK",
        }
    }
}

impl fmt::Display for ChunkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoleTag(pub String);

impl fmt::Display for UnknownRoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown chunk role tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownRoleTag {}

impl FromStr for ChunkRole {
    type Err = UnknownRoleTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChunkRole::ALL
            .into_iter()
            .find(|role| role.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRoleTag(s.to_string()))
    }
}
