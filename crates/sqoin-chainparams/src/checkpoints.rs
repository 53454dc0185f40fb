use crate::error::{ChainError, ErrorCode};
use crate::hash::Hash256;

/// Hardcoded (height, hash) pairs. A node refuses an alternate block at a
/// checkpointed height, nothing more; this is a denial-of-service defense,
/// not a validity proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkpoints {
    entries: Vec<(u32, Hash256)>,
}

impl Checkpoints {
    /// Entries must be strictly increasing by height.
    pub fn from_entries(entries: Vec<(u32, Hash256)>) -> Result<Self, ChainError> {
        for w in entries.windows(2) {
            if w[0].0 >= w[1].0 {
                return Err(ChainError::new(
                    ErrorCode::ChainErrBadCheckpoints,
                    "checkpoint heights must strictly increase",
                ));
            }
        }
        Ok(Self { entries })
    }

    pub fn hash_at(&self, height: u32) -> Option<&Hash256> {
        self.entries
            .iter()
            .find(|(h, _)| *h == height)
            .map(|(_, hash)| hash)
    }

    pub fn last(&self) -> Option<&(u32, Hash256)> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[(u32, Hash256)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
