use crate::models::Block;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, thiserror::Error)]
pub enum BlockMapError {
    #[error("Failed to parse block map: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Block map key '{key}' does not match block id '{id}'")]
    KeyMismatch { key: String, id: String },
    #[error("Block '{0}' has an empty type")]
    EmptyType(String),
}

/// Map entry as delivered by the document source. `role` is an access
/// permission (e.g. "reader") and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub role: String,
    pub value: Block,
}

/// All blocks of one document, keyed by block id.
///
/// Stored ordered by id so that walks are deterministic regardless of the
/// order the source delivered them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockMap(BTreeMap<String, BlockRecord>);

impl BlockMap {
    /// Parse and validate a JSON block map
    pub fn from_json(json: &str) -> Result<Self, BlockMapError> {
        let map: BlockMap = serde_json::from_str(json)?;
        map.validate()?;
        Ok(map)
    }

    /// Build a map from blocks, each wrapped with the "reader" role
    pub fn from_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        Self(
            blocks
                .into_iter()
                .map(|value| {
                    (
                        value.id.clone(),
                        BlockRecord {
                            role: "reader".to_string(),
                            value,
                        },
                    )
                })
                .collect(),
        )
    }

    fn validate(&self) -> Result<(), BlockMapError> {
        for (key, record) in &self.0 {
            if *key != record.value.id {
                return Err(BlockMapError::KeyMismatch {
                    key: key.clone(),
                    id: record.value.id.clone(),
                });
            }
            if record.value.block_type.is_empty() {
                return Err(BlockMapError::EmptyType(key.clone()));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.0.get(id).map(|record| &record.value)
    }

    pub fn record(&self, id: &str) -> Option<&BlockRecord> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over every block, dead ones included, in id order
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.values().map(|record| &record.value)
    }

    /// Live blocks whose parent is not part of this map
    pub fn roots(&self) -> Vec<&Block> {
        self.iter()
            .filter(|block| block.alive)
            .filter(|block| block.parent_id == block.id || !self.0.contains_key(&block.parent_id))
            .collect()
    }

    /// Live children of `block`.
    ///
    /// Follows the block's `content` list when present, otherwise collects
    /// blocks pointing at it through `parent_id`.
    pub fn children(&self, block: &Block) -> Vec<&Block> {
        match &block.content {
            Some(ids) => ids
                .iter()
                .filter_map(|id| self.get(id))
                .filter(|child| child.alive && child.id != block.id)
                .collect(),
            None => self
                .iter()
                .filter(|child| child.alive && child.parent_id == block.id && child.id != block.id)
                .collect(),
        }
    }

    /// Depth-first pre-order over live blocks, each visited at most once.
    ///
    /// Uses an explicit stack, so nesting depth is bounded by memory rather
    /// than by the call stack. Live blocks the walk cannot reach are logged.
    pub fn walk(&self) -> Vec<&Block> {
        let (order, visited) = self.walk_with_visited();
        for block in self.unreached(&visited) {
            log::warn!(
                "Block {} of type '{}' is not reachable from any root",
                block.id,
                block.block_type
            );
        }
        order
    }

    /// Live blocks that no walk from the roots reaches, typically members of
    /// a `parent_id` cycle. Blocks under a dead ancestor are excluded on
    /// purpose and are not reported here.
    pub fn unreachable(&self) -> Vec<&Block> {
        let (_, visited) = self.walk_with_visited();
        self.unreached(&visited)
    }

    fn walk_with_visited(&self) -> (Vec<&Block>, HashSet<&str>) {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut stack: Vec<&Block> = self.roots().into_iter().rev().collect();

        while let Some(block) = stack.pop() {
            if !visited.insert(block.id.as_str()) {
                continue;
            }
            order.push(block);
            stack.extend(self.children(block).into_iter().rev());
        }

        (order, visited)
    }

    fn unreached(&self, visited: &HashSet<&str>) -> Vec<&Block> {
        self.iter()
            .filter(|block| block.alive && !visited.contains(block.id.as_str()))
            .filter(|block| !self.has_dead_ancestor(block))
            .collect()
    }

    fn has_dead_ancestor<'a>(&'a self, block: &'a Block) -> bool {
        let mut seen = HashSet::new();
        let mut current = block;
        while seen.insert(current.id.as_str()) {
            match self.get(&current.parent_id) {
                Some(parent) if !parent.alive => return true,
                Some(parent) => current = parent,
                None => return false,
            }
        }
        false
    }
}
