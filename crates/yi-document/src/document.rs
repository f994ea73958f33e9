//! Documents: ordered blocks plus selection addressing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::block::DocumentBlock;
use crate::error::DocumentError;
use crate::fragment::{Fragment, FragmentKind};
use crate::fragmentable::Fragmentable;
use crate::id::Id;
use crate::range::Range;

/// A range selected inside one fragmentable of one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSelection {
    pub block_id: Id,
    pub fragmentable_id: Id,
    pub fragmentable_range: Range,
}

/// Address of one fragment inside a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentIdentifier {
    pub block_id: Id,
    pub fragmentable_id: Id,
    pub fragment_id: Id,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub id: Id,
    #[serde(default)]
    pub blocks: Vec<DocumentBlock>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_block(&mut self, block: DocumentBlock) -> &Id {
        self.blocks.push(block);
        &self.blocks[self.blocks.len() - 1].id
    }

    /// Blocks sorted by `position`; ties keep insertion order.
    pub fn blocks_in_order(&self) -> Vec<&DocumentBlock> {
        let mut blocks: Vec<&DocumentBlock> = self.blocks.iter().collect();
        blocks.sort_by_key(|b| b.position);
        blocks
    }

    pub fn block(&self, id: &Id) -> Result<&DocumentBlock, DocumentError> {
        self.blocks
            .iter()
            .find(|b| &b.id == id)
            .ok_or_else(|| DocumentError::BlockNotFound(id.clone()))
    }

    pub fn block_mut(&mut self, id: &Id) -> Result<&mut DocumentBlock, DocumentError> {
        self.blocks
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| DocumentError::BlockNotFound(id.clone()))
    }

    pub fn fragmentable(&self, block_id: &Id, fragmentable_id: &Id) -> Result<&Fragmentable, DocumentError> {
        self.block(block_id)?
            .fragmentable(fragmentable_id)
            .ok_or_else(|| DocumentError::FragmentableNotFound(fragmentable_id.clone()))
    }

    pub fn fragmentable_mut(
        &mut self,
        block_id: &Id,
        fragmentable_id: &Id,
    ) -> Result<&mut Fragmentable, DocumentError> {
        self.block_mut(block_id)?
            .fragmentable_mut(fragmentable_id)
            .ok_or_else(|| DocumentError::FragmentableNotFound(fragmentable_id.clone()))
    }

    /// Create a fragment of `kind` over `selection` and push it into the
    /// selected fragmentable. Returns the new fragment's address.
    pub fn annotate(
        &mut self,
        selection: &DocumentSelection,
        kind: FragmentKind,
    ) -> Result<DocumentIdentifier, DocumentError> {
        let fragment = Fragment::new(kind, selection.fragmentable_range);
        let fragment_id = fragment.id.clone();
        self.fragmentable_mut(&selection.block_id, &selection.fragmentable_id)?
            .push_fragment(fragment)?;
        debug!(
            block = %selection.block_id,
            fragmentable = %selection.fragmentable_id,
            fragment = %fragment_id,
            "annotated selection"
        );
        Ok(DocumentIdentifier {
            block_id: selection.block_id.clone(),
            fragmentable_id: selection.fragmentable_id.clone(),
            fragment_id,
        })
    }

    pub fn fragment(&self, at: &DocumentIdentifier) -> Result<&Fragment, DocumentError> {
        self.fragmentable(&at.block_id, &at.fragmentable_id)?
            .fragment(&at.fragment_id)
            .ok_or_else(|| DocumentError::FragmentNotFound(at.fragment_id.clone()))
    }

    pub fn remove_annotation(&mut self, at: &DocumentIdentifier) -> Result<(), DocumentError> {
        self.fragmentable_mut(&at.block_id, &at.fragmentable_id)?
            .remove_fragment(&at.fragment_id)
    }
}
