//! Document blocks and the fragmentables they own.

use serde::{Deserialize, Serialize};

use crate::fragmentable::Fragmentable;
use crate::id::Id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogLine {
    pub speaker: String,
    /// Id of the fragmentable holding the spoken text.
    pub speech: Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    Title,
    Paragraph,
    Dialog,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    Title {
        content: Id,
    },
    Paragraph {
        content: Id,
    },
    Dialog {
        lines: Vec<DialogLine>,
    },
    Image {
        source: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

impl BlockKind {
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockKind::Title { .. } => BlockType::Title,
            BlockKind::Paragraph { .. } => BlockType::Paragraph,
            BlockKind::Dialog { .. } => BlockType::Dialog,
            BlockKind::Image { .. } => BlockType::Image,
        }
    }
}

/// One block of a document. Text-bearing kinds point into
/// `fragmentables`, which the block owns exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentBlock {
    pub id: Id,
    pub position: u32,
    #[serde(default)]
    pub fragmentables: Vec<Fragmentable>,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl DocumentBlock {
    fn with_text(position: u32, text: String, kind: impl FnOnce(Id) -> BlockKind) -> Self {
        let fragmentable = Fragmentable::new(text);
        Self {
            id: Id::new(),
            position,
            kind: kind(fragmentable.id.clone()),
            fragmentables: vec![fragmentable],
        }
    }

    pub fn title(position: u32, text: impl Into<String>) -> Self {
        Self::with_text(position, text.into(), |content| BlockKind::Title { content })
    }

    pub fn paragraph(position: u32, text: impl Into<String>) -> Self {
        Self::with_text(position, text.into(), |content| BlockKind::Paragraph { content })
    }

    /// A dialog block from `(speaker, text)` pairs, one fragmentable per
    /// line.
    pub fn dialog<S, T>(position: u32, lines: impl IntoIterator<Item = (S, T)>) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        let (lines, fragmentables): (Vec<_>, Vec<_>) = lines
            .into_iter()
            .map(|(speaker, text)| {
                let speech = Fragmentable::new(text);
                let line = DialogLine {
                    speaker: speaker.into(),
                    speech: speech.id.clone(),
                };
                (line, speech)
            })
            .unzip();
        Self {
            id: Id::new(),
            position,
            fragmentables,
            kind: BlockKind::Dialog { lines },
        }
    }

    pub fn image(position: u32, source: impl Into<String>, title: Option<String>) -> Self {
        Self {
            id: Id::new(),
            position,
            fragmentables: Vec::new(),
            kind: BlockKind::Image {
                source: source.into(),
                title,
            },
        }
    }

    pub fn block_type(&self) -> BlockType {
        self.kind.block_type()
    }

    pub fn fragmentable(&self, id: &Id) -> Option<&Fragmentable> {
        self.fragmentables.iter().find(|f| &f.id == id)
    }

    pub fn fragmentable_mut(&mut self, id: &Id) -> Option<&mut Fragmentable> {
        self.fragmentables.iter_mut().find(|f| &f.id == id)
    }

    /// The main text of a title or paragraph block.
    pub fn content(&self) -> Option<&Fragmentable> {
        match &self.kind {
            BlockKind::Title { content } | BlockKind::Paragraph { content } => {
                self.fragmentable(content)
            }
            _ => None,
        }
    }
}
