use serde::{Deserialize, Serialize};
use yi_document::Id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarPoint {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub construction: Vec<String>,
}

/// A user-defined label attached to dictionary entries by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryTag {
    pub id: Id,
    pub name: String,
    pub lang: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grammar_point: Option<GrammarPoint>,
}

impl DictionaryTag {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            lang: lang.into(),
            color: None,
            grammar_point: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_grammar_point(mut self, point: GrammarPoint) -> Self {
        self.grammar_point = Some(point);
        self
    }
}
