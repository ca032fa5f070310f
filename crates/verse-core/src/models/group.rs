use serde::{Deserialize, Serialize};

/// One group of the source dataset (a chapter of verses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub number: u32,
    pub name: String,
    /// Ordered text lines. Absent or `null` content contributes nothing.
    #[serde(default)]
    pub content: Option<Vec<String>>,
}

impl Group {
    pub fn new(number: u32, name: impl Into<String>, content: Vec<String>) -> Self {
        Self {
            number,
            name: name.into(),
            content: Some(content),
        }
    }

    /// Lines of this group, empty when content is absent.
    pub fn lines(&self) -> &[String] {
        self.content.as_deref().unwrap_or_default()
    }
}
