//! Post model shared across the crate.
//!
//! A [`Post`] is the in-memory representation of a content item as handed to
//! the drip filter by the host's query pipeline. The filter mutates only the
//! copy passing through it; nothing here touches a persistent store.
//!
//! Rendering suppression is carried per item in [`RenderFlags`] rather than
//! as a request-global toggle, so hiding one blocked quiz's questions leaves
//! every other item in the result set untouched.

use serde::{Deserialize, Serialize};

/// Unique identifier for a content item.
pub type PostId = u64;

/// Unique identifier for a user.
pub type UserId = u64;

/// Content kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    /// A quiz attached to a lesson
    Quiz,
    /// A lesson; owns at most one quiz via a back-reference
    Lesson,
    /// Any other content kind the query pipeline may return
    Other,
}

/// Per-item rendering capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderFlags {
    /// Render the quiz question list.
    #[serde(default = "default_true")]
    pub show_questions: bool,
    /// Render pagination and quiz action buttons.
    #[serde(default = "default_true")]
    pub show_pagination: bool,
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self {
            show_questions: true,
            show_pagination: true,
        }
    }
}

/// A content item flowing through the query pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier.
    pub id: PostId,
    /// Content kind.
    pub kind: PostKind,
    /// Displayable body markup.
    #[serde(default)]
    pub content: String,
    /// Short excerpt markup; may be empty.
    #[serde(default)]
    pub excerpt: String,
    /// Rendering capabilities for this item.
    #[serde(default)]
    pub render: RenderFlags,
}

impl Post {
    /// Create a post with empty content and excerpt.
    pub fn new(id: PostId, kind: PostKind) -> Self {
        Self {
            id,
            kind,
            content: String::new(),
            excerpt: String::new(),
            render: RenderFlags::default(),
        }
    }

    /// Set the body content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the excerpt.
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }
}

fn default_true() -> bool {
    true
}
