//! In-memory content store and JSON fixture loading.
//!
//! The bundled [`ContentStore`] implementation backing the CLI and the
//! integration tests. A [`ContentFixture`] is the JSON-serializable bundle
//! of posts, drip metadata, lesson/quiz links and enrollments the CLI loads
//! from disk.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::drip::DripMeta;
use crate::error::Result;
use crate::host::ContentStore;
use crate::post::{Post, PostId, PostKind, UserId};

/// A user's enrollment in a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub user_id: UserId,
    pub lesson_id: PostId,
    /// When the user enrolled; dynamic drips release relative to this.
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}

/// In-memory content and metadata store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    posts: Vec<Post>,
    drip: BTreeMap<PostId, DripMeta>,
    /// lesson id -> quiz id back-reference.
    lesson_quiz: BTreeMap<PostId, PostId>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a post.
    pub fn add_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Attach drip metadata to a quiz.
    pub fn set_drip_meta(&mut self, quiz_id: PostId, meta: DripMeta) {
        self.drip.insert(quiz_id, meta);
    }

    /// Record that a lesson owns a quiz.
    pub fn link_lesson_quiz(&mut self, lesson_id: PostId, quiz_id: PostId) {
        self.lesson_quiz.insert(lesson_id, quiz_id);
    }

    /// The quiz owned by a lesson, if any.
    pub fn quiz_for_lesson(&self, lesson_id: PostId) -> Option<PostId> {
        self.lesson_quiz.get(&lesson_id).copied()
    }

    /// All posts, in insertion order.
    pub fn posts(&self) -> Vec<Post> {
        self.posts.clone()
    }

    /// Look up a post by id.
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }
}

impl ContentStore for InMemoryStore {
    fn post_kind(&self, id: PostId) -> Option<PostKind> {
        self.post(id).map(|p| p.kind)
    }

    fn drip_meta(&self, id: PostId) -> Option<DripMeta> {
        self.drip.get(&id).cloned()
    }

    fn lesson_for_quiz(&self, quiz_id: PostId) -> Option<PostId> {
        // First match wins when duplicate back-references exist.
        self.lesson_quiz
            .iter()
            .find(|(_, quiz)| **quiz == quiz_id)
            .map(|(lesson, _)| *lesson)
    }
}

/// JSON-serializable content bundle for the CLI and tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFixture {
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Drip metadata keyed by quiz id.
    #[serde(default)]
    pub drip: BTreeMap<PostId, DripMeta>,
    /// Lesson id -> quiz id back-references.
    #[serde(default)]
    pub lesson_quiz: BTreeMap<PostId, PostId>,
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
}

impl ContentFixture {
    /// Load a fixture from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Split into a content store and the enrollment records.
    pub fn into_parts(self) -> (InMemoryStore, Vec<Enrollment>) {
        let store = InMemoryStore {
            posts: self.posts,
            drip: self.drip,
            lesson_quiz: self.lesson_quiz,
        };
        (store, self.enrollments)
    }
}
