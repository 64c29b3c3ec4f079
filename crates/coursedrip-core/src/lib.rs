//! # Coursedrip Core Library
//!
//! This library implements scheduled ("drip") release of quiz content for a
//! learning-management system. Quizzes stay hidden until their owning
//! lesson's release date; until then the quiz's content and excerpt are
//! replaced by a configurable availability notice.
//!
//! ## Architecture
//!
//! - **Quiz Drip Filter**: a per-request transform over the host's resolved
//!   result set, replacing blocked quiz content with a drip notice
//! - **Collaborator traits**: content store, access control and settings are
//!   host-supplied seams; bundled in-memory implementations back the CLI
//!   and tests
//! - **Messages**: one template with a `[date]` placeholder, resolved once
//!   per request, rendered via an absolute (fixed calendar date) or dynamic
//!   (enrollment-relative) strategy
//! - **Config**: TOML-based template and display settings
//!
//! ## Key Components
//!
//! - [`QuizDripFilter`]: the filter itself
//! - [`ContentStore`] / [`AccessControl`] / [`SettingsProvider`]: host seams
//! - [`InMemoryStore`] / [`ScheduleAccessControl`]: bundled implementations
//! - [`DripConfig`]: configuration management

pub mod access;
pub mod config;
pub mod dates;
pub mod drip;
pub mod error;
pub mod filter;
pub mod host;
pub mod message;
pub mod post;
pub mod store;
pub mod text;

pub use access::ScheduleAccessControl;
pub use config::DripConfig;
pub use drip::{DripMeta, DripType};
pub use error::{ConfigError, DateError, DripError, Result};
pub use filter::QuizDripFilter;
pub use host::{AccessControl, ContentStore, RequestContext, SettingsProvider};
pub use message::{MessageTemplate, DEFAULT_QUIZ_MESSAGE, QUIZ_MESSAGE_SETTING};
pub use post::{Post, PostId, PostKind, RenderFlags, UserId};
pub use store::{ContentFixture, Enrollment, InMemoryStore};
