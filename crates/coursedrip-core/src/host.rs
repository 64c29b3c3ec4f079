//! Collaborator contracts supplied by the host system.
//!
//! The drip filter owns no data. Everything it consults -- post kinds, drip
//! metadata, the lesson/quiz back-reference, access decisions, settings and
//! the per-request display context -- comes through the traits defined here.
//! [`crate::store::InMemoryStore`] and [`crate::access::ScheduleAccessControl`]
//! are the bundled implementations; a host embedding the filter supplies its
//! own.

use chrono::{DateTime, Locale, Utc};

use crate::drip::DripMeta;
use crate::post::{PostId, PostKind, UserId};

/// Read access to the host's content and metadata store.
pub trait ContentStore {
    /// Kind of the post with the given id, or `None` if it does not exist.
    fn post_kind(&self, id: PostId) -> Option<PostKind>;

    /// Drip metadata stored against a quiz, or `None` when unset.
    fn drip_meta(&self, id: PostId) -> Option<DripMeta>;

    /// The lesson whose back-reference points at this quiz.
    ///
    /// Returns the first match; `None` is the not-found sentinel and flows
    /// through to the access-control call unchanged.
    fn lesson_for_quiz(&self, quiz_id: PostId) -> Option<PostId>;
}

/// Per-user access decisions, computed fresh on every call.
pub trait AccessControl {
    /// Whether the current user's access to the lesson is drip-blocked.
    fn is_lesson_access_blocked(&self, lesson_id: Option<PostId>) -> bool;

    /// The date at which the lesson becomes available to the user.
    ///
    /// For dynamic drips this is typically enrollment time plus the
    /// configured offset. `None` when no date can be computed.
    fn lesson_drip_date(&self, lesson_id: Option<PostId>, user_id: UserId)
        -> Option<DateTime<Utc>>;
}

/// Key/value settings lookup.
pub trait SettingsProvider {
    /// Configured value for the key, or `None` when unset or empty.
    fn get_setting(&self, key: &str) -> Option<String>;
}

/// Display context for a single request.
///
/// Resolved once when the filter is constructed and discarded with it at the
/// end of the request cycle.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// User the content is being resolved for.
    pub user_id: UserId,
    /// Administrative contexts bypass the filter entirely.
    pub is_admin: bool,
    /// Host-wide date display format (strftime syntax).
    pub date_format: String,
    /// Display locale used when formatting dynamic drip dates.
    pub locale: Locale,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            user_id: 0,
            is_admin: false,
            date_format: "%B %-d, %Y".to_string(),
            locale: Locale::en_US,
        }
    }
}

impl RequestContext {
    /// Context for the given user with default display settings.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }
}
