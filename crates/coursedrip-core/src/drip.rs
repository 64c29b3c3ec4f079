//! Drip metadata attached to quizzes.

use serde::{Deserialize, Serialize};

/// Scheduling strategy for a dripped quiz.
///
/// The drip type deterministically selects the message strategy used when
/// the quiz is blocked; any value other than `absolute` or `dynamic` yields
/// no message at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DripType {
    /// Not dripped; always available.
    #[default]
    None,
    /// Released on a fixed calendar date, the same for every user.
    Absolute,
    /// Released relative to each user's enrollment date.
    Dynamic,
}

impl DripType {
    /// Metadata tag for this drip type.
    pub fn as_str(self) -> &'static str {
        match self {
            DripType::None => "none",
            DripType::Absolute => "absolute",
            DripType::Dynamic => "dynamic",
        }
    }
}

/// Drip metadata stored against a quiz.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DripMeta {
    /// Scheduling strategy.
    #[serde(default)]
    pub drip_type: DripType,
    /// Raw release date for absolute drips. Accepted encodings: RFC 3339,
    /// `YYYY-MM-DD` (midnight UTC), or a unix timestamp.
    #[serde(default)]
    pub drip_date: Option<String>,
    /// Days after enrollment for dynamic drips.
    #[serde(default)]
    pub offset_days: Option<i64>,
}

impl DripMeta {
    /// Metadata for an absolute drip releasing on the given raw date value.
    pub fn absolute(drip_date: impl Into<String>) -> Self {
        Self {
            drip_type: DripType::Absolute,
            drip_date: Some(drip_date.into()),
            offset_days: None,
        }
    }

    /// Metadata for a dynamic drip releasing `offset_days` after enrollment.
    pub fn dynamic(offset_days: i64) -> Self {
        Self {
            drip_type: DripType::Dynamic,
            drip_date: None,
            offset_days: Some(offset_days),
        }
    }
}
