//! User-facing notices emitted by session operations.

use crate::error::ApiError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Danger,
    Info,
}

/// A leveled message for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }
}

impl From<&ApiError> for Notice {
    /// Rejected input is a warning; anything else is a failure.
    fn from(err: &ApiError) -> Self {
        let level = match err {
            ApiError::InvalidContact(_)
            | ApiError::DuplicateName(_)
            | ApiError::ContactNotFound(_) => NoticeLevel::Warning,
            _ => NoticeLevel::Danger,
        };
        Notice::new(level, err.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_levels() {
        let notice = Notice::from(&ApiError::DuplicateName("Ana".to_string()));
        assert_eq!(notice.level, NoticeLevel::Warning);

        let notice = Notice::from(&ApiError::Prompt("closed".to_string()));
        assert_eq!(notice.level, NoticeLevel::Danger);
    }

    #[test]
    fn test_serialize_level_lowercase() {
        let json = serde_json::to_string(&Notice::success("ok")).unwrap();
        assert_eq!(json, r#"{"level":"success","message":"ok"}"#);
    }
}
