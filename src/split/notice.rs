//! User-facing notices
//!
//! The library decides what to tell the user; front-ends decide how (toast,
//! status line, stderr).

use crate::split::error::SplitError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn separated() -> Self {
        Notice::success("Code separated successfully!")
    }

    pub fn cleared() -> Self {
        Notice::info("Workspace cleared.")
    }

    pub fn downloading_all() -> Self {
        Notice::info("Downloading all files...")
    }
}

impl From<&SplitError> for Notice {
    fn from(err: &SplitError) -> Self {
        Notice::error(err.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
