//! Error taxonomy for typn-core (made by FontLab https://www.fontlab.com/)

use thiserror::Error;

/// Failure reported by the underlying font collection.
///
/// This is the conversion boundary with the platform: backends fold their
/// native status values into `message` plus an optional raw `code`, and
/// nothing above the [`crate::collection`] traits ever inspects the
/// platform representation directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PlatformError {
    message: String,
    code: Option<i32>,
}

impl PlatformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Attach the backend's native status value.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code: Some(code),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

/// Terminal outcome of extracting one font family.
///
/// Every variant aborts exactly one family and nothing is retried; the
/// dispatcher counts failed families and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyError {
    /// The platform failed to hand back the family or one of its handles.
    #[error("family acquisition failed: {0}")]
    FamilyAcquisitionFailed(#[from] PlatformError),

    /// The family's name table resolves under no locale at all.
    #[error("family has no usable name")]
    NoFamilyName,

    /// A font lacks a required informational string table, or the table
    /// exists but resolves under no fallback.
    #[error("font has no usable full name or PostScript name")]
    NoFullNameOrPostScriptName,
}
