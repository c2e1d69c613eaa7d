// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable failure messages for people photographing their receipts.
//
// Photo problems get a plain explanation and a concrete suggestion. Internal
// problems get a generic message; the detail goes to the log only.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::TickscanError;
use crate::types::ResponseStatus;

/// Status code for failures the caller can fix with a new photo.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// Status code for everything else.
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Severity of a failure from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User must retake or re-upload the photo.
    ActionRequired,
    /// Nothing the user did; needs a developer.
    Internal,
}

/// A failure with a plain English message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Severity level.
    pub severity: Severity,
}

/// Convert a `TickscanError` into a `HumanError`.
pub fn humanize_error(err: &TickscanError) -> HumanError {
    match err {
        TickscanError::Decode(_) => HumanError {
            message: "We couldn't read that photo.".into(),
            suggestion: "Please upload the picture again as a JPEG or PNG.".into(),
            severity: Severity::ActionRequired,
        },

        TickscanError::NoReceiptDetected => HumanError {
            message: "Could not detect the receipt.".into(),
            suggestion: "Retake the photo and make sure the receipt is visible and well lit.".into(),
            severity: Severity::ActionRequired,
        },

        TickscanError::ReceiptTooSmall { .. } => HumanError {
            message: "The receipt is too small in the photo.".into(),
            suggestion: "Move closer so the receipt fills the frame, then try again.".into(),
            severity: Severity::ActionRequired,
        },

        TickscanError::InvalidLayout(_)
        | TickscanError::InvalidRaster { .. }
        | TickscanError::InvalidConfig(_)
        | TickscanError::Unexpected(_)
        | TickscanError::Io(_)
        | TickscanError::Serialization(_) => HumanError {
            message: "Something went wrong while analyzing the receipt.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            severity: Severity::Internal,
        },
    }
}

/// The `{status: "error", message}` failure object handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    pub status: ResponseStatus,
    pub message: String,
    /// HTTP-like code: 400 for photo problems, 500 for internal ones.
    #[serde(skip)]
    pub status_code: u16,
}

impl FailureResponse {
    /// Build the failure object for `err`. Internal failures are logged with
    /// full detail; the caller only sees a generic message.
    pub fn from_error(err: &TickscanError) -> Self {
        let human = humanize_error(err);
        let status_code = if err.is_user_actionable() {
            STATUS_BAD_REQUEST
        } else {
            error!(error = %err, "Receipt analysis failed unexpectedly");
            STATUS_INTERNAL_ERROR
        };
        Self {
            status: ResponseStatus::Error,
            message: format!("{} {}", human.message, human.suggestion),
            status_code,
        }
    }
}

impl From<&TickscanError> for FailureResponse {
    fn from(err: &TickscanError) -> Self {
        Self::from_error(err)
    }
}
