//! Error types for the activity registry.

use thiserror::Error;

/// Result type alias using [`ActivityError`].
pub type Result<T> = std::result::Result<T, ActivityError>;

#[derive(Error, Debug)]
pub enum ActivityError {
    /// No activity is registered under the requested name.
    #[error("Activity not found")]
    NotFound {
        /// The requested activity name.
        activity: String,
    },

    #[error("Student already signed up for this activity")]
    AlreadySignedUp { activity: String, student_email: String },

    #[error("Activity is full")]
    ActivityFull { activity: String, max_participants: u32 },

    #[error("Student not signed up for this activity")]
    NotSignedUp { activity: String, student_email: String },

    /// Request carried no usable student email.
    #[error("Student email is required")]
    MissingEmail,

    /// Seed data violates a registry invariant.
    #[error("Invalid seed for {activity}: {message}")]
    InvalidSeed { activity: String, message: String },

    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Json(#[from] serde_json::Error),
}

impl ActivityError {
    pub fn not_found(activity: impl Into<String>) -> Self {
        Self::NotFound {
            activity: activity.into(),
        }
    }

    pub fn invalid_seed(activity: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSeed {
            activity: activity.into(),
            message: message.into(),
        }
    }
}
