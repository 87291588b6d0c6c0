use std::str::FromStr;

use serde_json::{json, Value};
use thiserror::Error;

use crate::models::Activity;

/// Selects what a projection extracts from an [`Activity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityField {
    Description,
    Schedule,
    MaxParticipants,
    Participants,
    /// The whole record.
    Details,
}

impl ActivityField {
    pub fn project(self, activity: &Activity) -> Value {
        match self {
            ActivityField::Description => Value::from(activity.description.as_str()),
            ActivityField::Schedule => Value::from(activity.schedule.as_str()),
            ActivityField::MaxParticipants => Value::from(activity.max_participants),
            ActivityField::Participants => Value::from(activity.participants.clone()),
            ActivityField::Details => json!({
                "description": activity.description,
                "schedule": activity.schedule,
                "max_participants": activity.max_participants,
                "participants": activity.participants,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown activity field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ActivityField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "description" => Ok(ActivityField::Description),
            "schedule" => Ok(ActivityField::Schedule),
            "max_participants" => Ok(ActivityField::MaxParticipants),
            "participants" => Ok(ActivityField::Participants),
            "details" => Ok(ActivityField::Details),
            other => Err(UnknownField(other.to_string())),
        }
    }
}
