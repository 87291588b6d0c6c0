use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::database::ActivityRegistry;
use crate::error::{ActivityError, Result};
use crate::models::{Activity, ActivityField};

pub type SharedRegistry = Arc<ActivityRegistry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandMessage {
    pub message: String,
}

/// Resolves the activity before looking at the email, so an unknown
/// activity is `NotFound` whatever email was sent. The email is kept as sent.
fn resolve_email<'a>(
    registry: &ActivityRegistry,
    activity_name: &str,
    student_email: Option<&'a str>,
) -> Result<&'a str> {
    if !registry.contains(activity_name) {
        return Err(ActivityError::not_found(activity_name));
    }
    student_email
        .filter(|e| !e.trim().is_empty())
        .ok_or(ActivityError::MissingEmail)
}

pub fn get_activity(registry: &ActivityRegistry, name: &str) -> Result<Activity> {
    registry.lookup(name)
}

pub fn list_activity_names(registry: &ActivityRegistry) -> Vec<String> {
    registry.list_names()
}

/// Full `name -> record` listing.
pub fn list_activities(registry: &ActivityRegistry) -> Map<String, Value> {
    registry.project(ActivityField::Details)
}

pub fn project_all(registry: &ActivityRegistry, field: ActivityField) -> Map<String, Value> {
    registry.project(field)
}

pub fn project_one(registry: &ActivityRegistry, name: &str, field: ActivityField) -> Result<Value> {
    registry.project_one(name, field)
}

pub fn sign_up(
    registry: &ActivityRegistry,
    activity_name: &str,
    student_email: Option<&str>,
) -> Result<CommandMessage> {
    let email = resolve_email(registry, activity_name, student_email)?;
    match registry.signup(activity_name, email) {
        Ok(count) => {
            info!(activity = %activity_name, student_email = %email, participants = count, "signup accepted");
            Ok(CommandMessage {
                message: format!("Successfully signed up for {}", activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, student_email = %email, reason = %e, "signup rejected");
            Err(e)
        }
    }
}

pub fn withdraw(
    registry: &ActivityRegistry,
    activity_name: &str,
    student_email: Option<&str>,
) -> Result<CommandMessage> {
    let email = resolve_email(registry, activity_name, student_email)?;
    match registry.unsignup(activity_name, email) {
        Ok(count) => {
            info!(activity = %activity_name, student_email = %email, participants = count, "unsignup accepted");
            Ok(CommandMessage {
                message: format!("Successfully unsignup from {}", activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, student_email = %email, reason = %e, "unsignup rejected");
            Err(e)
        }
    }
}
