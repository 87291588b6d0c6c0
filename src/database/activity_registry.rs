use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value};

use crate::error::{ActivityError, Result};
use crate::models::{Activity, ActivityField};

struct ActivityEntry {
    name: String,
    activity: RwLock<Activity>,
}

/// In-memory store of all activities, keyed by name.
///
/// Membership is fixed once built, so only the records themselves are
/// guarded: each activity has its own lock, reads share it and
/// signup/unsignup take it exclusively for the whole check-then-mutate step.
pub struct ActivityRegistry {
    entries: Vec<ActivityEntry>,
    index: HashMap<String, usize>,
}

// A panic while holding a guard cannot leave a record half-written (every
// mutation is a single push or remove), so poisoned locks are recovered.
fn read(lock: &RwLock<Activity>) -> RwLockReadGuard<'_, Activity> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(lock: &RwLock<Activity>) -> RwLockWriteGuard<'_, Activity> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn validate(name: &str, activity: &Activity) -> Result<()> {
    if activity.max_participants == 0 {
        return Err(ActivityError::invalid_seed(
            name,
            "max_participants must be positive",
        ));
    }
    if activity.participants.len() > activity.max_participants as usize {
        return Err(ActivityError::invalid_seed(
            name,
            format!(
                "{} participants exceed capacity {}",
                activity.participants.len(),
                activity.max_participants
            ),
        ));
    }
    for (i, email) in activity.participants.iter().enumerate() {
        if activity.participants[..i].contains(email) {
            return Err(ActivityError::invalid_seed(
                name,
                format!("duplicate participant {}", email),
            ));
        }
    }
    Ok(())
}

impl ActivityRegistry {
    /// Builds a registry from `(name, record)` pairs, keeping their order.
    pub fn from_seed<I>(seed: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        for (name, activity) in seed {
            validate(&name, &activity)?;
            if index.contains_key(&name) {
                return Err(ActivityError::invalid_seed(name, "duplicate activity name"));
            }
            index.insert(name.clone(), entries.len());
            entries.push(ActivityEntry {
                name,
                activity: RwLock::new(activity),
            });
        }
        Ok(Self { entries, index })
    }

    fn entry(&self, name: &str) -> Result<&ActivityEntry> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| ActivityError::not_found(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns a copy of the named record.
    pub fn lookup(&self, name: &str) -> Result<Activity> {
        let entry = self.entry(name)?;
        let activity = read(&entry.activity);
        Ok(activity.clone())
    }

    pub fn list_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Maps every activity name to `field` of its record.
    pub fn project(&self, field: ActivityField) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|e| (e.name.clone(), field.project(&read(&e.activity))))
            .collect()
    }

    pub fn project_one(&self, name: &str, field: ActivityField) -> Result<Value> {
        let entry = self.entry(name)?;
        let activity = read(&entry.activity);
        Ok(field.project(&activity))
    }

    /// Adds `student_email` to the roster and returns the new roster size.
    ///
    /// Checks run in a fixed order: existence, then membership, then
    /// capacity. A student already on a full roster gets `AlreadySignedUp`.
    pub fn signup(&self, name: &str, student_email: &str) -> Result<usize> {
        let entry = self.entry(name)?;
        let mut activity = write(&entry.activity);
        if activity.is_signed_up(student_email) {
            return Err(ActivityError::AlreadySignedUp {
                activity: entry.name.clone(),
                student_email: student_email.to_string(),
            });
        }
        if activity.is_full() {
            return Err(ActivityError::ActivityFull {
                activity: entry.name.clone(),
                max_participants: activity.max_participants,
            });
        }
        activity.participants.push(student_email.to_string());
        Ok(activity.participants.len())
    }

    /// Removes `student_email` from the roster and returns the new roster size.
    pub fn unsignup(&self, name: &str, student_email: &str) -> Result<usize> {
        let entry = self.entry(name)?;
        let mut activity = write(&entry.activity);
        let Some(pos) = activity.participants.iter().position(|p| p == student_email) else {
            return Err(ActivityError::NotSignedUp {
                activity: entry.name.clone(),
                student_email: student_email.to_string(),
            });
        };
        activity.participants.remove(pos);
        Ok(activity.participants.len())
    }
}
