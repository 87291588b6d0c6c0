use std::fmt;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::Result;
use crate::models::Activity;

const DEFAULT_SEED: [(&str, &str, &str, u32, &[&str]); 9] = [
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the soccer team and compete in inter-school tournaments",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        25,
        &[],
    ),
    (
        "Basketball Team",
        "Practice basketball and participate in local competitions",
        "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
        20,
        &[],
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Wednesdays, 3:30 PM - 5:00 PM",
        15,
        &[],
    ),
    (
        "Drama Club",
        "Learn acting skills and perform in school plays",
        "Fridays, 4:00 PM - 5:30 PM",
        20,
        &[],
    ),
    (
        "Math Club",
        "Solve challenging math problems and prepare for competitions",
        "Thursdays, 3:30 PM - 4:30 PM",
        15,
        &[],
    ),
    (
        "Science Club",
        "Conduct experiments and explore scientific concepts",
        "Tuesdays, 3:30 PM - 4:30 PM",
        20,
        &[],
    ),
];

/// The activities the school starts each term with.
pub fn default_seed() -> Vec<(String, Activity)> {
    DEFAULT_SEED
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(*description, *schedule, *max)
                    .with_participants(participants.iter().copied()),
            )
        })
        .collect()
}

/// Every `name -> record` pair of a seed object, repeated keys included.
struct SeedEntries(Vec<(String, Activity)>);

impl<'de> Deserialize<'de> for SeedEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SeedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<SeedEntries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Activity>()? {
                    entries.push(entry);
                }
                Ok(SeedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parses a `name -> record` JSON object, keeping key order. Repeated names
/// are passed through so registry construction can reject them.
pub fn parse_seed(json: &str) -> Result<Vec<(String, Activity)>> {
    let SeedEntries(entries) = serde_json::from_str(json)?;
    Ok(entries)
}

pub fn load_seed_file(path: &Path) -> Result<Vec<(String, Activity)>> {
    let json = std::fs::read_to_string(path)?;
    let seed = parse_seed(&json)?;
    tracing::info!(path = %path.display(), activities = seed.len(), "Loaded activity seed file");
    Ok(seed)
}
