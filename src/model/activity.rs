//! Activities and the operations that change who takes part in them.

use indexmap::{map::Entry, IndexMap};
use serde::{Deserialize, Serialize};

use super::{Error, Result};

// ###################################
// ->   STRUCTS
// ###################################
/// A single extracurricular activity.
/// `participants` is kept in signup order and never holds the same email twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// All activities keyed by their name, in seed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Activities(IndexMap<String, Activity>);

/// The on-disk shape of the seed file.
#[derive(Debug, Deserialize)]
struct Seed {
    activities: Vec<SeedActivity>,
}

#[derive(Debug, Deserialize)]
struct SeedActivity {
    name: String,
    #[serde(flatten)]
    activity: Activity,
}

// ###################################
// ->   IMPLs
// ###################################
impl Activities {
    /// Parses the TOML seed, rejecting repeated activity names and repeated participants.
    pub fn from_seed_str(content: &str) -> Result<Self> {
        let seed: Seed = toml::from_str(content)?;
        let mut activities = IndexMap::new();

        for SeedActivity { name, activity } in seed.activities {
            if let Some(email) = first_duplicate(&activity.participants) {
                return Err(Error::SeedDuplicateParticipant {
                    activity: name,
                    email: email.to_string(),
                });
            }
            match activities.entry(name) {
                Entry::Vacant(e) => {
                    e.insert(activity);
                }
                Entry::Occupied(e) => return Err(Error::SeedDuplicateActivity(e.key().clone())),
            }
        }

        Ok(Activities(activities))
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends `email` to the participants of `name` and returns the spots left afterwards.
    /// Fails without changing anything if the activity is unknown or the email is already in.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<u32> {
        let activity = self.0.get_mut(name).ok_or(Error::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(Error::AlreadySignedUp);
        }
        // Capacity is informational only.
        activity.participants.push(email.to_string());

        Ok(activity.spots_left())
    }

    /// Removes `email` from the participants of `name`.
    pub fn unregister(&mut self, name: &str, email: &str) -> Result<()> {
        let activity = self.0.get_mut(name).ok_or(Error::ActivityNotFound)?;

        let idx = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(Error::ParticipantNotFound)?;
        activity.participants.remove(idx);

        Ok(())
    }
}

impl Activity {
    /// Zero once the roster reaches `max_participants`, even if signups went past it.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

fn first_duplicate(emails: &[String]) -> Option<&str> {
    emails
        .iter()
        .enumerate()
        .find(|(i, email)| emails[..*i].contains(email))
        .map(|(_, email)| email.as_str())
}
