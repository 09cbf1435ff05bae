//! Request and response bodies of the activity routes.

use serde::{Deserialize, Serialize};

/// `?email=...` query parameter shared by signup and unregister.
#[derive(Debug, PartialEq, Eq)]
pub struct EmailQuery {
    pub email: String,
}

impl EmailQuery {
    /// Picks `email` out of the decoded query pairs, the last one wins when it repeats.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Option<Self> {
        pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .last()
            .map(|(_, email)| EmailQuery { email })
    }
}

/// Confirmation returned by the mutating routes.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn signed_up(email: &str, activity_name: &str) -> Self {
        Message {
            message: format!("Signed up {email} for {activity_name}"),
        }
    }

    pub fn unregistered(email: &str, activity_name: &str) -> Self {
        Message {
            message: format!("Unregistered {email} from {activity_name}"),
        }
    }
}
