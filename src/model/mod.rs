mod activity;

pub use activity::{Activities, Activity};

use std::{path::Path, sync::Arc};

use tokio::sync::RwLock;
use tracing::info;

use crate::config::AppConfig;

/// Owns the in-memory activity store.
/// Cheap to clone, every clone points at the same store.
#[derive(Clone, Debug)]
pub struct ModelManager {
    activities: Arc<RwLock<Activities>>,
}

impl ModelManager {
    pub fn new(activities: Activities) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    pub async fn init(config: &AppConfig) -> Result<Self> {
        let seed_path = config.store_config.seed_path();
        let activities = load_seed(&seed_path).await?;
        info!(
            "{:<12} - Seeded {} activities from {}",
            "init_store",
            activities.len(),
            seed_path.display()
        );

        Ok(Self::new(activities))
    }

    /// A copy of the current state of every activity.
    pub async fn activities(&self) -> Activities {
        self.activities.read().await.clone()
    }

    /// Check and append happen under one write lock so concurrent signups can't both pass the check.
    /// Returns the spots left in the activity.
    pub async fn signup(&self, name: &str, email: &str) -> Result<u32> {
        self.activities.write().await.signup(name, email)
    }

    pub async fn unregister(&self, name: &str, email: &str) -> Result<()> {
        self.activities.write().await.unregister(name, email)
    }
}

async fn load_seed(path: &Path) -> Result<Activities> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|er| Error::SeedRead {
            path: path.display().to_string(),
            source: er,
        })?;

    Activities::from_seed_str(&content)
}

// ###################################
// ->   ERROR
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, strum_macros::AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Participant not found")]
    ParticipantNotFound,

    #[error("activity '{0}' appears more than once in the seed")]
    SeedDuplicateActivity(String),
    #[error("participant '{email}' appears more than once in '{activity}'")]
    SeedDuplicateParticipant { activity: String, email: String },
    #[error("failed to read the seed file '{path}': {source}")]
    SeedRead {
        path: String,
        source: std::io::Error,
    },
    #[error("seed deserialization error: {0}")]
    SeedDeser(#[from] toml::de::Error),
}
