use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{config::AppConfig, model::ModelManager, Result};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    /// Seeds a fresh activity store and binds the listener described by `config`.
    pub async fn build_from_config(config: &AppConfig) -> Result<Self> {
        let model_mgr = ModelManager::init(config).await?;
        let app_state = AppState::new(model_mgr, &config.net_config.static_dir);

        let addr = config.net_config.socket_addr();
        let app = App::bind(app_state, addr).await?;
        Ok(app)
    }

    pub async fn bind(app_state: AppState, addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        Ok(App::new(app_state, listener))
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }
}

pub struct InternalState {
    pub model_mgr: ModelManager,
    pub static_dir: PathBuf,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(model_mgr: ModelManager, static_dir: impl Into<PathBuf>) -> Self {
        AppState(Arc::new(InternalState {
            model_mgr,
            static_dir: static_dir.into(),
        }))
    }
}
