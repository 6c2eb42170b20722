use std::sync::Arc;

use crate::{data_access::connection::ConnectionManager, settings::Settings};

pub struct AppState {
    pub connection: ConnectionManager,
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings, connection: ConnectionManager) -> Self {
        Self { connection, settings }
    }
}

pub type SharedState = Arc<AppState>;
