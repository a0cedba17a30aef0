use crate::config::Config;
use sea_orm::DatabaseConnection;

/// Shared per-process state handed to every handler. The connection is a
/// pool, so cloning the state only clones handles.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self { db, config }
    }
}
