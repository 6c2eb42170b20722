use std::path::PathBuf;

use tokio::sync::OnceCell;

use super::data_context::{DataContext, StoreError};

const URL_SCHEME: &str = "redb://";

/// Owns the one store handle of the process.
///
/// Nothing is opened until the first caller asks. Callers that arrive while
/// the open is in flight wait for that same attempt. A failed attempt is
/// not remembered, so the next caller tries again.
pub struct ConnectionManager {
    location: PathBuf,
    context: OnceCell<DataContext>,
}

impl ConnectionManager {
    /// `database_url` is a file path, optionally written as `redb://<path>`.
    pub fn new(database_url: &str) -> Self {
        let location = database_url.strip_prefix(URL_SCHEME).unwrap_or(database_url);
        Self {
            location: PathBuf::from(location),
            context: OnceCell::new(),
        }
    }

    pub async fn data_context(&self) -> Result<&DataContext, StoreError> {
        self.context
            .get_or_try_init(|| async {
                let location = self.location.clone();
                tracing::info!(path = %location.display(), "opening task store");
                let context = tokio::task::spawn_blocking(move || DataContext::new(location))
                    .await
                    .map_err(|e| StoreError::Connect(e.to_string()))?
                    .inspect_err(|e| tracing::error!(error = %e, "task store connection failed"))?;
                tracing::info!("task store connected");
                Ok::<_, StoreError>(context)
            })
            .await
    }

    pub fn is_connected(&self) -> bool {
        self.context.initialized()
    }
}
