use std::sync::Arc;

use tracing::{error, info};

use crate::draw::DrawSource;
use crate::errors::{LottoError, StorageError};
use crate::frequency::aggregate;
use crate::store::DrawStore;
use crate::types::{Draw, FrequencyReport};

pub const DEFAULT_HISTORY_LIMIT: u32 = 10;
pub const MAX_HISTORY_LIMIT: u32 = 100;

pub struct DrawUseCase {
    store: Arc<dyn DrawStore>,
    source: Arc<dyn DrawSource>,
}

impl DrawUseCase {
    pub fn new(store: Arc<dyn DrawStore>, source: Arc<dyn DrawSource>) -> Self {
        Self { store, source }
    }

    /// Generates a draw and persists it. Nothing is stored when generation fails.
    pub async fn request_new_draw(&self) -> Result<Draw, LottoError> {
        let numbers = self.source.next_draw().inspect_err(|e| {
            error!("draw generation failed: {}", e);
        })?;

        let draw = self
            .blocking(move |store| store.append_draw(&numbers))
            .await
            .inspect_err(|e| error!("failed to persist draw: {}", e))?;

        info!(id = draw.id, numbers = %draw.numbers.to_column(), "🎱 draw persisted");
        Ok(draw)
    }

    /// Recomputes the leaderboard from the full draw history.
    pub async fn request_frequency_report(&self) -> Result<FrequencyReport, LottoError> {
        let draws = self
            .blocking(|store| store.list_all_draws())
            .await
            .inspect_err(|e| error!("failed to list draws: {}", e))?;

        Ok(aggregate(&draws))
    }

    pub async fn recent_draws(&self, limit: Option<u32>) -> Result<Vec<Draw>, LottoError> {
        let limit = limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT);

        let draws = self
            .blocking(move |store| store.latest_draws(limit))
            .await
            .inspect_err(|e| error!("failed to load recent draws: {}", e))?;
        Ok(draws)
    }

    pub async fn draw_count(&self) -> Result<u64, LottoError> {
        let count = self.blocking(|store| store.count_draws()).await?;
        Ok(count)
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn DrawStore) -> Result<T, StorageError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || f(&*store))
            .await
            .map_err(|e| StorageError::Task(e.to_string()))?
    }
}
