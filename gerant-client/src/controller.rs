//! List controller
//!
//! Holds a local, search-filterable snapshot of one remote collection and
//! keeps it in step with the backend after every mutation.
//!
//! At most one `list()` request is in flight per controller. Refresh calls are
//! numbered as they arrive; the gate holder records the highest number its
//! request covers, and callers already covered by a finished refresh return
//! without touching the network.

use chrono::{DateTime, Utc};
use shared::{RecordId, Reservation, ReservationStatus, Searchable};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

use crate::error::{ClientError, ClientResult};
use crate::resource::{CreateResource, DeleteResource, ListResource, UpdateResource};

/// Snapshot of a controller's state
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    /// Set instead of `is_loading` for a pull-to-refresh
    pub is_refreshing: bool,
    /// A mutation succeeded but the reload after it failed; `items` predates it
    pub is_stale: bool,
    pub search_text: String,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            is_refreshing: false,
            is_stale: false,
            search_text: String::new(),
        }
    }
}

impl<T: Searchable> ListState<T> {
    /// Items matching the search text, in list order
    pub fn filtered(&self) -> impl Iterator<Item = &T> {
        self.items
            .iter()
            .filter(|item| item.matches_search(&self.search_text))
    }
}

pub struct ListController<R: ListResource> {
    resource: R,
    state: RwLock<ListState<R::Record>>,
    gate: Mutex<()>,
    requested: AtomicU64,
    completed: AtomicU64,
    alive: CancellationToken,
}

impl<R: ListResource> ListController<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            state: RwLock::new(ListState::default()),
            gate: Mutex::new(()),
            requested: AtomicU64::new(0),
            completed: AtomicU64::new(0),
            alive: CancellationToken::new(),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Reload the collection. On failure the current items are kept.
    pub async fn refresh(&self) -> ClientResult<()> {
        self.run_refresh(false).await
    }

    /// Same as [`refresh`](Self::refresh) but marks `is_refreshing`
    pub async fn pull_to_refresh(&self) -> ClientResult<()> {
        self.run_refresh(true).await
    }

    async fn run_refresh(&self, pull: bool) -> ClientResult<()> {
        self.ensure_alive()?;
        let ticket = self.requested.fetch_add(1, Ordering::SeqCst) + 1;

        let _gate = tokio::select! {
            guard = self.gate.lock() => guard,
            _ = self.alive.cancelled() => return Err(ClientError::Cancelled),
        };

        if self.completed.load(Ordering::SeqCst) >= ticket {
            tracing::debug!(resource = R::NAME, ticket, "Refresh already covered");
            return Ok(());
        }
        // Every caller numbered so far is served by the request below
        let covers = self.requested.load(Ordering::SeqCst);

        {
            let mut state = self.state.write().await;
            state.is_loading = !pull;
            state.is_refreshing = pull;
        }

        let result = tokio::select! {
            result = self.resource.list() => result,
            _ = self.alive.cancelled() => Err(ClientError::Cancelled),
        };

        let mut state = self.state.write().await;
        state.is_loading = false;
        state.is_refreshing = false;

        match result {
            Ok(_) if self.alive.is_cancelled() => {
                tracing::debug!(resource = R::NAME, "Dropping response for closed controller");
                Err(ClientError::Cancelled)
            }
            Ok(items) => {
                tracing::debug!(resource = R::NAME, count = items.len(), "List refreshed");
                state.items = items;
                state.is_stale = false;
                self.completed.store(covers, Ordering::SeqCst);
                Ok(())
            }
            Err(ClientError::Cancelled) => {
                tracing::debug!(resource = R::NAME, "Refresh cancelled");
                Err(ClientError::Cancelled)
            }
            Err(e) => {
                tracing::warn!(resource = R::NAME, error = %e, "Refresh failed, keeping current items");
                Err(e)
            }
        }
    }

    pub async fn set_search_text(&self, text: impl Into<String>) {
        self.state.write().await.search_text = text.into();
    }

    pub async fn snapshot(&self) -> ListState<R::Record> {
        self.state.read().await.clone()
    }

    /// Items matching the current search text, case-insensitive
    pub async fn filtered_items(&self) -> Vec<R::Record> {
        self.state.read().await.filtered().cloned().collect()
    }

    pub async fn items(&self) -> Vec<R::Record> {
        self.state.read().await.items.clone()
    }

    /// Stop the controller. A pending refresh reports `Cancelled` and its
    /// response is discarded.
    pub fn close(&self) {
        if !self.alive.is_cancelled() {
            tracing::debug!(resource = R::NAME, "Controller closed");
        }
        self.alive.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.alive.is_cancelled()
    }

    fn ensure_alive(&self) -> ClientResult<()> {
        if self.alive.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        Ok(())
    }

    /// Whether `items` missed the reload after the last successful mutation
    pub async fn is_stale(&self) -> bool {
        self.state.read().await.is_stale
    }

    /// Refresh issued after a successful mutation. The mutation already took
    /// effect, so a failed reload only marks the list stale until the next
    /// successful refresh.
    async fn refresh_after_mutation(&self) {
        if let Err(e) = self.refresh().await {
            tracing::warn!(resource = R::NAME, error = %e, "Reload after mutation failed");
            self.state.write().await.is_stale = true;
        }
    }
}

impl<R: CreateResource> ListController<R> {
    pub async fn create(&self, form: &R::Form) -> ClientResult<R::Created> {
        self.ensure_alive()?;
        let created = self.resource.create(form).await?;
        self.refresh_after_mutation().await;
        Ok(created)
    }
}

impl<R: UpdateResource> ListController<R> {
    pub async fn update(&self, id: RecordId, update: &R::Update) -> ClientResult<()> {
        self.ensure_alive()?;
        self.resource.update(id, update).await?;
        self.refresh_after_mutation().await;
        Ok(())
    }
}

impl<R: DeleteResource> ListController<R> {
    pub async fn delete(&self, id: RecordId) -> ClientResult<()> {
        self.ensure_alive()?;
        self.resource.delete(id).await?;
        self.refresh_after_mutation().await;
        Ok(())
    }
}

impl<R: ListResource<Record = Reservation>> ListController<R> {
    /// Search-filtered reservations, optionally narrowed to one status as
    /// seen at `now`
    pub async fn filtered_by_status(
        &self,
        status: Option<ReservationStatus>,
        now: DateTime<Utc>,
    ) -> Vec<Reservation> {
        let state = self.state.read().await;
        state
            .filtered()
            .filter(|reservation| status.is_none_or(|wanted| reservation.status_at(now) == wanted))
            .cloned()
            .collect()
    }
}
