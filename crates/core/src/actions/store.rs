//! Action store - core business logic

use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use questlog_domain::constants::{FALLBACK_LOCATION, KEY_ACTIONS, KEY_APP_MODE};
use questlog_domain::day;
use questlog_domain::{Action, ActionKind, AppMode, GeoPoint, Result};
use tokio::sync::RwLock;
use tracing::{error, warn};

use super::ports::LocationProvider;
use crate::storage_ports::KeyValueStore;

/// Owns the recorded action list and its persistence.
///
/// Mutations serialize on a write lock held across the read-modify-write
/// cycle including the storage write, so rapid calls cannot interleave
/// stale snapshots. Reads clone from the latest in-memory snapshot.
pub struct ActionStore {
    storage: Arc<dyn KeyValueStore>,
    location: Arc<dyn LocationProvider>,
    state: RwLock<StoreState>,
}

struct StoreState {
    actions: Vec<Action>,
    app_mode: AppMode,
}

impl ActionStore {
    /// Create a new action store
    pub fn new(storage: Arc<dyn KeyValueStore>, location: Arc<dyn LocationProvider>) -> Self {
        Self {
            storage,
            location,
            state: RwLock::new(StoreState {
                actions: Vec::new(),
                app_mode: AppMode::default(),
            }),
        }
    }

    /// Load the persisted action list into memory and return it.
    ///
    /// Any read or parse failure yields an empty list; startup never fails
    /// on bad storage. Also reconciles the persisted app mode with the
    /// location permission state.
    pub async fn load_all(&self) -> Vec<Action> {
        let actions = match self.storage.get(KEY_ACTIONS).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Action>>(&raw) {
                Ok(actions) => actions,
                Err(err) => {
                    warn!(error = %err, "discarding unreadable action list");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "failed to read persisted actions");
                Vec::new()
            }
        };

        let app_mode = self.reconcile_app_mode().await;

        let mut state = self.state.write().await;
        state.actions = actions.clone();
        state.app_mode = app_mode;
        actions
    }

    /// Record a new action of `kind` and persist the updated list.
    ///
    /// The coordinate is resolved before the store lock is taken, so a
    /// hanging provider pends this append only. Errors surface only when
    /// the provider itself fails; a missing fix records the fallback
    /// coordinate instead.
    pub async fn append(&self, kind: ActionKind, notes: Option<String>) -> Result<Action> {
        let location = self.resolve_location().await?;

        let mut state = self.state.write().await;
        let action = Action::new(kind, location, notes);
        state.actions.push(action.clone());
        self.persist(&state.actions).await;
        Ok(action)
    }

    /// Delete the most recent action of `kind` recorded today.
    ///
    /// Returns whether a removal happened; older days are never touched.
    pub async fn remove_last_of_kind(&self, kind: ActionKind) -> bool {
        let today = day::today();

        let mut state = self.state.write().await;
        let target = state
            .actions
            .iter()
            .rev()
            .find(|action| action.kind == kind && day::local_day(action.timestamp) == today)
            .map(|action| action.id.clone());

        let Some(id) = target else {
            return false;
        };

        state.actions.retain(|action| action.id != id);
        self.persist(&state.actions).await;
        true
    }

    /// Actions recorded on `day`, in insertion order.
    pub async fn day_actions(&self, day: NaiveDate) -> Vec<Action> {
        let state = self.state.read().await;
        state
            .actions
            .iter()
            .filter(|action| day::local_day(action.timestamp) == day)
            .cloned()
            .collect()
    }

    /// Snapshot of the full action list, in insertion order.
    pub async fn all_actions(&self) -> Vec<Action> {
        self.state.read().await.actions.clone()
    }

    /// Earliest local day with a recorded action, if any.
    pub async fn earliest_day(&self) -> Option<NaiveDate> {
        let state = self.state.read().await;
        state.actions.iter().map(|action| day::local_day(action.timestamp)).min()
    }

    /// Current coordinate capture mode.
    pub async fn app_mode(&self) -> AppMode {
        self.state.read().await.app_mode
    }

    /// Switch the coordinate capture mode and persist the choice.
    pub async fn set_app_mode(&self, mode: AppMode) {
        let mut state = self.state.write().await;
        state.app_mode = mode;
        if let Err(err) = self.storage.set(KEY_APP_MODE, &mode.to_string()).await {
            warn!(error = %err, "failed to persist app mode");
        }
    }

    async fn resolve_location(&self) -> Result<GeoPoint> {
        if self.app_mode().await == AppMode::Basic || !self.location.permission_granted() {
            return Ok(FALLBACK_LOCATION);
        }
        match self.location.current_location().await? {
            Some(point) => Ok(point),
            None => Ok(FALLBACK_LOCATION),
        }
    }

    /// Derive the capture mode from the permission state, persisting when
    /// it differs from the stored value. Permission wins over storage.
    async fn reconcile_app_mode(&self) -> AppMode {
        let derived = if self.location.permission_granted() {
            AppMode::Fullscale
        } else {
            AppMode::Basic
        };

        let stored = match self.storage.get(KEY_APP_MODE).await {
            Ok(Some(raw)) => AppMode::from_str(&raw).ok(),
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "failed to read stored app mode");
                None
            }
        };

        if stored != Some(derived) {
            if let Err(err) = self.storage.set(KEY_APP_MODE, &derived.to_string()).await {
                warn!(error = %err, "failed to persist app mode");
            }
        }

        derived
    }

    async fn persist(&self, actions: &[Action]) {
        let payload = match serde_json::to_string(actions) {
            Ok(payload) => payload,
            Err(err) => {
                error!(error = %err, "failed to encode action list");
                return;
            }
        };
        if let Err(err) = self.storage.set(KEY_ACTIONS, &payload).await {
            error!(error = %err, "failed to persist action list");
        }
    }
}
