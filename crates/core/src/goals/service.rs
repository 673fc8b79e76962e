//! Goal engine - level ladder, daily goals, streaks

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use questlog_domain::constants::{
    DEFAULT_DAILY_GOAL, GOAL_LEVELS, KEY_CURRENT_LEVEL, KEY_DAILY_GOAL, KEY_DAILY_GOALS_HISTORY,
    KEY_LEVEL_UP_ACK, KEY_STREAK, STREAK_THREE_FLAMES, STREAK_TWO_FLAMES,
};
use questlog_domain::day;
use questlog_domain::{FlameTier, GoalLevel, GoalStatus};
use tracing::warn;

use crate::actions::ActionStore;
use crate::aggregate::counters_for;
use crate::storage_ports::KeyValueStore;

/// Goal progression service
///
/// Levels derive from the lifetime approach count via the ladder and are
/// never demoted once reached, even when actions are later removed. The
/// daily goal is the user's stored override when present, otherwise the
/// goal of the current level.
pub struct GoalEngine {
    storage: Arc<dyn KeyValueStore>,
    store: Arc<ActionStore>,
    levels: Vec<GoalLevel>,
    default_daily_goal: u32,
}

impl GoalEngine {
    /// Create a new goal engine with the built-in level ladder
    pub fn new(storage: Arc<dyn KeyValueStore>, store: Arc<ActionStore>) -> Self {
        Self {
            storage,
            store,
            levels: GOAL_LEVELS.to_vec(),
            default_daily_goal: DEFAULT_DAILY_GOAL,
        }
    }

    /// Replace the level ladder.
    pub fn with_levels(mut self, levels: Vec<GoalLevel>) -> Self {
        self.levels = levels;
        self
    }

    /// Change the goal used when no override or ladder entry applies.
    pub fn with_default_goal(mut self, goal: u32) -> Self {
        self.default_daily_goal = goal;
        self
    }

    /// Level reached at `approaches` lifetime approaches.
    ///
    /// The highest ladder row whose base does not exceed the count; the
    /// lowest defined level when the count sits below the first base or
    /// the ladder is empty.
    pub fn level_for_approach_count(&self, approaches: u32) -> u32 {
        let mut level = self.levels.first().map_or(0, |row| row.level);
        for row in &self.levels {
            if row.base <= approaches {
                level = row.level;
            } else {
                break;
            }
        }
        level
    }

    /// Daily goal attached to a ladder level, or the default for unknown
    /// levels.
    pub fn goal_for_level(&self, level: u32) -> u32 {
        self.levels
            .iter()
            .find(|row| row.level == level)
            .map_or(self.default_daily_goal, |row| row.goal)
    }

    /// Current level: the computed level or the persisted one, whichever
    /// is higher. Raises persist immediately.
    pub async fn current_level(&self) -> u32 {
        let lifetime = counters_for(&self.store.all_actions().await).approaches;
        let computed = self.level_for_approach_count(lifetime);
        let stored = self.read_u32(KEY_CURRENT_LEVEL).await.unwrap_or(0);

        let level = computed.max(stored);
        if level > stored {
            self.write_u32(KEY_CURRENT_LEVEL, level).await;
        }
        level
    }

    /// Active daily goal: the stored override when present, otherwise the
    /// current level's goal.
    pub async fn daily_goal(&self) -> u32 {
        if let Some(goal) = self.read_u32(KEY_DAILY_GOAL).await {
            return goal;
        }
        let level = self.current_level().await;
        self.goal_for_level(level)
    }

    /// Persist a user goal override.
    pub async fn set_daily_goal(&self, goal: u32) {
        self.write_u32(KEY_DAILY_GOAL, goal).await;
    }

    /// Goal that was active on `day`.
    ///
    /// Served from the captured history so later level or override changes
    /// never rewrite past days; days without a captured entry fall back to
    /// the active goal.
    pub async fn goal_for_date(&self, day: NaiveDate) -> u32 {
        let history = self.goal_history().await;
        match history.get(&day::day_key(day)) {
            Some(goal) => *goal,
            None => self.daily_goal().await,
        }
    }

    /// Consecutive days, ending today or yesterday, on which the approach
    /// count met the goal active that day.
    ///
    /// An unmet today does not break the run; counting then starts at
    /// yesterday. The walk is bounded by the earliest recorded action.
    pub async fn streak(&self) -> u32 {
        let Some(earliest) = self.store.earliest_day().await else {
            return 0;
        };

        let history = self.goal_history().await;
        let active_goal = self.daily_goal().await;
        let today = day::today();

        let mut streak = 0u32;
        let mut current = today;
        while current >= earliest {
            let goal = history.get(&day::day_key(current)).copied().unwrap_or(active_goal);
            let approaches = counters_for(&self.store.day_actions(current).await).approaches;
            if approaches >= goal {
                streak += 1;
            } else if current != today {
                break;
            }
            match current.pred_opt() {
                Some(previous) => current = previous,
                None => break,
            }
        }
        streak
    }

    /// Display class for a streak length.
    pub fn flame_tier(&self, streak: u32) -> FlameTier {
        if streak >= STREAK_THREE_FLAMES {
            FlameTier::Three
        } else if streak >= STREAK_TWO_FLAMES {
            FlameTier::Two
        } else if streak >= 1 {
            FlameTier::One
        } else {
            FlameTier::None
        }
    }

    /// Level awaiting its one-time notification, if any.
    ///
    /// Pending whenever the last acknowledged level differs from the
    /// current one, including the very first launch where nothing has been
    /// acknowledged yet.
    pub async fn pending_level_up(&self) -> Option<u32> {
        let level = self.current_level().await;
        let acknowledged = self.read_u32(KEY_LEVEL_UP_ACK).await;
        if acknowledged == Some(level) {
            None
        } else {
            Some(level)
        }
    }

    /// Mark a level's notification as shown; it will not fire again.
    pub async fn acknowledge_level_up(&self, level: u32) {
        self.write_u32(KEY_LEVEL_UP_ACK, level).await;
    }

    /// Evaluate today's progress in one pass.
    ///
    /// Captures today's goal into the history map and refreshes the
    /// persisted streak as side effects.
    pub async fn evaluate_today(&self) -> GoalStatus {
        let level = self.current_level().await;
        let daily_goal = self.daily_goal().await;
        self.record_goal_for_today(daily_goal).await;

        let approaches_today =
            counters_for(&self.store.day_actions(day::today()).await).approaches;
        let streak = self.streak().await;
        self.write_u32(KEY_STREAK, streak).await;

        GoalStatus {
            level,
            daily_goal,
            approaches_today,
            goal_met: approaches_today >= daily_goal,
            streak,
            flame_tier: self.flame_tier(streak),
            pending_level_up: self.pending_level_up().await,
        }
    }

    async fn goal_history(&self) -> HashMap<String, u32> {
        match self.storage.get(KEY_DAILY_GOALS_HISTORY).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(history) => history,
                Err(err) => {
                    warn!(error = %err, "discarding unreadable goal history");
                    HashMap::new()
                }
            },
            Ok(None) => HashMap::new(),
            Err(err) => {
                warn!(error = %err, "failed to read goal history");
                HashMap::new()
            }
        }
    }

    /// Capture the goal active today. Past entries are never rewritten;
    /// today's entry tracks the active goal until the day ends.
    async fn record_goal_for_today(&self, goal: u32) {
        let mut history = self.goal_history().await;
        let key = day::day_key(day::today());
        if history.get(&key) == Some(&goal) {
            return;
        }
        history.insert(key, goal);

        match serde_json::to_string(&history) {
            Ok(payload) => {
                if let Err(err) = self.storage.set(KEY_DAILY_GOALS_HISTORY, &payload).await {
                    warn!(error = %err, "failed to persist goal history");
                }
            }
            Err(err) => warn!(error = %err, "failed to encode goal history"),
        }
    }

    async fn read_u32(&self, key: &str) -> Option<u32> {
        match self.storage.get(key).await {
            Ok(Some(raw)) => match raw.trim().parse::<u32>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(key, raw, "ignoring unparseable stored integer");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(key, error = %err, "failed to read stored integer");
                None
            }
        }
    }

    async fn write_u32(&self, key: &str, value: u32) {
        if let Err(err) = self.storage.set(key, &value.to_string()).await {
            warn!(key, error = %err, "failed to persist stored integer");
        }
    }
}
