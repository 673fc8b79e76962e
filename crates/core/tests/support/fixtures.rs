//! Action fixtures pinned to local calendar days

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use questlog_core::KeyValueStore;
use questlog_domain::constants::KEY_ACTIONS;
use questlog_domain::{Action, ActionKind, GeoPoint};

/// Noon on `day` in the device-local timezone, as a UTC instant.
///
/// Noon keeps fixtures clear of DST transitions.
pub fn local_noon(day: NaiveDate) -> DateTime<Utc> {
    let naive = day.and_hms_opt(12, 0, 0).expect("valid time");
    Local
        .from_local_datetime(&naive)
        .single()
        .expect("unambiguous local noon")
        .with_timezone(&Utc)
}

/// The local calendar day `n` days before today.
pub fn days_ago(n: i64) -> NaiveDate {
    Local::now().date_naive() - Duration::days(n)
}

/// Action fixture on a specific local day, `minute` minutes past noon.
pub fn action_on(id: &str, kind: ActionKind, day: NaiveDate, minute: i64) -> Action {
    Action {
        id: id.to_string(),
        kind,
        timestamp: local_noon(day) + Duration::minutes(minute),
        location: GeoPoint::new(0.0, 0.0),
        notes: None,
    }
}

/// `count` approach fixtures on `day`, ids prefixed with the day number.
pub fn approaches_on(day: NaiveDate, count: u32) -> Vec<Action> {
    (0..count)
        .map(|idx| action_on(&format!("{day}-approach-{idx}"), ActionKind::Approach, day, idx as i64))
        .collect()
}

/// Seed a store's `actions` key with a pre-serialized list.
pub async fn seed_actions(storage: &dyn KeyValueStore, actions: &[Action]) {
    let payload = serde_json::to_string(actions).expect("encodes");
    storage.set(KEY_ACTIONS, &payload).await.expect("seeds");
}
