//! Integration tests for the map service: day clustering, z-order, and the
//! optional trail overlay.

mod support;

use std::sync::Arc;

use questlog_core::{ActionStore, MapService};
use questlog_domain::{Action, ActionKind, GeoPoint};
use support::fakes::{MemoryStore, NoFixLocation, RecordingRenderer};
use support::fixtures::{action_on, days_ago, seed_actions};

fn placed(mut action: Action, latitude: f64, longitude: f64) -> Action {
    action.location = GeoPoint::new(latitude, longitude);
    action
}

async fn service_over(
    actions: &[Action],
    renderer: Arc<RecordingRenderer>,
) -> (MapService, Arc<ActionStore>) {
    let storage = Arc::new(MemoryStore::new());
    seed_actions(storage.as_ref(), actions).await;
    let store = Arc::new(ActionStore::new(storage, Arc::new(NoFixLocation)));
    store.load_all().await;
    (MapService::new(store.clone(), renderer), store)
}

#[tokio::test]
async fn show_day_pushes_z_ordered_clusters_to_the_renderer() {
    let today = days_ago(0);
    let actions = vec![
        placed(action_on("miss", ActionKind::MissedOpportunity, today, 0), 0.0, 0.0),
        placed(action_on("date", ActionKind::InstantDate, today, 10), 10.0, 10.0),
    ];
    let renderer = Arc::new(RecordingRenderer::new());
    let (service, _store) = service_over(&actions, renderer.clone()).await;

    service.show_day(today).await.expect("render");

    let frames = renderer.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].day, today);
    assert_eq!(frames[0].clusters.len(), 2);
    // Low priority first so the instant date draws on top.
    assert_eq!(frames[0].clusters[0].top_action.kind, ActionKind::MissedOpportunity);
    assert_eq!(frames[0].clusters[1].top_action.kind, ActionKind::InstantDate);
    assert!(frames[0].trail.is_empty());
}

#[tokio::test]
async fn other_days_do_not_leak_into_the_frame() {
    let today = days_ago(0);
    let actions = vec![
        placed(action_on("today", ActionKind::Approach, today, 0), 1.0, 1.0),
        placed(action_on("last-week", ActionKind::Approach, days_ago(7), 0), 1.0, 1.0),
    ];
    let renderer = Arc::new(RecordingRenderer::new());
    let (service, _store) = service_over(&actions, renderer.clone()).await;

    service.show_day(today).await.expect("render");

    let frames = renderer.frames();
    assert_eq!(frames[0].clusters.len(), 1);
    assert_eq!(frames[0].clusters[0].top_action.id, "today");
}

#[tokio::test]
async fn cluster_radius_is_configurable() {
    let today = days_ago(0);
    // ~55 m apart along the equator.
    let actions = vec![
        placed(action_on("a", ActionKind::Approach, today, 0), 0.0, 0.0),
        placed(action_on("b", ActionKind::Approach, today, 1), 0.0005, 0.0),
    ];
    let renderer = Arc::new(RecordingRenderer::new());
    let (service, store) = service_over(&actions, renderer).await;

    assert_eq!(service.clusters_for(today).await.len(), 2);

    let widened = MapService::new(store, Arc::new(RecordingRenderer::new()))
        .with_cluster_radius(100.0);
    assert_eq!(widened.clusters_for(today).await.len(), 1);
}

#[tokio::test]
async fn trail_is_empty_until_enabled() {
    let today = days_ago(0);
    let actions = vec![
        placed(action_on("late", ActionKind::Approach, today, 30), 3.0, 3.0),
        placed(action_on("early", ActionKind::Approach, today, 0), 1.0, 1.0),
    ];
    let renderer = Arc::new(RecordingRenderer::new());
    let (service, store) = service_over(&actions, renderer).await;

    assert!(service.trail_for(today).await.is_empty());

    let with_trail = MapService::new(store, Arc::new(RecordingRenderer::new())).with_trail(true);
    let path = with_trail.trail_for(today).await;
    assert_eq!(path, vec![GeoPoint::new(1.0, 1.0), GeoPoint::new(3.0, 3.0)]);
}

#[tokio::test]
async fn trail_rides_along_in_the_rendered_frame() {
    let today = days_ago(0);
    let actions = vec![
        placed(action_on("b", ActionKind::Approach, today, 20), 2.0, 2.0),
        placed(action_on("a", ActionKind::Approach, today, 0), 1.0, 1.0),
    ];
    let renderer = Arc::new(RecordingRenderer::new());
    let storage = Arc::new(MemoryStore::new());
    seed_actions(storage.as_ref(), &actions).await;
    let store = Arc::new(ActionStore::new(storage, Arc::new(NoFixLocation)));
    store.load_all().await;
    let service = MapService::new(store, renderer.clone()).with_trail(true);

    service.show_day(today).await.expect("render");

    let frames = renderer.frames();
    // Timestamps order the trail even though insertion order differs.
    assert_eq!(frames[0].trail, vec![GeoPoint::new(1.0, 1.0), GeoPoint::new(2.0, 2.0)]);
    assert_eq!(frames[0].clusters.len(), 2);
}
