//! Greedy seed-relative clustering
//!
//! Partitions one day's actions into map clusters. Membership is measured
//! against the cluster's seed only, never between members, so a chain of
//! nearby points can stretch a cluster beyond twice the radius. That
//! non-transitivity is intended product behavior, not an approximation to
//! tighten.

use std::cmp::Reverse;

use questlog_domain::constants::EARTH_RADIUS_M;
use questlog_domain::{Action, Cluster, GeoPoint};

/// Great-circle distance between two coordinates in meters.
pub fn haversine_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Cluster a day's actions within `radius_m` of each seed.
///
/// Actions are visited in stored order; each unprocessed action seeds a
/// cluster and claims every later unprocessed action within `radius_m` of
/// the seed. Members sort by kind priority descending (stable, so the
/// earliest of a tied kind leads) and the first becomes `top_action`,
/// which also supplies the marker coordinate. The cluster list itself is
/// returned in ascending top-priority order so higher-priority markers
/// draw last, on top.
pub fn cluster_actions(actions: &[Action], radius_m: f64) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::with_capacity(actions.len());
    let mut processed = vec![false; actions.len()];

    for seed_idx in 0..actions.len() {
        if processed[seed_idx] {
            continue;
        }
        processed[seed_idx] = true;
        let seed = &actions[seed_idx];
        let mut members = vec![seed.clone()];

        for candidate_idx in seed_idx + 1..actions.len() {
            if processed[candidate_idx] {
                continue;
            }
            let candidate = &actions[candidate_idx];
            if haversine_distance_m(seed.location, candidate.location) <= radius_m {
                members.push(candidate.clone());
                processed[candidate_idx] = true;
            }
        }

        members.sort_by_key(|action| Reverse(action.kind.priority()));
        let top_action = members[0].clone();

        clusters.push(Cluster {
            id: seed.id.clone(),
            coordinate: top_action.location,
            top_action,
            actions: members,
        });
    }

    clusters.sort_by_key(|cluster| cluster.top_action.kind.priority());
    clusters
}

/// Timestamp-ascending coordinates of a day's actions.
///
/// Used for the optional path overlay; no clustering is applied.
pub fn trail(actions: &[Action]) -> Vec<GeoPoint> {
    let mut ordered: Vec<&Action> = actions.iter().collect();
    ordered.sort_by_key(|action| action.timestamp);
    ordered.into_iter().map(|action| action.location).collect()
}
