//! Integration tests for shuttleplan
//!
//! These tests drive the public API end to end: generation, invariants,
//! persistence, and round completion working together.

use shuttleplan::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

fn roster(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Player{:02}", i)).collect()
}

fn manager() -> ScheduleManager {
    ScheduleManager::new(
        Arc::new(InMemoryStore::new()),
        Arc::new(SequentialIds::default()),
    )
}

/// Test the complete flow from roster to stored, toggleable schedule
#[tokio::test]
async fn test_complete_scheduling_flow() -> Result<()> {
    let manager = manager();
    let players = roster(8);

    let schedule = manager
        .create_schedule(&players, 2, MatchType::Doubles)
        .await?;
    assert!(!schedule.rounds.is_empty());
    assert!(schedule.warning.is_none());

    // Every round is internally consistent.
    let report = validate_schedule(&schedule.rounds);
    assert!(report.valid, "{:?}", report.errors);

    for round in &schedule.rounds {
        let playing: HashSet<&str> = round
            .matches
            .iter()
            .flat_map(|m| m.players())
            .collect();
        let resting: HashSet<&str> = round.resting.iter().map(String::as_str).collect();
        assert!(playing.is_disjoint(&resting));
        assert_eq!(playing.len() + resting.len(), players.len());

        for m in &round.matches {
            assert_eq!(m.team_a.size(), 2);
            assert_eq!(m.team_b.size(), 2);
            assert!(m.team_a.is_disjoint(&m.team_b));
        }
    }

    // Nobody sits out longer than the rotation cap allows.
    for p in &players {
        assert!(longest_rest_run(&schedule.rounds, p) <= 2);
    }

    // Completion toggling is visible on the next read.
    let round = manager.toggle_round(&schedule.schedule_id, "r1").await?;
    assert!(round.completed);
    let stored = manager.get_schedule(&schedule.schedule_id).await?;
    assert!(stored.rounds[0].completed);
    assert!(!stored.rounds[1].completed);

    // Listing reflects progress; deletion removes the schedule.
    let summaries = manager.list_schedules().await?;
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].completed_rounds, 1);

    manager.delete_schedule(&schedule.schedule_id).await?;
    assert!(manager.get_schedule(&schedule.schedule_id).await.is_err());

    Ok(())
}

/// Test that identical inputs yield byte-identical schedules
#[tokio::test]
async fn test_deterministic_generation() -> Result<()> {
    let players = roster(10);

    let a = manager()
        .create_schedule(&players, 2, MatchType::Doubles)
        .await?;
    let b = manager()
        .create_schedule(&players, 2, MatchType::Doubles)
        .await?;

    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
    Ok(())
}

/// Test the host-visible JSON shape of a stored schedule
#[tokio::test]
async fn test_wire_shape() -> Result<()> {
    let manager = manager();
    let schedule = manager
        .create_schedule(&roster(5), 1, MatchType::Singles)
        .await?;

    let json = serde_json::to_value(&schedule).unwrap();
    assert!(json["scheduleId"].is_string());
    assert!(json.get("warning").is_none());

    let round = &json["rounds"][0];
    assert_eq!(round["id"], "r1");
    assert_eq!(round["completed"], false);
    assert_eq!(round["matches"][0]["teamA"].as_array().unwrap().len(), 1);
    assert_eq!(round["matches"][0]["teamB"].as_array().unwrap().len(), 1);
    assert_eq!(round["resting"].as_array().unwrap().len(), 3);

    Ok(())
}

/// Test rest fairness across a five player singles session
#[tokio::test]
async fn test_small_roster_covers_all_matchups_fairly() -> Result<()> {
    let manager = manager();
    let players = roster(5);
    let schedule = manager
        .create_schedule(&players, 1, MatchType::Singles)
        .await?;

    // C(5,2) distinct matchups, one per round.
    assert_eq!(schedule.rounds.len(), 10);
    let compositions: HashSet<String> = schedule
        .rounds
        .iter()
        .flat_map(|r| r.matches.iter().map(|m| m.key()))
        .collect();
    assert_eq!(compositions.len(), 10);

    let stats = compute_rest_stats(&schedule.rounds, &players);
    assert!(stats.max_diff <= 2, "rest spread {}", stats.max_diff);
    for p in &players {
        assert!(longest_rest_run(&schedule.rounds, p) <= 2);
    }

    Ok(())
}

/// Test the degradation warning for oversized rosters
#[tokio::test]
async fn test_large_roster_warning() -> Result<()> {
    let manager = manager();
    let schedule = manager
        .create_schedule(&roster(20), 2, MatchType::Singles)
        .await?;

    assert_eq!(schedule.warning.as_deref(), Some(LARGE_ROSTER_WARNING));
    assert!(!schedule.rounds.is_empty());
    assert!(validate_schedule(&schedule.rounds).valid);

    Ok(())
}

/// Test validation failures at the manager boundary
#[tokio::test]
async fn test_validation_errors() {
    let manager = manager();

    let duplicates: Vec<String> = ["A", "A", "B", "B", "C", "C"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let err = manager
        .create_schedule(&duplicates, 1, MatchType::Singles)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("unique players remain"));

    let err = manager
        .create_schedule(&roster(6), 0, MatchType::Singles)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "At least 1 court required");
}

/// Test concurrent creation against a shared store
#[tokio::test]
async fn test_concurrent_schedule_creation() -> Result<()> {
    let store = Arc::new(InMemoryStore::new());
    let manager = Arc::new(ScheduleManager::new(store, Arc::new(UuidIds)));

    let mut handles = Vec::new();
    for i in 0..8 {
        let manager = manager.clone();
        handles.push(tokio::spawn(async move {
            let players: Vec<String> = (0..7).map(|p| format!("G{i}P{p}")).collect();
            manager
                .create_schedule(&players, 1, MatchType::Doubles)
                .await
        }));
    }

    let results = futures::future::join_all(handles).await;
    for result in results {
        let schedule = result.unwrap()?;
        assert!(!schedule.rounds.is_empty());
    }

    assert_eq!(manager.list_schedules().await?.len(), 8);
    Ok(())
}

/// Test direct engine use without the storage layer
#[test]
fn test_engine_is_usable_standalone() {
    let players = roster(7);
    let schedule =
        generate_schedule(&players, 1, MatchType::Doubles, &SequentialIds::default()).unwrap();

    for round in &schedule.rounds {
        assert_eq!(round.matches.len(), 1);
        assert_eq!(round.resting.len(), 3);
    }

    let stats = compute_rest_stats(&schedule.rounds, &players);
    assert!(stats.max_diff <= 1);
    for p in &players {
        assert!(longest_rest_run(&schedule.rounds, p) <= 1);
    }
}
