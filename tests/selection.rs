//! Integration tests for selection, eligibility queries and renaming.

use matchup_tracker::{
    select_opponent, EngineConfig, Matchmaker, MatchmakerError, Outcome, ROSTER_SIZE,
};

fn ids(queue: &std::collections::VecDeque<usize>) -> Vec<usize> {
    queue.iter().copied().collect()
}

#[test]
fn new_game_has_everyone_eligible() {
    let m = Matchmaker::default();
    assert_eq!(ids(m.eligible()), vec![0, 1, 2, 3, 4, 5, 6]);
    assert!(m.cooldown().is_empty());
    assert_eq!(m.last_opponent(), None);
    assert_eq!(m.num_alive(), ROSTER_SIZE);
    assert_eq!(m.history_len(), 1);
    for i in 0..ROSTER_SIZE {
        assert!(m.can_fight(i));
        assert_eq!(m.contestant(i).unwrap().name, i.to_string());
    }
}

#[test]
fn select_moves_contestant_to_cooldown() {
    let mut m = Matchmaker::default();
    assert_eq!(select_opponent(&mut m, 2), Ok(Outcome::Applied));

    assert_eq!(ids(m.eligible()), vec![0, 1, 3, 4, 5, 6]);
    assert_eq!(ids(m.cooldown()), vec![2]);
    assert_eq!(m.last_opponent(), Some(2));
    assert!(!m.can_fight(2));
    assert_eq!(m.num_alive(), 7);
    assert_eq!(m.history_len(), 2);
}

#[test]
fn select_promotes_cooldown_head_when_pool_drops_below_three() {
    let mut m = Matchmaker::default();
    for id in 0..4 {
        select_opponent(&mut m, id).unwrap();
    }
    assert_eq!(ids(m.eligible()), vec![4, 5, 6]);
    assert_eq!(ids(m.cooldown()), vec![0, 1, 2, 3]);

    select_opponent(&mut m, 4).unwrap();
    // Oldest cooldown entry comes back exactly once.
    assert_eq!(ids(m.eligible()), vec![5, 6, 0]);
    assert_eq!(ids(m.cooldown()), vec![1, 2, 3, 4]);
    assert_eq!(m.last_opponent(), Some(4));
    assert_eq!(m.history_len(), 6);
}

#[test]
fn rotation_keeps_three_eligible_over_many_selections() {
    let mut m = Matchmaker::default();
    for _ in 0..20 {
        let next = m.eligible()[0];
        select_opponent(&mut m, next).unwrap();
        assert!(m.eligible().len() >= 3);
        assert_eq!(m.eligible().len() + m.cooldown().len(), 7);
    }
}

#[test]
fn selecting_cooling_down_contestant_is_a_no_op() {
    let mut m = Matchmaker::default();
    select_opponent(&mut m, 2).unwrap();
    select_opponent(&mut m, 5).unwrap();

    assert_eq!(select_opponent(&mut m, 2), Ok(Outcome::Unchanged));
    assert_eq!(ids(m.eligible()), vec![0, 1, 3, 4, 6]);
    assert_eq!(ids(m.cooldown()), vec![2, 5]);
    assert_eq!(m.last_opponent(), Some(5));
    assert_eq!(m.history_len(), 3);
}

#[test]
fn strict_selection_reports_ineligible() {
    let config = EngineConfig {
        strict_selection: true,
        ..EngineConfig::default()
    };
    let mut m = Matchmaker::new(config);
    select_opponent(&mut m, 2).unwrap();

    assert_eq!(
        select_opponent(&mut m, 2),
        Err(MatchmakerError::IneligibleSelection(2))
    );
    assert_eq!(ids(m.cooldown()), vec![2]);
    assert_eq!(m.history_len(), 2);
}

#[test]
fn select_unknown_id_fails_without_touching_state() {
    let mut m = Matchmaker::default();
    assert_eq!(
        select_opponent(&mut m, 7),
        Err(MatchmakerError::UnknownContestant(7))
    );
    assert_eq!(m.eligible().len(), 7);
    assert_eq!(m.history_len(), 1);
    assert!(!m.can_fight(7));
}

#[test]
fn no_promotion_once_three_or_fewer_remain() {
    let mut m = Matchmaker::default();
    for id in 0..4 {
        matchup_tracker::remove_contestant(&mut m, id).unwrap();
    }
    assert_eq!(ids(m.eligible()), vec![4, 5, 6]);

    select_opponent(&mut m, 4).unwrap();
    select_opponent(&mut m, 5).unwrap();
    assert_eq!(ids(m.eligible()), vec![6]);
    assert_eq!(ids(m.cooldown()), vec![4, 5]);

    select_opponent(&mut m, 6).unwrap();
    assert!(m.eligible().is_empty());
    assert_eq!(ids(m.cooldown()), vec![4, 5, 6]);
}

#[test]
fn promotion_still_applies_with_four_alive() {
    let mut m = Matchmaker::default();
    for id in 0..3 {
        matchup_tracker::remove_contestant(&mut m, id).unwrap();
    }
    select_opponent(&mut m, 3).unwrap();
    select_opponent(&mut m, 4).unwrap();
    assert_eq!(ids(m.eligible()), vec![5, 6, 3]);
    assert_eq!(ids(m.cooldown()), vec![4]);
}

#[test]
fn rename_shows_up_in_names_view() {
    let mut m = Matchmaker::default();
    m.rename(3, "Alex").unwrap();
    let (eligible, cooldown) = m.names_view();
    assert_eq!(eligible, vec!["0", "1", "2", "Alex", "4", "5", "6"]);
    assert!(cooldown.is_empty());

    select_opponent(&mut m, 3).unwrap();
    let (eligible, cooldown) = m.names_view();
    assert_eq!(eligible, vec!["0", "1", "2", "4", "5", "6"]);
    assert_eq!(cooldown, vec!["Alex"]);
}

#[test]
fn rename_accepts_empty_and_duplicate_names() {
    let mut m = Matchmaker::default();
    m.rename(0, "Sam").unwrap();
    m.rename(1, "Sam").unwrap();
    m.rename(2, "").unwrap();
    assert_eq!(m.contestant(1).unwrap().name, "Sam");
    assert_eq!(m.contestant(2).unwrap().name, "");
    assert_eq!(m.history_len(), 1);
}

#[test]
fn rename_unknown_contestant_fails() {
    let mut m = Matchmaker::default();
    assert_eq!(
        m.rename(12, "Nobody"),
        Err(MatchmakerError::UnknownContestant(12))
    );
}

#[test]
fn contestants_view_tracks_eligibility() {
    let mut m = Matchmaker::default();
    select_opponent(&mut m, 1).unwrap();
    let view = m.contestants();
    assert_eq!(view.len(), 7);
    assert!(view[0].can_fight);
    assert!(!view[1].can_fight);
    assert!(view.iter().all(|c| !c.removed));
}
