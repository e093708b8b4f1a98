//! Integration tests for full round flows

use std::cell::RefCell;
use std::rc::Rc;

use hit_and_blow::{
    daily, load_stats, GameMode, GameResult, GameSession, MemoryStore, PlayType, SessionObserver,
    Stats, Store, Tile, UnlockGraph,
};

/// A guess guaranteed not to win: the answer rotated by one slot
fn rotated(answer: &[Tile]) -> Vec<Tile> {
    let mut tiles = answer.to_vec();
    tiles.rotate_left(1);
    tiles
}

fn submit(session: &mut GameSession, tiles: &[Tile]) {
    session.reset_current_guess();
    for &tile in tiles {
        session.add_tile(tile);
    }
    session.submit_guess();
}

#[test]
fn test_winning_round_end_to_end() {
    let mut session = GameSession::new(GameMode::Normal, PlayType::Free, None).unwrap();
    assert_eq!(session.max_attempts(), 8);
    assert_eq!(session.answer_length(), 4);

    // Probe with a rotation, then solve
    let answer = session.answer().to_vec();
    submit(&mut session, &rotated(&answer));
    assert_eq!(session.attempts(), 1);
    assert!(!session.is_game_over());
    assert_eq!(session.guesses()[0].hits, 0);
    assert_eq!(session.guesses()[0].blows, 4);

    submit(&mut session, &answer);
    assert!(session.is_game_over());
    assert!(session.is_won());

    let result = session.take_result().unwrap();
    assert_eq!(result.mode, GameMode::Normal);
    assert_eq!(result.play_type, PlayType::Free);
    assert!(result.is_won);
    assert_eq!(result.attempts, 2);
}

#[test]
fn test_losing_round_exhausts_attempts() {
    let mut session = GameSession::new(GameMode::Normal, PlayType::Free, None).unwrap();
    let wrong = rotated(session.answer());

    for attempt in 1..=8 {
        submit(&mut session, &wrong);
        assert_eq!(session.attempts(), attempt);
    }

    assert!(session.is_game_over());
    assert!(!session.is_won());

    // Further submissions are ignored
    submit(&mut session, &wrong);
    assert_eq!(session.attempts(), 8);

    let result = session.take_result().unwrap();
    assert!(!result.is_won);
    assert_eq!(result.attempts, 8);
}

#[test]
fn test_win_on_final_attempt_is_a_win() {
    let mut session = GameSession::new(GameMode::Normal, PlayType::Free, None).unwrap();
    let answer = session.answer().to_vec();
    let wrong = rotated(&answer);

    for _ in 0..7 {
        submit(&mut session, &wrong);
    }
    assert!(!session.is_game_over());

    submit(&mut session, &answer);
    assert!(session.is_game_over());
    assert!(session.is_won());
}

struct Recorder {
    seen: Rc<RefCell<Vec<GameResult>>>,
}

impl SessionObserver for Recorder {
    fn on_game_over(&mut self, result: &GameResult) {
        self.seen.borrow_mut().push(*result);
    }
}

#[test]
fn test_observer_notified_once_per_round() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut session = GameSession::new(GameMode::Beginner, PlayType::Free, None).unwrap();
    session.subscribe(Box::new(Recorder { seen: seen.clone() }));

    let answer = session.answer().to_vec();
    submit(&mut session, &answer);
    submit(&mut session, &answer);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].is_won);
    assert_eq!(seen[0].mode, GameMode::Beginner);
}

#[test]
fn test_results_feed_stats_and_storage() {
    let graph = UnlockGraph::from_table();
    let mut stats = Stats::default();
    let mut store = MemoryStore::new();

    // Win normal, which unlocks expert
    let mut session = GameSession::new(GameMode::Normal, PlayType::Free, None).unwrap();
    let answer = session.answer().to_vec();
    submit(&mut session, &answer);
    stats.record(&session.take_result().unwrap(), &graph);

    assert!(stats.is_unlocked(GameMode::Expert));
    assert_eq!(stats.total_plays, 1);
    assert_eq!(stats.best_attempts, Some(1));

    // Persist as JSON and reload through the migration path
    let raw = serde_json::to_value(&stats).unwrap();
    store.save(&raw).unwrap();
    assert_eq!(load_stats(&store), stats);
}

#[test]
fn test_daily_round_shared_and_guarded() {
    let date = chrono::NaiveDate::from_ymd_opt(2026, 2, 21).unwrap();
    let seed = daily::seed_for(date);

    // Same date seed, same answer, and the requested mode is overridden
    let a = GameSession::new(GameMode::Expert, PlayType::Daily, Some(&seed)).unwrap();
    let b = GameSession::new(GameMode::Beginner, PlayType::Daily, Some(&seed)).unwrap();
    assert_eq!(a.answer(), b.answer());
    assert_eq!(a.mode(), GameMode::Normal);
    assert_eq!(b.mode(), GameMode::Normal);

    let mut guard = MemoryStore::new();
    assert!(!daily::has_played_on(&guard, date).unwrap());
    daily::mark_played_on(&mut guard, date).unwrap();
    assert!(daily::has_played_on(&guard, date).unwrap());
}

#[test]
fn test_daily_loss_recorded_in_history() {
    let graph = UnlockGraph::from_table();
    let mut stats = Stats::default();

    let seed = "2026-02-21";
    let mut session = GameSession::new(GameMode::Normal, PlayType::Daily, Some(seed)).unwrap();
    let wrong = rotated(session.answer());
    for _ in 0..8 {
        submit(&mut session, &wrong);
    }

    stats.record(&session.take_result().unwrap(), &graph);
    assert_eq!(stats.daily_history.len(), 1);
    assert!(!stats.daily_history[0].is_won);
    assert_eq!(stats.daily_history[0].mode, GameMode::Normal);
    assert_eq!(stats.daily_history[0].attempts, 8);
}
