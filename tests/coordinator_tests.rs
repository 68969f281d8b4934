// tests/coordinator_tests.rs
use markring::history::cursor::{next_index, Cursor};
use markring::history::ring::{HistoryRing, JumpOutcome};
use markring::jump::coordinator::JumpCoordinator;
use markring::jump::{JumpError, Navigator, Persistence};
use markring::path::{ExactPaths, PathEquivalence};
use markring::ui::message::{Message, MessageLevel};

/// Navigator that records loads and fails for keys listed in `broken`.
#[derive(Default)]
struct FakeNavigator {
    loaded: Vec<String>,
    broken: Vec<String>,
}

impl Navigator for FakeNavigator {
    type Record = String;

    fn build_identity(&self, key: &str) -> String {
        format!("record:{}", key)
    }

    fn navigate(&mut self, record: &String) -> anyhow::Result<()> {
        let key = record.trim_start_matches("record:");
        if self.broken.iter().any(|b| b == key) {
            anyhow::bail!("cannot open {}", key);
        }
        self.loaded.push(key.to_string());
        Ok(())
    }
}

/// Persistence that records every snapshot it was offered.
#[derive(Default)]
struct SpyPersistence {
    offers: Vec<(Vec<String>, Option<usize>)>,
}

impl Persistence for SpyPersistence {
    fn save_if_due<E: PathEquivalence>(&mut self, ring: &HistoryRing<E>, cursor: Cursor) {
        self.offers.push((ring.to_vec(), cursor.position()));
    }
}

type Jumps = JumpCoordinator<FakeNavigator, SpyPersistence, Vec<Message>, ExactPaths>;

fn coordinator(entries: &[&str]) -> Jumps {
    let ring = HistoryRing::from_entries(3, entries.iter().copied(), ExactPaths);
    JumpCoordinator::new(
        ring,
        FakeNavigator::default(),
        SpyPersistence::default(),
        Vec::new(),
    )
}

#[test]
fn test_explicit_jumps_record_history() {
    let mut jumps = coordinator(&[]);

    assert_eq!(jumps.jump_to("a").unwrap(), JumpOutcome::FirstInsert);
    assert_eq!(jumps.jump_to("b").unwrap(), JumpOutcome::Inserted);
    assert_eq!(jumps.jump_to("a").unwrap(), JumpOutcome::Promoted);

    assert_eq!(jumps.ring().to_vec(), vec!["a", "b"]);
    assert_eq!(jumps.navigator().loaded, vec!["a", "b", "a"]);
    assert_eq!(jumps.persistence().offers.len(), 3);
}

#[test]
fn test_explicit_jump_notifies_status() {
    let mut jumps = coordinator(&["a"]);
    jumps.jump_to("b").unwrap();

    assert_eq!(
        jumps.status(),
        &vec![Message {
            text: "Jumped to b (new)".to_string(),
            level: MessageLevel::Info,
        }]
    );
}

#[test]
fn test_jump_to_head_is_redundant() {
    let mut jumps = coordinator(&["d"]);

    let err = jumps.jump_to("d").unwrap_err();

    assert!(matches!(err, JumpError::RedundantJump { ref key } if key == "d"));
    assert_eq!(jumps.ring().to_vec(), vec!["d"]);
    assert!(jumps.navigator().loaded.is_empty());
    assert!(jumps.persistence().offers.is_empty());
    assert!(jumps.status().is_empty());
}

#[test]
fn test_explicit_jump_resets_cursor() {
    let mut jumps = coordinator(&["d", "c", "a"]);
    jumps.next().unwrap();
    jumps.next().unwrap();
    assert_eq!(jumps.cursor().position(), Some(1));

    jumps.jump_to("a").unwrap();

    assert_eq!(jumps.cursor(), Cursor::unset());
    assert_eq!(jumps.ring().to_vec(), vec!["a", "d", "c"]);
}

#[test]
fn test_redundant_jump_keeps_cursor() {
    let mut jumps = coordinator(&["d", "c"]);
    jumps.next().unwrap();

    assert!(jumps.jump_to("d").is_err());
    assert_eq!(jumps.cursor().position(), Some(0));
}

#[test]
fn test_cycle_forward_and_backward() {
    let mut jumps = coordinator(&["d", "c", "a"]);

    assert_eq!(jumps.next().unwrap(), 0);
    assert_eq!(jumps.next().unwrap(), 1);
    assert_eq!(jumps.previous().unwrap(), 0);

    assert_eq!(jumps.navigator().loaded, vec!["d", "c", "d"]);
    assert_eq!(jumps.cursor().position(), Some(0));
}

#[test]
fn test_cycle_backward_from_unset_starts_at_oldest() {
    let mut jumps = coordinator(&["d", "c", "a"]);

    assert_eq!(jumps.previous().unwrap(), 2);
    assert_eq!(jumps.navigator().loaded, vec!["a"]);
}

#[test]
fn test_cycle_wraps() {
    let mut jumps = coordinator(&["d", "c", "a"]).with_cursor(Cursor::at(2));
    assert_eq!(jumps.next().unwrap(), 0);
    assert_eq!(jumps.previous().unwrap(), 2);
}

#[test]
fn test_stale_cursor_recovers_at_oldest() {
    let mut jumps = coordinator(&["d", "c", "a"]).with_cursor(Cursor::at(5));

    assert_eq!(jumps.next().unwrap(), 2);
    assert_eq!(jumps.navigator().loaded, vec!["a"]);
    assert_eq!(jumps.cursor().position(), Some(2));
}

#[test]
fn test_cycle_never_touches_ring_order() {
    let mut jumps = coordinator(&["d", "c", "a"]);

    for step in [1, 1, -1, 1, 1, 1, -1] {
        jumps.cycle_jump(step).unwrap();
        assert_eq!(jumps.ring().to_vec(), vec!["d", "c", "a"]);
        assert!(jumps.cursor().is_set());
    }
    // Cycling does not announce history changes
    assert!(jumps.status().is_empty());
}

#[test]
fn test_cycle_positions_follow_index_tracker() {
    let mut jumps = coordinator(&["d", "c", "a"]);
    let mut expected = None;

    for step in [1, -1, -1, 1, 1, 1] {
        expected = next_index(expected, step, 3);
        assert_eq!(Some(jumps.cycle_jump(step).unwrap()), expected);
    }
}

#[test]
fn test_cycle_empty_history() {
    let mut jumps = coordinator(&[]);

    assert!(matches!(jumps.next(), Err(JumpError::EmptyHistory)));
    assert!(matches!(jumps.previous(), Err(JumpError::EmptyHistory)));
    assert!(jumps.ring().is_empty());
    assert_eq!(jumps.cursor(), Cursor::unset());
    assert!(jumps.navigator().loaded.is_empty());
}

#[test]
fn test_cycle_offers_save_with_cursor() {
    let mut jumps = coordinator(&["d", "c"]);
    jumps.next().unwrap();

    assert_eq!(
        jumps.persistence().offers,
        vec![(vec!["d".to_string(), "c".to_string()], Some(0))]
    );
}

#[test]
fn test_load_failure_keeps_history() {
    let mut jumps = coordinator(&["a", "b"]);
    jumps.next().unwrap();
    jumps.navigator_mut().broken.push("b".to_string());

    let err = jumps.jump_to("b").unwrap_err();

    assert!(matches!(err, JumpError::LoadFailure { ref key, .. } if key == "b"));
    assert_eq!(err.to_string(), "cannot open b");
    assert_eq!(jumps.ring().to_vec(), vec!["b", "a"]);
    assert_eq!(jumps.cursor(), Cursor::unset());
    // Only the earlier cycle was offered for saving
    assert_eq!(jumps.persistence().offers.len(), 1);
}

#[test]
fn test_load_failure_while_cycling_moves_cursor() {
    let mut jumps = coordinator(&["a", "b"]);
    jumps.navigator_mut().broken.push("a".to_string());

    assert!(matches!(jumps.next(), Err(JumpError::LoadFailure { .. })));
    assert_eq!(jumps.cursor().position(), Some(0));
    assert_eq!(jumps.next().unwrap(), 1);
}

#[test]
fn test_suppressed_explicit_jump_only_loads() {
    let mut jumps = coordinator(&["a", "b"]).with_cursor(Cursor::at(1));

    assert_eq!(jumps.explicit_jump("z", true).unwrap(), None);
    assert_eq!(jumps.ring().to_vec(), vec!["a", "b"]);
    assert_eq!(jumps.cursor().position(), Some(1));
    assert_eq!(jumps.navigator().loaded, vec!["z"]);

    assert_eq!(
        jumps.explicit_jump("z", false).unwrap(),
        Some(JumpOutcome::Inserted)
    );
    assert_eq!(jumps.cursor(), Cursor::unset());
}

#[test]
fn test_into_parts_returns_state() {
    let mut jumps = coordinator(&["a"]);
    jumps.jump_to("b").unwrap();

    let (ring, cursor, navigator, persistence, status) = jumps.into_parts();
    assert_eq!(ring.to_vec(), vec!["b", "a"]);
    assert!(!cursor.is_set());
    assert_eq!(navigator.loaded, vec!["b"]);
    assert_eq!(persistence.offers.len(), 1);
    assert_eq!(status.len(), 1);
}
