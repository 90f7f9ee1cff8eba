//! Tests for move signatures and the tabu memory.

use tabu_tsp::search::memory::{MoveSignature, TabuMemory};
use tabu_tsp::tour::Tour;

fn signature(removed: &[usize], inserted: &[usize]) -> MoveSignature {
    MoveSignature {
        removed: removed.to_vec(),
        inserted: inserted.to_vec(),
    }
}

#[test]
fn test_signature_of_single_swap() {
    let current = Tour::from(vec![0, 1, 2, 3, 4]);
    let candidate = current.swap_segments(1, 3, 1);

    // Only the first differing position is kept for segment length 1
    let sig = MoveSignature::between(&current, &candidate, 1);
    assert_eq!(sig, signature(&[1], &[3]));
}

#[test]
fn test_signature_of_segment_swap() {
    let current = Tour::identity(7);
    let candidate = current.swap_segments(1, 4, 2);

    let sig = MoveSignature::between(&current, &candidate, 2);
    assert_eq!(sig, signature(&[1, 2], &[4, 5]));
}

#[test]
fn test_signature_of_identical_tours_is_empty() {
    let tour = Tour::identity(5);
    let sig = MoveSignature::between(&tour, &tour, 1);

    assert!(sig.removed.is_empty());
    assert!(sig.inserted.is_empty());
}

#[test]
fn test_reversed_signature_is_tabu() {
    let mut memory = TabuMemory::new(3);
    memory.push(signature(&[1], &[3]));

    assert!(memory.is_tabu(&signature(&[1], &[3])));
    assert!(memory.is_tabu(&signature(&[3], &[1])));
    assert!(!memory.is_tabu(&signature(&[1], &[2])));
}

#[test]
fn test_undoing_a_swap_is_tabu() {
    let start = Tour::from(vec![0, 1, 2, 3, 4]);
    let moved = start.swap_segments(2, 4, 1);
    let back = moved.swap_segments(2, 4, 1);

    let mut memory = TabuMemory::new(1);
    memory.push(MoveSignature::between(&start, &moved, 1));

    assert!(memory.is_tabu(&MoveSignature::between(&moved, &back, 1)));
}

#[test]
fn test_fifo_eviction() {
    let mut memory = TabuMemory::new(2);
    memory.push(signature(&[1], &[2]));
    memory.push(signature(&[3], &[4]));
    memory.push(signature(&[5], &[6]));

    assert_eq!(memory.len(), 2);
    assert!(!memory.is_tabu(&signature(&[1], &[2])));
    assert!(memory.is_tabu(&signature(&[3], &[4])));
    assert!(memory.is_tabu(&signature(&[5], &[6])));

    let oldest_first: Vec<_> = memory.iter().cloned().collect();
    assert_eq!(
        oldest_first,
        vec![signature(&[3], &[4]), signature(&[5], &[6])]
    );
}

#[test]
fn test_eviction_ignores_lookups() {
    let mut memory = TabuMemory::new(2);
    memory.push(signature(&[1], &[2]));
    memory.push(signature(&[3], &[4]));

    // A lookup does not refresh the entry
    assert!(memory.is_tabu(&signature(&[1], &[2])));
    memory.push(signature(&[5], &[6]));

    assert!(!memory.is_tabu(&signature(&[1], &[2])));
}

#[test]
fn test_zero_capacity_forgets_immediately() {
    let mut memory = TabuMemory::new(0);
    memory.push(signature(&[1], &[2]));

    assert_eq!(memory.capacity(), 0);
    assert!(memory.is_empty());
    assert!(!memory.is_tabu(&signature(&[1], &[2])));
}
