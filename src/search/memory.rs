//! Recency-based tabu memory.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::tour::Tour;

/// The city values a move exchanged, read off the positions where two tours differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSignature {
    /// Values held by the current tour at the differing positions
    pub removed: Vec<usize>,
    /// Values held by the candidate tour at the same positions
    pub inserted: Vec<usize>,
}

impl MoveSignature {
    /// Compare `current` and `candidate` left to right and keep the first
    /// `segment_length` differing positions.
    pub fn between(current: &Tour, candidate: &Tour, segment_length: usize) -> Self {
        let mut removed = Vec::with_capacity(segment_length);
        let mut inserted = Vec::with_capacity(segment_length);

        for (&from, &to) in current.cities().iter().zip(candidate.cities()) {
            if from != to {
                removed.push(from);
                inserted.push(to);
                if removed.len() == segment_length {
                    break;
                }
            }
        }

        MoveSignature { removed, inserted }
    }

    /// The same exchange seen from the other side.
    pub fn reversed(&self) -> Self {
        MoveSignature {
            removed: self.inserted.clone(),
            inserted: self.removed.clone(),
        }
    }
}

/// Bounded FIFO of recently applied move signatures.
#[derive(Debug, Clone)]
pub struct TabuMemory {
    capacity: usize,
    entries: VecDeque<MoveSignature>,
}

impl TabuMemory {
    pub fn new(capacity: usize) -> Self {
        TabuMemory {
            capacity,
            entries: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Check if the signature, in either orientation, is remembered.
    pub fn is_tabu(&self, signature: &MoveSignature) -> bool {
        let reversed = signature.reversed();
        self.entries
            .iter()
            .any(|entry| *entry == *signature || *entry == reversed)
    }

    /// Remember a signature, evicting the oldest entries while over capacity.
    pub fn push(&mut self, signature: MoveSignature) {
        self.entries.push_back(signature);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &MoveSignature> {
        self.entries.iter()
    }
}
