//! `StopQueue` — nearest-first priority queue over pending stops.
//!
//! # Why rebuild exists
//!
//! A stop's priority is its distance from the elevator's *current* floor — a
//! moving reference point.  Keys computed at insertion time are invalidated
//! by every advancement: a queue populated at floor 10 could leave a stop at
//! floor 3 incorrectly ranked once the elevator reaches floor 8.  After each
//! move the owning cab calls [`StopQueue::rebuild`] with its new floor, which
//! re-ranks every queued stop.
//!
//! # Ordering
//!
//! Stops are totally ordered by ascending distance from the reference floor;
//! **ties break by insertion order** (earlier insert wins).  The tie-break is
//! carried as a monotonically increasing sequence number so the order is
//! deterministic and survives rebuilds.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use lift_core::Floor;

use crate::Stop;

// ── RankedStop ────────────────────────────────────────────────────────────────

/// A stop plus its derived priority key and insertion sequence number.
#[derive(Copy, Clone, Debug)]
struct RankedStop {
    distance: u16,
    seq:      u64,
    stop:     Stop,
}

// `seq` is unique per queue, so (distance, seq) is a total order and the
// stop itself never needs comparing.
impl PartialEq for RankedStop {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.seq == other.seq
    }
}
impl Eq for RankedStop {}

impl PartialOrd for RankedStop {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for RankedStop {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.distance, self.seq).cmp(&(other.distance, other.seq))
    }
}

// ── StopQueue ─────────────────────────────────────────────────────────────────

/// Min-heap of pending stops, keyed by distance from the owning elevator's
/// current floor.
#[derive(Default)]
pub struct StopQueue {
    heap:     BinaryHeap<Reverse<RankedStop>>,
    next_seq: u64,
}

impl StopQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `stop`, ranked by its distance from `reference`.
    pub fn insert(&mut self, stop: Stop, reference: Floor) {
        let ranked = RankedStop {
            distance: reference.distance_to(stop.floor),
            seq:      self.next_seq,
            stop,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(ranked));
    }

    /// The stop closest to the reference floor, if any.
    pub fn peek_nearest(&self) -> Option<&Stop> {
        self.heap.peek().map(|Reverse(r)| &r.stop)
    }

    /// Remove and return the stop closest to the reference floor.
    pub fn pop_nearest(&mut self) -> Option<Stop> {
        self.heap.pop().map(|Reverse(r)| r.stop)
    }

    /// Re-rank every queued stop against a new reference floor.
    ///
    /// O(n log n); queues are a handful of stops deep in practice.  Sequence
    /// numbers are preserved so tie-breaks stay stable across rebuilds.
    pub fn rebuild(&mut self, reference: Floor) {
        let old = std::mem::take(&mut self.heap);
        self.heap = old
            .into_iter()
            .map(|Reverse(mut ranked)| {
                ranked.distance = reference.distance_to(ranked.stop.floor);
                Reverse(ranked)
            })
            .collect();
    }

    /// `true` if any queued stop (of either kind) targets `floor`.
    pub fn contains_floor(&self, floor: Floor) -> bool {
        self.heap.iter().any(|Reverse(r)| r.stop.floor == floor)
    }

    /// Iterate queued stops in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.heap.iter().map(|Reverse(r)| &r.stop)
    }

    /// Queued floors in serving order (ascending distance, insertion-order
    /// ties).  Snapshot support; allocates.
    pub fn floors_by_distance(&self) -> Vec<Floor> {
        let mut ranked: Vec<&RankedStop> = self.heap.iter().map(|Reverse(r)| r).collect();
        ranked.sort_by_key(|r| (r.distance, r.seq));
        ranked.into_iter().map(|r| r.stop.floor).collect()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
