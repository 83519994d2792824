//! A priority queue which supports lowering priorities in place.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use ordered_float::OrderedFloat;

type Priority = OrderedFloat<f64>;

/// Heap entry. Entries whose priority no longer matches the live
/// priority of their item are stale, and skipped when popped.
#[derive(Debug)]
struct FrontierElement<T> {
    priority: Priority,
    rank: u64,
    item: T,
}

impl<T> PartialEq for FrontierElement<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.rank.eq(&other.rank)
    }
}

impl<T> Eq for FrontierElement<T> {}

impl<T> Ord for FrontierElement<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.rank.cmp(&other.rank))
            .reverse()
    }
}

impl<T> PartialOrd for FrontierElement<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue of distinct items.
///
/// Items with equal priority come out in the order they were
/// first inserted. An item is held at most once: inserting it
/// again, or calling [PriorityFrontier::decrease_priority],
/// only ever lowers its priority.
#[derive(Debug)]
pub struct PriorityFrontier<T>
where
    T: Copy + Eq + Hash + Debug,
{
    queue: BinaryHeap<FrontierElement<T>>,
    live: HashMap<T, (Priority, u64)>,
    inserted: u64,
}

impl<T> Default for PriorityFrontier<T>
where
    T: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        PriorityFrontier {
            queue: BinaryHeap::new(),
            live: HashMap::new(),
            inserted: 0,
        }
    }
}

impl<T> PriorityFrontier<T>
where
    T: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the frontier.
    ///
    /// If the item is already present this acts as
    /// [PriorityFrontier::decrease_priority] and returns false.
    pub fn insert(&mut self, item: T, priority: f64) -> bool {
        if self.live.contains_key(&item) {
            self.decrease_priority(item, priority);
            return false;
        }

        let rank = self.inserted;
        self.inserted += 1;

        let priority = OrderedFloat(priority);
        self.live.insert(item, (priority, rank));
        self.queue.push(FrontierElement {
            priority,
            rank,
            item,
        });
        true
    }

    /// Remove the item with the lowest priority, returning it along
    /// with that priority.
    pub fn extract_min(&mut self) -> Option<(T, f64)> {
        while let Some(element) = self.queue.pop() {
            match self.live.get(&element.item) {
                Some(&(priority, rank)) if priority == element.priority && rank == element.rank => {
                    self.live.remove(&element.item);
                    return Some((element.item, priority.into_inner()));
                }
                _ => continue,
            }
        }
        None
    }

    /// Lower the priority of an item already in the frontier.
    ///
    /// Does nothing, and returns false, unless the item is present and
    /// the new priority is strictly lower than its current one.
    pub fn decrease_priority(&mut self, item: T, priority: f64) -> bool {
        let priority = OrderedFloat(priority);
        let rank = match self.live.get_mut(&item) {
            Some((current, rank)) if priority < *current => {
                *current = priority;
                *rank
            }
            _ => return false,
        };

        self.queue.push(FrontierElement {
            priority,
            rank,
            item,
        });
        true
    }

    /// Current priority of an item, if it is in the frontier.
    pub fn priority(&self, item: T) -> Option<f64> {
        self.live.get(&item).map(|(p, _)| p.into_inner())
    }

    pub fn contains(&self, item: T) -> bool {
        self.live.contains_key(&item)
    }

    /// Number of items in the frontier.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
