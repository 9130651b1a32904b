//! Pairs consecutive turns of the same unit into training examples.
//!
//! Items are grouped by acting unit, in first-appearance order. Within a
//! group, insertion order is kept and every adjacent pair becomes one
//! example: turns [t0, t1, t2] give (t0, t1) and (t1, t2), never (t0, t2).

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::action_state::ActionAndState;
use crate::schemas::UnitState;

/// Added to the largest observed coordinate when inferring board size.
pub const BOARD_MARGIN: i32 = 5;

/// Coordinates above this are treated as off-board placeholders.
pub const MAX_BOARD_COORD: i32 = 10_000;

/// Index-aligned (state-before, state-after) pairs.
///
/// Cloning copies the pair lists; the items themselves are shared.
#[derive(Debug, Clone, Default)]
pub struct TrainingDataset {
    current: Vec<Arc<ActionAndState>>,
    next: Vec<Arc<ActionAndState>>,
}

impl TrainingDataset {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Arc<ActionAndState>>,
    {
        let mut slot_of: HashMap<i32, usize> = HashMap::new();
        let mut groups: Vec<Vec<Arc<ActionAndState>>> = Vec::new();
        let mut dropped = 0usize;

        for item in items {
            if item.acting_unit_state().is_none() {
                dropped += 1;
                continue;
            }
            let slot = *slot_of.entry(item.entity_id()).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(item);
        }

        let mut current = Vec::new();
        let mut next = Vec::new();
        for group in &groups {
            for window in group.windows(2) {
                current.push(Arc::clone(&window[0]));
                next.push(Arc::clone(&window[1]));
            }
        }

        debug!(
            "dataset: {} units, {} pairs, {} items without acting unit state",
            groups.len(),
            current.len(),
            dropped
        );
        TrainingDataset { current, next }
    }

    /// Builds from owned items.
    pub fn from_items(items: Vec<ActionAndState>) -> Self {
        Self::new(items.into_iter().map(Arc::new))
    }

    fn from_pairs(pairs: impl IntoIterator<Item = usize>, source: &TrainingDataset) -> Self {
        let (current, next) = pairs
            .into_iter()
            .map(|i| (Arc::clone(&source.current[i]), Arc::clone(&source.next[i])))
            .unzip();
        TrainingDataset { current, next }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.current.len().min(self.next.len())
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() || self.next.is_empty()
    }

    /// Yields `current[0], next[0], current[1], next[1], ...`.
    pub fn iter(&self) -> Iter<'_> {
        Iter { dataset: self, pos: 0 }
    }

    /// Yields each pair as `(current, next)`.
    pub fn pairs(&self) -> impl Iterator<Item = (&ActionAndState, &ActionAndState)> + '_ {
        self.current
            .iter()
            .zip(self.next.iter())
            .map(|(c, n)| (c.as_ref(), n.as_ref()))
    }

    /// The state-before side of every pair.
    pub fn current_items(&self) -> &[Arc<ActionAndState>] {
        &self.current
    }

    /// The state-after side of every pair.
    pub fn next_items(&self) -> &[Arc<ActionAndState>] {
        &self.next
    }

    /// Draws `batch` distinct pairs. The result is in draw order, not in
    /// this dataset's order.
    ///
    /// # Panics
    ///
    /// Panics if `batch > self.len()`.
    pub fn sample<R: Rng + ?Sized>(&self, batch: usize, rng: &mut R) -> TrainingDataset {
        assert!(
            batch <= self.len(),
            "batch size {} exceeds dataset size {}",
            batch,
            self.len()
        );
        Self::from_pairs(sample_indices(self.len(), batch, rng), self)
    }

    /// Like [`sample`](Self::sample) but keeps the drawn pairs in their
    /// original relative order.
    pub fn sample_sorted<R: Rng + ?Sized>(&self, batch: usize, rng: &mut R) -> TrainingDataset {
        assert!(
            batch <= self.len(),
            "batch size {} exceeds dataset size {}",
            batch,
            self.len()
        );
        let mut indices = sample_indices(self.len(), batch, rng);
        indices.sort_unstable();
        Self::from_pairs(indices, self)
    }

    /// [`sample`](Self::sample) with a freshly seeded generator.
    pub fn sample_with_entropy(&self, batch: usize) -> TrainingDataset {
        let mut rng = SmallRng::from_entropy();
        self.sample(batch, &mut rng)
    }

    /// Inferred board width: largest on-board x plus a margin.
    pub fn board_width(&self) -> i32 {
        self.bound(|u: &UnitState| u.x)
    }

    /// Inferred board height: largest on-board y plus a margin.
    pub fn board_height(&self) -> i32 {
        self.bound(|u: &UnitState| u.y)
    }

    fn bound(&self, coord: fn(&UnitState) -> i32) -> i32 {
        self.current
            .iter()
            .chain(self.next.iter())
            .flat_map(|item| item.board_units())
            .map(coord)
            .filter(|v| (0..=MAX_BOARD_COORD).contains(v))
            .max()
            .unwrap_or(0)
            + BOARD_MARGIN
    }
}

/// Draws `k` distinct indices from `0..n` by repeatedly taking a uniformly
/// chosen remaining candidate out of the pool.
///
/// # Panics
///
/// Panics if `k > n`.
pub fn sample_indices<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Vec<usize> {
    assert!(k <= n, "cannot draw {} indices from {}", k, n);
    let mut pool: Vec<usize> = (0..n).collect();
    let mut drawn = Vec::with_capacity(k);
    for _ in 0..k {
        let pick = rng.gen_range(0..pool.len());
        drawn.push(pool.swap_remove(pick));
    }
    drawn
}

/// Interleaving iterator over a [`TrainingDataset`].
pub struct Iter<'a> {
    dataset: &'a TrainingDataset,
    pos: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ActionAndState;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.pos / 2;
        if pair >= self.dataset.len() {
            return None;
        }
        let side = if self.pos % 2 == 0 { &self.dataset.current } else { &self.dataset.next };
        self.pos += 1;
        Some(side[pair].as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.dataset.len() * 2).saturating_sub(self.pos);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TrainingDataset {
    type Item = &'a ActionAndState;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
