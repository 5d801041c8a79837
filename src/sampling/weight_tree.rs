//! Fenwick (binary indexed) tree over integer weights.
//!
//! Supports drawing an index with probability proportional to its current weight and
//! decrementing that weight, both in `O(log n)`.

/// Prefix-sum tree over non-negative integer weights.
#[derive(Debug, Clone)]
pub struct WeightTree {
    /// 1-based Fenwick layout; `tree[0]` is unused.
    tree: Vec<u64>,
    total: u64,
}

impl WeightTree {
    /// Builds a tree holding a copy of `weights` in `O(n)`.
    pub fn new(weights: &[u64]) -> Self {
        let n = weights.len();
        let mut tree = vec![0u64; n + 1];
        tree[1..].copy_from_slice(weights);

        for i in 1..=n {
            let parent = i + (i & i.wrapping_neg());
            if parent <= n {
                tree[parent] += tree[i];
            }
        }

        Self {
            tree,
            total: weights.iter().sum(),
        }
    }

    /// Number of weights stored.
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all remaining weights.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Current weight of the entry at `index`.
    pub fn weight(&self, index: usize) -> u64 {
        self.prefix_sum(index + 1) - self.prefix_sum(index)
    }

    /// Sum of the first `count` weights.
    pub fn prefix_sum(&self, count: usize) -> u64 {
        let mut sum = 0;
        let mut idx = count;
        while idx > 0 {
            sum += self.tree[idx];
            idx -= idx & idx.wrapping_neg();
        }
        sum
    }

    /// Finds the entry whose cumulative weight range contains `target`,
    /// i.e. the smallest `index` with `prefix_sum(index + 1) > target`.
    ///
    /// Returns [`None`] if `target >= total()`.
    pub fn find(&self, target: u64) -> Option<usize> {
        if target >= self.total {
            return None;
        }

        let n = self.len();
        let mut position = 0;
        let mut remaining = target;
        let mut step = if n == 0 { 0 } else { 1 << n.ilog2() };
        while step > 0 {
            let next = position + step;
            if next <= n && self.tree[next] <= remaining {
                position = next;
                remaining -= self.tree[next];
            }
            step >>= 1;
        }

        Some(position)
    }

    /// Decrements the weight at `index` by one.
    ///
    /// The caller guarantees the weight is positive; any index returned by
    /// [`find`](Self::find) satisfies this.
    pub fn decrement(&mut self, index: usize) {
        debug_assert!(self.weight(index) > 0, "weight of {} is already zero", index);

        let mut idx = index + 1;
        while idx < self.tree.len() {
            self.tree[idx] -= 1;
            idx += idx & idx.wrapping_neg();
        }
        self.total -= 1;
    }
}
