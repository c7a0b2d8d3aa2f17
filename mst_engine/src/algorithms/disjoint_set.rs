// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Disjoint-set forest with path compression and union by rank.

use crate::VertexId;

/// Union-Find over the vertices `0..n`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    rank: Vec<u32>,
    set_count: usize,
}

impl DisjointSet {
    /// Every element starts in its own singleton set.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            set_count: n,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked.
    #[must_use]
    pub const fn set_count(&self) -> usize {
        self.set_count
    }

    /// Representative of `x`'s set.
    ///
    /// Every node on the path from `x` is re-pointed directly at the
    /// representative. Iterative, so adversarial chains cannot grow the stack.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets whose representatives are `x` and `y`.
    ///
    /// Callers pass representatives (results of `find`). The lower-ranked
    /// root goes under the higher-ranked one; on a tie `y` goes under `x`
    /// and `x`'s rank grows by one. Merging a root with itself does nothing.
    pub fn union(&mut self, x: VertexId, y: VertexId) {
        debug_assert_eq!(self.parent[x], x, "union expects representatives");
        debug_assert_eq!(self.parent[y], y, "union expects representatives");
        if x == y {
            return;
        }

        match self.rank[x].cmp(&self.rank[y]) {
            std::cmp::Ordering::Less => {
                self.parent[x] = y;
            },
            std::cmp::Ordering::Greater => {
                self.parent[y] = x;
            },
            std::cmp::Ordering::Equal => {
                self.parent[y] = x;
                self.rank[x] += 1;
            },
        }
        self.set_count -= 1;
    }

    /// Whether `a` and `b` share a representative.
    pub fn same_set(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }

    #[cfg(test)]
    fn parent_of(&self, x: VertexId) -> VertexId {
        self.parent[x]
    }

    #[cfg(test)]
    fn rank_of(&self, x: VertexId) -> u32 {
        self.rank[x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_singletons() {
        let mut ds = DisjointSet::new(5);
        assert_eq!(ds.len(), 5);
        assert_eq!(ds.set_count(), 5);
        for i in 0..5 {
            assert_eq!(ds.find(i), i);
        }
    }

    #[test]
    fn test_empty() {
        let ds = DisjointSet::new(0);
        assert!(ds.is_empty());
        assert_eq!(ds.set_count(), 0);
    }

    #[test]
    fn test_union_tie_attaches_second_under_first() {
        let mut ds = DisjointSet::new(2);
        ds.union(0, 1);
        assert_eq!(ds.parent_of(1), 0);
        assert_eq!(ds.rank_of(0), 1);
        assert_eq!(ds.rank_of(1), 0);
        assert_eq!(ds.set_count(), 1);
    }

    #[test]
    fn test_union_by_rank_lower_goes_under_higher() {
        let mut ds = DisjointSet::new(3);
        ds.union(0, 1); // rank[0] = 1
        let r = ds.find(0);
        ds.union(2, r); // rank[2] = 0 < 1, so 2 goes under 0
        assert_eq!(ds.parent_of(2), 0);
        assert_eq!(ds.rank_of(0), 1);
        assert_eq!(ds.find(2), 0);
    }

    #[test]
    fn test_union_same_root_is_noop() {
        let mut ds = DisjointSet::new(3);
        ds.union(1, 1);
        assert_eq!(ds.set_count(), 3);
        assert_eq!(ds.rank_of(1), 0);
    }

    #[test]
    fn test_find_compresses_whole_path() {
        let mut ds = DisjointSet::new(4);
        // Two rank-1 trees joined at their roots.
        ds.union(0, 1);
        ds.union(2, 3);
        let (a, b) = (ds.find(0), ds.find(2));
        ds.union(a, b);
        // 3 -> 2 -> 0
        assert_eq!(ds.parent_of(3), 2);
        assert_eq!(ds.find(3), 0);
        assert_eq!(ds.parent_of(3), 0);
        assert_eq!(ds.parent_of(2), 0);
    }

    #[test]
    fn test_same_set() {
        let mut ds = DisjointSet::new(4);
        let (a, b) = (ds.find(0), ds.find(1));
        ds.union(a, b);
        assert!(ds.same_set(0, 1));
        assert!(!ds.same_set(0, 2));
        assert_eq!(ds.set_count(), 3);
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let n = 200_000;
        let mut ds = DisjointSet::new(n);
        for i in 1..n {
            let (a, b) = (ds.find(0), ds.find(i));
            ds.union(a, b);
        }
        assert_eq!(ds.set_count(), 1);
        assert_eq!(ds.find(n - 1), ds.find(0));
    }
}
