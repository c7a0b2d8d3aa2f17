// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
#![no_main]

//! Fuzz target for the disjoint-set forest.
//!
//! Applies arbitrary merge sequences and checks the set count and membership
//! against a naive component labelling.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mst_engine::DisjointSet;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    size: u8,
    merges: Vec<(u8, u8)>,
}

fuzz_target!(|input: FuzzInput| {
    let n = usize::from(input.size).max(1);
    let mut sets = DisjointSet::new(n);
    let mut naive: Vec<usize> = (0..n).collect();

    for &(a, b) in input.merges.iter().take(1024) {
        let (a, b) = (usize::from(a) % n, usize::from(b) % n);
        let (ra, rb) = (sets.find(a), sets.find(b));
        sets.union(ra, rb);

        let (la, lb) = (naive[a], naive[b]);
        if la != lb {
            for label in &mut naive {
                if *label == lb {
                    *label = la;
                }
            }
        }
    }

    let mut labels = naive.clone();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(sets.set_count(), labels.len());

    for i in 0..n {
        for j in 0..n {
            assert_eq!(sets.same_set(i, j), naive[i] == naive[j]);
        }
    }
});
