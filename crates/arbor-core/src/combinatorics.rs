//! Lazy k-combination generation.
//!
//! [`combinations`] enumerates every selection of `k` elements from a
//! finite source, preserving the source's relative order inside each
//! selection. Enumeration is lexicographic by source position: selections
//! starting at the earliest index come first.
//!
//! The generator is lazy. Conceptually each step either takes the head of
//! the remaining source (and needs `k - 1` more from the tail) or skips it
//! (still needing `k`); that choose/skip recursion is driven from an
//! explicit work-list of partial-selection frames, so no native call
//! recursion occurs and no result is materialized before it is pulled.
//!
//! # Example
//!
//! ```rust
//! use arbor_core::combinatorics::combinations;
//!
//! let pairs: Vec<Vec<i32>> = combinations(&[1, 2, 3, 4], 2).unwrap().collect();
//! assert_eq!(pairs, vec![
//!     vec![1, 2], vec![1, 3], vec![1, 4],
//!     vec![2, 3], vec![2, 4], vec![3, 4],
//! ]);
//! ```

use crate::error::{ArborError, Result};

/// Create a lazy sequence of all `k`-element selections from `source`.
///
/// Each selection preserves the relative source order of its elements and
/// no two selections pick the same index set. `k == source.len()` yields
/// exactly one selection (the whole source); `k == 0` yields nothing.
///
/// # Errors
///
/// Returns [`ArborError::OutOfRange`] when `k` is negative or exceeds the
/// source length.
pub fn combinations<T: Clone>(source: &[T], k: i64) -> Result<Combinations<'_, T>> {
    if k < 0 || k as usize > source.len() {
        return Err(ArborError::OutOfRange(format!(
            "selection size {k} outside [0, {}]",
            source.len()
        )));
    }
    let k = k as usize;

    // A zero-size request produces an empty sequence, not one empty
    // selection: seed no frame at all.
    let stack = if k == 0 {
        Vec::new()
    } else {
        vec![Frame {
            next: 0,
            chosen: Vec::new(),
        }]
    };

    Ok(Combinations { source, k, stack })
}

/// One suspended choose/skip state: the indices selected so far and the
/// first source index still eligible for selection.
#[derive(Debug, Clone)]
struct Frame {
    next: usize,
    chosen: Vec<usize>,
}

/// Iterator over the `k`-combinations of a source slice.
///
/// Suspended state is the work-list of partial selections; dropping the
/// iterator mid-sequence simply discards it.
#[derive(Debug)]
pub struct Combinations<'a, T> {
    source: &'a [T],
    k: usize,
    stack: Vec<Frame>,
}

impl<'a, T: Clone> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        while let Some(frame) = self.stack.pop() {
            if frame.chosen.len() == self.k {
                return Some(
                    frame
                        .chosen
                        .iter()
                        .map(|&index| self.source[index].clone())
                        .collect(),
                );
            }

            // Highest index that still leaves enough elements behind it to
            // complete the selection; branches past it are infeasible.
            let need = self.k - frame.chosen.len();
            let last = self.source.len() - need;

            // Pushed in reverse so the earliest-starting extension pops
            // first, keeping enumeration lexicographic by source position.
            for index in (frame.next..=last).rev() {
                let mut chosen = frame.chosen.clone();
                chosen.push(index);
                self.stack.push(Frame {
                    next: index + 1,
                    chosen,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(source: &[i32], k: i64) -> Vec<Vec<i32>> {
        combinations(source, k).unwrap().collect()
    }

    #[test]
    fn size_one_selections() {
        assert_eq!(
            collect(&[1, 2, 3, 4], 1),
            vec![vec![1], vec![2], vec![3], vec![4]]
        );
    }

    #[test]
    fn size_two_selections() {
        assert_eq!(
            collect(&[1, 2, 3, 4], 2),
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![1, 4],
                vec![2, 3],
                vec![2, 4],
                vec![3, 4],
            ]
        );
    }

    #[test]
    fn size_three_selections() {
        assert_eq!(
            collect(&[1, 2, 3, 4], 3),
            vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 3, 4], vec![2, 3, 4]]
        );
    }

    #[test]
    fn full_size_selection_is_the_source() {
        assert_eq!(collect(&[1, 2, 3, 4], 4), vec![vec![1, 2, 3, 4]]);
    }

    #[test]
    fn zero_size_yields_nothing() {
        assert!(collect(&[1, 2, 3, 4], 0).is_empty());
        assert!(collect(&[], 0).is_empty());
    }

    #[test]
    fn oversized_selection_is_out_of_range() {
        assert!(matches!(
            combinations(&[1, 2, 3, 4], 5),
            Err(ArborError::OutOfRange(_))
        ));
        let empty: &[i32] = &[];
        assert!(matches!(
            combinations(empty, 1),
            Err(ArborError::OutOfRange(_))
        ));
    }

    #[test]
    fn negative_size_is_out_of_range() {
        assert!(matches!(
            combinations(&[1, 2, 3, 4], -1),
            Err(ArborError::OutOfRange(_))
        ));
    }

    #[test]
    fn first_selection_of_large_source_is_cheap() {
        // C(30, 15) is ~155 million selections; pulling only the first must
        // not materialize the rest.
        let source: Vec<u32> = (0..30).collect();
        let first = combinations(&source, 15).unwrap().next().unwrap();
        assert_eq!(first, (0..15).collect::<Vec<u32>>());
    }

    #[test]
    fn works_for_non_copy_elements() {
        let source = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let pairs: Vec<Vec<String>> = combinations(&source, 2).unwrap().collect();
        assert_eq!(
            pairs,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["a".to_string(), "c".to_string()],
                vec!["b".to_string(), "c".to_string()],
            ]
        );
    }
}
