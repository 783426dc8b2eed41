//! Pure bit-arithmetic over leaf count `n` and node position `p`.
//!
//! No tree is ever materialized: every topology question here reduces to
//! shifts and masks on `n` and `p`. `total_rows` is the height of the
//! bounding perfect tree and is recomputed from `n` by the caller via
//! [`tree_rows`] wherever it is needed.

/// Height of the bounding perfect tree for a leaf count `n`: `0` for `n <=
/// 1`, otherwise `ceil(log2(n))`, equivalently the bit length of `n - 1`.
pub fn tree_rows(n: u64) -> u32 {
    if n == 0 {
        return 0;
    }
    64 - (n - 1).leading_zeros()
}

/// Parent of `pos` at a row below `total_rows`.
pub fn parent(pos: u64, total_rows: u32) -> u64 {
    (pos >> 1) | (1 << total_rows)
}

/// The row `pos` lies in: the count of consecutive `1` bits starting at
/// bit `total_rows` of `pos` and moving downward.
pub fn row_of(pos: u64, total_rows: u32) -> u32 {
    let mut row = 0;
    while row < total_rows && (pos >> (total_rows - row)) & 1 == 1 {
        row += 1;
    }
    row
}

/// Highest position occupied by row `row` in a bounding tree of height
/// `total_rows`. Positions greater than this lie in a higher row.
pub fn row_maxpos(row: u32, total_rows: u32) -> u64 {
    let mask = (1u64 << (total_rows + 1)) - 1;
    ((mask << (total_rows - row)) & mask) - 1
}

/// The canonical position a root at `row` occupies given leaf count `n`
/// and bounding height `total_rows`, regardless of whether that root is
/// actually present (see [`root_present`]).
pub fn root_position(n: u64, row: u32, total_rows: u32) -> u64 {
    let mask = (1u64 << (total_rows + 1)) - 1;
    let before = n & (mask << (row + 1));
    let shifted = (before >> row) | (mask << (total_rows + 1 - row));
    shifted & mask
}

/// Whether a perfect subtree of height `row` currently exists in a forest
/// of `n` leaves: bit `row` of `n` is set.
pub fn root_present(n: u64, row: u32) -> bool {
    (n >> row) & 1 == 1
}

/// Whether `pos` is the root of a currently-present subtree.
pub fn is_root(pos: u64, n: u64, total_rows: u32) -> bool {
    let row = row_of(pos, total_rows);
    root_present(n, row) && root_position(n, row, total_rows) == pos
}

/// Whether `pos` is a left child (the even-positioned sibling).
pub fn is_left(pos: u64) -> bool {
    pos & 1 == 0
}

/// The position of `pos`'s right sibling. Only meaningful when `pos` is a
/// left child; for a right child this returns `pos` itself.
pub fn right_sibling(pos: u64) -> u64 {
    pos | 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_rows_boundaries() {
        assert_eq!(tree_rows(0), 0);
        assert_eq!(tree_rows(1), 0);
        assert_eq!(tree_rows(2), 1);
        assert_eq!(tree_rows(3), 2);
        assert_eq!(tree_rows(4), 2);
        assert_eq!(tree_rows(5), 3);
        assert_eq!(tree_rows(8), 3);
        assert_eq!(tree_rows(9), 4);
    }

    #[test]
    fn full_tree_single_root() {
        // n = 8: one root at row 3, position 14 (2^4 - 2).
        let n = 8;
        let t = tree_rows(n);
        assert_eq!(t, 3);
        assert!(root_present(n, 3));
        let pos = root_position(n, 3, t);
        assert!(is_root(pos, n, t));
        assert_eq!(row_of(pos, t), 3);
        // No other row has a present root.
        for r in 0..3 {
            assert!(!root_present(n, r));
        }
    }

    #[test]
    fn three_leaves_two_roots() {
        // n = 3 = 0b11: a height-1 root and a height-0 (leaf) root.
        let n = 3;
        let t = tree_rows(n);
        assert_eq!(t, 2);
        assert!(root_present(n, 0));
        assert!(root_present(n, 1));
        assert!(!root_present(n, 2));

        let tall = root_position(n, 1, t);
        let short = root_position(n, 0, t);
        assert!(is_root(tall, n, t));
        assert!(is_root(short, n, t));
        assert_ne!(tall, short);
        // Tall root occupies a higher row, hence a strictly larger position.
        assert!(tall > short);
    }

    #[test]
    fn row_of_matches_row_maxpos_boundaries() {
        for total_rows in 0u32..8 {
            for row in 0..=total_rows {
                let maxpos = row_maxpos(row, total_rows);
                assert_eq!(row_of(maxpos, total_rows), row, "row {row} of {total_rows}");
                if row < total_rows {
                    assert_eq!(row_of(maxpos + 1, total_rows), row + 1);
                }
            }
        }
    }

    #[test]
    fn parent_moves_up_exactly_one_row() {
        for total_rows in 1u32..8 {
            for pos in 0..(1u64 << total_rows) {
                let row = row_of(pos, total_rows);
                if row >= total_rows {
                    continue;
                }
                let p = parent(pos, total_rows);
                assert_eq!(row_of(p, total_rows), row + 1);
            }
        }
    }

    #[test]
    fn root_count_matches_popcount_and_positions_are_distinct_and_ascend() {
        for n in 0u64..300 {
            let t = tree_rows(n);
            let mut positions_by_row = Vec::new();
            for row in 0..=t {
                if root_present(n, row) {
                    positions_by_row.push((row, root_position(n, row, t)));
                    assert!(is_root(root_position(n, row, t), n, t));
                }
            }
            assert_eq!(positions_by_row.len() as u32, n.count_ones());

            // Ascending row implies ascending position (shortest to tallest).
            for w in positions_by_row.windows(2) {
                assert!(w[0].0 < w[1].0);
                assert!(w[0].1 < w[1].1, "n={n}: {:?}", positions_by_row);
            }

            // No position is claimed by two different rows.
            let mut positions: Vec<_> = positions_by_row.iter().map(|(_, p)| *p).collect();
            positions.sort_unstable();
            positions.dedup();
            assert_eq!(positions.len(), positions_by_row.len());
        }
    }

    #[test]
    fn is_left_and_right_sibling() {
        assert!(is_left(0));
        assert!(!is_left(1));
        assert_eq!(right_sibling(4), 5);
        assert_eq!(right_sibling(5), 5);
    }
}
