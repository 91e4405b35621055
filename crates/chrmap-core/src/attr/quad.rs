// crates/chrmap-core/src/attr/quad.rs

/// Partition a `side x side` row-major grid into its `(side/2)^2`
/// 2x2 neighbor groups, row-major, each group ordered
/// [top-left, top-right, bottom-left, bottom-right].
///
/// Group (i, j) covers source cells (2i, 2j), (2i, 2j+1), (2i+1, 2j),
/// (2i+1, 2j+1). Both regroupings in the pipeline (tiles -> blocks,
/// blocks -> super-blocks) go through here so their index arithmetic
/// cannot drift apart.
///
/// `side` must be even and `cells.len()` must be `side * side`; both
/// call sites pass compile-time constants.
pub fn quad_groups<T: Copy>(cells: &[T], side: usize) -> Vec<[T; 4]> {
    debug_assert!(side % 2 == 0, "side must be even, got {side}");
    debug_assert_eq!(cells.len(), side * side);

    let half = side / 2;
    let mut out = Vec::with_capacity(half * half);
    for i in 0..half {
        for j in 0..half {
            let top = 2 * i * side + 2 * j;
            let bottom = top + side;
            out.push([cells[top], cells[top + 1], cells[bottom], cells[bottom + 1]]);
        }
    }
    out
}
