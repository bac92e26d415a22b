//! The randomized walk that carves the guaranteed traversal path from the
//! bottom row to a chosen top-row exit.

use rand_chacha::ChaCha8Rng;

use crate::rng::{coin_direction, pick_index, unit};
use crate::types::GridPos;

/// Chance gate for taking another lateral step inside a row: a uniform draw
/// above this stops the lateral run.
const LATERAL_STOP_THRESHOLD: f32 = 0.75;

/// Ordered cells visited by the carver plus the chosen exit. `end` always
/// lies on the top row and in the cell set; the sequence itself makes no
/// de-duplication promise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarvedPath {
    pub cells: Vec<GridPos>,
    pub end: GridPos,
}

/// Walk from `start` on the bottom row until the top row, then pick and
/// attach the exit cell.
///
/// Every row gets one mandatory lateral step, an optional lateral run, and
/// one vertical step, so the path touches every row and the loop always
/// terminates. Requires `width >= 2` (the mandatory step needs somewhere to
/// go); the configuration layer enforces that bound.
pub fn carve_path(rng: &mut ChaCha8Rng, start: GridPos, width: i32, height: i32) -> CarvedPath {
    let mut cells = vec![start];
    let mut current = start;

    while current.y < height - 1 {
        let dir = row_direction(rng, current.x, width);
        current.x += dir;
        cells.push(current);

        loop {
            // Re-check the edges first: the mandatory step may have landed
            // on one, and a lateral run never crosses an edge.
            if current.x == 0 || current.x == width - 1 {
                break;
            }
            if unit(rng) > LATERAL_STOP_THRESHOLD {
                break;
            }
            let next_x = current.x + dir;
            if (0..width).contains(&next_x) {
                current.x = next_x;
                cells.push(current);
            }
        }

        current.y += 1;
        cells.push(current);
    }

    let last_direction = row_direction(rng, current.x, width);
    let row_origin = current;

    let fringe = collect_final_row_fringe(&cells, row_origin, last_direction, width);
    let end = fringe[pick_index(rng, fringe.len())];
    extend_to_end(&mut cells, row_origin, last_direction, width, end);

    CarvedPath { cells, end }
}

/// Direction is forced inward at the edges so the mandatory step stays in
/// bounds; anywhere else it is a fair coin.
fn row_direction(rng: &mut ChaCha8Rng, x: i32, width: i32) -> i32 {
    if x == 0 {
        1
    } else if x == width - 1 {
        -1
    } else {
        coin_direction(rng)
    }
}

/// Top-row cells reachable from `from` in `direction` that the walk has not
/// visited yet. Falls back to `from` itself when every reachable cell is
/// already on the path, so the caller always has a candidate.
fn collect_final_row_fringe(
    cells: &[GridPos],
    from: GridPos,
    direction: i32,
    width: i32,
) -> Vec<GridPos> {
    let mut fringe = Vec::new();
    let mut cursor = from;
    while (0..width).contains(&cursor.x) {
        if !cells.contains(&cursor) {
            fringe.push(cursor);
        }
        cursor.x += direction;
    }
    if fringe.is_empty() {
        fringe.push(from);
    }
    fringe
}

/// Append the unvisited top-row cells between `from` and `end` to the path,
/// stopping at `end` or at the grid boundary.
fn extend_to_end(cells: &mut Vec<GridPos>, from: GridPos, direction: i32, width: i32, end: GridPos) {
    let mut cursor = from;
    loop {
        if !cells.contains(&cursor) {
            cells.push(cursor);
        }
        if cursor == end {
            break;
        }
        let next_x = cursor.x + direction;
        if !(0..width).contains(&next_x) {
            break;
        }
        cursor.x = next_x;
    }
}
