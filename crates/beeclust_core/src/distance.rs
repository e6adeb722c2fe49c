//! Multi-source breadth-first distance transform.
//!
//! Distances are 8-directional hop counts (diagonal steps count as one) to the
//! nearest source. Walls are never entered; every other cell, devices and bees
//! included, is traversable. Cells that no source can reach stay `None`.

use std::collections::VecDeque;

use pathfinding::matrix::Matrix;
use tracing::trace;

use crate::cell::Cell;
use crate::grid::{Grid, Position};

/// Per-cell hop count to the nearest source, `None` where unreachable.
pub type DistanceMap = Matrix<Option<u32>>;

pub fn distance_map(grid: &Grid, sources: &[Position]) -> DistanceMap {
    let mut distances: DistanceMap = Matrix::new(grid.rows(), grid.columns(), None);
    let mut queue = VecDeque::with_capacity(sources.len());

    for &source in sources {
        if !grid.in_bounds(source) || distances[source].is_some() {
            continue;
        }
        distances[source] = Some(0);
        queue.push_back(source);
    }

    let mut dequeued = 0usize;
    while let Some(current) = queue.pop_front() {
        dequeued += 1;
        let Some(here) = distances[current] else {
            continue;
        };
        let candidate = here + 1;
        for next in grid.neighbors8(current) {
            if grid.cell_at(next) == Some(Cell::Wall) {
                continue;
            }
            // FIFO order makes the first recorded distance minimal; the
            // comparison only guards against revisiting.
            if matches!(distances[next], Some(known) if known <= candidate) {
                continue;
            }
            distances[next] = Some(candidate);
            queue.push_back(next);
        }
    }

    trace!(sources = sources.len(), dequeued, "distance transform done");
    distances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Device;

    /// Brute-force Bellman-Ford style relaxation used as a reference.
    fn relaxed_distances(grid: &Grid, sources: &[Position]) -> DistanceMap {
        let mut distances: DistanceMap = Matrix::new(grid.rows(), grid.columns(), None);
        for &s in sources {
            distances[s] = Some(0);
        }
        loop {
            let mut changed = false;
            for pos in grid.positions().collect::<Vec<_>>() {
                if grid.cell_at(pos) == Some(Cell::Wall) {
                    continue;
                }
                let best = grid
                    .neighbors8(pos)
                    .filter_map(|n| distances[n])
                    .min()
                    .map(|d| d + 1);
                if let Some(best) = best {
                    if distances[pos].map_or(true, |d| best < d) {
                        distances[pos] = Some(best);
                        changed = true;
                    }
                }
            }
            if !changed {
                return distances;
            }
        }
    }

    #[test]
    fn open_grid_gives_chebyshev_distance() {
        let grid = Grid::empty(5, 5).unwrap();
        let distances = distance_map(&grid, &[(2, 2)]);
        for (row, column) in grid.positions() {
            let expected = row.abs_diff(2).max(column.abs_diff(2)) as u32;
            assert_eq!(distances[(row, column)], Some(expected));
        }
    }

    #[test]
    fn walls_are_detoured_and_left_unvisited() {
        // A wall column with a gap at the bottom.
        let grid = Grid::from_codes(&[
            vec![6, 5, 0],
            vec![0, 5, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        let distances = distance_map(&grid, &grid.devices(Device::Heater));
        assert_eq!(distances[(0, 0)], Some(0));
        assert_eq!(distances[(0, 1)], None);
        assert_eq!(distances[(1, 1)], None);
        assert_eq!(distances[(2, 1)], Some(2));
        assert_eq!(distances[(1, 2)], Some(3));
        assert_eq!(distances[(0, 2)], Some(4));
    }

    #[test]
    fn enclosed_cells_are_unreachable() {
        let grid = Grid::from_codes(&[
            vec![7, 0, 5, 0],
            vec![0, 0, 5, 0],
            vec![5, 5, 5, 0],
        ])
        .unwrap();
        let distances = distance_map(&grid, &[(0, 3)]);
        assert_eq!(distances[(0, 0)], None);
        assert_eq!(distances[(1, 1)], None);
        assert_eq!(distances[(2, 3)], Some(2));
    }

    #[test]
    fn no_sources_leaves_everything_unvisited() {
        let grid = Grid::empty(3, 4).unwrap();
        let distances = distance_map(&grid, &[]);
        assert!(grid.positions().all(|p| distances[p].is_none()));
    }

    #[test]
    fn nearest_of_several_sources_wins() {
        let grid = Grid::empty(1, 7).unwrap();
        let distances = distance_map(&grid, &[(0, 0), (0, 6)]);
        let row: Vec<_> = (0..7).map(|c| distances[(0, c)]).collect();
        assert_eq!(
            row,
            vec![Some(0), Some(1), Some(2), Some(3), Some(2), Some(1), Some(0)]
        );
    }

    #[test]
    fn matches_reference_relaxation_on_a_maze() {
        let grid = Grid::from_codes(&[
            vec![0, 0, 0, 5, 0, 0, 0],
            vec![0, 5, 0, 5, 0, 5, 0],
            vec![0, 5, 0, 0, 0, 5, 0],
            vec![0, 5, 5, 5, 5, 5, 0],
            vec![6, 0, 0, 0, 0, 5, 7],
            vec![5, 5, 5, 5, 0, 5, 0],
        ])
        .unwrap();
        for kind in [Device::Heater, Device::Cooler] {
            let sources = grid.devices(kind);
            assert_eq!(
                distance_map(&grid, &sources),
                relaxed_distances(&grid, &sources)
            );
        }
    }
}
