//! Swarm detection: 4-connected components of the bee occupancy mask.
//!
//! Diagonal contact does not join two swarms. Positions inside a swarm are
//! sorted row-major and swarms are ordered by their first position, so the
//! output only depends on the occupancy mask.

use pathfinding::matrix::Matrix;
use pathfinding::undirected::connected_components::connected_components;

use crate::grid::Position;

pub type Swarm = Vec<Position>;

pub fn detect_swarms(bees: &[Position], rows: usize, columns: usize) -> Vec<Swarm> {
    if bees.is_empty() || rows == 0 || columns == 0 {
        return Vec::new();
    }
    let mut occupied = Matrix::new(rows, columns, false);
    for &bee in bees {
        if bee.0 < rows && bee.1 < columns {
            occupied[bee] = true;
        }
    }

    let starts: Vec<Position> = bees
        .iter()
        .copied()
        .filter(|&(row, column)| row < rows && column < columns)
        .collect();
    let components = connected_components(&starts, |&pos| {
        occupied
            .neighbours(pos, false)
            .filter(|&next| occupied[next])
            .collect::<Vec<_>>()
    });

    let mut swarms: Vec<Swarm> = components
        .into_iter()
        .map(|component| {
            let mut swarm: Swarm = component.into_iter().collect();
            swarm.sort_unstable();
            swarm
        })
        .collect();
    swarms.sort_unstable_by_key(|swarm| swarm.first().copied());
    swarms
}
