//! Cell codes: the tagged value stored at every grid position.
//!
//! Static variants (`Empty`, `Wall`, `Heater`, `Cooler`) describe the layout;
//! the two dynamic variants (`Bee`, `Waiting`) describe a bee and its state.
//! The numeric encoding used by grid files and snapshots is:
//!
//! | code | cell |
//! |---|---|
//! | `0` | `Empty` |
//! | `1..=4` | `Bee` facing Up / Right / Down / Left |
//! | `5` | `Wall` |
//! | `6` | `Heater` |
//! | `7` | `Cooler` |
//! | `-(n + 1)` | `Waiting { remaining: n }` |

use serde::{Deserialize, Serialize};

pub const CODE_EMPTY: i64 = 0;
pub const CODE_WALL: i64 = 5;
pub const CODE_HEATER: i64 = 6;
pub const CODE_COOLER: i64 = 7;

/// Heading of a moving bee, in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// 1-based index (Up = 1 ... Left = 4), matching the numeric cell codes.
    pub fn index(self) -> i64 {
        match self {
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
            Direction::Left => 4,
        }
    }

    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(Direction::Up),
            2 => Some(Direction::Right),
            3 => Some(Direction::Down),
            4 => Some(Direction::Left),
            _ => None,
        }
    }

    /// The direction after a 180° turn.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Row/column step for one move in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// The three directions other than `self`, in [`Direction::ALL`] order.
    pub fn others(self) -> [Direction; 3] {
        let mut out = [Direction::Up; 3];
        let mut i = 0;
        for dir in Direction::ALL {
            if dir != self {
                out[i] = dir;
                i += 1;
            }
        }
        out
    }
}

/// Static device kinds that feed the heat field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Heater,
    Cooler,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Heater,
    Cooler,
    /// A bee eligible to move this tick.
    Bee { facing: Direction },
    /// A stopped bee; picks a new random direction once `remaining` reaches 0.
    Waiting { remaining: u32 },
}

impl Cell {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            CODE_EMPTY => Some(Cell::Empty),
            1..=4 => Direction::from_index(code).map(|facing| Cell::Bee { facing }),
            CODE_WALL => Some(Cell::Wall),
            CODE_HEATER => Some(Cell::Heater),
            CODE_COOLER => Some(Cell::Cooler),
            c if c < 0 => {
                let remaining = u32::try_from(-(c + 1)).ok()?;
                Some(Cell::Waiting { remaining })
            }
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Cell::Empty => CODE_EMPTY,
            Cell::Bee { facing } => facing.index(),
            Cell::Wall => CODE_WALL,
            Cell::Heater => CODE_HEATER,
            Cell::Cooler => CODE_COOLER,
            Cell::Waiting { remaining } => -(i64::from(remaining) + 1),
        }
    }

    /// True for `Bee` and `Waiting` cells.
    pub fn is_bee(self) -> bool {
        matches!(self, Cell::Bee { .. } | Cell::Waiting { .. })
    }

    /// True for cells a bee cannot enter and bounces off: walls and devices.
    pub fn is_obstacle(self) -> bool {
        matches!(self, Cell::Wall | Cell::Heater | Cell::Cooler)
    }

    pub fn device(self) -> Option<Device> {
        match self {
            Cell::Heater => Some(Device::Heater),
            Cell::Cooler => Some(Device::Cooler),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_cover_every_variant() {
        let cells = [
            Cell::Empty,
            Cell::Wall,
            Cell::Heater,
            Cell::Cooler,
            Cell::Bee { facing: Direction::Up },
            Cell::Bee { facing: Direction::Left },
            Cell::Waiting { remaining: 0 },
            Cell::Waiting { remaining: 17 },
        ];
        for cell in cells {
            assert_eq!(Cell::from_code(cell.code()), Some(cell));
        }
    }

    #[test]
    fn waiting_zero_is_minus_one() {
        assert_eq!(Cell::Waiting { remaining: 0 }.code(), -1);
        assert_eq!(Cell::from_code(-3), Some(Cell::Waiting { remaining: 2 }));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Cell::from_code(8), None);
        assert_eq!(Cell::from_code(100), None);
        assert_eq!(Cell::from_code(i64::MIN), None);
    }

    #[test]
    fn opposite_is_a_half_turn() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn others_excludes_self() {
        for dir in Direction::ALL {
            let others = dir.others();
            assert!(!others.contains(&dir));
            assert_eq!(others.len(), 3);
        }
        assert_eq!(
            Direction::Right.others(),
            [Direction::Up, Direction::Down, Direction::Left]
        );
    }

    #[test]
    fn obstacles_and_bees() {
        assert!(Cell::Wall.is_obstacle());
        assert!(Cell::Heater.is_obstacle());
        assert!(Cell::Cooler.is_obstacle());
        assert!(!Cell::Empty.is_obstacle());
        assert!(Cell::Waiting { remaining: 3 }.is_bee());
        assert!(Cell::Bee { facing: Direction::Down }.is_bee());
        assert!(!Cell::Heater.is_bee());
    }
}
