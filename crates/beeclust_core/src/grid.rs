//! Grid: fixed-size 2D array of cell codes.
//!
//! Holds the static layout (walls, heaters, coolers) and the dynamic bee
//! occupancy. Storage is a [`pathfinding::matrix::Matrix`] indexed by
//! `(row, column)`. [`Grid::set_cell`] is the only mutation path.

use pathfinding::matrix::Matrix;

use crate::cell::{Cell, Device, Direction};
use crate::error::{BuildError, ConfigurationError, InvalidCellCodeError};

/// `(row, column)` grid coordinate.
pub type Position = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Matrix<Cell>,
}

impl Grid {
    /// Grid of `rows` x `columns` empty cells.
    pub fn empty(rows: usize, columns: usize) -> Result<Self, ConfigurationError> {
        if rows == 0 || columns == 0 {
            return Err(ConfigurationError::EmptyGrid { rows });
        }
        Ok(Self {
            cells: Matrix::new(rows, columns, Cell::Empty),
        })
    }

    /// Build from row vectors. Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ConfigurationError> {
        let columns = check_shape(&rows)?;
        let row_count = rows.len();
        let data: Vec<Cell> = rows.into_iter().flatten().collect();
        let cells = Matrix::from_vec(row_count, columns, data)
            .map_err(|_| ConfigurationError::EmptyGrid { rows: row_count })?;
        Ok(Self { cells })
    }

    /// Build from the numeric cell encoding (see [`crate::cell`]).
    pub fn from_codes(codes: &[Vec<i64>]) -> Result<Self, BuildError> {
        check_shape(codes)?;
        let mut rows = Vec::with_capacity(codes.len());
        for (row, line) in codes.iter().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (column, &code) in line.iter().enumerate() {
                let cell = Cell::from_code(code)
                    .ok_or(InvalidCellCodeError { row, column, code })?;
                cells.push(cell);
            }
            rows.push(cells);
        }
        Ok(Self::from_rows(rows)?)
    }

    pub fn rows(&self) -> usize {
        self.cells.rows
    }

    pub fn columns(&self) -> usize {
        self.cells.columns
    }

    pub fn in_bounds(&self, (row, column): Position) -> bool {
        row < self.rows() && column < self.columns()
    }

    /// Cell at `pos`, or `None` outside the grid.
    pub fn cell_at(&self, pos: Position) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[pos])
        } else {
            None
        }
    }

    /// Overwrite the cell at `pos` and return the previous value.
    /// Out-of-bounds writes are ignored and return `None`.
    pub fn set_cell(&mut self, pos: Position, cell: Cell) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(std::mem::replace(&mut self.cells[pos], cell))
    }

    /// The neighbouring position one step in `direction`, if inside the grid.
    pub fn step(&self, (row, column): Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let target = (
            row.checked_add_signed(dr)?,
            column.checked_add_signed(dc)?,
        );
        self.in_bounds(target).then_some(target)
    }

    /// Up/down/left/right neighbours inside the grid.
    pub fn neighbors4(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        self.cells.neighbours(pos, false)
    }

    /// All eight surrounding neighbours inside the grid.
    pub fn neighbors8(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        self.cells.neighbours(pos, true)
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.keys()
    }

    /// Occupied cells in row-major scan order.
    pub fn bee_positions(&self) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.cells[pos].is_bee())
            .collect()
    }

    /// Positions of every device of the given kind, row-major.
    pub fn devices(&self, kind: Device) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.cells[pos].device() == Some(kind))
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.positions().filter(|&pos| predicate(self.cells[pos])).count()
    }

    /// Numeric encoding of the whole grid, one vector per row.
    pub fn to_codes(&self) -> Vec<Vec<i64>> {
        (0..self.rows())
            .map(|row| {
                (0..self.columns())
                    .map(|column| self.cells[(row, column)].code())
                    .collect()
            })
            .collect()
    }
}

fn check_shape<T>(rows: &[Vec<T>]) -> Result<usize, ConfigurationError> {
    let Some(first) = rows.first() else {
        return Err(ConfigurationError::EmptyGrid { rows: 0 });
    };
    let expected = first.len();
    if expected == 0 {
        return Err(ConfigurationError::EmptyGrid { rows: rows.len() });
    }
    for (row, line) in rows.iter().enumerate() {
        if line.len() != expected {
            return Err(ConfigurationError::RaggedGrid {
                row,
                expected,
                found: line.len(),
            });
        }
    }
    Ok(expected)
}
