use chumsky::prelude::*;
use itertools::{Either, Itertools};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, MalformedInput, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// A rounded rock, free to roll.
    Movable,
    /// A cube-shaped rock, never moves.
    Fixed,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Movable => 'O',
            Cell::Fixed => '#',
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = MalformedInput;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '.' => Ok(Cell::Empty),
            'O' => Ok(Cell::Movable),
            '#' => Ok(Cell::Fixed),
            other => Err(MalformedInput::UnknownSymbol(other)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Order in which a line is read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards increasing indices (north to south, west to east).
    Forward,
    Reverse,
}

/// A rectangular platform of cells, stored row-major.
///
/// Lines are handed out as copies and written back explicitly, so no view
/// into the grid outlives a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

fn row_parser<'a>() -> impl Parser<'a, &'a str, Vec<Cell>, extra::Err<Rich<'a, char>>> {
    let cell = choice((
        just('.').to(Cell::Empty),
        just('O').to(Cell::Movable),
        just('#').to(Cell::Fixed),
    ));

    cell.repeated().collect::<Vec<_>>().then_ignore(end())
}

fn invalid_cell(row: usize, line: &str, offset: usize) -> MalformedInput {
    let found = line[offset..].chars().next().unwrap_or_default();
    MalformedInput::InvalidCell {
        row,
        column: line[..offset].chars().count(),
        found,
        line: line.to_string(),
        span: (offset, found.len_utf8()).into(),
    }
}

impl Grid {
    /// Builds a grid from one text line per row.
    ///
    /// Trailing whitespace and trailing blank lines are ignored. Fails on an
    /// empty platform, rows of differing width, or characters other than
    /// `.`, `O` and `#`.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines: Vec<S> = lines.into_iter().collect();
        while lines
            .last()
            .is_some_and(|line| line.as_ref().trim_end().is_empty())
        {
            lines.pop();
        }

        let Some(first) = lines.first() else {
            return Err(MalformedInput::Empty.into());
        };
        let columns = first.as_ref().trim_end().chars().count();
        let mut cells = Vec::with_capacity(columns * lines.len());

        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref().trim_end();
            let parsed = row_parser().parse(line).into_result().map_err(|errors| {
                let offset = errors.first().map_or(0, |e| e.span().start);
                invalid_cell(row, line, offset)
            })?;

            if parsed.len() != columns {
                return Err(MalformedInput::RaggedRow {
                    row,
                    expected: columns,
                    found: parsed.len(),
                }
                .into());
            }
            cells.extend(parsed);
        }

        Ok(Grid {
            rows: lines.len(),
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.cells[row * self.columns + column])
    }

    /// Number of lines along `axis`: rows for [`Axis::Row`], columns otherwise.
    pub fn line_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.rows,
            Axis::Column => self.columns,
        }
    }

    pub fn line_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.columns,
            Axis::Column => self.rows,
        }
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterates `(row, column, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i / self.columns, i % self.columns, cell))
    }

    /// Offsets into `cells` for one line, in the requested order.
    fn offsets(
        &self,
        axis: Axis,
        index: usize,
        direction: Direction,
    ) -> Result<impl Iterator<Item = usize>> {
        let count = self.line_count(axis);
        if index >= count {
            return Err(Error::IndexOutOfBounds { axis, index, count });
        }

        let (start, step) = match axis {
            Axis::Row => (index * self.columns, 1),
            Axis::Column => (index, self.columns),
        };
        let positions = (0..self.line_len(axis)).map(move |k| start + k * step);

        Ok(match direction {
            Direction::Forward => Either::Left(positions),
            Direction::Reverse => Either::Right(positions.rev()),
        })
    }

    /// Copies one row or column out of the grid.
    pub fn line(&self, axis: Axis, index: usize, direction: Direction) -> Result<Vec<Cell>> {
        Ok(self
            .offsets(axis, index, direction)?
            .map(|offset| self.cells[offset])
            .collect())
    }

    /// Overwrites one row or column, `line[0]` landing on the first cell in
    /// `direction`. The grid is left untouched on error.
    pub fn set_line(
        &mut self,
        axis: Axis,
        index: usize,
        direction: Direction,
        line: &[Cell],
    ) -> Result<()> {
        let offsets: Vec<usize> = self.offsets(axis, index, direction)?.collect();
        if line.len() != offsets.len() {
            return Err(Error::LengthMismatch {
                axis,
                index,
                expected: offsets.len(),
                found: line.len(),
            });
        }

        for (offset, &cell) in offsets.into_iter().zip(line) {
            self.cells[offset] = cell;
        }
        Ok(())
    }

    pub fn row(&self, index: usize) -> Result<Vec<Cell>> {
        self.line(Axis::Row, index, Direction::Forward)
    }

    pub fn column(&self, index: usize) -> Result<Vec<Cell>> {
        self.line(Axis::Column, index, Direction::Forward)
    }

    pub fn set_row(&mut self, index: usize, line: &[Cell]) -> Result<()> {
        self.set_line(Axis::Row, index, Direction::Forward, line)
    }

    pub fn set_column(&mut self, index: usize, line: &[Cell]) -> Result<()> {
        self.set_line(Axis::Column, index, Direction::Forward, line)
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Grid::from_lines(input.lines())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .cells
            .chunks(self.columns)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .join("\n");
        f.write_str(&text)
    }
}
