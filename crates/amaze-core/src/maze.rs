//! The binary raster maze model.
//!
//! [`Maze`] is an owned rectangular buffer of [`Cell`] values addressed by
//! [`Point`] (column, row). Cells are *wall* or *passage*; a third *path*
//! state exists only in renderer output. Mazes can be built from a pixel
//! classification, from a closure, or parsed from ASCII art (`#` wall,
//! `.` passage), which is how test fixtures are written.

use std::fmt;

use crate::geom::Point;

/// State of a single maze cell.
///
/// `Path` never occurs in solver input; it is produced by
/// [`render_path`](Maze::render_path) to mark the found route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Non-traversable cell.
    #[default]
    Wall,
    /// Traversable cell.
    Passage,
    /// Traversable cell marked as part of a found route.
    Path,
}

impl Cell {
    /// Whether the cell can be walked through by the solver.
    ///
    /// Note that `Path` cells are *not* traversable: a rendered maze fed
    /// back into the solver treats the marked route as blocked, exactly as
    /// its non-white pixels would be.
    #[inline]
    pub const fn is_passage(self) -> bool {
        matches!(self, Cell::Passage)
    }

    /// The ASCII glyph used by [`Maze`]'s `Display` impl.
    const fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Passage => '.',
            Cell::Path => '*',
        }
    }
}

/// An immutable rectangular maze raster.
///
/// Construction goes through [`new`](Maze::new), [`from_fn`](Maze::from_fn)
/// or [`parse`](Maze::parse); after that the only mutation path is
/// [`set`](Maze::set), which requires exclusive ownership. Components that
/// take `&Maze` can therefore never observe a change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Maze {
    /// Create a new maze of the given dimensions, filled with walls.
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
        }
    }

    /// Create a maze by evaluating `f` at every point in row-major order.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> Cell) -> Self {
        let mut maze = Self::new(width, height);
        for y in 0..maze.height {
            for x in 0..maze.width {
                let p = Point::new(x, y);
                let idx = maze.index(p);
                maze.cells[idx] = f(p);
            }
        }
        maze
    }

    /// Parse a maze from ASCII art: `#` for wall, `.` for passage.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string; every
    /// line must then have the same width. An empty string parses to an
    /// empty (0×0) maze.
    pub fn parse(s: &str) -> Result<Self, ParseMazeError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::new(0, 0));
        }

        let mut cells = Vec::with_capacity(s.len());
        let mut width: i32 = -1;
        let mut height: i32 = 0;

        for (y, line) in s.lines().enumerate() {
            let mut w: i32 = 0;
            for (x, ch) in line.chars().enumerate() {
                cells.push(match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::Passage,
                    _ => {
                        return Err(ParseMazeError::InvalidChar {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                });
                w += 1;
            }
            if width >= 0 && w != width {
                return Err(ParseMazeError::InconsistentWidth { row: y });
            }
            width = w;
            height += 1;
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` lies inside the maze bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y as usize) * (self.width as usize) + (p.x as usize)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Whether the cell at `p` is a passage. Out-of-bounds probes read as
    /// wall, so border cells can be classified without bounds juggling.
    #[inline]
    pub fn is_passage(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_passage)
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = cell;
    }

    /// Count cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        let w = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Point::new((i % w) as i32, (i / w) as i32), c))
    }
}

impl fmt::Display for Maze {
    /// Render as ASCII art, the inverse of [`parse`](Maze::parse) with `*`
    /// for path cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                write!(f, "{}", self.cells[self.index(Point::new(x, y))].glyph())?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing an ASCII maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMazeError {
    /// A line has a different width than the first line. `row` is the
    /// 0-based offending row.
    InconsistentWidth { row: usize },
    /// A character other than `#` or `.` was found.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for ParseMazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth { row } => {
                write!(f, "maze row {row} has a different width than row 0")
            }
            Self::InvalidChar { ch, pos } => {
                write!(f, "invalid maze character {ch:?} at {pos} (expected '#' or '.')")
            }
        }
    }
}

impl std::error::Error for ParseMazeError {}
