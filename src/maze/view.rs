use crossterm::style::{Color, Stylize};

use std::fmt;

use super::{Coord, Grid};

/// Draws a maze as text, one cell being three characters wide between walls.
///
/// ```text
/// +   +---+---+
/// | S   * |   |
/// +---+   +   +
/// |   | *   G |
/// +---+---+   +
/// ```
pub struct MazeView<'a> {
    grid: &'a Grid,
    on_path: Grid<bool>,
    colored: bool,
}

impl<'a> MazeView<'a> {
    /// The width of each cell interior when rendered, in character widths.
    pub const CELL_WIDTH: usize = 3;

    pub fn new(grid: &'a Grid, path: &[Coord]) -> Self {
        let mut on_path = Grid::like(grid, false);
        path.iter()
            .filter(|&&coord| grid.is_in_bounds(coord))
            .for_each(|&coord| on_path[coord] = true);
        MazeView {
            grid,
            on_path,
            colored: true,
        }
    }

    /// Disables terminal colours, for output that is not a terminal.
    pub fn plain(mut self) -> Self {
        self.colored = false;
        self
    }

    fn write_interior(&self, f: &mut fmt::Formatter<'_>, coord: Coord) -> fmt::Result {
        let (symbol, color) = if coord == self.grid.entrance() {
            (" S ", Color::Green)
        } else if coord == self.grid.exit() {
            (" G ", Color::Red)
        } else if self.on_path[coord] {
            (" * ", Color::Yellow)
        } else {
            ("   ", Color::Reset)
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                symbol.width(),
                Self::CELL_WIDTH,
                "Each cell must occupy exactly three character widths."
            );
        }

        if self.colored {
            write!(f, "{}", symbol.with(color))
        } else {
            write!(f, "{}", symbol)
        }
    }

    fn write_horizontal_walls(
        &self,
        f: &mut fmt::Formatter<'_>,
        y: u16,
        below: bool,
    ) -> fmt::Result {
        for x in 0..self.grid.width() {
            let cell = &self.grid[(x, y)];
            let wall = if below {
                cell.has_bottom_wall
            } else {
                cell.has_top_wall
            };
            write!(f, "+{}", if wall { "---" } else { "   " })?;
        }
        writeln!(f, "+")
    }
}

impl fmt::Display for MazeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.grid.is_empty() {
            return Ok(());
        }
        for y in 0..self.grid.height() {
            self.write_horizontal_walls(f, y, false)?;
            for x in 0..self.grid.width() {
                let cell = &self.grid[(x, y)];
                write!(f, "{}", if cell.has_left_wall { "|" } else { " " })?;
                self.write_interior(f, (x, y))?;
            }
            let last = &self.grid[(self.grid.width() - 1, y)];
            writeln!(f, "{}", if last.has_right_wall { "|" } else { " " })?;
        }
        self.write_horizontal_walls(f, self.grid.height() - 1, true)
    }
}
