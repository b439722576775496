use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::map::Plateau;
use crate::robot::Rover;
use crate::types::{Coordinates, Direction, Status};

pub const OBSTACLE_GLYPH: char = 'x';
pub const BLANK_GLYPH: char = ' ';

/// Which cells of the plateau a frame covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extent {
    /// Columns `0..max_x` and rows `max_y-1..=0`; the last column and the
    /// top row are not drawn even though the rover can stand there.
    #[default]
    Legacy,
    /// Every valid cell: columns `0..=max_x`, rows `max_y..=0`.
    Full,
}

impl Extent {
    fn columns(self, plateau: &Plateau) -> std::ops::Range<usize> {
        match self {
            Extent::Legacy => 0..plateau.max_x(),
            Extent::Full => 0..plateau.max_x() + 1,
        }
    }

    fn rows(self, plateau: &Plateau) -> std::ops::Range<usize> {
        match self {
            Extent::Legacy => 0..plateau.max_y(),
            Extent::Full => 0..plateau.max_y() + 1,
        }
    }
}

/// One drawn cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cell {
    Rover(Direction),
    Obstacle,
    Empty,
}

impl Cell {
    fn at(rover: &Rover, position: Coordinates) -> Self {
        if rover.coordinates() == position {
            Cell::Rover(rover.heading())
        } else if rover.plateau().contains_obstacle(position) {
            Cell::Obstacle
        } else {
            Cell::Empty
        }
    }

    fn glyph(self) -> char {
        match self {
            Cell::Rover(heading) => Renderer::rover_glyph(heading),
            Cell::Obstacle => OBSTACLE_GLYPH,
            Cell::Empty => BLANK_GLYPH,
        }
    }
}

/// Text projection of a plateau and its rover.
pub struct Renderer;

impl Renderer {
    pub fn rover_glyph(heading: Direction) -> char {
        match heading {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }

    /// Renders with [`Extent::Legacy`].
    pub fn render(rover: &Rover) -> String {
        Self::render_with(rover, Extent::default())
    }

    /// Frame of the rover on its own plateau.
    pub fn render_with(rover: &Rover, extent: Extent) -> String {
        let plateau = rover.plateau();
        let header = Self::header(plateau, extent);
        let mut out = header.clone();

        for y in extent.rows(plateau).rev() {
            let cells: String = extent
                .columns(plateau)
                .map(|x| format!("{}|", Cell::at(rover, Coordinates::new(x, y)).glyph()))
                .collect();
            out.push_str(&format!("{y} |{cells} {y}\n"));
        }

        out.push_str(&header);
        out
    }

    fn header(plateau: &Plateau, extent: Extent) -> String {
        let columns: Vec<String> = extent.columns(plateau).map(|x| x.to_string()).collect();
        format!("  {}\n", columns.join(" "))
    }
}

/// Colored terminal output of the same frame.
pub struct Display;

impl Display {
    /// Writes the frame to `out`, followed by a status line. The rover is
    /// green, red once blocked; obstacles are dark grey.
    pub fn print<W: Write>(out: &mut W, rover: &Rover, extent: Extent) -> io::Result<()> {
        let plateau = rover.plateau();
        let header = Renderer::header(plateau, extent);

        queue!(out, Print(&header))?;
        for y in extent.rows(plateau).rev() {
            queue!(out, Print(format!("{y} |")))?;
            for x in extent.columns(plateau) {
                let cell = Cell::at(rover, Coordinates::new(x, y));
                match cell {
                    Cell::Rover(_) => {
                        let color = match rover.status() {
                            Status::Ok => Color::Green,
                            Status::Blocked => Color::Red,
                        };
                        queue!(out, SetForegroundColor(color), Print(cell.glyph()), ResetColor)?;
                    }
                    Cell::Obstacle => {
                        queue!(
                            out,
                            SetForegroundColor(Color::DarkGrey),
                            Print(cell.glyph()),
                            ResetColor
                        )?;
                    }
                    Cell::Empty => queue!(out, Print(cell.glyph()))?,
                }
                queue!(out, Print('|'))?;
            }
            queue!(out, Print(format!(" {y}\n")))?;
        }
        queue!(
            out,
            Print(&header),
            Print(format!(
                "Rover: {} | Statut: {}\n",
                rover.current_location(),
                rover.status()
            ))
        )?;
        out.flush()
    }

    pub fn print_stdout(rover: &Rover, extent: Extent) -> io::Result<()> {
        Self::print(&mut io::stdout().lock(), rover, extent)
    }
}
