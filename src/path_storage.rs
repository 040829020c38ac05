//! Path data and point lists
//!
//! Absolute commands only: `M`, `L`, `C`, `Q` and `Z`. Coordinates are
//!   comma joined pairs separated by whitespace, and a command letter may
//!   stand alone or prefix its first pair.
//!
//!     use svgpix::{parse_path,PathCommand,Point};
//!
//!     let cmds = parse_path("M0,0 L10,0 10,10 Z").unwrap();
//!     assert_eq!(cmds, vec![PathCommand::MoveTo(Point::new(0.,0.)),
//!                           PathCommand::LineTo(Point::new(10.,0.)),
//!                           PathCommand::LineTo(Point::new(10.,10.)),
//!                           PathCommand::ClosePath]);
//!

use log::debug;

use crate::base::coord;
use crate::error::Error;
use crate::error::Result;

/// Location in document coordinates
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Nearest pixel, within `±COORD_LIMIT`
    pub fn round(&self) -> (i64, i64) {
        (coord(self.x), coord(self.y))
    }
}

/// Single drawing command of a path
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Control point, control point, end point
    CubicTo(Point, Point, Point),
    /// Control point, end point
    QuadTo(Point, Point),
    ClosePath,
}

impl PathCommand {
    /// Final point of the command, None for ClosePath
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) |
            PathCommand::LineTo(p) |
            PathCommand::CubicTo(_, _, p) |
            PathCommand::QuadTo(_, p) => Some(p),
            PathCommand::ClosePath => None,
        }
    }
}

/// Current command letter while reading path data
#[derive(Debug,Copy,Clone,PartialEq)]
enum Letter {
    /// No letter seen yet
    Start,
    Move,
    Line,
    Cubic,
    Quad,
    Close,
    /// Unsupported letter, pairs are read but dropped
    Other(char),
}

impl From<char> for Letter {
    fn from(c: char) -> Letter {
        match c {
            'M' => Letter::Move,
            'L' => Letter::Line,
            'C' => Letter::Cubic,
            'Q' => Letter::Quad,
            'Z' => Letter::Close,
            _ => Letter::Other(c),
        }
    }
}

/// Parse path data into commands
///
/// The current letter persists until the next letter token, so repeated
///   pairs reuse it. After the first pair of `M` the letter becomes `L`.
///   `C` collects three pairs and `Q` two before a command is emitted; a
///   curve left incomplete is dropped.
///
/// A pair that is not two numbers fails the parse.
pub fn parse_path(d: &str) -> Result<Vec<PathCommand>> {
    let mut out = vec![];
    let mut letter = Letter::Start;
    let mut pending : Vec<Point> = Vec::with_capacity(3);

    for token in d.split_whitespace() {
        let mut rest = token;
        if let Some(c) = token.chars().next().filter(|c| c.is_ascii_alphabetic()) {
            if !pending.is_empty() {
                debug!("path: dropping incomplete {:?} segment", letter);
                pending.clear();
            }
            letter = Letter::from(c);
            if letter == Letter::Close {
                out.push(PathCommand::ClosePath);
            }
            rest = &token[c.len_utf8() ..];
            if rest.is_empty() {
                continue;
            }
        }
        let pt = parse_pair("d", rest)?;
        match letter {
            Letter::Move => {
                out.push(PathCommand::MoveTo(pt));
                letter = Letter::Line;
            },
            Letter::Line => out.push(PathCommand::LineTo(pt)),
            Letter::Cubic => {
                pending.push(pt);
                if pending.len() == 3 {
                    out.push(PathCommand::CubicTo(pending[0], pending[1], pending[2]));
                    pending.clear();
                }
            },
            Letter::Quad => {
                pending.push(pt);
                if pending.len() == 2 {
                    out.push(PathCommand::QuadTo(pending[0], pending[1]));
                    pending.clear();
                }
            },
            Letter::Start | Letter::Close | Letter::Other(_) => {
                debug!("path: ignoring pair {:?} after {:?}", rest, letter);
            },
        }
    }
    if !pending.is_empty() {
        debug!("path: dropping incomplete {:?} segment at end", letter);
    }
    Ok(out)
}

/// Parse a `points` attribute, whitespace separated `x,y` pairs
///
///     use svgpix::{parse_points,Point};
///
///     let pts = parse_points("0,0 10,5  3.5,-2").unwrap();
///     assert_eq!(pts, vec![Point::new(0.,0.), Point::new(10.,5.), Point::new(3.5,-2.)]);
///     assert!(parse_points("0,0 1,x").is_err());
///
pub fn parse_points(points: &str) -> Result<Vec<Point>> {
    points.split_whitespace()
        .map(|tok| parse_pair("points", tok))
        .collect()
}

fn parse_pair(attribute: &'static str, token: &str) -> Result<Point> {
    let mut it = token.split(',');
    match (it.next(), it.next(), it.next()) {
        (Some(x), Some(y), None) => {
            Ok(Point::new(parse_number(attribute, x)?, parse_number(attribute, y)?))
        },
        _ => Err(Error::parse(attribute, token)),
    }
}

fn parse_number(attribute: &'static str, token: &str) -> Result<f64> {
    match token.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::parse(attribute, token)),
    }
}
