//! Scanline polygon fill
//!
//! Even-odd rule over integer vertices. For every row between the lowest
//!   and highest vertex, edges are intersected with the half-open test
//!   `y1 <= y < y2` (or reversed), intersections sorted, and the pixels
//!   strictly between each pair are filled.

use std::cmp::{max, min};

use crate::base::{clamp_coord, RenderingBase};
use crate::Color;
use crate::Pixel;

/// Horizontal run of pixels on row `y` from `x` to `x+len-1`
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub x: i64,
    pub y: i64,
    pub len: i64,
}

/// Even-odd scanline filler for a closed polygon
#[derive(Debug,Default,Clone)]
pub struct ScanlineFill {
    vertices: Vec<(i64,i64)>,
    min_y: i64,
    max_y: i64,
}

impl ScanlineFill {
    /// Polygon from its vertices, implicitly closed
    ///
    /// Vertices are kept within `±COORD_LIMIT`
    pub fn new(vertices: &[(i64,i64)]) -> Self {
        let vertices : Vec<_> = vertices.iter()
            .map(|&(x, y)| (clamp_coord(x), clamp_coord(y)))
            .collect();
        let min_y = vertices.iter().map(|p| p.1).min().unwrap_or(0);
        let max_y = vertices.iter().map(|p| p.1).max().unwrap_or(-1);
        Self { vertices, min_y, max_y }
    }
    /// Sorted x-positions where row `y` crosses the polygon edges
    pub fn intersections(&self, y: i64) -> Vec<i64> {
        let n = self.vertices.len();
        let mut xs = vec![];
        for i in 0 .. n {
            let (x1,y1) = self.vertices[i];
            let (x2,y2) = self.vertices[(i+1) % n];
            if (y1 <= y && y < y2) || (y2 <= y && y < y1) {
                let t = (y - y1) as f64 / (y2 - y1) as f64;
                let x = x1 as f64 + t * (x2 - x1) as f64;
                xs.push(x.round() as i64);
            }
        }
        xs.sort_unstable();
        xs
    }
    /// Interior spans, row by row
    ///
    /// Each pair of intersections (`a`,`b`) fills `a+1 ..= b-1`
    ///
    ///     use svgpix::{ScanlineFill,Span};
    ///
    ///     let fill = ScanlineFill::new(&[(0,0),(4,0),(4,2),(0,2)]);
    ///     assert_eq!(fill.spans(), vec![Span { x: 1, y: 0, len: 3 },
    ///                                   Span { x: 1, y: 1, len: 3 }]);
    ///
    pub fn spans(&self) -> Vec<Span> {
        self.spans_between(self.min_y, self.max_y)
    }
    /// Interior spans on rows `y0 ..= y1` only
    pub fn spans_between(&self, y0: i64, y1: i64) -> Vec<Span> {
        let mut out = vec![];
        for y in max(y0, self.min_y) ..= min(y1, self.max_y) {
            let xs = self.intersections(y);
            for pair in xs.chunks_exact(2) {
                let (a, b) = (pair[0], pair[1]);
                let len = b - a - 1;
                if len > 0 {
                    out.push(Span { x: a + 1, y, len });
                }
            }
        }
        out
    }
    /// Fill the interior with `color`
    ///
    /// Rows outside of the image are not visited
    pub fn render<T: Pixel, C: Color>(&self, ren: &mut RenderingBase<T>, color: C) {
        let (_, _, ymin, ymax) = ren.limits();
        for span in self.spans_between(ymin, ymax) {
            ren.copy_hline(span.x, span.y, span.x + span.len - 1, color);
        }
    }
}
