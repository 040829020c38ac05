//! Rendering Base

use crate::color::Rgba8;
use crate::pixfmt::Pixfmt;
use crate::Color;
use crate::Pixel;
use crate::PixelData;

use std::cmp::min;
use std::cmp::max;

/// Largest coordinate magnitude handed to the rasterizers
///
/// Positions beyond it are moved onto it; differences and squares of
///   coordinates then stay well inside `i64`
pub const COORD_LIMIT : i64 = 1 << 24;

/// Keep an integer coordinate within `±COORD_LIMIT`
pub fn clamp_coord(v: i64) -> i64 {
    v.max(-COORD_LIMIT).min(COORD_LIMIT)
}

/// Nearest integer coordinate of `v`, within `±COORD_LIMIT`
///
/// NaN maps to 0
///
///     use svgpix::{coord,COORD_LIMIT};
///
///     assert_eq!(coord(2.5), 3);
///     assert_eq!(coord(-1e300), -COORD_LIMIT);
///     assert_eq!(coord(f64::INFINITY), COORD_LIMIT);
///
pub fn coord(v: f64) -> i64 {
    let lim = COORD_LIMIT as f64;
    if v.is_nan() {
        return 0;
    }
    v.round().max(-lim).min(lim) as i64
}

/// Clipping layer over a pixel format
///
/// Coordinates are signed, anything outside of the image is dropped
#[derive(Debug)]
pub struct RenderingBase<T> {
    pub pixf: T,
}

impl<T> RenderingBase<T> where T: Pixel {
    /// Create new Rendering Base from Pixel Format
    pub fn new(pixf: T) -> RenderingBase<T> {
        RenderingBase { pixf }
    }
    /// Inclusive limits of the image, (xmin, xmax, ymin, ymax)
    ///
    /// An empty image yields xmax < xmin
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.pixf.width() as i64;
        let h = self.pixf.height() as i64;
        (0, w-1, 0, h-1)
    }
    /// Location is within the image
    pub fn inbox(&self, x: i64, y: i64) -> bool {
        let (xmin,xmax,ymin,ymax) = self.limits();
        x >= xmin && x <= xmax && y >= ymin && y <= ymax
    }
    /// Overwrite pixel (`x`,`y`), ignored if outside the image
    pub fn copy_pixel<C: Color>(&mut self, x: i64, y: i64, c: C) {
        if self.inbox(x, y) {
            self.pixf.set((x as usize, y as usize), c);
        }
    }
    /// Overwrite pixels from (`x1`,`y`) to (`x2`,`y`) inclusive
    ///
    /// Endpoints may be given in either order, the span is clipped to the image
    pub fn copy_hline<C: Color>(&mut self, x1: i64, y: i64, x2: i64, c: C) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        let (x1,x2) = if x2 > x1 { (x1,x2) } else { (x2,x1) };
        if y > ymax || y < ymin || x1 > xmax || x2 < xmin {
            return;
        }
        let x1 = max(x1, xmin);
        let x2 = min(x2, xmax);
        for x in x1 ..= x2 {
            self.pixf.set((x as usize, y as usize), c);
        }
    }
    /// Release the Pixel Format
    pub fn into_pixfmt(self) -> T {
        self.pixf
    }
}

impl RenderingBase<Pixfmt<Rgba8>> {
    /// Create a new image of `width` x `height`, filled with white
    pub fn with_size(width: usize, height: usize) -> Self {
        Self::new(Pixfmt::new_filled(width, height, Rgba8::white()))
    }
}

impl<T> PixelData for RenderingBase<T> where T: PixelData {
    fn pixeldata(&self) -> &[u8] {
        self.pixf.pixeldata()
    }
}
