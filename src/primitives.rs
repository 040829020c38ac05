//! Aliased primitives
//!
//! Lines, circles and ellipses drawn straight into a [RenderingBase] with
//!   integer scan-conversion; every pixel touched is overwritten.
//!
//! Inputs are moved into `±COORD_LIMIT` first. Solid shapes only visit the
//!   part of their bounding box inside the image, outlines that cannot reach
//!   the image are skipped and long lines are cut down before stepping.
//!
//! [RenderingBase]: ../base/struct.RenderingBase.html

use std::cmp::{max, min};

use crate::base::{clamp_coord, RenderingBase};
use crate::color::Rgba8;
use crate::Color;
use crate::Pixel;

/// Immediate mode renderer for outlines and solid shapes
///
///     use svgpix::{RenderingBase,RendererPrimitives,Rgba8,Source};
///
///     let mut ren_base = RenderingBase::with_size(20,20);
///     let mut ren = RendererPrimitives::with_base(&mut ren_base);
///     ren.line_color(Rgba8::new(255,0,0,255));
///     ren.move_to(2, 2);
///     ren.line_to(17, 2);
///     ren.line_to(17, 17);
///     assert_eq!(ren_base.pixf.get((10,2)), Rgba8::new(255,0,0,255));
///     assert_eq!(ren_base.pixf.get((17,10)), Rgba8::new(255,0,0,255));
///
pub struct RendererPrimitives<'a,T> where T: Pixel {
    pub base: &'a mut RenderingBase<T>,
    pub fill_color: Rgba8,
    pub line_color: Rgba8,
    pub x: i64,
    pub y: i64,
}

impl<'a,T> RendererPrimitives<'a,T> where T: Pixel {
    /// Create new Primitive Renderer, both colors black
    pub fn with_base(base: &'a mut RenderingBase<T>) -> Self {
        let fill_color = Rgba8::black();
        let line_color = Rgba8::black();
        Self { base, fill_color, line_color, x: 0, y: 0 }
    }
    /// Set the color for outlines
    pub fn line_color<C: Color>(&mut self, line_color: C) {
        self.line_color = Rgba8::from_trait(line_color);
    }
    /// Set the color for solid shapes
    pub fn fill_color<C: Color>(&mut self, fill_color: C) {
        self.fill_color = Rgba8::from_trait(fill_color);
    }
    /// Move the current position
    pub fn move_to(&mut self, x: i64, y: i64) {
        self.x = x;
        self.y = y;
    }
    /// Draw a line from the current position, which then becomes (`x`,`y`)
    pub fn line_to(&mut self, x: i64, y: i64) {
        let (x0,y0) = (self.x, self.y);
        self.line(x0, y0, x, y);
        self.x = x;
        self.y = y;
    }
    /// Draw a line from (`x1`,`y1`) to (`x2`,`y2`) in the line color
    ///
    /// Uses [Bresenham's line drawing algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm),
    ///   both endpoints are drawn
    pub fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        let color = self.line_color;
        let ends = (clamp_coord(x1), clamp_coord(y1), clamp_coord(x2), clamp_coord(y2));
        if let Some((x1, y1, x2, y2)) = clip_line(self.base.limits(), ends) {
            for (x,y) in BresenhamInterpolator::new(x1, y1, x2, y2) {
                self.base.copy_pixel(x, y, color);
            }
        }
    }
    /// Draw lines between consecutive points, not closed
    pub fn polyline(&mut self, pts: &[(i64,i64)]) {
        if let Some(&(x,y)) = pts.first() {
            self.move_to(x, y);
            if pts.len() == 1 {
                self.line_to(x, y);
            }
        }
        for &(x,y) in pts.iter().skip(1) {
            self.line_to(x, y);
        }
    }
    /// Draw lines between consecutive points, closing last to first
    pub fn outline(&mut self, pts: &[(i64,i64)]) {
        self.polyline(pts);
        if let (Some(&(x1,y1)), Some(&(x2,y2))) = (pts.last(), pts.first()) {
            self.line(x1, y1, x2, y2);
        }
    }
    /// Outline of a rectangle with corners (`x1`,`y1`) and (`x2`,`y2`)
    pub fn rectangle(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.outline(&[(x1,y1), (x2,y1), (x2,y2), (x1,y2)]);
    }
    /// Fill a rectangle of `w` x `h` pixels with its top left at (`x`,`y`)
    pub fn solid_rectangle(&mut self, x: i64, y: i64, w: i64, h: i64) {
        if w <= 0 || h <= 0 {
            return;
        }
        let color = self.fill_color;
        let (_, _, ymin, ymax) = self.base.limits();
        let x2 = x.saturating_add(w - 1);
        for j in max(y, ymin) ..= min(y.saturating_add(h - 1), ymax) {
            self.base.copy_hline(x, j, x2, color);
        }
    }
    /// Outline of a circle with center (`cx`,`cy`) and radius `r`
    ///
    /// Midpoint algorithm, each step plots the eight symmetric points
    pub fn circle(&mut self, cx: i64, cy: i64, r: i64) {
        if r < 0 {
            return;
        }
        let (cx, cy, r) = (clamp_coord(cx), clamp_coord(cy), clamp_coord(r));
        if !self.ring_visible(cx, cy, r, r) {
            return;
        }
        let color = self.line_color;
        let (mut x, mut y) = (0, r);
        let mut d = 3 - 2 * r;
        while x <= y {
            for &(i,j) in &[( x, y), (-x, y), ( x,-y), (-x,-y),
                            ( y, x), (-y, x), ( y,-x), (-y,-x)] {
                self.base.copy_pixel(cx + i, cy + j, color);
            }
            if d < 0 {
                d += 4 * x + 6;
            } else {
                d += 4 * (x - y) + 10;
                y -= 1;
            }
            x += 1;
        }
    }
    /// Solid circle with center (`cx`,`cy`) and radius `r`
    ///
    /// Sets every pixel with `i² + j² <= r²` inside the bounding box
    pub fn solid_circle(&mut self, cx: i64, cy: i64, r: i64) {
        if r < 0 {
            return;
        }
        let (cx, cy, r) = (clamp_coord(cx), clamp_coord(cy), clamp_coord(r));
        let color = self.fill_color;
        let (xmin, xmax, ymin, ymax) = self.base.limits();
        let r2 = r * r;
        for j in max(-r, ymin - cy) ..= min(r, ymax - cy) {
            for i in max(-r, xmin - cx) ..= min(r, xmax - cx) {
                if i * i + j * j <= r2 {
                    self.base.copy_pixel(cx + i, cy + j, color);
                }
            }
        }
    }
    /// Outline of an axis aligned ellipse with center (`cx`,`cy`) and radii `rx`, `ry`
    ///
    /// Midpoint algorithm in two regions; region one steps along x
    ///   while the slope magnitude is below one, region two steps along y.
    ///   Decision variables are kept at four times their value to stay integer.
    pub fn ellipse(&mut self, cx: i64, cy: i64, rx: i64, ry: i64) {
        if rx < 0 || ry < 0 {
            return;
        }
        let (cx, cy) = (clamp_coord(cx), clamp_coord(cy));
        let (rx, ry) = (clamp_coord(rx), clamp_coord(ry));
        if !self.ring_visible(cx, cy, rx, ry) {
            return;
        }
        let color = self.line_color;
        let (rx, ry) = (i128::from(rx), i128::from(ry));
        let (rx2, ry2) = (rx * rx, ry * ry);
        let (mut x, mut y) = (0i128, ry);
        let mut dx = 2 * ry2 * x;
        let mut dy = 2 * rx2 * y;

        // Region 1
        let mut d1 = 4 * ry2 - 4 * rx2 * ry + rx2;
        while dx < dy {
            self.plot4(cx, cy, x as i64, y as i64, color);
            x += 1;
            dx += 2 * ry2;
            if d1 < 0 {
                d1 += 4 * (dx + ry2);
            } else {
                y -= 1;
                dy -= 2 * rx2;
                d1 += 4 * (dx - dy + ry2);
            }
        }

        // Region 2
        let mut d2 = ry2 * (2 * x + 1) * (2 * x + 1) + 4 * rx2 * (y - 1) * (y - 1) - 4 * rx2 * ry2;
        while y >= 0 {
            self.plot4(cx, cy, x as i64, y as i64, color);
            y -= 1;
            dy -= 2 * rx2;
            if d2 > 0 {
                d2 += 4 * (rx2 - dy);
            } else {
                x += 1;
                dx += 2 * ry2;
                d2 += 4 * (dx - dy + rx2);
            }
        }
    }
    /// Solid ellipse with center (`cx`,`cy`) and radii `rx`, `ry`
    ///
    /// Sets every pixel with `i²·ry² + j²·rx² <= rx²·ry²` inside the bounding box
    pub fn solid_ellipse(&mut self, cx: i64, cy: i64, rx: i64, ry: i64) {
        if rx < 0 || ry < 0 {
            return;
        }
        let (cx, cy) = (clamp_coord(cx), clamp_coord(cy));
        let (rx, ry) = (clamp_coord(rx), clamp_coord(ry));
        let color = self.fill_color;
        let (xmin, xmax, ymin, ymax) = self.base.limits();
        let (rx2, ry2) = (i128::from(rx * rx), i128::from(ry * ry));
        for j in max(-ry, ymin - cy) ..= min(ry, ymax - cy) {
            for i in max(-rx, xmin - cx) ..= min(rx, xmax - cx) {
                let (a, b) = (i128::from(i * i), i128::from(j * j));
                if a * ry2 + b * rx2 <= rx2 * ry2 {
                    self.base.copy_pixel(cx + i, cy + j, color);
                }
            }
        }
    }
    /// Outline with radii `rx`, `ry` around (`cx`,`cy`) may reach the image
    ///
    /// False when its bounding box misses the image or the image lies
    ///   inside the hole of the ring
    fn ring_visible(&self, cx: i64, cy: i64, rx: i64, ry: i64) -> bool {
        let (xmin, xmax, ymin, ymax) = self.base.limits();
        if xmax < xmin || ymax < ymin {
            return false;
        }
        if cx - rx - 2 > xmax || cx + rx + 2 < xmin || cy - ry - 2 > ymax || cy + ry + 2 < ymin {
            return false;
        }
        if rx <= 2 || ry <= 2 {
            return true;
        }
        let (ax, ay) = (i128::from(rx - 2), i128::from(ry - 2));
        let inner = |x: i64, y: i64| {
            let (i, j) = (i128::from(x - cx), i128::from(y - cy));
            i * i * ay * ay + j * j * ax * ax < ax * ax * ay * ay
        };
        !(inner(xmin, ymin) && inner(xmax, ymin) && inner(xmin, ymax) && inner(xmax, ymax))
    }
    fn plot4(&mut self, cx: i64, cy: i64, x: i64, y: i64, color: Rgba8) {
        self.base.copy_pixel(cx + x, cy + y, color);
        self.base.copy_pixel(cx - x, cy + y, color);
        self.base.copy_pixel(cx + x, cy - y, color);
        self.base.copy_pixel(cx - x, cy - y, color);
    }
}

/// Part of a line that can reach an image with `limits`
///
/// Lines with both ends inside a margin around the image, as wide as the
///   image itself, are returned unchanged. Other lines are cut to that
///   margin, which can move their visible pixels by one.
fn clip_line((xmin, xmax, ymin, ymax): (i64,i64,i64,i64),
             (x1, y1, x2, y2): (i64,i64,i64,i64)) -> Option<(i64,i64,i64,i64)> {
    if xmax < xmin || ymax < ymin {
        return None;
    }
    let m = max(xmax - xmin, ymax - ymin) + 2;
    let (bx0, bx1, by0, by1) = (xmin - m, xmax + m, ymin - m, ymax + m);
    let inside = |x: i64, y: i64| x >= bx0 && x <= bx1 && y >= by0 && y <= by1;
    if inside(x1, y1) && inside(x2, y2) {
        return Some((x1, y1, x2, y2));
    }
    // Same cut whichever end comes first
    let (x1, y1, x2, y2) = if (x1, y1) > (x2, y2) { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
    let (fx, fy) = (x1 as f64, y1 as f64);
    let (dx, dy) = ((x2 - x1) as f64, (y2 - y1) as f64);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for &(p, q) in &[(-dx, fx - bx0 as f64), (dx, bx1 as f64 - fx),
                     (-dy, fy - by0 as f64), (dy, by1 as f64 - fy)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else if p < 0.0 {
            let r = q / p;
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            let r = q / p;
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let at = |t: f64| ((fx + t * dx).round() as i64, (fy + t * dy).round() as i64);
    let ((a, b), (c, d)) = (at(t0), at(t1));
    Some((a, b, c, d))
}

/// Integer Bresenham stepping between two points
///
/// Endpoints are ordered so x never decreases; the same pixels are
///   produced whichever end is given first. Endpoints are kept within
///   `±COORD_LIMIT`.
///
///     use svgpix::BresenhamInterpolator;
///
///     let a : Vec<_> = BresenhamInterpolator::new(0,0,5,2).collect();
///     let mut b : Vec<_> = BresenhamInterpolator::new(5,2,0,0).collect();
///     b.sort();
///     assert_eq!(a, b);
///     assert_eq!(a.len(), 6);
///
#[derive(Debug,Clone)]
pub struct BresenhamInterpolator {
    x: i64,
    y: i64,
    x2: i64,
    y2: i64,
    dx: i64,
    dy: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl BresenhamInterpolator {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        let (x1, y1) = (clamp_coord(x1), clamp_coord(y1));
        let (x2, y2) = (clamp_coord(x2), clamp_coord(y2));
        let (x1,y1,x2,y2) = if x1 > x2 { (x2,y2,x1,y1) } else { (x1,y1,x2,y2) };
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sy = if y1 < y2 { 1 } else { -1 };
        Self { x: x1, y: y1, x2, y2, dx, dy, sy, err: dx + dy, done: false }
    }
}

impl Iterator for BresenhamInterpolator {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<(i64,i64)> {
        if self.done {
            return None;
        }
        let pt = (self.x, self.y);
        if self.x == self.x2 && self.y == self.y2 {
            self.done = true;
            return Some(pt);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += 1;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;
    use crate::pixfmt::Pixfmt;
    use std::collections::BTreeSet;

    fn black_pixels(ren: &RenderingBase<Pixfmt<Rgba8>>) -> BTreeSet<(i64,i64)> {
        let mut out = BTreeSet::new();
        for y in 0 .. ren.pixf.height() {
            for x in 0 .. ren.pixf.width() {
                if ren.pixf.get((x,y)) == Rgba8::black() {
                    out.insert((x as i64, y as i64));
                }
            }
        }
        out
    }

    #[test]
    fn line_endpoints_and_length() {
        let pts : Vec<_> = BresenhamInterpolator::new(0,0,10,3).collect();
        assert_eq!(pts.first(), Some(&(0,0)));
        assert_eq!(pts.last(), Some(&(10,3)));
        assert_eq!(pts.len(), 11);
        let pts : Vec<_> = BresenhamInterpolator::new(2,0,2,7).collect();
        assert_eq!(pts.len(), 8);
        assert!(pts.iter().all(|&(x,_)| x == 2));
        let pts : Vec<_> = BresenhamInterpolator::new(4,4,4,4).collect();
        assert_eq!(pts, vec![(4,4)]);
    }
    #[test]
    fn line_order_independent() {
        for &(x1,y1,x2,y2) in &[(0,0,5,5), (0,5,9,1), (3,0,1,9), (7,2,0,2), (1,1,1,8)] {
            let mut a = RenderingBase::with_size(12,12);
            RendererPrimitives::with_base(&mut a).line(x1,y1,x2,y2);
            let mut b = RenderingBase::with_size(12,12);
            RendererPrimitives::with_base(&mut b).line(x2,y2,x1,y1);
            assert_eq!(black_pixels(&a), black_pixels(&b));
        }
    }
    #[test]
    fn line_clipped() {
        let mut ren = RenderingBase::with_size(5,5);
        RendererPrimitives::with_base(&mut ren).line(-10,2,20,2);
        let px = black_pixels(&ren);
        assert_eq!(px.len(), 5);
        assert!(px.iter().all(|&(_,y)| y == 2));
    }
    #[test]
    fn solid_circle_membership() {
        let (cx, cy, r) = (10, 10, 6);
        let mut ren = RenderingBase::with_size(21,21);
        RendererPrimitives::with_base(&mut ren).solid_circle(cx, cy, r);
        let px = black_pixels(&ren);
        for y in 0 .. 21 {
            for x in 0 .. 21 {
                let (i,j) = (x - cx, y - cy);
                assert_eq!(px.contains(&(x,y)), i*i + j*j <= r*r, "({},{})", x, y);
            }
        }
    }
    #[test]
    fn circle_outline_near_radius() {
        let (cx, cy, r) = (10, 10, 7);
        let mut ren = RenderingBase::with_size(21,21);
        RendererPrimitives::with_base(&mut ren).circle(cx, cy, r);
        let px = black_pixels(&ren);
        assert!(px.contains(&(cx, cy + r)));
        assert!(px.contains(&(cx + r, cy)));
        assert!(px.contains(&(cx - r, cy)));
        assert!(px.contains(&(cx, cy - r)));
        for &(x,y) in &px {
            let (i,j) = (x - cx, y - cy);
            assert!(i*i + j*j <= (r+1)*(r+1));
            assert!(i*i + j*j >= (r-1)*(r-1));
        }
        // symmetric
        for &(x,y) in &px {
            assert!(px.contains(&(2*cx - x, y)));
            assert!(px.contains(&(x, 2*cy - y)));
            assert!(px.contains(&(cx + (y - cy), cy + (x - cx))));
        }
    }
    #[test]
    fn ellipse_outline() {
        let (cx, cy, rx, ry) = (15, 10, 12, 5);
        let mut ren = RenderingBase::with_size(31,21);
        RendererPrimitives::with_base(&mut ren).ellipse(cx, cy, rx, ry);
        let px = black_pixels(&ren);
        for &p in &[(cx + rx, cy), (cx - rx, cy), (cx, cy + ry), (cx, cy - ry)] {
            assert!(px.contains(&p), "{:?}", p);
        }
        for &(x,y) in &px {
            assert!(px.contains(&(2*cx - x, y)));
            assert!(px.contains(&(x, 2*cy - y)));
            let (i,j) = ((x - cx) as f64, (y - cy) as f64);
            let v = (i / rx as f64).powi(2) + (j / ry as f64).powi(2);
            assert!(v > 0.6 && v < 1.5, "({},{}) {}", x, y, v);
        }
    }
    #[test]
    fn solid_ellipse_membership() {
        let (cx, cy, rx, ry) = (10, 6, 9, 4);
        let mut ren = RenderingBase::with_size(21,13);
        RendererPrimitives::with_base(&mut ren).solid_ellipse(cx, cy, rx, ry);
        let px = black_pixels(&ren);
        for y in 0 .. 13 {
            for x in 0 .. 21 {
                let (i,j) = (x - cx, y - cy);
                let inside = i*i*ry*ry + j*j*rx*rx <= rx*rx*ry*ry;
                assert_eq!(px.contains(&(x,y)), inside, "({},{})", x, y);
            }
        }
    }
    #[test]
    fn rectangles() {
        let mut ren = RenderingBase::with_size(10,10);
        {
            let mut p = RendererPrimitives::with_base(&mut ren);
            p.solid_rectangle(2, 3, 4, 2);
        }
        let px = black_pixels(&ren);
        assert_eq!(px.len(), 8);
        assert!(px.contains(&(2,3)) && px.contains(&(5,4)));
        assert!(!px.contains(&(6,4)) && !px.contains(&(2,5)));

        let mut ren = RenderingBase::with_size(10,10);
        RendererPrimitives::with_base(&mut ren).rectangle(1, 1, 4, 3);
        let px = black_pixels(&ren);
        assert_eq!(px.len(), 10);
        assert!(!px.contains(&(2,2)));
    }
    #[test]
    fn polyline_open_outline_closed() {
        let pts = [(0,0), (6,0), (6,6)];
        let mut ren = RenderingBase::with_size(8,8);
        RendererPrimitives::with_base(&mut ren).polyline(&pts);
        assert!(!black_pixels(&ren).contains(&(3,3)));
        let mut ren = RenderingBase::with_size(8,8);
        RendererPrimitives::with_base(&mut ren).outline(&pts);
        assert!(black_pixels(&ren).contains(&(3,3)));
    }
    #[test]
    fn huge_solid_shapes_cover_the_image() {
        let mut ren = RenderingBase::with_size(10,10);
        RendererPrimitives::with_base(&mut ren).solid_circle(5, 5, i64::MAX);
        assert_eq!(black_pixels(&ren).len(), 100);

        let mut ren = RenderingBase::with_size(10,10);
        RendererPrimitives::with_base(&mut ren).solid_ellipse(5, 5, i64::MAX, i64::MAX);
        assert_eq!(black_pixels(&ren).len(), 100);

        let mut ren = RenderingBase::with_size(10,10);
        RendererPrimitives::with_base(&mut ren).solid_rectangle(-5, -5, i64::MAX, i64::MAX);
        assert_eq!(black_pixels(&ren).len(), 100);

        let mut ren = RenderingBase::with_size(10,10);
        RendererPrimitives::with_base(&mut ren).solid_rectangle(i64::MIN, i64::MIN, i64::MAX, i64::MAX);
        assert!(black_pixels(&ren).is_empty());
    }
    #[test]
    fn huge_outlines_around_the_image() {
        let mut ren = RenderingBase::with_size(10,10);
        {
            let mut p = RendererPrimitives::with_base(&mut ren);
            p.circle(5, 5, 20_000);
            p.circle(-1_000_000, i64::MAX, 3);
            p.ellipse(5, 5, 1_000_000_000, 1_000_000_000);
            p.ellipse(-1_000_000, 0, 3, 3);
        }
        assert!(black_pixels(&ren).is_empty());

        // ring passing through the image is still drawn
        let mut ren = RenderingBase::with_size(10,10);
        RendererPrimitives::with_base(&mut ren).circle(5, 20_005, 20_000);
        assert!(black_pixels(&ren).contains(&(5,5)));
    }
    #[test]
    fn long_lines_are_cut() {
        let mut ren = RenderingBase::with_size(10,10);
        RendererPrimitives::with_base(&mut ren).line(-1_000_000, -1_000_000, 1_000_000, 1_000_000);
        let px = black_pixels(&ren);
        assert_eq!(px.len(), 10);
        for i in 0 .. 10 {
            assert!(px.contains(&(i,i)));
        }

        let mut ren = RenderingBase::with_size(10,10);
        RendererPrimitives::with_base(&mut ren).line(i64::MIN, 5, i64::MAX, 5);
        let px = black_pixels(&ren);
        assert_eq!(px.len(), 10);
        assert!(px.iter().all(|&(_,y)| y == 5));

        let mut a = RenderingBase::with_size(10,10);
        RendererPrimitives::with_base(&mut a).line(-1_000_000, 3, 1_000_000, 7);
        let mut b = RenderingBase::with_size(10,10);
        RendererPrimitives::with_base(&mut b).line(1_000_000, 7, -1_000_000, 3);
        assert_eq!(black_pixels(&a), black_pixels(&b));

        let mut ren = RenderingBase::with_size(0,0);
        RendererPrimitives::with_base(&mut ren).line(0, 0, 5, 5);
    }
}
