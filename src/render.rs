//! Renderer
//!
//! Walks the element tree in document order, drawing every shape
//!   straight into a white image. Later shapes overwrite earlier ones.
//!
//!     use svgpix::{render_str,Source,Rgba8};
//!
//!     let img = render_str(r#"<svg width="20" height="20">
//!         <g fill="blue"><rect x="2" y="2" width="5" height="5"/></g>
//!     </svg>"#).unwrap();
//!     assert_eq!(img.get((4,4)), Rgba8::new(0,0,255,255));
//!     assert_eq!(img.get((15,15)), Rgba8::white());
//!

use log::{debug, trace};
use roxmltree::{Document, Node};

use std::path::Path;

use crate::base::{coord, RenderingBase};
use crate::color::Rgba8;
use crate::curves::{flatten_cubic, flatten_quadratic};
use crate::error::{Error, Result};
use crate::path_storage::{PathCommand, Point};
use crate::pixfmt::Pixfmt;
use crate::primitives::RendererPrimitives;
use crate::scan::ScanlineFill;
use crate::shape::Shape;
use crate::style::StyleContext;
use crate::Pixel;

/// Largest accepted root `width` or `height`, in pixels
pub const MAX_DIMENSION : usize = 1 << 16;

/// Largest accepted root `width * height`
pub const MAX_PIXELS : usize = 1 << 28;

/// Loaded document: output size and top level shapes
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Drawing {
    pub width: usize,
    pub height: usize,
    pub shapes: Vec<Shape>,
}

impl Drawing {
    /// Load from the root `<svg>` element
    pub fn from_node(root: Node<'_, '_>) -> Result<Drawing> {
        let name = root.tag_name().name();
        if !root.is_element() || name != "svg" {
            return Err(Error::MissingRoot(name.to_string()));
        }
        let width = dimension(root, "width");
        let height = dimension(root, "height");
        let pixels = width.checked_mul(height).unwrap_or(usize::MAX);
        if width > MAX_DIMENSION || height > MAX_DIMENSION || pixels > MAX_PIXELS {
            return Err(Error::TooLarge { width, height });
        }
        let shapes = Shape::children(root)?;
        Ok(Drawing { width, height, shapes })
    }
    /// Load from document text
    pub fn parse(text: &str) -> Result<Drawing> {
        let doc = Document::parse(text)?;
        Drawing::from_node(doc.root_element())
    }
    /// Draw into a new white image of the document's size
    pub fn render(&self) -> Pixfmt<Rgba8> {
        debug!("render: {}x{}, {} elements", self.width, self.height, self.shapes.len());
        let mut ren = RenderingBase::with_size(self.width, self.height);
        let ctx = StyleContext::new();
        for shape in &self.shapes {
            draw_shape(&mut ren, shape, &ctx);
        }
        ren.into_pixfmt()
    }
}

/// Render the document rooted at `root`
pub fn render(root: Node<'_, '_>) -> Result<Pixfmt<Rgba8>> {
    Ok(Drawing::from_node(root)?.render())
}

/// Render document text
pub fn render_str(text: &str) -> Result<Pixfmt<Rgba8>> {
    Ok(Drawing::parse(text)?.render())
}

/// Read and render a document from a file
pub fn render_file<P: AsRef<Path>>(path: P) -> Result<Pixfmt<Rgba8>> {
    let text = std::fs::read_to_string(path)?;
    render_str(&text)
}

/// Width or height of the root; missing, unreadable or negative is 0
fn dimension(node: Node<'_, '_>, name: &str) -> usize {
    match node.attribute(name).map(|v| v.trim().parse::<f64>()) {
        Some(Ok(v)) if v.is_finite() && v >= 0.0 => v as usize,
        _ => {
            debug!("root {} missing or invalid, using 0", name);
            0
        }
    }
}

/// Draw one shape and, for groups, its children
pub fn draw_shape<T: Pixel>(ren: &mut RenderingBase<T>, shape: &Shape, ctx: &StyleContext) {
    trace!("draw <{}>", shape.name());
    let style = shape.style();
    let fill = ctx.fill(style.fill.as_deref());
    let stroke = ctx.stroke(style.stroke.as_deref());
    match shape {
        Shape::Rect { x, y, width, height, .. } => {
            let (x1, y1) = (coord(*x), coord(*y));
            let (x2, y2) = (coord(x + width), coord(y + height));
            let mut prim = RendererPrimitives::with_base(ren);
            if let Some(c) = fill {
                prim.fill_color(c);
                prim.solid_rectangle(x1, y1, x2 - x1, y2 - y1);
            }
            if let Some(c) = stroke.filter(|_| x2 >= x1 && y2 >= y1) {
                prim.line_color(c);
                prim.rectangle(x1, y1, x2, y2);
            }
        },
        Shape::Circle { cx, cy, r, .. } => {
            let (cx, cy, r) = (coord(*cx), coord(*cy), coord(*r));
            let mut prim = RendererPrimitives::with_base(ren);
            if let Some(c) = fill {
                prim.fill_color(c);
                prim.solid_circle(cx, cy, r);
            }
            if let Some(c) = stroke {
                prim.line_color(c);
                prim.circle(cx, cy, r);
            }
        },
        Shape::Ellipse { cx, cy, rx, ry, .. } => {
            let (cx, cy, rx, ry) = (coord(*cx), coord(*cy), coord(*rx), coord(*ry));
            let mut prim = RendererPrimitives::with_base(ren);
            if let Some(c) = fill {
                prim.fill_color(c);
                prim.solid_ellipse(cx, cy, rx, ry);
            }
            if let Some(c) = stroke {
                prim.line_color(c);
                prim.ellipse(cx, cy, rx, ry);
            }
        },
        Shape::Line { x1, y1, x2, y2, .. } => {
            if let Some(c) = stroke {
                let mut prim = RendererPrimitives::with_base(ren);
                prim.line_color(c);
                prim.line(coord(*x1), coord(*y1), coord(*x2), coord(*y2));
            }
        },
        Shape::Polyline { points, .. } => {
            if let Some(c) = stroke {
                let pts : Vec<_> = points.iter().map(Point::round).collect();
                let mut prim = RendererPrimitives::with_base(ren);
                prim.line_color(c);
                prim.polyline(&pts);
            }
        },
        Shape::Polygon { points, .. } => {
            let pts : Vec<_> = points.iter().map(Point::round).collect();
            if let Some(c) = fill {
                ScanlineFill::new(&pts).render(ren, c);
            }
            if let Some(c) = stroke {
                let mut prim = RendererPrimitives::with_base(ren);
                prim.line_color(c);
                prim.outline(&pts);
            }
        },
        Shape::Path { commands, .. } => {
            draw_path(ren, commands, fill, stroke);
        },
        Shape::Group { style, children } => {
            let ctx = ctx.group(style);
            for child in children {
                draw_shape(ren, child, &ctx);
            }
        },
    }
}

/// Flatten path commands to the list of points they visit
///
/// `ClosePath` adds no point; the returned flags mark, for each close,
///   the number of points emitted before it
fn path_points(commands: &[PathCommand]) -> (Vec<Point>, Vec<usize>) {
    let mut points : Vec<Point> = vec![];
    let mut closes = vec![];
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) |
            PathCommand::LineTo(p) => points.push(p),
            PathCommand::CubicTo(c1, c2, p) => {
                let p0 = points.last().copied().unwrap_or_default();
                points.extend(flatten_cubic(p0, c1, c2, p).into_iter().skip(1));
            },
            PathCommand::QuadTo(c1, p) => {
                let p0 = points.last().copied().unwrap_or_default();
                points.extend(flatten_quadratic(p0, c1, p).into_iter().skip(1));
            },
            PathCommand::ClosePath => closes.push(points.len()),
        }
    }
    (points, closes)
}

/// Stroke and fill a path
///
/// Each close draws a line from the latest point back to the first one,
///   then all consecutive points are joined, and finally the fill runs
///   over the rounded points
pub fn draw_path<T: Pixel>(ren: &mut RenderingBase<T>,
                           commands: &[PathCommand],
                           fill: Option<Rgba8>,
                           stroke: Option<Rgba8>) {
    let (points, closes) = path_points(commands);
    let pts : Vec<_> = points.iter().map(Point::round).collect();
    if let Some(c) = stroke {
        let mut prim = RendererPrimitives::with_base(ren);
        prim.line_color(c);
        for n in closes.into_iter().filter(|&n| n > 0) {
            let ((x1, y1), (x2, y2)) = (pts[n - 1], pts[0]);
            prim.line(x1, y1, x2, y2);
        }
        prim.polyline(&pts);
    }
    if let Some(c) = fill {
        ScanlineFill::new(&pts).render(ren, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;

    #[test]
    fn root_required() {
        match render_str("<html/>") {
            Err(Error::MissingRoot(name)) => assert_eq!(name, "html"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(render_str("<svg"), Err(Error::Document(_))));
    }
    #[test]
    fn dimensions() {
        let img = render_str(r#"<svg width="7" height="3"/>"#).unwrap();
        assert_eq!((img.width(), img.height()), (7,3));
        let img = render_str(r#"<svg width="abc"/>"#).unwrap();
        assert_eq!((img.width(), img.height()), (0,0));
        assert!(img.is_empty());
        let img = render_str(r#"<svg width="-4" height="2.9"/>"#).unwrap();
        assert_eq!((img.width(), img.height()), (0,2));
    }
    #[test]
    fn inverted_rect_draws_nothing() {
        let img = render_str(r#"<svg width="10" height="10">
            <rect x="8" y="2" width="-5" height="4" fill="red" stroke="black"/>
            <rect x="2" y="8" width="4" height="-5" fill="red" stroke="black"/>
        </svg>"#).unwrap();
        for y in 0 .. 10 {
            for x in 0 .. 10 {
                assert_eq!(img.get((x,y)), Rgba8::white(), "({},{})", x, y);
            }
        }
        // zero width is still a stroked line
        let img = render_str(r#"<svg width="10" height="10">
            <rect x="3" y="2" width="0" height="4" stroke="black"/>
        </svg>"#).unwrap();
        assert_eq!(img.get((3,4)), Rgba8::black());
    }
    #[test]
    fn oversized_root() {
        for doc in &[r#"<svg width="1e30" height="1e30"/>"#,
                     r#"<svg width="70000" height="1"/>"#,
                     r#"<svg width="1e300" height="0"/>"#,
                     r#"<svg width="30000" height="30000"/>"#] {
            assert!(matches!(render_str(doc), Err(Error::TooLarge { .. })), "{}", doc);
        }
        let img = render_str(r#"<svg width="65536" height="1"/>"#).unwrap();
        assert_eq!(img.width(), 65536);
    }
    #[test]
    fn white_background() {
        let img = render_str(r#"<svg width="4" height="4"><unknown/></svg>"#).unwrap();
        for y in 0 .. 4 {
            for x in 0 .. 4 {
                assert_eq!(img.get((x,y)), Rgba8::white());
            }
        }
    }
    #[test]
    fn path_points_with_curve() {
        let cmds = [PathCommand::MoveTo(Point::new(0.,0.)),
                    PathCommand::QuadTo(Point::new(5.,10.), Point::new(10.,0.)),
                    PathCommand::ClosePath];
        let (points, closes) = path_points(&cmds);
        assert_eq!(points.len(), 201);
        assert_eq!(points[200], Point::new(10.,0.));
        assert_eq!(closes, vec![201]);
    }
    #[test]
    fn curve_without_start_begins_at_origin() {
        let cmds = [PathCommand::CubicTo(Point::new(0.,5.), Point::new(5.,5.), Point::new(5.,0.))];
        let (points, _) = path_points(&cmds);
        assert_eq!(points.len(), 200);
        assert_eq!(points[199], Point::new(5.,0.));
    }
    #[test]
    fn later_shapes_overwrite() {
        let img = render_str(r#"<svg width="10" height="10">
            <rect x="0" y="0" width="10" height="10" fill="red"/>
            <rect x="0" y="0" width="5" height="5" fill="lime"/>
        </svg>"#).unwrap();
        assert_eq!(img.get((2,2)), Rgba8::new(0,255,0,255));
        assert_eq!(img.get((7,7)), Rgba8::new(255,0,0,255));
    }
    #[test]
    fn transparent_fill_overwrites() {
        let img = render_str(r##"<svg width="4" height="4">
            <rect x="0" y="0" width="4" height="4" fill="#00000000"/>
        </svg>"##).unwrap();
        assert_eq!(img.get((1,1)), Rgba8::new(0,0,0,0));
    }
}
