//! Document elements
//!
//! Each XML element is classified once into a [Shape]; rendering then
//!   matches on the variant rather than on element names.
//!
//! [Shape]: enum.Shape.html

use log::debug;
use roxmltree::Node;

use crate::error::Result;
use crate::path_storage::{parse_path, parse_points, PathCommand, Point};
use crate::style::Style;

/// Drawable element, or a group of them
#[derive(Debug,Clone,PartialEq)]
pub enum Shape {
    Rect { x: f64, y: f64, width: f64, height: f64, style: Style },
    Circle { cx: f64, cy: f64, r: f64, style: Style },
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64, style: Style },
    /// Stroke only
    Line { x1: f64, y1: f64, x2: f64, y2: f64, style: Style },
    /// Open, stroke only
    Polyline { points: Vec<Point>, style: Style },
    /// Closed
    Polygon { points: Vec<Point>, style: Style },
    Path { commands: Vec<PathCommand>, style: Style },
    /// Container whose style becomes the default for its children
    Group { style: Style, children: Vec<Shape> },
}

impl Shape {
    /// Classify an element
    ///
    /// Unknown elements, text and comments give `Ok(None)`. A bad number
    ///   inside `points` or `d` is an error.
    pub fn from_node(node: Node<'_, '_>) -> Result<Option<Shape>> {
        if !node.is_element() {
            return Ok(None);
        }
        let style = Style::new(node.attribute("fill"), node.attribute("stroke"));
        let n = |name: &str| number(node, name);
        let shape = match node.tag_name().name() {
            "rect" => Shape::Rect {
                x: n("x"), y: n("y"), width: n("width"), height: n("height"), style
            },
            "circle" => Shape::Circle { cx: n("cx"), cy: n("cy"), r: n("r"), style },
            "ellipse" => Shape::Ellipse {
                cx: n("cx"), cy: n("cy"), rx: n("rx"), ry: n("ry"), style
            },
            "line" => Shape::Line {
                x1: n("x1"), y1: n("y1"), x2: n("x2"), y2: n("y2"), style
            },
            "polyline" => Shape::Polyline {
                points: parse_points(node.attribute("points").unwrap_or(""))?, style
            },
            "polygon" => Shape::Polygon {
                points: parse_points(node.attribute("points").unwrap_or(""))?, style
            },
            "path" => Shape::Path {
                commands: parse_path(node.attribute("d").unwrap_or(""))?, style
            },
            "g" => Shape::Group { children: Shape::children(node)?, style },
            other => {
                debug!("skipping unsupported element <{}>", other);
                return Ok(None);
            }
        };
        Ok(Some(shape))
    }
    /// Classify the children of `node` in document order
    pub fn children(node: Node<'_, '_>) -> Result<Vec<Shape>> {
        let mut out = vec![];
        for child in node.children() {
            if let Some(shape) = Shape::from_node(child)? {
                out.push(shape);
            }
        }
        Ok(out)
    }
    /// Element name
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Rect { .. }     => "rect",
            Shape::Circle { .. }   => "circle",
            Shape::Ellipse { .. }  => "ellipse",
            Shape::Line { .. }     => "line",
            Shape::Polyline { .. } => "polyline",
            Shape::Polygon { .. }  => "polygon",
            Shape::Path { .. }     => "path",
            Shape::Group { .. }    => "g",
        }
    }
    /// Own presentation attributes
    pub fn style(&self) -> &Style {
        match self {
            Shape::Rect { style, .. }     |
            Shape::Circle { style, .. }   |
            Shape::Ellipse { style, .. }  |
            Shape::Line { style, .. }     |
            Shape::Polyline { style, .. } |
            Shape::Polygon { style, .. }  |
            Shape::Path { style, .. }     |
            Shape::Group { style, .. }    => style,
        }
    }
}

/// Numeric attribute, missing or unreadable values are 0
pub fn number(node: Node<'_, '_>, name: &str) -> f64 {
    node.attribute(name)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn shapes(text: &str) -> Result<Vec<Shape>> {
        let doc = Document::parse(text)?;
        Shape::children(doc.root_element())
    }

    #[test]
    fn classify() {
        let s = shapes(r#"<svg>
            <rect x="1" y="2" width="3" height="4" fill="red"/>
            <circle cx="5" cy="6" r="7"/>
            <text>ignored</text>
            <ellipse cx="1" cy="1" rx="2" ry="x"/>
            <g stroke="blue"><line x1="0" y1="0" x2="3" y2="3"/><use/></g>
        </svg>"#).unwrap();
        assert_eq!(s.len(), 4);
        assert_eq!(s[0], Shape::Rect { x: 1., y: 2., width: 3., height: 4.,
                                       style: Style::new(Some("red"), None) });
        assert_eq!(s[1].name(), "circle");
        assert_eq!(s[2], Shape::Ellipse { cx: 1., cy: 1., rx: 2., ry: 0., style: Style::default() });
        match &s[3] {
            Shape::Group { style, children } => {
                assert_eq!(style.stroke.as_deref(), Some("blue"));
                assert_eq!(children.len(), 1);
                assert_eq!(children[0].name(), "line");
            },
            other => panic!("expected group, got {:?}", other),
        }
    }
    #[test]
    fn bad_numbers_fail() {
        assert!(shapes(r#"<svg><polygon points="0,0 1,z"/></svg>"#).is_err());
        assert!(shapes(r#"<svg><g><path d="M0,0 L 1,q"/></g></svg>"#).is_err());
    }
    #[test]
    fn missing_lists_are_empty() {
        let s = shapes(r#"<svg><polyline/><path/></svg>"#).unwrap();
        assert_eq!(s[0], Shape::Polyline { points: vec![], style: Style::default() });
        assert_eq!(s[1], Shape::Path { commands: vec![], style: Style::default() });
    }
}
