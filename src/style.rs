//! Presentation attributes and their inheritance
//!
//! Only `<g>` hands defaults down. Precedence for a shape is its own
//!   attribute, then the nearest enclosing group, then nothing.

use crate::color::Rgba8;
use crate::paint::resolve;

/// `fill` and `stroke` attributes as written on one element
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
}

impl Style {
    pub fn new(fill: Option<&str>, stroke: Option<&str>) -> Self {
        Self { fill: fill.map(String::from), stroke: stroke.map(String::from) }
    }
}

/// Defaults in effect while walking the tree
///
/// Passed down by value; a group derives a new context for its children
///   and the parent's context is left untouched
#[derive(Debug,Default,Clone,PartialEq)]
pub struct StyleContext {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    /// Values were supplied by an enclosing group
    pub inherited: bool,
}

impl StyleContext {
    /// Context at the document root, no defaults
    pub fn new() -> Self {
        Self::default()
    }
    /// Context for the children of a group with `style`
    ///
    /// The group's own attributes replace the defaults it inherited
    ///
    ///     use svgpix::{Style,StyleContext,Rgba8};
    ///
    ///     let outer = StyleContext::new().group(&Style::new(Some("blue"), Some("red")));
    ///     let inner = outer.group(&Style::new(Some("lime"), None));
    ///     assert_eq!(inner.fill(None), Some(Rgba8::new(0,255,0,255)));
    ///     assert_eq!(inner.stroke(None), Some(Rgba8::new(255,0,0,255)));
    ///     assert_eq!(inner.fill(Some("none")), None);
    ///
    pub fn group(&self, style: &Style) -> StyleContext {
        StyleContext {
            fill: style.fill.clone().or_else(|| self.fill.clone()),
            stroke: style.stroke.clone().or_else(|| self.stroke.clone()),
            inherited: true,
        }
    }
    /// Fill color for an element whose own attribute is `local`
    pub fn fill(&self, local: Option<&str>) -> Option<Rgba8> {
        paint(local.or_else(|| self.fill.as_deref()))
    }
    /// Stroke color for an element whose own attribute is `local`
    pub fn stroke(&self, local: Option<&str>) -> Option<Rgba8> {
        paint(local.or_else(|| self.stroke.as_deref()))
    }
}

/// Color to draw with, None when nothing should be drawn
///
/// Absent, empty and `none` tokens draw nothing; anything else is
///   resolved, unknown names becoming black
pub fn paint(token: Option<&str>) -> Option<Rgba8> {
    let token = token?.trim();
    if token.is_empty() || token == "none" {
        return None;
    }
    Some(resolve(token))
}
