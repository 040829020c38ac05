//! Colors

use crate::Color;

/// 8-bit color with alpha, the value every paint resolves to
///
/// Alpha is stored but never blended; a pixel write replaces all four
///   components
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Opaque color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
    /// Background of every rendered image
    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }
    /// Fallback for unrecognized paint
    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }
    /// Paint of `none` or an empty attribute
    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
    /// Copy the components of any [Color]
    ///
    /// [Color]: ../trait.Color.html
    pub fn from_trait<C: Color>(c: C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8(), c.alpha8())
    }
}

impl Color for Rgba8 {
    fn red8(&self) -> u8   { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8  { self.b }
    fn alpha8(&self) -> u8 { self.a }
}

/// Opaque 8-bit color, the layout of alpha-less output formats
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
}

impl Color for Rgb8 {
    fn red8(&self) -> u8   { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8  { self.b }
    fn alpha8(&self) -> u8 { 255 }
}
