/// How does this work
///    doc = roxmltree::Document::parse( text )
///    img = render( doc.root_element() )
///  Load
///    Shape::from_node()    -- closed variant per element name
///      parse_points()      -- polyline / polygon
///      parse_path()        -- path, 'M L C Q Z'
///  Render
///    RenderingBase( Pixfmt( data ) )  filled white
///    draw_shape( shape, StyleContext )
///      StyleContext::fill() / stroke()  -- local > group > none
///        resolve()                      -- color token to Rgba8
///      RendererPrimitives
///        line()            -- Bresenham, left to right
///        circle()          -- midpoint, 8-way
///        ellipse()         -- midpoint, two regions
///        solid_circle() / solid_ellipse()  -- membership test
///      ScanlineFill
///        spans() / render() -- even-odd, half-open edges
///    copy_pixel()  -- clipped at RenderingBase, no blending

pub mod color;
pub mod named;
pub mod paint;
pub mod buffer;
pub mod pixfmt;
pub mod base;
pub mod primitives;
pub mod scan;
pub mod path_storage;
pub mod curves;
pub mod style;
pub mod shape;
pub mod render;
pub mod ppm;
pub mod error;

pub use crate::color::*;
pub use crate::paint::*;
pub use crate::buffer::*;
pub use crate::pixfmt::*;
pub use crate::base::*;
pub use crate::primitives::*;
pub use crate::scan::*;
pub use crate::path_storage::*;
pub use crate::curves::*;
pub use crate::style::*;
pub use crate::shape::*;
pub use crate::render::*;
pub use crate::ppm::*;
pub use crate::error::*;

/// Raw access to pixel component data
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

/// Access a pixel as an Rgba8 value
pub trait Source {
    fn get(&self, id: (usize, usize)) -> Rgba8;
}

/// Pixel storage of a fixed format
pub trait Pixel {
    /// Bytes per pixel
    fn bpp() -> usize;
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize;
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize;
    /// Overwrite the pixel at `id` with `c`
    fn set<C: Color>(&mut self, id: (usize, usize), c: C);
    /// Overwrite every pixel with `c`
    fn fill<C: Color>(&mut self, c: C) {
        for y in 0 .. self.height() {
            for x in 0 .. self.width() {
                self.set((x,y), c);
            }
        }
    }
}

/// Access Color properties and components
pub trait Color: std::fmt::Debug + Copy {
    /// Get red value [0,255] as u8
    fn red8(&self) -> u8;
    /// Get green value [0,255] as u8
    fn green8(&self) -> u8;
    /// Get blue value [0,255] as u8
    fn blue8(&self) -> u8;
    /// Get alpha value [0,255] as u8
    fn alpha8(&self) -> u8;
    /// Return if the color is completely transparent, alpha = 0
    fn is_transparent(&self) -> bool { self.alpha8() == 0 }
    /// Return if the color is completely opaque, alpha = 255
    fn is_opaque(&self) -> bool { self.alpha8() == 255 }
}
