//! Pixel storage formats

use std::marker::PhantomData;

use crate::buffer::RenderingBuffer;
use crate::color::{Rgb8, Rgba8};
use crate::{Color, Pixel, PixelData, Source};

/// Typed view of a [RenderingBuffer]
///
/// `T` selects the component layout, [Rgba8] for 4 bytes per pixel and
///   [Rgb8] for 3. Pixels are written through the [Pixel] trait and read
///   back through [Source].
///
/// [RenderingBuffer]: ../buffer/struct.RenderingBuffer.html
/// [Rgba8]: ../color/struct.Rgba8.html
/// [Rgb8]: ../color/struct.Rgb8.html
/// [Pixel]: ../trait.Pixel.html
/// [Source]: ../trait.Source.html
#[derive(Debug,Clone,PartialEq)]
pub struct Pixfmt<T> {
    rbuf: RenderingBuffer,
    phantom: PhantomData<T>,
}

impl<T> Pixfmt<T> where Pixfmt<T>: Pixel {
    /// Zeroed image of `width` x `height`, either may be 0
    ///
    ///     use svgpix::{Pixfmt,Rgba8,Source};
    ///
    ///     let pix = Pixfmt::<Rgba8>::new(1,2);
    ///     assert_eq!(pix.get((0,1)), Rgba8::transparent());
    ///
    pub fn new(width: usize, height: usize) -> Self {
        let rbuf = RenderingBuffer::new(width, height, Self::bpp());
        Self { rbuf, phantom: PhantomData }
    }
    /// Image of `width` x `height` with every pixel set to `c`
    pub fn new_filled<C: Color>(width: usize, height: usize, c: C) -> Self {
        let mut pix = Self::new(width, height);
        pix.fill(c);
        pix
    }
    /// No pixels, width or height is 0
    pub fn is_empty(&self) -> bool {
        self.rbuf.is_empty()
    }
    /// Raw component storage
    pub fn rbuf(&self) -> &RenderingBuffer {
        &self.rbuf
    }
}

impl Pixfmt<Rgba8> {
    /// Wrap row-major RGBA components of a `width` x `height` image
    ///
    /// None when `data` is not `width * height * 4` bytes long
    ///
    ///     use svgpix::{Pixfmt,Rgba8,Source};
    ///
    ///     let pix = Pixfmt::from_rgba(2, 1, vec![1,2,3,4, 5,6,7,8]).unwrap();
    ///     assert_eq!(pix.get((1,0)), Rgba8::new(5,6,7,8));
    ///     assert!(Pixfmt::from_rgba(2, 2, vec![0; 8]).is_none());
    ///
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        let n = width.checked_mul(height)?.checked_mul(4)?;
        if data.len() != n {
            return None;
        }
        let rbuf = RenderingBuffer { data, width, height, bpp: 4 };
        Some(Self { rbuf, phantom: PhantomData })
    }
    /// Same image without the alpha channel
    pub fn to_rgb(&self) -> Pixfmt<Rgb8> {
        let mut out = Pixfmt::<Rgb8>::new(self.width(), self.height());
        let src = self.rbuf.data.chunks_exact(4);
        for (dst, px) in out.rbuf.data.chunks_exact_mut(3).zip(src) {
            dst.copy_from_slice(&px[..3]);
        }
        out
    }
}

fn components<C: Color>(c: C) -> [u8; 4] {
    [c.red8(), c.green8(), c.blue8(), c.alpha8()]
}

impl<T> PixelData for Pixfmt<T> {
    fn pixeldata(&self) -> &[u8] {
        &self.rbuf.data
    }
}

impl Source for Pixfmt<Rgba8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        match self.rbuf[id] {
            [r, g, b, a] => Rgba8::new(r, g, b, a),
            _ => unreachable!("rgba pixel is 4 bytes"),
        }
    }
}

impl Source for Pixfmt<Rgb8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        match self.rbuf[id] {
            [r, g, b] => Rgba8::rgb(r, g, b),
            _ => unreachable!("rgb pixel is 3 bytes"),
        }
    }
}

impl Pixel for Pixfmt<Rgba8> {
    fn bpp() -> usize { 4 }
    fn width(&self) -> usize  { self.rbuf.width }
    fn height(&self) -> usize { self.rbuf.height }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        self.rbuf[id].copy_from_slice(&components(c));
    }
    fn fill<C: Color>(&mut self, c: C) {
        let px = components(c);
        for p in self.rbuf.data.chunks_exact_mut(4) {
            p.copy_from_slice(&px);
        }
    }
}

impl Pixel for Pixfmt<Rgb8> {
    fn bpp() -> usize { 3 }
    fn width(&self) -> usize  { self.rbuf.width }
    fn height(&self) -> usize { self.rbuf.height }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        self.rbuf[id].copy_from_slice(&components(c)[..3]);
    }
}
