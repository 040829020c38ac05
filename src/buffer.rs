//! Rendering buffer

use std::ops::{Index, IndexMut};

use log::warn;

/// Row-major pixel component storage
///
/// Indexing with `(x,y)` yields the `bpp` components of one pixel and
///   panics outside of the image
#[derive(Debug,Default,Clone,PartialEq)]
pub struct RenderingBuffer {
    /// Components, `width * height * bpp` bytes
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Bytes per pixel
    pub bpp: usize,
}

impl RenderingBuffer {
    /// Zeroed buffer, a zero width or height gives an empty buffer
    ///
    /// A size whose byte count does not fit in `usize` also gives an
    ///   empty, 0 x 0, buffer
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        match width.checked_mul(height).and_then(|n| n.checked_mul(bpp)) {
            Some(n) => RenderingBuffer { data: vec![0u8; n], width, height, bpp },
            None => {
                warn!("buffer of {}x{}x{} bytes is too large, using an empty one", width, height, bpp);
                RenderingBuffer { data: vec![], width: 0, height: 0, bpp }
            }
        }
    }
    /// Size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    fn offset(&self, (x, y): (usize, usize)) -> usize {
        assert!(x < self.width && y < self.height,
                "pixel ({},{}) outside {}x{} buffer", x, y, self.width, self.height);
        (y * self.width + x) * self.bpp
    }
}

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, id: (usize, usize)) -> &[u8] {
        let i = self.offset(id);
        &self.data[i .. i + self.bpp]
    }
}

impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, id: (usize, usize)) -> &mut [u8] {
        let (i, n) = (self.offset(id), self.bpp);
        &mut self.data[i .. i + n]
    }
}
