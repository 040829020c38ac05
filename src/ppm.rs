//! Reading and writing of raster images
//!
//! The output format follows the file extension, see [OutputFormat].
//!   PNG, GIF and ICO keep the alpha channel, the others are written as RGB.
//!   Input is an SVG document, rendered, or any raster file the codecs can
//!   decode.
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//!
//! [OutputFormat]: enum.OutputFormat.html
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use log::{debug, info};

use crate::color::Rgba8;
use crate::error::{Error, Result};
use crate::pixfmt::Pixfmt;
use crate::render::render_file;
use crate::Pixel;
use crate::PixelData;

/// Raster file formats an image can be saved as
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum OutputFormat {
    Png,
    /// Binary PPM, P6
    Ppm,
    /// ASCII PPM, P3
    PpmAscii,
    Bmp,
    Jpeg,
    Ico,
    Gif,
}

impl OutputFormat {
    /// Format for a file extension, without the dot, any case
    pub fn from_extension(ext: &str) -> Result<OutputFormat> {
        match ext.to_ascii_lowercase().as_str() {
            "png"          => Ok(OutputFormat::Png),
            "ppm" | "pnm"  => Ok(OutputFormat::Ppm),
            "p3"           => Ok(OutputFormat::PpmAscii),
            "bmp"          => Ok(OutputFormat::Bmp),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "ico"          => Ok(OutputFormat::Ico),
            "gif"          => Ok(OutputFormat::Gif),
            _ => Err(Error::UnsupportedFormat(ext.to_string())),
        }
    }
    /// Format from the extension of `path`
    ///
    ///     use svgpix::OutputFormat;
    ///
    ///     assert_eq!(OutputFormat::from_path("out/a.PNG").unwrap(), OutputFormat::Png);
    ///     assert_eq!(OutputFormat::from_path("a.p3").unwrap(), OutputFormat::PpmAscii);
    ///     assert!(OutputFormat::from_path("a.svg").is_err());
    ///     assert!(OutputFormat::from_path("noext").is_err());
    ///
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<OutputFormat> {
        let path = path.as_ref();
        let ext = path.extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
        Self::from_extension(ext)
    }
    /// Alpha channel is kept when writing
    pub fn has_alpha(self) -> bool {
        match self {
            OutputFormat::Png | OutputFormat::Ico | OutputFormat::Gif => true,
            OutputFormat::Ppm | OutputFormat::PpmAscii |
            OutputFormat::Bmp | OutputFormat::Jpeg => false,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<OutputFormat> {
        Self::from_extension(s.trim_start_matches('.'))
    }
}

/// Write `pix` to `filename` in `format`
pub fn write_file<P: AsRef<Path>>(pix: &Pixfmt<Rgba8>, filename: P, format: OutputFormat) -> Result<()> {
    if pix.is_empty() {
        return Err(Error::EmptyImage);
    }
    let filename = filename.as_ref();
    let (w, h) = (pix.width() as u32, pix.height() as u32);
    let rgb;
    let (buf, color) = if format.has_alpha() {
        (pix.pixeldata(), ExtendedColorType::Rgba8)
    } else {
        rgb = pix.to_rgb();
        (rgb.pixeldata(), ExtendedColorType::Rgb8)
    };
    match format {
        OutputFormat::Ppm | OutputFormat::PpmAscii => {
            let encoding = if format == OutputFormat::Ppm {
                SampleEncoding::Binary
            } else {
                SampleEncoding::Ascii
            };
            let out = BufWriter::new(File::create(filename)?);
            PnmEncoder::new(out)
                .with_subtype(PnmSubtype::Pixmap(encoding))
                .write_image(buf, w, h, color)?;
        },
        OutputFormat::Png  => image::save_buffer_with_format(filename, buf, w, h, color, ImageFormat::Png)?,
        OutputFormat::Bmp  => image::save_buffer_with_format(filename, buf, w, h, color, ImageFormat::Bmp)?,
        OutputFormat::Jpeg => image::save_buffer_with_format(filename, buf, w, h, color, ImageFormat::Jpeg)?,
        OutputFormat::Ico  => image::save_buffer_with_format(filename, buf, w, h, color, ImageFormat::Ico)?,
        OutputFormat::Gif  => image::save_buffer_with_format(filename, buf, w, h, color, ImageFormat::Gif)?,
    }
    info!("wrote {}x{} {:?} to {}", w, h, format, filename.display());
    Ok(())
}

/// Decode a raster image file, format guessed from its content
pub fn read_image<P: AsRef<Path>>(filename: P) -> Result<Pixfmt<Rgba8>> {
    let filename = filename.as_ref();
    let img = image::ImageReader::open(filename)?
        .with_guessed_format()?
        .decode()?
        .to_rgba8();
    let (w, h) = img.dimensions();
    debug!("read {}x{} from {}", w, h, filename.display());
    Pixfmt::from_rgba(w as usize, h as usize, img.into_raw())
        .ok_or_else(|| Error::UnsupportedFormat(filename.display().to_string()))
}

/// Load an image to convert
///
/// Files ending in `.svg` are rendered, anything else is decoded as a
///   raster image
pub fn load_file<P: AsRef<Path>>(filename: P) -> Result<Pixfmt<Rgba8>> {
    let filename = filename.as_ref();
    let is_svg = filename.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        render_file(filename)
    } else {
        read_image(filename)
    }
}

/// Read an image file as RGB data, returning (data, width, height)
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::ImageReader::open(filename)?
        .with_guessed_format()?
        .decode()?
        .to_rgb8();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}

/// Compare the RGB content of two image files
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::debug!("{} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}

impl Pixfmt<Rgba8> {
    /// Save to a file, format chosen by extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let format = OutputFormat::from_path(filename.as_ref())?;
        write_file(self, filename, format)
    }
}
