//! Raster pixel buffer.
//!
//! `PixelBuffer` is the host-owned raster the flood fill mutates in place.
//! Pixels are packed [`Color`] values in row-major order.

use crate::error::{CanvasError, CanvasResult};
use crate::types::{Color, PixelPoint, PixelRect};
use image::RgbaImage;

#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PixelBuffer {
    /// A `width` x `height` buffer filled with `color`.
    pub fn new(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Wrap packed `0xRRGGBBAA` values.
    pub fn from_raw(width: u32, height: u32, raw: Vec<u32>) -> CanvasResult<Self> {
        let expected = width as usize * height as usize;
        if raw.len() != expected {
            return Err(CanvasError::BufferSizeMismatch {
                expected,
                actual: raw.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: raw.into_iter().map(Color).collect(),
        })
    }

    /// Build from a slice of colors laid out row by row.
    pub fn from_colors(width: u32, height: u32, colors: &[Color]) -> CanvasResult<Self> {
        let expected = width as usize * height as usize;
        if colors.len() != expected {
            return Err(CanvasError::BufferSizeMismatch {
                expected,
                actual: colors.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: colors.to_vec(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: PixelPoint) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Color at `p`, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, p: PixelPoint) -> Option<Color> {
        if self.contains(p) {
            Some(self.pixels[self.index(p.x as u32, p.y as u32)])
        } else {
            None
        }
    }

    /// Set the color at `p`. Returns `false` outside the buffer.
    #[inline]
    pub fn set(&mut self, p: PixelPoint, color: Color) -> bool {
        if !self.contains(p) {
            return false;
        }
        let idx = self.index(p.x as u32, p.y as u32);
        self.pixels[idx] = color;
        true
    }

    /// One full row. Caller guarantees `y < height`.
    #[inline]
    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [Color] {
        let start = self.index(0, y);
        let width = self.width as usize;
        &mut self.pixels[start..start + width]
    }

    pub fn fill_all(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Copy a rectangular region out as its own buffer.
    pub fn read_region(&self, rect: PixelRect) -> CanvasResult<PixelBuffer> {
        self.check_region(rect)?;
        let mut out = Vec::with_capacity(rect.area());
        for y in 0..rect.height {
            let start = self.index(rect.x as u32, rect.y as u32 + y);
            out.extend_from_slice(&self.pixels[start..start + rect.width as usize]);
        }
        Ok(PixelBuffer {
            width: rect.width,
            height: rect.height,
            pixels: out,
        })
    }

    /// Write `src` back with its top-left corner at `origin`.
    pub fn write_region(&mut self, origin: PixelPoint, src: &PixelBuffer) -> CanvasResult<()> {
        let rect = PixelRect::new(origin.x, origin.y, src.width, src.height);
        self.check_region(rect)?;
        for y in 0..src.height {
            let dst = self.index(origin.x as u32, origin.y as u32 + y);
            let from = src.index(0, y);
            self.pixels[dst..dst + src.width as usize]
                .copy_from_slice(&src.pixels[from..from + src.width as usize]);
        }
        Ok(())
    }

    fn check_region(&self, rect: PixelRect) -> CanvasResult<()> {
        let fits = rect.x >= 0
            && rect.y >= 0
            && rect.x as u64 + rect.width as u64 <= self.width as u64
            && rect.y as u64 + rect.height as u64 <= self.height as u64;
        if fits {
            Ok(())
        } else {
            Err(CanvasError::RegionOutOfBounds {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
            })
        }
    }

    // ------------------------------------------------------------------------
    // image crate interop
    // ------------------------------------------------------------------------

    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let pixels = img
            .pixels()
            .map(|p| Color::from_rgba(p.0[0], p.0[1], p.0[2], p.0[3]))
            .collect();
        Self {
            width: img.width(),
            height: img.height(),
            pixels,
        }
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        let raw: Vec<u8> = self.pixels.iter().flat_map(|c| c.to_rgba()).collect();
        // raw.len() == width * height * 4 by construction
        RgbaImage::from_raw(self.width, self.height, raw)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    /// Load any image format the `image` crate understands.
    pub fn open(path: impl AsRef<std::path::Path>) -> CanvasResult<Self> {
        let img = image::open(path)?.to_rgba8();
        Ok(Self::from_rgba_image(&img))
    }

    /// Save as an image; format is chosen from the extension.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> CanvasResult<()> {
        self.to_rgba_image().save(path)?;
        Ok(())
    }
}
