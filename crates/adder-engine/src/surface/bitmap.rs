use std::fmt;

use image::{imageops, Rgba, RgbaImage};

use crate::coords::Vec2;
use crate::paint::Color;

/// Owned RGBA8 bitmap with straight alpha.
#[derive(Clone, PartialEq)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// Fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self { pixels: RgbaImage::new(width, height) }
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self { pixels: RgbaImage::from_pixel(width, height, Rgba(color.to_rgba8())) }
    }

    pub fn from_image(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Size in logical pixels.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Color at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|p| Color::rgba(p[0], p[1], p[2], p[3]))
    }

    pub fn fill(&mut self, color: Color) {
        let px = Rgba(color.to_rgba8());
        for p in self.pixels.pixels_mut() {
            *p = px;
        }
    }

    /// Overwrites a rectangle (clipped to the surface) with `color`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let px = Rgba(color.to_rgba8());
        let (x0, x1) = clip_span(x, w, self.width());
        let (y0, y1) = clip_span(y, h, self.height());
        for yy in y0..y1 {
            for xx in x0..x1 {
                self.pixels.put_pixel(xx, yy, px);
            }
        }
    }

    /// Alpha-composites `src` over this surface with its top-left at `(x, y)`.
    ///
    /// Parts of `src` outside this surface are dropped.
    pub fn blit(&mut self, src: &Surface, x: i32, y: i32) {
        let (x0, x1) = clip_span(x, src.width(), self.width());
        let (y0, y1) = clip_span(y, src.height(), self.height());
        for dy in y0..y1 {
            for dx in x0..x1 {
                let sx = (dx as i64 - x as i64) as u32;
                let sy = (dy as i64 - y as i64) as u32;
                let s = *src.pixels.get_pixel(sx, sy);
                if s[3] == 0 {
                    continue;
                }
                let d = self.pixels.get_pixel_mut(dx, dy);
                *d = blend_over(s, *d);
            }
        }
    }

    /// Returns a copy rotated counter-clockwise by `degrees` around its center.
    ///
    /// The result grows to the bounding box of the rotated bitmap; uncovered
    /// pixels are transparent. Quarter turns are exact pixel permutations, other
    /// angles use nearest-neighbour sampling.
    pub fn rotated(&self, degrees: f32) -> Surface {
        let deg = degrees.rem_euclid(360.0);
        if deg == 0.0 {
            return self.clone();
        }
        if deg == 90.0 {
            return Surface::from_image(imageops::rotate270(&self.pixels));
        }
        if deg == 180.0 {
            return Surface::from_image(imageops::rotate180(&self.pixels));
        }
        if deg == 270.0 {
            return Surface::from_image(imageops::rotate90(&self.pixels));
        }

        let (sin, cos) = deg.to_radians().sin_cos();
        let (w, h) = (self.width() as f32, self.height() as f32);
        let out_w = (w * cos.abs() + h * sin.abs()).ceil() as u32;
        let out_h = (w * sin.abs() + h * cos.abs()).ceil() as u32;

        let (scx, scy) = (w / 2.0, h / 2.0);
        let (dcx, dcy) = (out_w as f32 / 2.0, out_h as f32 / 2.0);

        let mut out = RgbaImage::new(out_w, out_h);
        for (dx, dy, px) in out.enumerate_pixels_mut() {
            // Inverse mapping from destination pixel center back into the source.
            let x = dx as f32 + 0.5 - dcx;
            let y = dy as f32 + 0.5 - dcy;
            let sx = x * cos - y * sin + scx;
            let sy = x * sin + y * cos + scy;
            if sx >= 0.0 && sy >= 0.0 && sx < w && sy < h {
                *px = *self.pixels.get_pixel(sx as u32, sy as u32);
            }
        }
        Surface::from_image(out)
    }

    /// Writes the surface as `0x00RRGGBB` words into `out`, row-major.
    ///
    /// `out` must hold at least `width * height` words.
    pub fn write_xrgb(&self, out: &mut [u32]) {
        for (dst, p) in out.iter_mut().zip(self.pixels.pixels()) {
            *dst = Color::rgb(p[0], p[1], p[2]).to_xrgb();
        }
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Clips the span `[start, start + len)` to `[0, bound)`.
fn clip_span(start: i32, len: u32, bound: u32) -> (u32, u32) {
    let lo = (start as i64).clamp(0, bound as i64);
    let hi = (start as i64 + len as i64).clamp(0, bound as i64);
    (lo as u32, hi.max(lo) as u32)
}

fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    if src[3] == 255 {
        return src;
    }
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let oa = sa + da * (1.0 - sa);
    if oa <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let mix = |s: u8, d: u8| {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / oa;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        (oa * 255.0).round() as u8,
    ])
}
