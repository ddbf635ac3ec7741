use crate::core::color::Color;
use crate::core::luma::luma;
use image::{Rgba, RgbaImage};

/// Silhouette transform: every output pixel is `color` with
/// `alpha = 255 − luma(src)`, so white turns transparent and black
/// turns opaque. Dimensions are preserved; the input is untouched.
///
/// Not idempotent: a second pass sees a uniform-color image, so its
/// luminance (and therefore alpha) collapses to one constant.
pub fn recolor(src: &RgbaImage, color: Color) -> RgbaImage {
    let mut out = RgbaImage::new(src.width(), src.height());
    for (dst, px) in out.pixels_mut().zip(src.pixels()) {
        let Rgba([r, g, b, _]) = *px; // source alpha is ignored
        let alpha = 255 - luma(r, g, b);
        *dst = Rgba([color.r, color.g, color.b, alpha]);
    }
    out
}
