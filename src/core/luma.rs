// ITU-R BT.601 weights (0.299 R + 0.587 G + 0.114 B) in the same
// 14-bit fixed-point form OpenCV uses, so results stay bit-comparable
// with the legacy RGBA→GRAY path. Source alpha never participates.
const W_R: u32 = 4899;
const W_G: u32 = 9617;
const W_B: u32 = 1868;
const SHIFT: u32 = 14;

/// Rounded-to-nearest BT.601 luminance of one pixel.
/// The coefficient sum is exactly `1 << SHIFT`, so the result is
/// always in 0..=255 — no clamp needed.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * W_R + g as u32 * W_G + b as u32 * W_B + (1 << (SHIFT - 1))) >> SHIFT) as u8
}
