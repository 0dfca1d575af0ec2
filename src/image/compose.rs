//! Post-bake compositing: alpha conversion and accessory overlays.
use super::{ImageView, RgbBuffer, BLACK};
use image::{Rgba, RgbaImage};

/// Convert to RGBA. With `transparent_black`, pure black pixels (regions that
/// were never baked) become fully transparent.
pub fn to_rgba(buffer: &RgbBuffer, transparent_black: bool) -> RgbaImage {
    let mut out = RgbaImage::new(buffer.width() as u32, buffer.height() as u32);
    for (y, row) in buffer.rows().enumerate() {
        for (x, px) in row.iter().enumerate() {
            let alpha = if transparent_black && *px == BLACK {
                0
            } else {
                255
            };
            out.put_pixel(x as u32, y as u32, Rgba([px[0], px[1], px[2], alpha]));
        }
    }
    out
}

/// Alpha-over `accessory` onto `base` with its top-left corner at `offset`.
/// Pixels falling outside `base` are dropped.
pub fn overlay_accessory(base: &mut RgbaImage, accessory: &RgbaImage, offset: (u32, u32)) {
    let (bw, bh) = base.dimensions();
    for (x, y, src) in accessory.enumerate_pixels() {
        let (tx, ty) = (x + offset.0, y + offset.1);
        if tx >= bw || ty >= bh {
            continue;
        }
        let dst = base.get_pixel_mut(tx, ty);
        *dst = blend_over(*src, *dst);
    }
}

fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let mut out = [0u8; 4];
    for c in 0..3 {
        let v = (src[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    Rgba(out)
}
