use image_rs::{Rgba, RgbaImage};
use ratios::types::AspectRatio;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const BORDER: Rgba<u8> = Rgba([0, 0, 0, 255]);
const SCREEN: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Draws a screen outline with the shape of `ratio`, centered on a transparent square.
/// Wide ratios lose height, tall ratios lose width
pub(crate) fn ratio_icon(ratio: AspectRatio, size: u32) -> RgbaImage {
    let decimal = ratio.decimal();
    let (outer_width, outer_height) = if decimal >= 1.0 {
        (size, (size as f64 / decimal).round() as u32)
    } else {
        ((size as f64 * decimal).round() as u32, size)
    };
    let outer_width = outer_width.max(1);
    let outer_height = outer_height.max(1);
    let border = (size / 32).max(1);
    let left = (size - outer_width) / 2;
    let top = (size - outer_height) / 2;

    RgbaImage::from_fn(size, size, |x, y| {
        let inside = x >= left && x < left + outer_width && y >= top && y < top + outer_height;
        if !inside {
            return TRANSPARENT;
        }
        let (x, y) = (x - left, y - top);
        if x < border
            || y < border
            || x >= outer_width.saturating_sub(border)
            || y >= outer_height.saturating_sub(border)
        {
            BORDER
        } else {
            SCREEN
        }
    })
}
