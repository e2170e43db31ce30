// Pixel buffer shared by the renderer and the window, plus the fallback
// picture the demo magnifies when no snapshot file is around.

use image::RgbImage;

/// Each entry is 0x00RRGGBB, the packing minifb expects.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u32; width * height],
        }
    }

    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let (w, h) = img.dimensions();
        let mut pixels = Vec::with_capacity((w as usize) * (h as usize));
        for pixel in img.pixels() {
            let r = pixel[0] as u32;
            let g = pixel[1] as u32;
            let b = pixel[2] as u32;
            pixels.push((r << 16) | (g << 8) | b);
        }
        Self {
            width: w as usize,
            height: h as usize,
            pixels,
        }
    }
}

/// Checker-and-gradient pattern with visible grid lines, so panning and
/// zooming have something legible to act on without a real screenshot.
pub fn test_pattern(width: usize, height: usize) -> FrameBuffer {
    let mut fb = FrameBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let checker = ((x / 64) + (y / 64)) % 2 == 0;
            let base = if checker { 0x30 } else { 0x18 };
            let r = base + ((x * 0xC0) / width.max(1)) as u32;
            let g = base + ((y * 0xC0) / height.max(1)) as u32;
            let b = base + 0x40;
            let mut px = (r.min(255) << 16) | (g.min(255) << 8) | b.min(255);
            // Bright grid lines every 256px anchor the eye while zoomed in.
            if x % 256 == 0 || y % 256 == 0 {
                px = 0x00E0_E0E0;
            }
            fb.pixels[y * width + x] = px;
        }
    }
    fb
}
