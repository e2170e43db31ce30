// Software rendering of the magnified view. Stands in for the GPU stage:
// consumes the same numeric outputs a shader would get as uniforms (camera
// position/scale, flashlight shadow/radius/position/deformation) and fills
// the window's pixel buffer.

use crate::session::{FlashlightView, RenderParams};
use crate::types::FrameBuffer;
use crate::vec2::Vec2;

/// Fill color for samples that fall outside the source picture.
const VOID_COLOR: u32 = 0x0014_1414;
/// Width of the spotlight's soft edge, as a fraction of its radius.
const SPOTLIGHT_EDGE: f32 = 0.12;

/// Draw the source picture through the camera transform, then darken
/// everything outside the flashlight spotlight by its shadow opacity.
pub fn render_view(out: &mut FrameBuffer, src: &FrameBuffer, params: &RenderParams) {
    let half_window = Vec2::new(out.width as f32, out.height as f32) * 0.5;
    let half_image = Vec2::new(src.width as f32, src.height as f32) * 0.5;
    let camera = params.camera;
    let fl = &params.flashlight;
    let shade = fl.shadow > 1.0 / 255.0;

    for y in 0..out.height {
        for x in 0..out.width {
            let p = Vec2::new(x as f32, y as f32);
            // Window pixel to source pixel; the pivot-correction in the
            // camera update is what keeps this mapping stable under zoom.
            let q = (p - half_window) / camera.scale + half_image + camera.position;

            let mut px = sample(src, q);
            if shade {
                let darken = fl.shadow * spotlight_coverage(fl, p);
                if darken > 0.0 {
                    px = scale_rgb(px, 1.0 - darken);
                }
            }
            out.pixels[y * out.width + x] = px;
        }
    }
}

/// Nearest-neighbour sample; anything off the picture is flat dark grey.
#[inline]
fn sample(src: &FrameBuffer, q: Vec2) -> u32 {
    if q.x < 0.0 || q.y < 0.0 {
        return VOID_COLOR;
    }
    let (sx, sy) = (q.x as usize, q.y as usize);
    if sx >= src.width || sy >= src.height {
        return VOID_COLOR;
    }
    src.pixels[sy * src.width + sx]
}

/// 0 inside the deformed spotlight, ramping to 1 across a soft edge band.
/// The bubble's stretch elongates the ellipse along the motion axis while
/// squeeze pinches it across.
fn spotlight_coverage(fl: &FlashlightView, p: Vec2) -> f32 {
    let v = p - fl.position;
    let stretch_len = fl.stretch.length();

    let (along, across) = if stretch_len > 1e-3 {
        let axis = fl.stretch.normalize();
        (v.dot(axis), v.dot(axis.perp()))
    } else {
        (v.x, v.y)
    };

    let radius_along = (fl.radius * (1.0 + stretch_len)).max(1.0);
    let radius_across = (fl.radius * (1.0 - fl.squeeze)).max(1.0);

    let a = along / radius_along;
    let b = across / radius_across;
    // Normalized elliptic distance: 1.0 exactly on the rim.
    let d = (a * a + b * b).sqrt();
    ((d - 1.0) / SPOTLIGHT_EDGE).clamp(0.0, 1.0)
}

#[inline]
fn scale_rgb(px: u32, factor: f32) -> u32 {
    let f = factor.clamp(0.0, 1.0);
    let r = (((px >> 16) & 0xFF) as f32 * f) as u32;
    let g = (((px >> 8) & 0xFF) as f32 * f) as u32;
    let b = ((px & 0xFF) as f32 * f) as u32;
    (r << 16) | (g << 8) | b
}

#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = color;
}

/// Small "+" marker at the cursor, with a gap at the center so the pixel
/// under the pointer stays visible.
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32, color: u32) {
    for d in 2..=size {
        put_pixel(fb, cx - d, cy, color);
        put_pixel(fb, cx + d, cy, color);
        put_pixel(fb, cx, cy - d, color);
        put_pixel(fb, cx, cy + d, color);
    }
    put_pixel(fb, cx, cy, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CameraView;
    use crate::types::test_pattern;

    fn params(shadow: f32, radius: f32, fl_pos: Vec2) -> RenderParams {
        RenderParams {
            camera: CameraView {
                position: Vec2::ZERO,
                scale: 1.0,
            },
            flashlight: FlashlightView {
                enabled: shadow > 0.0,
                shadow,
                radius,
                position: fl_pos,
                stretch: Vec2::ZERO,
                squeeze: 0.0,
            },
        }
    }

    #[test]
    fn identity_transform_maps_centers() {
        let src = test_pattern(400, 300);
        let mut out = FrameBuffer::new(400, 300);
        render_view(&mut out, &src, &params(0.0, 200.0, Vec2::ZERO));
        let center = 150 * 400 + 200;
        assert_eq!(out.pixels[center], src.pixels[center]);
    }

    #[test]
    fn out_of_range_samples_are_void() {
        let src = test_pattern(100, 100);
        let mut out = FrameBuffer::new(400, 300);
        render_view(&mut out, &src, &params(0.0, 200.0, Vec2::ZERO));
        assert_eq!(out.pixels[0], VOID_COLOR);
    }

    #[test]
    fn zoom_magnifies_about_window_center() {
        let src = test_pattern(400, 300);
        let mut out = FrameBuffer::new(400, 300);
        let p = RenderParams {
            camera: CameraView {
                position: Vec2::ZERO,
                scale: 2.0,
            },
            ..params(0.0, 200.0, Vec2::ZERO)
        };
        render_view(&mut out, &src, &p);
        // The window center still shows the picture center.
        assert_eq!(out.pixels[150 * 400 + 200], src.pixels[150 * 400 + 200]);
    }

    #[test]
    fn shadow_darkens_outside_spotlight_only() {
        let src = test_pattern(400, 300);
        let mut out = FrameBuffer::new(400, 300);
        let spotlight = Vec2::new(200.0, 150.0);
        render_view(&mut out, &src, &params(0.8, 60.0, spotlight));

        // Center of the spotlight is untouched.
        assert_eq!(out.pixels[150 * 400 + 200], src.pixels[150 * 400 + 200]);
        // A corner far outside is darkened to ~20% brightness.
        let corner = 10 * 400 + 390;
        let bright = (src.pixels[corner] >> 16) & 0xFF;
        let dark = (out.pixels[corner] >> 16) & 0xFF;
        assert!(dark < bright / 3 + 2);
    }

    #[test]
    fn crosshair_leaves_gap_and_stays_in_bounds() {
        let mut fb = FrameBuffer::new(50, 50);
        draw_crosshair(&mut fb, 25, 25, 10, 0x00FF_CC33);
        assert_eq!(fb.pixels[25 * 50 + 25], 0x00FF_CC33);
        assert_eq!(fb.pixels[25 * 50 + 26], 0);
        assert_eq!(fb.pixels[25 * 50 + 27], 0x00FF_CC33);
        // Near the edge: must not panic or wrap.
        draw_crosshair(&mut fb, 0, 0, 10, 0x00FF_CC33);
        draw_crosshair(&mut fb, 49, 49, 10, 0x00FF_CC33);
    }
}
