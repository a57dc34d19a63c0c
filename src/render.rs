//! Immediate-mode 2D drawing for the decorative canvases.

use crate::constants::{PARTICLE_ALPHA_SCALE, WAVE_ALPHA, WAVE_LINE_WIDTH};
use crate::core::content::hex_to_rgb;
use crate::core::particles::Particle;
use crate::core::waves::{Waveform, OVERSCAN};
use web_sys as web;

/// Soft radial dot, faded by remaining life and tinted by category.
pub fn draw_particle(ctx: &web::CanvasRenderingContext2d, p: &Particle) {
    ctx.save();
    ctx.set_global_alpha(p.life as f64 * PARTICLE_ALPHA_SCALE);
    if ctx.translate(p.pos.x as f64, p.pos.y as f64).is_err() {
        ctx.restore();
        return;
    }
    let _ = ctx.rotate(p.angle as f64);

    let color = p.category.color();
    if let Ok(gradient) = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, p.size as f64) {
        let _ = gradient.add_color_stop(0.0, color);
        if let Some((r, g, b)) = hex_to_rgb(color) {
            let _ = gradient.add_color_stop(1.0, &format!("rgba({r}, {g}, {b}, 0)"));
        }
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        let _ = ctx.arc(0.0, 0.0, p.size as f64, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
    ctx.restore();
}

/// Stroke the polyline through in-bounds points only; out-of-range samples
/// are skipped without closing the path.
pub fn draw_wave(ctx: &web::CanvasRenderingContext2d, wave: &Waveform, width: f32) {
    if wave.points.is_empty() {
        return;
    }
    ctx.set_stroke_style_str(wave.kind.color());
    ctx.set_line_width(WAVE_LINE_WIDTH);
    ctx.set_global_alpha(WAVE_ALPHA);
    ctx.begin_path();
    let mut started = false;
    for point in &wave.points {
        if point.x > -OVERSCAN && point.x < width + OVERSCAN {
            if !started {
                ctx.move_to(point.x as f64, point.y as f64);
                started = true;
            } else {
                ctx.line_to(point.x as f64, point.y as f64);
            }
        }
    }
    ctx.stroke();
    ctx.set_global_alpha(1.0);
}
