//! Decorative 3D model viewer for the hero section.
//!
//! A stand-in "abstract fashion art" piece: a (2,3) torus knot rendered
//! as a depth-shaded wireframe through the egui painter. It auto-rotates
//! on a turntable, no zoom, and never touches the store logic.

use colorgrad::Gradient;
use eframe::egui::{Color32, Sense, Stroke, Ui, pos2, vec2};

use crate::utils::maths_utils::{Vec3, project};

/// Turntable speed, radians per second. Gentle, like the original's
/// damped auto-rotate.
const SPIN_RATE: f32 = 0.5;

/// Fixed downward camera tilt.
const TILT: f32 = 0.35;

/// Camera distance in model units.
const CAMERA_Z: f32 = 6.0;

/// Samples along the knot curve. Enough for a smooth wire at hero size.
const CURVE_SAMPLES: usize = 240;

pub struct ModelViewer {
    curve: Vec<Vec3>,
    gradient: colorgrad::CatmullRomGradient,
}

impl ModelViewer {
    pub fn new() -> Self {
        // Dark steel into the signature gold, nearest segments brightest.
        let gradient = colorgrad::GradientBuilder::new()
            .html_colors(&["#141414", "#6b5a23", "#d4af37"])
            .build::<colorgrad::CatmullRomGradient>()
            .expect("Failed to create viewer gradient");

        Self {
            curve: torus_knot(CURVE_SAMPLES),
            gradient,
        }
    }

    /// Paint the rotating wireframe into an allocated region.
    pub fn show(&self, ui: &mut Ui, height: f32) {
        let width = ui.available_width();
        let (response, painter) = ui.allocate_painter(vec2(width, height), Sense::hover());
        let rect = response.rect;

        let angle = ui.input(|i| i.time) as f32 * SPIN_RATE;
        let center = rect.center();
        // Model extent is ~3.2 units each way; fit it inside the region.
        let px_per_unit = (rect.height() * 0.5) / 3.4;

        // Project every sample once, then draw segments back-to-front.
        let projected: Vec<(f32, f32, f32)> = self
            .curve
            .iter()
            .map(|p| project(p.rotated_y(angle).rotated_x(TILT), CAMERA_Z))
            .collect();

        let mut segments: Vec<(usize, f32)> = (0..projected.len())
            .map(|i| {
                let j = (i + 1) % projected.len();
                (i, (projected[i].2 + projected[j].2) * 0.5)
            })
            .collect();
        segments.sort_by(|a, b| b.1.total_cmp(&a.1));

        for (i, depth) in segments {
            let j = (i + 1) % projected.len();
            let a = pos2(
                center.x + projected[i].0 * px_per_unit,
                center.y + projected[i].1 * px_per_unit,
            );
            let b = pos2(
                center.x + projected[j].0 * px_per_unit,
                center.y + projected[j].1 * px_per_unit,
            );

            // Nearest segments are brightest and thickest.
            let nearness = ((CAMERA_Z + 3.4 - depth) / 6.8).clamp(0.0, 1.0);
            let rgba = self.gradient.at(nearness).to_rgba8();
            let color = Color32::from_rgb(rgba[0], rgba[1], rgba[2]);
            let thickness = 0.8 + nearness * 1.6;

            painter.line_segment([a, b], Stroke::new(thickness, color));
        }

        // The turntable never stops.
        ui.ctx().request_repaint();
    }
}

impl Default for ModelViewer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample a (2,3) torus knot, the classic "abstract sculpture" curve.
fn torus_knot(samples: usize) -> Vec<Vec3> {
    (0..samples)
        .map(|i| {
            let t = i as f32 / samples as f32 * std::f32::consts::TAU;
            let r = 2.0 + (3.0 * t).cos();
            Vec3::new(r * (2.0 * t).cos(), (3.0 * t).sin(), r * (2.0 * t).sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knot_is_closed_and_bounded() {
        let curve = torus_knot(240);
        assert_eq!(curve.len(), 240);

        // Every sample stays inside the expected envelope.
        for p in &curve {
            assert!(p.length() <= 3.2, "sample escaped the envelope: {p:?}");
        }

        // The curve closes: last sample is adjacent to the first.
        let gap_x = curve[239].x - curve[0].x;
        let gap_z = curve[239].z - curve[0].z;
        assert!((gap_x * gap_x + gap_z * gap_z).sqrt() < 0.2);
    }
}
