//! Entrance animations.
//!
//! Sections fade and slide up the first time they enter the scroll
//! viewport, mirroring the page's original reveal (triggered when a
//! section's top crossed 80% of the viewport height), and reversing
//! when scrolled back out.

use eframe::egui::{Id, Ui};

/// How long one reveal takes, in seconds.
const REVEAL_SECS: f32 = 1.0;

/// Vertical travel of the slide-in, in points.
const REVEAL_RISE: f32 = 40.0;

pub fn section_reveal<R>(
    ui: &mut Ui,
    id_salt: &str,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> R {
    let clip = ui.clip_rect();
    let trigger_line = clip.top() + clip.height() * 0.8;
    let visible = ui.cursor().top() <= trigger_line;

    let t = ui
        .ctx()
        .animate_bool_with_time(Id::new(("reveal", id_salt)), visible, REVEAL_SECS);

    ui.add_space((1.0 - t) * REVEAL_RISE);
    ui.scope(|ui| {
        ui.set_opacity(t);
        add_contents(ui)
    })
    .inner
}
