//! Transient toast notifications: the only feedback channel for store
//! mutations. Fire-and-forget: rise and fade in, hold for the fixed
//! lifetime, fade out, then disappear. No cancellation.

use eframe::egui::{Align2, Color32, Context, CornerRadius, Id, Margin, Order, RichText, vec2};

use crate::config::promo::{TOAST_FADE_SECS, TOAST_LIFETIME_SECS};
use crate::ui::config::UI_CONFIG;
use crate::utils::app_time::{AppInstant, now, secs_since};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
}

impl ToastKind {
    fn fill(self) -> Color32 {
        match self {
            ToastKind::Success => UI_CONFIG.colors.toast_success,
            ToastKind::Info => UI_CONFIG.colors.toast_info,
        }
    }
}

pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    born: AppInstant,
}

#[derive(Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, ToastKind::Success);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, ToastKind::Info);
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts.push(Toast {
            message: message.into(),
            kind,
            born: now(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Drop expired toasts and paint the live ones, newest at the bottom.
    pub fn show(&mut self, ctx: &Context) {
        self.toasts.retain(|t| !is_expired_at(secs_since(t.born)));
        if self.toasts.is_empty() {
            return;
        }

        for (i, toast) in self.toasts.iter().enumerate() {
            let age = secs_since(toast.born);
            let alpha = opacity_at(age);
            let rise = rise_at(age);

            let slot = self.toasts.len() - 1 - i;
            paint_toast(ctx, i, slot, toast, alpha, rise);
        }

        // Keep animating while any toast is alive.
        ctx.request_repaint();
    }
}

fn paint_toast(ctx: &Context, index: usize, slot: usize, toast: &Toast, alpha: f32, rise: f32) {
    let offset_y = -32.0 - 44.0 * slot as f32 + rise;

    eframe::egui::Area::new(Id::new(("toast", index)))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_BOTTOM, vec2(0.0, offset_y))
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_opacity(alpha);
            eframe::egui::Frame::new()
                .fill(toast.kind.fill())
                .corner_radius(CornerRadius::same(6))
                .inner_margin(Margin::symmetric(14, 8))
                .show(ui, |ui| {
                    ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                });
        });
}

fn total_life() -> f64 {
    TOAST_FADE_SECS + TOAST_LIFETIME_SECS + TOAST_FADE_SECS
}

fn is_expired_at(age_secs: f64) -> bool {
    age_secs >= total_life()
}

/// 0→1 ramp in over the fade window, hold at 1, 1→0 ramp out.
fn opacity_at(age_secs: f64) -> f32 {
    if age_secs < TOAST_FADE_SECS {
        (age_secs / TOAST_FADE_SECS) as f32
    } else if age_secs < TOAST_FADE_SECS + TOAST_LIFETIME_SECS {
        1.0
    } else {
        let fade_out = (total_life() - age_secs) / TOAST_FADE_SECS;
        fade_out.clamp(0.0, 1.0) as f32
    }
}

/// Entry slides up from +20 px; exit drifts a further -20 px.
fn rise_at(age_secs: f64) -> f32 {
    if age_secs < TOAST_FADE_SECS {
        (20.0 * (1.0 - age_secs / TOAST_FADE_SECS)) as f32
    } else if age_secs < TOAST_FADE_SECS + TOAST_LIFETIME_SECS {
        0.0
    } else {
        let progress = ((age_secs - TOAST_FADE_SECS - TOAST_LIFETIME_SECS) / TOAST_FADE_SECS)
            .clamp(0.0, 1.0);
        (-20.0 * progress) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lives_through_the_hold_window_then_expires() {
        assert!(!is_expired_at(0.0));
        assert!(!is_expired_at(TOAST_FADE_SECS + TOAST_LIFETIME_SECS));
        assert!(is_expired_at(total_life()));
        assert!(is_expired_at(10.0));
    }

    #[test]
    fn opacity_ramps_in_holds_and_ramps_out() {
        assert_eq!(opacity_at(0.0), 0.0);
        assert!((opacity_at(TOAST_FADE_SECS / 2.0) - 0.5).abs() < 1e-6);
        assert_eq!(opacity_at(TOAST_FADE_SECS + 1.0), 1.0);
        assert_eq!(opacity_at(total_life()), 0.0);
    }

    #[test]
    fn rise_starts_below_and_exits_upward() {
        assert_eq!(rise_at(0.0), 20.0);
        assert_eq!(rise_at(TOAST_FADE_SECS + 1.0), 0.0);
        assert_eq!(rise_at(total_life()), -20.0);
    }

    #[test]
    fn stack_accumulates_messages() {
        let mut stack = ToastStack::default();
        assert!(stack.is_empty());

        stack.success("Noir Trench Coat added to cart!");
        stack.info("Removed from favorites");

        assert_eq!(stack.toasts.len(), 2);
        assert_eq!(stack.toasts[0].kind, ToastKind::Success);
        assert_eq!(stack.toasts[1].kind, ToastKind::Info);
    }
}
