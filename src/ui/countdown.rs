//! "The Drop" sale countdown.
//!
//! The deadline is fixed at launch: launch time plus the configured
//! offset, matching the storefront's original 12d 18h 45m 32s promo
//! window. Expired countdowns freeze at the zero state.

use chrono::{DateTime, TimeDelta, Utc};
use eframe::egui::{RichText, Ui};

use crate::config::DROP_COUNTDOWN_OFFSET_SECS;
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;

pub struct Countdown {
    deadline: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Segments {
    pub const ZERO: Segments = Segments {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Segments::ZERO
    }
}

impl Countdown {
    pub fn starting_now() -> Self {
        Self::with_deadline(Utc::now() + TimeDelta::seconds(DROP_COUNTDOWN_OFFSET_SECS))
    }

    pub fn with_deadline(deadline: DateTime<Utc>) -> Self {
        Self { deadline }
    }

    /// Remaining time split into display segments. Clamps at zero once
    /// the deadline passes.
    pub fn segments_at(&self, now: DateTime<Utc>) -> Segments {
        let remaining = (self.deadline - now).num_seconds().max(0);

        Segments {
            days: remaining / 86_400,
            hours: (remaining % 86_400) / 3_600,
            minutes: (remaining % 3_600) / 60,
            seconds: remaining % 60,
        }
    }

    /// Render the four zero-padded segment tiles.
    pub fn show(&self, ui: &mut Ui) {
        let segments = self.segments_at(Utc::now());

        ui.horizontal(|ui| {
            segment_tile(ui, segments.days, "DAYS");
            segment_tile(ui, segments.hours, "HRS");
            segment_tile(ui, segments.minutes, "MIN");
            segment_tile(ui, segments.seconds, "SEC");
        });
    }
}

fn segment_tile(ui: &mut Ui, value: i64, caption: &str) {
    ui.vertical(|ui| {
        ui.label(
            RichText::new(format!("{value:02}"))
                .heading()
                .monospace()
                .color(UI_CONFIG.colors.accent),
        );
        ui.label_subdued(caption);
    });
    ui.add_space(10.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn splits_the_promo_offset_into_expected_segments() {
        let countdown = Countdown::with_deadline(at(DROP_COUNTDOWN_OFFSET_SECS));

        let segments = countdown.segments_at(at(0));
        assert_eq!(
            segments,
            Segments {
                days: 12,
                hours: 18,
                minutes: 45,
                seconds: 32,
            }
        );
    }

    #[test]
    fn counts_down_second_by_second() {
        let countdown = Countdown::with_deadline(at(90));

        assert_eq!(
            countdown.segments_at(at(0)),
            Segments {
                days: 0,
                hours: 0,
                minutes: 1,
                seconds: 30,
            }
        );
        assert_eq!(countdown.segments_at(at(89)).seconds, 1);
    }

    #[test]
    fn freezes_at_zero_past_the_deadline() {
        let countdown = Countdown::with_deadline(at(100));

        assert!(countdown.segments_at(at(100)).is_zero());
        assert!(countdown.segments_at(at(5000)).is_zero());
    }
}
