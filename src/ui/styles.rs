use eframe::egui::{Color32, Context, RichText, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (card captions, helper lines).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a section header: uppercase, gold, monospace.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a sub-section header in the softer gold.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// Renders a price tag in the accent color.
    fn label_price(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn label_header(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).monospace());
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn label_price(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).strong().color(UI_CONFIG.colors.accent));
    }
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    // Noir theme
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing; returns the heading
/// response so callers can scroll to it.
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) -> eframe::egui::Response {
    ui.add_space(18.0);
    let text = text.into().to_uppercase();
    let response = ui.heading(
        RichText::new(text)
            .color(UI_CONFIG.colors.heading)
            .monospace(),
    );
    ui.add_space(8.0);
    response
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Formats a price for display. NaN (the unparsable-price marker the
/// store deliberately accepts) renders as an em-dash price, not "NaN".
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "$—".to_string();
    }
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_price(19.99), "$19.99");
        assert_eq!(format_price(289.0), "$289.00");
    }

    #[test]
    fn nan_renders_as_dash_not_nan() {
        assert_eq!(format_price(f64::NAN), "$—");
    }
}
