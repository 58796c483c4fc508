use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub nav_panel: Color32,
    pub nav_panel_scrolled: Color32,
    pub card: Color32,
    pub accent: Color32,
    pub toast_success: Color32,
    pub toast_info: Color32,
    pub favorite_active: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card_width: f32,
    pub viewer_height: f32,
}

/// Global UI configuration instance. Noir palette: near-black panels with
/// the storefront's signature gold (#d4af37) as the accent.
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(190, 190, 190),
        heading: Color32::from_rgb(212, 175, 55), // Gold
        subsection_heading: Color32::from_rgb(222, 205, 140),
        central_panel: Color32::from_rgb(13, 13, 13),
        nav_panel: Color32::from_rgba_premultiplied(13, 13, 13, 180),
        nav_panel_scrolled: Color32::from_rgb(20, 20, 20),
        card: Color32::from_rgb(26, 26, 26),
        accent: Color32::from_rgb(212, 175, 55),
        toast_success: Color32::from_rgb(46, 94, 60),
        toast_info: Color32::from_rgb(52, 66, 94),
        favorite_active: Color32::from_rgb(214, 74, 94),
    },
    card_width: 220.0,
    viewer_height: 320.0,
};

/// Every user-facing string in one place.
pub struct UiText {
    pub brand: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_title: &'static str,
    pub hero_desc: &'static str,
    pub shop_now: &'static str,
    pub arrivals_heading: &'static str,
    pub collection_heading: &'static str,
    pub drop_heading: &'static str,
    pub drop_desc: &'static str,
    pub add_to_cart: &'static str,
    pub added_to_cart_suffix: &'static str,
    pub favorite_added: &'static str,
    pub favorite_removed: &'static str,
    pub footer_note: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    brand: "ATELIER NOIR",
    hero_subtitle: "Fall / Winter Capsule",
    hero_title: "Wear the Future.",
    hero_desc: "Sculptural silhouettes in midnight wool, silk and gold hardware.",
    shop_now: "Shop Now",
    arrivals_heading: "New Arrivals",
    collection_heading: "The Collection",
    drop_heading: "The Drop",
    drop_desc: "One capsule. One release. Gone when the clock hits zero.",
    add_to_cart: "Add to Cart",
    added_to_cart_suffix: " added to cart!",
    favorite_added: "Added to favorites!",
    favorite_removed: "Removed from favorites",
    footer_note: "© Atelier Noir. All pieces cut to order.",
};
