use eframe::egui::{
    Button, Color32, CornerRadius, Frame, Margin, RichText, ScrollArea, Sense, Stroke, Ui, vec2,
};
use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::config::{SLIDER_SCROLL_STEP, catalog};
use crate::domain::{Product, ProductCategory};
use crate::store::CartStore;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{UiStyleExt, format_price};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Page sections reachable from the nav links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Section {
    #[strum(serialize = "New Arrivals")]
    Arrivals,
    #[strum(serialize = "Collection")]
    Collection,
    #[strum(serialize = "The Drop")]
    Drop,
}

/// A user intent produced by a product card. The app applies these to
/// the store and fires the matching toast, in that order.
#[derive(Debug, Clone, Copy)]
pub enum ShopEvent {
    AddToCart(&'static Product),
    ToggleFavorite(&'static Product),
}

pub enum NavEvent {
    ToggleMenu,
    GoTo(Section),
}

/// Top navigation bar: brand, links (collapsed behind a hamburger on
/// narrow viewports), cart badge.
pub struct NavBar<'a> {
    pub store: &'a CartStore,
    pub menu_open: bool,
    pub collapsed: bool,
}

impl Panel for NavBar<'_> {
    type Event = NavEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<NavEvent> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(UI_TEXT.brand)
                    .heading()
                    .monospace()
                    .color(UI_CONFIG.colors.accent),
            );

            if self.collapsed {
                // Hamburger toggle replaces the inline links.
                let glyph = if self.menu_open { "✕" } else { "☰" };
                if ui.add(Button::new(RichText::new(glyph).heading()).frame(false)).clicked() {
                    events.push(NavEvent::ToggleMenu);

                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("Nav menu toggled (open: {})", !self.menu_open);
                    }
                }
            } else {
                for section in Section::iter() {
                    if ui.add(Button::new(section.to_string()).frame(false)).clicked() {
                        events.push(NavEvent::GoTo(section));
                    }
                }
            }

            ui.with_layout(
                eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                |ui| {
                    cart_badge(ui, self.store);
                },
            );
        });

        // Collapsed menu unfolds below the bar; picking a link closes it.
        if self.collapsed && self.menu_open {
            ui.separator();
            for section in Section::iter() {
                if ui.add(Button::new(section.to_string()).frame(false)).clicked() {
                    events.push(NavEvent::GoTo(section));
                }
            }
        }

        events
    }
}

/// The visible counter: distinct cart entries, restored state included.
fn cart_badge(ui: &mut Ui, store: &CartStore) {
    let badge = ui.label(
        RichText::new(format!("🛒 {}", store.badge_count()))
            .strong()
            .color(UI_CONFIG.colors.accent),
    );

    badge.on_hover_ui(|ui| {
        if store.cart().is_empty() {
            ui.label_subdued("Your cart is empty");
            return;
        }
        for item in store.cart() {
            ui.horizontal(|ui| {
                ui.label(format!("{} ×{}", item.name, item.quantity));
                ui.label_price(format_price(item.price));
            });
        }
    });
}

/// Scroll state for the arrivals strip, owned by the app across frames.
#[derive(Default)]
pub struct SliderState {
    pub offset: f32,
    pub target: Option<f32>,
}

/// Horizontal "New Arrivals" strip with prev/next nudge buttons.
pub struct ArrivalsSlider<'a> {
    pub store: &'a CartStore,
    pub state: &'a mut SliderState,
}

impl Panel for ArrivalsSlider<'_> {
    type Event = ShopEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<ShopEvent> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.state.target = Some((self.state.offset - SLIDER_SCROLL_STEP).max(0.0));
            }
            if ui.button("▶").clicked() {
                self.state.target = Some(self.state.offset + SLIDER_SCROLL_STEP);
            }
        });

        let mut strip = ScrollArea::horizontal().id_salt("arrivals_strip");
        if let Some(target) = self.state.target.take() {
            strip = strip.scroll_offset(vec2(target, 0.0));
        }

        let output = strip.show(ui, |ui| {
            ui.horizontal(|ui| {
                for product in catalog::new_arrivals() {
                    product_card(ui, product, self.store, &mut events);
                }
            });
        });
        self.state.offset = output.state.offset.x;

        events
    }
}

/// The main collection grid, grouped by category.
pub struct ProductGrid<'a> {
    pub store: &'a CartStore,
}

impl Panel for ProductGrid<'_> {
    type Event = ShopEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<ShopEvent> {
        let mut events = Vec::new();

        for category in ProductCategory::iter() {
            let items = crate::config::CATALOG
                .iter()
                .filter(|p| p.category == category)
                .collect_vec();
            if items.is_empty() {
                continue;
            }

            ui.add_space(8.0);
            ui.label_subheader(category.to_string());
            ui.add_space(4.0);

            ui.horizontal_wrapped(|ui| {
                for product in items {
                    product_card(ui, product, self.store, &mut events);
                }
            });
        }

        events
    }
}

/// One product card: swatch, name, price, add-to-cart and favorite
/// controls. The heart's active state always reflects set membership.
fn product_card(
    ui: &mut Ui,
    product: &'static Product,
    store: &CartStore,
    events: &mut Vec<ShopEvent>,
) {
    Frame::new()
        .fill(UI_CONFIG.colors.card)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(UI_CONFIG.card_width);
            ui.vertical(|ui| {
                fabric_swatch(ui, product);

                ui.label(RichText::new(product.name).strong());
                ui.label_price(format!("${}", product.price_text));

                ui.horizontal(|ui| {
                    if ui.button(UI_TEXT.add_to_cart).clicked() {
                        events.push(ShopEvent::AddToCart(product));
                    }

                    let active = store.is_favorite(product.id);
                    let heart_color = if active {
                        UI_CONFIG.colors.favorite_active
                    } else {
                        Color32::GRAY
                    };
                    let heart = Button::new(RichText::new("♥").color(heart_color)).frame(false);
                    if ui.add(heart).clicked() {
                        events.push(ShopEvent::ToggleFavorite(product));
                    }
                });
            });
        });
}

/// Stand-in product imagery: a category-toned swatch with a gold hairline.
fn fabric_swatch(ui: &mut Ui, product: &Product) {
    let (response, painter) = ui.allocate_painter(
        vec2(ui.available_width(), 110.0),
        Sense::hover(),
    );
    let rect = response.rect;

    painter.rect_filled(rect, CornerRadius::same(6), category_tone(product.category));
    painter.line_segment(
        [rect.left_bottom() + vec2(6.0, -8.0), rect.right_bottom() + vec2(-6.0, -8.0)],
        Stroke::new(1.0, UI_CONFIG.colors.accent),
    );
}

fn category_tone(category: ProductCategory) -> Color32 {
    match category {
        ProductCategory::Outerwear => Color32::from_rgb(38, 40, 48),
        ProductCategory::Dresses => Color32::from_rgb(48, 34, 44),
        ProductCategory::Knitwear => Color32::from_rgb(44, 40, 32),
        ProductCategory::Accessories => Color32::from_rgb(32, 44, 42),
    }
}
