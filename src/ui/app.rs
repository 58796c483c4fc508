use eframe::egui;
use eframe::egui::{Align, CentralPanel, Frame, Margin, Response, ScrollArea, TopBottomPanel, Ui};
use serde::{Deserialize, Serialize};

use crate::config::{NAV_COLLAPSE_WIDTH, NAV_SCROLLED_THRESHOLD};
use crate::store::{CartStore, FavoriteToggle};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::countdown::Countdown;
use crate::ui::motion::section_reveal;
use crate::ui::styles::{UiStyleExt, section_heading, setup_custom_visuals, spaced_separator};
use crate::ui::toasts::ToastStack;
use crate::ui::ui_panels::{
    ArrivalsSlider, NavBar, NavEvent, Panel, ProductGrid, Section, ShopEvent, SliderState,
};
use crate::ui::viewer::ModelViewer;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// UI preferences worth carrying across sessions. The cart/favorites
/// core persists itself through its own backend and is NOT part of this.
#[derive(Default, Serialize, Deserialize)]
struct UiPrefs {
    menu_open: bool,
}

pub struct AtelierApp {
    store: CartStore,
    toasts: ToastStack,
    countdown: Countdown,
    viewer: ModelViewer,
    slider: SliderState,
    menu_open: bool,
    /// Last frame's page scroll offset, drives the nav "scrolled" style.
    page_scroll: f32,
    pending_section: Option<Section>,
}

impl AtelierApp {
    pub fn new(cc: &eframe::CreationContext, store: CartStore) -> Self {
        let prefs: UiPrefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self {
            store,
            toasts: ToastStack::default(),
            countdown: Countdown::starting_now(),
            viewer: ModelViewer::new(),
            slider: SliderState::default(),
            menu_open: prefs.menu_open,
            page_scroll: 0.0,
            pending_section: None,
        }
    }

    /// Apply one card interaction: mutate the store (which persists
    /// itself), then emit the matching toast. Order is fixed.
    fn apply_shop_event(store: &mut CartStore, toasts: &mut ToastStack, event: ShopEvent) {
        match event {
            ShopEvent::AddToCart(product) => {
                store.add_to_cart(product.id, product.name, product.price_text);
                toasts.success(format!("{}{}", product.name, UI_TEXT.added_to_cart_suffix));
            }
            ShopEvent::ToggleFavorite(product) => {
                match store.toggle_favorite(product.id, product.name) {
                    FavoriteToggle::Added => toasts.success(UI_TEXT.favorite_added),
                    FavoriteToggle::Removed => toasts.info(UI_TEXT.favorite_removed),
                }
            }
        }
    }

    fn apply_nav_event(&mut self, event: NavEvent) {
        match event {
            NavEvent::ToggleMenu => self.menu_open = !self.menu_open,
            NavEvent::GoTo(section) => {
                self.pending_section = Some(section);
                // Picking a link always folds the menu away.
                self.menu_open = false;
            }
        }
    }

    /// Jump the page to a section heading the nav asked for.
    fn settle_pending_scroll(&mut self, section: Section, heading: &Response) {
        if self.pending_section == Some(section) {
            heading.scroll_to_me(Some(Align::Min));
            self.pending_section = None;
        }
    }

    fn render_nav(&mut self, ctx: &egui::Context) {
        let collapsed = ctx.screen_rect().width() <= NAV_COLLAPSE_WIDTH;
        let scrolled = self.page_scroll > NAV_SCROLLED_THRESHOLD;
        let fill = if scrolled {
            UI_CONFIG.colors.nav_panel_scrolled
        } else {
            UI_CONFIG.colors.nav_panel
        };

        let events = TopBottomPanel::top("nav_bar")
            .frame(Frame::new().fill(fill).inner_margin(Margin::symmetric(16, 10)))
            .show(ctx, |ui| {
                NavBar {
                    store: &self.store,
                    menu_open: self.menu_open,
                    collapsed,
                }
                .render(ui)
            })
            .inner;

        for event in events {
            self.apply_nav_event(event);
        }
    }

    fn render_hero(&mut self, ui: &mut Ui) {
        let viewer = &self.viewer;
        let pending = &mut self.pending_section;

        section_reveal(ui, "hero", |ui| {
            ui.columns(2, |cols| {
                cols[0].add_space(30.0);
                cols[0].label_subheader(UI_TEXT.hero_subtitle);
                cols[0].label_header(UI_TEXT.hero_title);
                cols[0].label(UI_TEXT.hero_desc);
                cols[0].add_space(12.0);
                if cols[0].button(UI_TEXT.shop_now).clicked() {
                    *pending = Some(Section::Collection);
                }

                viewer.show(&mut cols[1], UI_CONFIG.viewer_height);
            });
        });
    }

    fn render_page(&mut self, ctx: &egui::Context) {
        CentralPanel::default().show(ctx, |ui| {
            let mut shop_events = Vec::new();

            let output = ScrollArea::vertical().id_salt("page").show(ui, |ui| {
                self.render_hero(ui);
                spaced_separator(ui);

                let heading = section_heading(ui, UI_TEXT.arrivals_heading);
                self.settle_pending_scroll(Section::Arrivals, &heading);
                shop_events.extend(section_reveal(ui, "arrivals", |ui| {
                    ArrivalsSlider {
                        store: &self.store,
                        state: &mut self.slider,
                    }
                    .render(ui)
                }));
                spaced_separator(ui);

                let heading = section_heading(ui, UI_TEXT.collection_heading);
                self.settle_pending_scroll(Section::Collection, &heading);
                shop_events.extend(section_reveal(ui, "collection", |ui| {
                    ProductGrid { store: &self.store }.render(ui)
                }));
                spaced_separator(ui);

                let heading = section_heading(ui, UI_TEXT.drop_heading);
                self.settle_pending_scroll(Section::Drop, &heading);
                section_reveal(ui, "drop", |ui| {
                    ui.label(UI_TEXT.drop_desc);
                    ui.add_space(8.0);
                    self.countdown.show(ui);
                });

                spaced_separator(ui);
                ui.label_subdued(UI_TEXT.footer_note);
                ui.add_space(24.0);
            });
            self.page_scroll = output.state.offset.y;

            for event in shop_events {
                Self::apply_shop_event(&mut self.store, &mut self.toasts, event);
            }
        });
    }
}

impl eframe::App for AtelierApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(
            storage,
            eframe::APP_KEY,
            &UiPrefs {
                menu_open: self.menu_open,
            },
        );
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_custom_visuals(ctx);

        self.render_nav(ctx);
        self.render_page(ctx);

        // Toasts paint above everything and drive their own repaints.
        self.toasts.show(ctx);

        // Keep the countdown ticking even when the viewer is off-screen.
        ctx.request_repaint_after(std::time::Duration::from_secs(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CATALOG;
    use crate::store::MemoryStore;

    fn fresh_store() -> CartStore {
        CartStore::load(Box::new(MemoryStore::new()))
    }

    #[test]
    fn add_to_cart_event_mutates_store_then_toasts_the_product_name() {
        let mut store = fresh_store();
        let mut toasts = ToastStack::default();
        let product = &CATALOG[0];

        AtelierApp::apply_shop_event(&mut store, &mut toasts, ShopEvent::AddToCart(product));

        assert_eq!(store.badge_count(), 1);
        assert_eq!(store.cart()[0].id, product.id);
        assert!(!toasts.is_empty());
    }

    #[test]
    fn favorite_events_flip_heart_state_and_pick_toast_kind() {
        let mut store = fresh_store();
        let mut toasts = ToastStack::default();
        let product = &CATALOG[1];

        AtelierApp::apply_shop_event(&mut store, &mut toasts, ShopEvent::ToggleFavorite(product));
        assert!(store.is_favorite(product.id));

        AtelierApp::apply_shop_event(&mut store, &mut toasts, ShopEvent::ToggleFavorite(product));
        assert!(!store.is_favorite(product.id));
    }
}
