// Screen shell: owns the demo item collection and wires it into the paging
// slider and the two snapping lists. The scroll-geometry capability is
// resolved once here, at construction, never per frame.

use eframe::egui::{self, RichText};
use eframe::App;

use crate::types::{sample_items, Item};
use crate::ui_constants::{list, slider, spacing};
use crate::views::cards::hero_card;
use crate::views::lists::{horizontal_card_list, vertical_card_list};
use crate::views::slider::{PagingSlider, ScrollGeometry};

mod logs_ui;

pub struct PageDeckApp {
    items: Vec<Item>,
    scroll_geometry: ScrollGeometry,
}

impl PageDeckApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let scroll_geometry = ScrollGeometry::detect(ctx);
        let items = sample_items();
        log::info!(
            "screen initialized with {} items (scroll geometry: {scroll_geometry:?})",
            items.len()
        );
        Self {
            items,
            scroll_geometry,
        }
    }
}

impl App for PageDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any new logs? ensure we repaint to keep the viewport fresh.
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            // Top bar: app title on the left, logs toggle on the right.
            ui.horizontal(|ui| {
                ui.heading("PageDeck");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logs").clicked() {
                        logs_ui::open_logs();
                        ctx.request_repaint();
                    }
                });
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .id_source("screen_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(spacing::LARGE);

                    PagingSlider::new("hero_slider")
                        .scroll_geometry(self.scroll_geometry)
                        .show(
                            ui,
                            &mut self.items,
                            |ui, item| hero_card(ui, item, slider::CONTENT_HEIGHT),
                            item_title,
                        );

                    ui.add_space(spacing::XLARGE);
                    section_header(ui, "Vertical list");
                    vertical_card_list(ui);

                    ui.add_space(spacing::XLARGE);
                    section_header(ui, "Horizontal list");
                    horizontal_card_list(ui);

                    ui.add_space(spacing::LARGE);
                });
        });

        // Logs window (separate OS viewport)
        logs_ui::draw_logs_viewport(ctx);
    }
}

fn item_title(ui: &mut egui::Ui, item: &mut Item) {
    ui.label(RichText::new(&item.title).size(28.0).strong());
    ui.add_space(spacing::SMALL);
    ui.label(RichText::new(&item.subtitle).weak());
}

fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.add_space(list::SIDE_MARGIN);
        ui.label(RichText::new(text).size(18.0).strong());
    });
    ui.add_space(spacing::MEDIUM);
}
