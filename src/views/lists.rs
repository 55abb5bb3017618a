use eframe::egui::{self, Ui};

use crate::ui_constants::{list, spacing};
use crate::views::cards::placeholder_card;
use crate::views::slider::snap::{snap_scroll, SnapAxis};

/// Vertical snapping list of placeholder cards. Settles on a card boundary
/// after every gesture, like the paging slider does horizontally.
pub fn vertical_card_list(ui: &mut Ui) {
    let width = (ui.available_width() - 2.0 * list::SIDE_MARGIN).max(0.0);
    let step = list::CARD_HEIGHT + spacing::MEDIUM;

    let output = egui::ScrollArea::vertical()
        .id_source("vertical_card_list")
        .max_height(list::VIEWPORT_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = spacing::MEDIUM;
            ui.vertical_centered(|ui| {
                for _ in 0..list::PLACEHOLDER_COUNT {
                    placeholder_card(ui, width);
                }
            });
        });

    let max_offset = (output.content_size.y - output.inner_rect.height()).max(0.0);
    snap_scroll(ui.ctx(), output.id, SnapAxis::Vertical, step, max_offset);
}

/// Horizontal snapping list: each card occupies one full viewport-width cell,
/// so the snap step equals the viewport width.
pub fn horizontal_card_list(ui: &mut Ui) {
    let page_width = ui.available_width();
    let card_width = (page_width - 2.0 * list::SIDE_MARGIN).max(0.0);

    let output = egui::ScrollArea::horizontal()
        .id_source("horizontal_card_list")
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.horizontal(|ui| {
                for _ in 0..list::PLACEHOLDER_COUNT {
                    ui.allocate_ui_with_layout(
                        egui::vec2(page_width, list::CARD_HEIGHT),
                        egui::Layout::top_down(egui::Align::Center),
                        |ui| {
                            ui.set_width(page_width);
                            placeholder_card(ui, card_width);
                        },
                    );
                }
            });
        });

    let max_offset = (output.content_size.x - output.inner_rect.width()).max(0.0);
    snap_scroll(ui.ctx(), output.id, SnapAxis::Horizontal, page_width, max_offset);
}
