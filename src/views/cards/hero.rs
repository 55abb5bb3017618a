use eframe::egui::{self, pos2, vec2, Color32, Rect, Rounding, Ui};

use crate::types::Item;
use crate::ui_constants::slider::CONTENT_MARGIN;

/// Hero plate for one slider page: a rounded rect filled with a vertical
/// gradient in the item color. Pure rendering, no interaction.
pub fn hero_card(ui: &mut Ui, item: &Item, height: f32) {
    let width = (ui.available_width() - 2.0 * CONTENT_MARGIN).max(0.0);
    let (rect, _) = ui.allocate_exact_size(vec2(width, height), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    paint_vertical_gradient(
        ui.painter(),
        rect,
        Rounding::same(16.0),
        item.color.gradient_top(),
        item.color.fill(),
    );
}

// egui has no gradient fill primitive, so approximate with horizontal bands.
// Band height stays above the corner radius so the first and last bands keep
// their rounded corners intact.
fn paint_vertical_gradient(
    painter: &egui::Painter,
    rect: Rect,
    rounding: Rounding,
    top: Color32,
    bottom: Color32,
) {
    let band_count = ((rect.height() / 18.0).ceil() as usize).max(2);
    let band_h = rect.height() / band_count as f32;

    for i in 0..band_count {
        let t = i as f32 / (band_count - 1) as f32;
        let color = lerp_color(top, bottom, t);
        let band = Rect::from_min_size(
            pos2(rect.min.x, rect.min.y + i as f32 * band_h),
            vec2(rect.width(), band_h + 0.5),
        );
        let band_rounding = if i == 0 {
            Rounding {
                nw: rounding.nw,
                ne: rounding.ne,
                sw: 0.0,
                se: 0.0,
            }
        } else if i == band_count - 1 {
            Rounding {
                nw: 0.0,
                ne: 0.0,
                sw: rounding.sw,
                se: rounding.se,
            }
        } else {
            Rounding::ZERO
        };
        painter.rect_filled(band, band_rounding, color);
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
