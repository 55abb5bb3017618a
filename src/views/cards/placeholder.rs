use eframe::egui::{self, pos2, vec2, Color32, Rect, Rounding, Stroke, Ui};

use crate::ui_constants::list::CARD_HEIGHT;

/// Static social-media style skeleton card used by the demo lists: avatar,
/// name/handle bars, body bars and an action row. No data binding, no
/// interaction.
pub fn placeholder_card(ui: &mut Ui, width: f32) {
    let (rect, _) = ui.allocate_exact_size(vec2(width, CARD_HEIGHT), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    painter.rect(
        rect,
        Rounding::same(12.0),
        Color32::from_rgb(36, 36, 36),
        Stroke::new(1.0, Color32::from_rgb(64, 64, 64)),
    );

    let pad = 14.0;
    let bar = |min: egui::Pos2, size: egui::Vec2, color: Color32| {
        painter.rect_filled(Rect::from_min_size(min, size), Rounding::same(3.0), color);
    };

    // Header: avatar circle plus name/handle bars.
    let avatar_r = 16.0;
    let avatar_c = pos2(rect.min.x + pad + avatar_r, rect.min.y + pad + avatar_r);
    painter.circle_filled(avatar_c, avatar_r, Color32::from_gray(72));

    let header_x = avatar_c.x + avatar_r + 10.0;
    bar(
        pos2(header_x, rect.min.y + pad + 4.0),
        vec2(width * 0.32, 9.0),
        Color32::from_gray(96),
    );
    bar(
        pos2(header_x, rect.min.y + pad + 19.0),
        vec2(width * 0.22, 7.0),
        Color32::from_gray(62),
    );

    // Body: three text bars of decreasing width.
    let body_y = rect.min.y + pad + 2.0 * avatar_r + 12.0;
    let body_w = width - 2.0 * pad;
    for (i, frac) in [1.0, 0.92, 0.55].iter().enumerate() {
        bar(
            pos2(rect.min.x + pad, body_y + i as f32 * 14.0),
            vec2(body_w * frac, 8.0),
            Color32::from_gray(54),
        );
    }

    // Action row: three dots along the bottom edge.
    let action_y = rect.max.y - pad - 4.0;
    for i in 0..3 {
        let cx = rect.min.x + pad + 5.0 + i as f32 * (body_w / 3.0);
        painter.circle_filled(pos2(cx, action_y), 4.0, Color32::from_gray(62));
    }
}
