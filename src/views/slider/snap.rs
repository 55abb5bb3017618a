use eframe::egui::{self, scroll_area};

use crate::ui_constants::snap::{SETTLE_EPSILON, SNAP_RATE};

/// Scroll axis a snapping pass operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapAxis {
    Horizontal,
    Vertical,
}

/// Nearest step boundary for `offset`, clamped to the scrollable range
/// `[0, max_offset]`.
pub fn snap_target(offset: f32, step: f32, max_offset: f32) -> f32 {
    let max_offset = max_offset.max(0.0);
    if step <= 0.0 {
        return offset.clamp(0.0, max_offset);
    }
    ((offset / step).round() * step).clamp(0.0, max_offset)
}

/// Viewport-aligned snapping: once the user stops interacting, ease the
/// stored scroll offset toward the nearest step boundary, repainting until it
/// settles. Call after `ScrollArea::show` with the id from its output.
pub fn snap_scroll(
    ctx: &egui::Context,
    scroll_id: egui::Id,
    axis: SnapAxis,
    step: f32,
    max_offset: f32,
) {
    let Some(mut state) = scroll_area::State::load(ctx, scroll_id) else {
        return;
    };

    // Never fight an active gesture or incoming scroll input.
    let interacting = ctx.input(|i| i.pointer.any_down() || i.smooth_scroll_delta != egui::Vec2::ZERO);
    if interacting {
        return;
    }

    let current = match axis {
        SnapAxis::Horizontal => state.offset.x,
        SnapAxis::Vertical => state.offset.y,
    };
    let target = snap_target(current, step, max_offset);
    let delta = target - current;

    if delta.abs() <= SETTLE_EPSILON {
        if delta != 0.0 {
            set_axis(&mut state, axis, target);
            state.store(ctx, scroll_id);
        }
        return;
    }

    let dt = ctx.input(|i| i.stable_dt).min(0.1);
    let eased = current + delta * (SNAP_RATE * dt).min(1.0);
    set_axis(&mut state, axis, eased);
    state.store(ctx, scroll_id);
    ctx.request_repaint();
}

fn set_axis(state: &mut scroll_area::State, axis: SnapAxis, value: f32) {
    match axis {
        SnapAxis::Horizontal => state.offset.x = value,
        SnapAxis::Vertical => state.offset.y = value,
    }
}
