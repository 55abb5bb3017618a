use eframe::egui::{self, vec2, Align, Layout, RichText, Sense, Ui};

use crate::types::Identifiable;
use crate::ui_constants::{self, spacing, TITLE_SCROLL_SPEED};

use super::capability::ScrollGeometry;
use super::snap::{self, SnapAxis};

/// Parallax translation for a slider title given the container scroll
/// position. `min_x` is 0 with the first page at rest and grows negative as
/// scrolling progresses. The speed factor is capped at 1.0 so a title can
/// never outrun its card, even if a caller configures an amplifying speed.
pub fn parallax_offset(min_x: f32, title_scroll_speed: f32) -> f32 {
    -min_x * title_scroll_speed.min(1.0)
}

/// What a [`PagingSlider::show`] pass actually did, for embedders and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PagingSliderOutput {
    /// Paging cells laid out this pass (0 in fallback mode).
    pub page_count: usize,
    /// Page currently nearest the viewport origin.
    pub current_page: usize,
    /// Scroll-geometry sample the parallax offset was computed from.
    pub min_x: f32,
    /// Horizontal translation applied to every title this pass.
    pub title_offset: f32,
    /// True when the static capability fallback was rendered instead of the
    /// paging layout.
    pub fallback: bool,
}

/// Generic horizontally paging container.
///
/// Lays out one viewport-width cell per item inside a hidden-bar horizontal
/// scroll area, snapping to page boundaries after each gesture. Each cell
/// renders the caller's title closure above its content closure; only the
/// title is translated by the parallax offset. Items arrive as `&mut [T]`,
/// so edits made inside either closure are visible to the owning collection
/// on the same frame.
pub struct PagingSlider {
    id: egui::Id,
    title_scroll_speed: f32,
    title_height: f32,
    geometry: ScrollGeometry,
}

impl PagingSlider {
    pub fn new(id_source: impl std::hash::Hash) -> Self {
        Self {
            id: egui::Id::new(id_source),
            title_scroll_speed: TITLE_SCROLL_SPEED,
            title_height: ui_constants::slider::TITLE_AREA_HEIGHT,
            geometry: ScrollGeometry::Live,
        }
    }

    /// Title travel speed as a fraction of the container scroll speed.
    /// Effective values are capped at 1.0, see [`parallax_offset`].
    pub fn title_scroll_speed(mut self, speed: f32) -> Self {
        self.title_scroll_speed = speed;
        self
    }

    /// Height reserved for the title block of every page.
    pub fn title_height(mut self, height: f32) -> Self {
        self.title_height = height;
        self
    }

    /// Scroll-geometry capability as resolved by the embedder
    /// (see [`ScrollGeometry::detect`]).
    pub fn scroll_geometry(mut self, geometry: ScrollGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn show<T, C, TC>(
        self,
        ui: &mut Ui,
        items: &mut [T],
        mut content: C,
        mut title_content: TC,
    ) -> PagingSliderOutput
    where
        T: Identifiable,
        C: FnMut(&mut Ui, &mut T),
        TC: FnMut(&mut Ui, &mut T),
    {
        if !self.geometry.is_live() {
            return self.show_fallback(ui, items, &mut content, &mut title_content);
        }
        if items.is_empty() {
            return PagingSliderOutput::default();
        }

        // Page width is the viewport width as seen before entering the
        // scroll area; cells use zero spacing so one page == one snap step.
        let page_width = ui.available_width();

        // Scroll offset sampled on the previous pass: egui reports a scroll
        // area's geometry only after it has been shown.
        let min_x_id = self.id.with("min_x");
        let mut min_x = ui
            .ctx()
            .memory(|m| m.data.get_temp::<f32>(min_x_id))
            .unwrap_or(0.0);
        if items.len() < 2 {
            // No scroll range, no parallax.
            min_x = 0.0;
        }
        let title_offset = parallax_offset(min_x, self.title_scroll_speed);

        let output = egui::ScrollArea::horizontal()
            .id_source(self.id)
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.horizontal(|ui| {
                    for item in items.iter_mut() {
                        ui.push_id(item.id(), |ui| {
                            self.page_cell(
                                ui,
                                page_width,
                                title_offset,
                                item,
                                &mut content,
                                &mut title_content,
                            );
                        });
                    }
                });
            });

        let sampled = -output.state.offset.x;
        ui.ctx().memory_mut(|m| m.data.insert_temp(min_x_id, sampled));
        if sampled != min_x {
            // Titles were drawn from the stale sample; repaint until the two
            // agree so the parallax tracks the gesture.
            ui.ctx().request_repaint();
        }

        let max_offset = (output.content_size.x - output.inner_rect.width()).max(0.0);
        snap::snap_scroll(ui.ctx(), output.id, SnapAxis::Horizontal, page_width, max_offset);

        let current_page = if page_width > 0.0 {
            ((output.state.offset.x / page_width).round() as usize).min(items.len() - 1)
        } else {
            0
        };

        PagingSliderOutput {
            page_count: items.len(),
            current_page,
            min_x,
            title_offset,
            fallback: false,
        }
    }

    fn page_cell<T, C, TC>(
        &self,
        ui: &mut Ui,
        page_width: f32,
        title_offset: f32,
        item: &mut T,
        content: &mut C,
        title_content: &mut TC,
    ) where
        C: FnMut(&mut Ui, &mut T),
        TC: FnMut(&mut Ui, &mut T),
    {
        ui.allocate_ui_with_layout(
            vec2(page_width, 0.0),
            Layout::top_down(Align::Center),
            |ui| {
                ui.set_width(page_width);

                // The title drifts at a fraction of the scroll speed: render
                // it into a child Ui whose rect is shifted by the parallax
                // offset. Content below stays put.
                let (title_rect, _) =
                    ui.allocate_exact_size(vec2(page_width, self.title_height), Sense::hover());
                let mut title_ui = ui.child_ui(
                    title_rect.translate(vec2(title_offset, 0.0)),
                    Layout::top_down(Align::Center),
                );
                title_content(&mut title_ui, item);

                content(ui, item);
            },
        );
    }

    // Capability fallback: no paging UI, but content is never silently
    // dropped. Items render as a plain static vertical stack under a notice.
    fn show_fallback<T, C, TC>(
        &self,
        ui: &mut Ui,
        items: &mut [T],
        content: &mut C,
        title_content: &mut TC,
    ) -> PagingSliderOutput
    where
        T: Identifiable,
        C: FnMut(&mut Ui, &mut T),
        TC: FnMut(&mut Ui, &mut T),
    {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Paging slider unavailable").strong());
            ui.label(RichText::new("This host does not report live scroll geometry.").weak());
        });
        ui.add_space(spacing::MEDIUM);

        for item in items.iter_mut() {
            ui.push_id(item.id(), |ui| {
                ui.vertical_centered(|ui| {
                    title_content(ui, item);
                    content(ui, item);
                });
                ui.add_space(spacing::LARGE);
            });
        }

        PagingSliderOutput {
            fallback: true,
            ..Default::default()
        }
    }
}
