#[cfg(test)]
mod tests {
    use eframe::egui;

    use crate::types::{sample_items, CardColor, Identifiable, Item};
    use crate::views::slider::snap::snap_target;
    use crate::views::slider::{parallax_offset, PagingSlider, PagingSliderOutput, ScrollGeometry};

    /// One headless UI pass with a phone-sized screen rect.
    fn run_frame(
        ctx: &egui::Context,
        mut f: impl FnMut(&mut egui::Ui) -> PagingSliderOutput,
    ) -> PagingSliderOutput {
        let mut out = None;
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(420.0, 900.0),
            )),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                out = Some(f(ui));
            });
        });
        out.expect("central panel closure did not run")
    }

    #[test]
    fn offset_formula_matches_scroll_position() {
        assert_eq!(parallax_offset(0.0, 0.4), 0.0);
        assert_eq!(parallax_offset(-100.0, 0.4), 40.0);
        assert_eq!(parallax_offset(-250.0, 0.4), 100.0);
        // Proportional in min_x.
        assert!((parallax_offset(-50.0, 0.4) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn speed_is_clamped_to_unity() {
        // >= 1.0 never amplifies beyond 1:1.
        assert_eq!(parallax_offset(-100.0, 1.0), 100.0);
        assert_eq!(parallax_offset(-100.0, 2.5), 100.0);
        assert_eq!(parallax_offset(-100.0, 0.4), 40.0);
    }

    #[test]
    fn snap_target_rounds_to_nearest_page_and_clamps() {
        assert_eq!(snap_target(230.0, 200.0, 600.0), 200.0);
        assert_eq!(snap_target(310.0, 200.0, 600.0), 400.0);
        // Beyond the scrollable range.
        assert_eq!(snap_target(1200.0, 200.0, 600.0), 600.0);
        assert_eq!(snap_target(-40.0, 200.0, 600.0), 0.0);
        // Degenerate step only clamps.
        assert_eq!(snap_target(123.0, 0.0, 600.0), 123.0);
    }

    #[test]
    fn empty_collection_renders_zero_cells() {
        let ctx = egui::Context::default();
        let mut items: Vec<Item> = Vec::new();
        let out = run_frame(&ctx, |ui| {
            PagingSlider::new("empty_slider").show(
                ui,
                &mut items,
                |_, _| {},
                |_, _| {},
            )
        });
        assert_eq!(out.page_count, 0);
        assert_eq!(out.title_offset, 0.0);
        assert!(!out.fallback);
    }

    #[test]
    fn paging_pass_reports_all_pages() {
        let ctx = egui::Context::default();
        let mut items = sample_items();
        let out = run_frame(&ctx, |ui| {
            PagingSlider::new("hero_slider").show(
                ui,
                &mut items,
                |_, _| {},
                |_, _| {},
            )
        });
        assert_eq!(out.page_count, 4);
        assert_eq!(out.current_page, 0);
        assert_eq!(out.min_x, 0.0);
        assert!(!out.fallback);
    }

    #[test]
    fn single_item_never_parallaxes() {
        let ctx = egui::Context::default();
        // Seed a stale scroll sample as if the host reported drift outside
        // the (empty) scroll range.
        let min_x_id = egui::Id::new("solo").with("min_x");
        ctx.memory_mut(|m| m.data.insert_temp(min_x_id, -120.0f32));

        let mut items = vec![Item::new(CardColor::Red, "only", "page")];
        let out = run_frame(&ctx, |ui| {
            PagingSlider::new("solo").show(ui, &mut items, |_, _| {}, |_, _| {})
        });
        assert_eq!(out.page_count, 1);
        assert_eq!(out.title_offset, 0.0);
        assert_eq!(out.min_x, 0.0);
    }

    #[test]
    fn configured_speed_above_unity_is_capped_in_a_pass() {
        let ctx = egui::Context::default();
        // Seed the scroll sample of a previous pass: one page to the left.
        let min_x_id = egui::Id::new("fast").with("min_x");
        ctx.memory_mut(|m| m.data.insert_temp(min_x_id, -100.0f32));

        let mut items = sample_items();
        let out = run_frame(&ctx, |ui| {
            PagingSlider::new("fast")
                .title_scroll_speed(2.5)
                .title_height(80.0)
                .show(ui, &mut items, |_, _| {}, |_, _| {})
        });
        assert_eq!(out.min_x, -100.0);
        // 2.5 behaves as exactly 1.0.
        assert_eq!(out.title_offset, 100.0);
    }

    #[test]
    fn fallback_renders_notice_and_every_item() {
        let ctx = egui::Context::default();
        let mut items = sample_items();
        let mut content_calls = 0usize;
        let mut title_calls = 0usize;
        let out = run_frame(&ctx, |ui| {
            PagingSlider::new("gated")
                .scroll_geometry(ScrollGeometry::Unavailable)
                .show(
                    ui,
                    &mut items,
                    |_, _| content_calls += 1,
                    |_, _| title_calls += 1,
                )
        });
        assert!(out.fallback);
        // No paging UI, but nothing silently omitted.
        assert_eq!(out.page_count, 0);
        assert_eq!(content_calls, 4);
        assert_eq!(title_calls, 4);
    }

    #[test]
    fn ids_stay_stable_while_closures_mutate_items() {
        let ctx = egui::Context::default();
        let mut items = sample_items();
        let ids: Vec<_> = items.iter().map(|i| i.id()).collect();

        for _ in 0..2 {
            run_frame(&ctx, |ui| {
                PagingSlider::new("mutating").show(
                    ui,
                    &mut items,
                    |_, item| item.title.push('!'),
                    |_, _| {},
                )
            });
        }

        // Mutations made through the per-item binding are visible to the
        // owning collection; identities are untouched.
        for (item, id) in items.iter().zip(&ids) {
            assert_eq!(item.id(), *id);
            assert!(item.title.ends_with("!!"));
        }
    }

    #[test]
    fn detect_reports_live_on_default_context() {
        let ctx = egui::Context::default();
        assert_eq!(ScrollGeometry::detect(&ctx), ScrollGeometry::Live);
    }
}
