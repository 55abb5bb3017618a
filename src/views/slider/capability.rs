use eframe::egui;

/// Whether the host can report live scroll geometry, which the paging slider
/// needs for its parallax titles and page snapping.
///
/// Resolved once by the embedder (normally at app construction) and passed
/// down, never re-queried per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollGeometry {
    /// Scroll offsets can be sampled while the user scrolls.
    Live,
    /// The host cannot track scroll offsets; the slider degrades to a static
    /// vertical stack with an "unavailable" notice.
    Unavailable,
}

impl ScrollGeometry {
    /// Probe the host. Live scroll tracking depends on per-widget temp memory
    /// surviving within a frame, so round-trip a marker through the context.
    pub fn detect(ctx: &egui::Context) -> Self {
        let probe = egui::Id::new("scroll_geometry_probe");
        ctx.memory_mut(|m| m.data.insert_temp(probe, 1u8));
        let seen = ctx.memory(|m| m.data.get_temp::<u8>(probe)) == Some(1);
        ctx.memory_mut(|m| m.data.remove::<u8>(probe));

        if seen {
            Self::Live
        } else {
            log::warn!(
                "host cannot report live scroll geometry; paging slider falls back to a static list"
            );
            Self::Unavailable
        }
    }

    pub fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }
}
