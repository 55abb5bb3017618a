// UI constants kept in one place instead of magic numbers scattered across
// the view code.

/// Fraction of the container scroll speed at which slider titles travel.
/// Values below 1.0 make titles lag their cards during a swipe (parallax).
pub const TITLE_SCROLL_SPEED: f32 = 0.4;

/// General spacing steps
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Large spacing (16px)
    pub const LARGE: f32 = 16.0;

    /// Extra large spacing (24px)
    pub const XLARGE: f32 = 24.0;
}

/// Paging slider layout
pub mod slider {
    /// Height reserved for the title block above each page's content
    pub const TITLE_AREA_HEIGHT: f32 = 96.0;

    /// Height of the hero card on each page
    pub const CONTENT_HEIGHT: f32 = 220.0;

    /// Horizontal inset of the hero card inside its page
    pub const CONTENT_MARGIN: f32 = 35.0;
}

/// Demo list layout
pub mod list {
    /// Number of placeholder cards in each demo list
    pub const PLACEHOLDER_COUNT: usize = 3;

    /// Height of one placeholder card
    pub const CARD_HEIGHT: f32 = 150.0;

    /// Viewport height of the vertical list (shows ~2 cards, leaves scroll range)
    pub const VIEWPORT_HEIGHT: f32 = 330.0;

    /// Left/right margin of cards inside their list
    pub const SIDE_MARGIN: f32 = 20.0;
}

/// Snap animation tuning
pub mod snap {
    /// Exponential approach rate toward the nearest page boundary (per second)
    pub const SNAP_RATE: f32 = 12.0;

    /// Remaining distance below which the offset is pinned to the boundary
    pub const SETTLE_EPSILON: f32 = 0.5;
}
