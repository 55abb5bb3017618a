// Facade for the paging slider building blocks.
// External code imports via views::slider::{PagingSlider, ScrollGeometry}.

pub mod capability;
pub mod paging;
pub mod snap;
mod tests;

pub use capability::ScrollGeometry;
pub use paging::{parallax_offset, PagingSlider, PagingSliderOutput};
