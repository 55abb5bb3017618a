// View layer: reusable widgets and pure renderers, no app state.

pub mod cards;
pub mod lists;
pub mod slider;
