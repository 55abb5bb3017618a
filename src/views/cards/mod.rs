// Facade module for the card renderers.
// External code imports via views::cards::{hero_card, placeholder_card}.

mod hero;
mod placeholder;

pub use hero::hero_card;
pub use placeholder::placeholder_card;
