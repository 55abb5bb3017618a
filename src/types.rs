use eframe::egui::Color32;
use uuid::Uuid;

/// Stable identity for elements rendered in identity-keyed containers.
/// The paging slider salts per-cell egui ids with this, so cell state follows
/// the item when the collection is reordered or items are inserted/removed.
pub trait Identifiable {
    type Id: Copy + Eq + std::hash::Hash;
    fn id(&self) -> Self::Id;
}

/// Semantic display colors for the demo cards.
#[derive(strum::EnumIter, strum::Display, PartialEq, Eq, Clone, Copy, Debug)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl CardColor {
    pub fn fill(&self) -> Color32 {
        use CardColor::*;
        match self {
            Red => Color32::from_rgb(215, 65, 60),
            Blue => Color32::from_rgb(50, 110, 220),
            Green => Color32::from_rgb(55, 170, 90),
            Yellow => Color32::from_rgb(230, 185, 50),
        }
    }

    /// Lightened variant used as the top stop of the card gradient.
    pub fn gradient_top(&self) -> Color32 {
        let c = self.fill();
        Color32::from_rgb(
            c.r().saturating_add(45),
            c.g().saturating_add(45),
            c.b().saturating_add(45),
        )
    }
}

/// One slider entry: a stable id assigned at construction plus display data.
/// The id is private so no render pass can reassign it.
#[derive(Clone, Debug)]
pub struct Item {
    id: Uuid,
    pub color: CardColor,
    pub title: String,
    pub subtitle: String,
}

impl Item {
    pub fn new(color: CardColor, title: &str, subtitle: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
        }
    }
}

impl Identifiable for Item {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Fixed demo collection owned by the screen for its whole lifetime.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new(
            CardColor::Red,
            "World Clock",
            "View the time in multiple cities around the world",
        ),
        Item::new(
            CardColor::Blue,
            "City Digital",
            "Add a clock for a city to check the time at the location",
        ),
        Item::new(
            CardColor::Green,
            "City Analogue",
            "View the time in multiple cities around the world",
        ),
        Item::new(CardColor::Yellow, "Next Alarm", "Display upcoming alarms."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn sample_ids_are_unique() {
        let items = sample_items();
        assert_eq!(items.len(), 4);
        for (i, a) in items.iter().enumerate() {
            for b in items.iter().skip(i + 1) {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn id_survives_clone() {
        let item = Item::new(CardColor::Red, "a", "b");
        assert_eq!(item.id(), item.clone().id());
    }

    #[test]
    fn palette_fills_are_distinct() {
        let fills: Vec<_> = CardColor::iter().map(|c| c.fill()).collect();
        for (i, a) in fills.iter().enumerate() {
            for b in fills.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
