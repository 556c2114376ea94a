// Guide module - the content model and UI state of the prompt guide
//
// - section: the closed set of tabs and their static definitions
// - content: card bodies, the copy template and the closing banner
// - state: active section, expansion registry, copy feedback

pub mod content;
pub mod section;
pub mod state;

pub use content::{Block, Card};
pub use section::{Section, SectionId, SECTIONS};
pub use state::{FeedbackTicket, GuideEvent, GuideState};

/// Every card of every section, in display order
pub fn all_cards() -> impl Iterator<Item = &'static Card> {
    SECTIONS.iter().flat_map(|s| s.cards.iter())
}

/// Look up a card by id across all sections
#[cfg(test)]
pub fn find_card(id: &str) -> Option<&'static Card> {
    all_cards().find(|card| card.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_card_by_id() {
        let card = find_card("creative-brief").unwrap();
        assert_eq!(card.title, "Creative Brief Generator");
        assert!(find_card("nope").is_none());
    }
}
