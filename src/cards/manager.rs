//! Deck construction.
//!
//! `CardManager` is stateless: it turns configuration data (the region
//! table, the event catalog) into freshly shuffled piles. The engine owns
//! the resulting piles.

use crate::core::{RandomSource, RegionId};
use crate::map::RegionGraph;

use super::deck::{shuffle, Pile};
use super::event::{EventCard, EventCatalog};

/// Builds and shuffles decks.
pub struct CardManager;

impl CardManager {
    /// Return a shuffled permutation of `cards`.
    pub fn shuffle<T, R: RandomSource + ?Sized>(mut cards: Vec<T>, rng: &mut R) -> Vec<T> {
        shuffle(&mut cards, rng);
        cards
    }

    /// One copy of every catalog entry, shuffled, with an empty discard.
    pub fn build_event_deck<R: RandomSource + ?Sized>(
        catalog: &EventCatalog,
        rng: &mut R,
    ) -> Pile<EventCard> {
        Pile::shuffled(catalog.cards().to_vec(), rng)
    }

    /// One card per region, shuffled, with an empty discard.
    ///
    /// Used for both the player deck and the wildfire deck.
    pub fn build_region_deck<R: RandomSource + ?Sized>(
        graph: &RegionGraph,
        rng: &mut R,
    ) -> Pile<RegionId> {
        Pile::shuffled(graph.ids().cloned().collect(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::EventKind;
    use crate::core::GameRng;

    #[test]
    fn test_event_deck_keeps_weights() {
        let catalog = EventCatalog::standard();
        let mut rng = GameRng::new(5);
        let pile = CardManager::build_event_deck(&catalog, &mut rng);

        assert_eq!(pile.deck_len(), catalog.len());
        assert_eq!(pile.discard_len(), 0);
        let droughts = pile
            .deck()
            .iter()
            .filter(|card| card.kind == EventKind::ProlongedDrought)
            .count();
        assert_eq!(droughts, 2);
    }

    #[test]
    fn test_region_deck_has_every_region_once() {
        let graph = RegionGraph::brazil();
        let mut rng = GameRng::new(5);
        let pile = CardManager::build_region_deck(&graph, &mut rng);

        let mut cards: Vec<_> = pile.deck().iter().cloned().collect();
        let mut ids: Vec<_> = graph.ids().cloned().collect();
        cards.sort();
        ids.sort();
        assert_eq!(cards, ids);
    }

    #[test]
    fn test_builds_are_reproducible() {
        let graph = RegionGraph::brazil();
        let a = CardManager::build_region_deck(&graph, &mut GameRng::new(77));
        let b = CardManager::build_region_deck(&graph, &mut GameRng::new(77));
        assert_eq!(a, b);
    }
}
