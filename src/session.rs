use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::decks::Deck;
use crate::record::NormalizedRecord;

/// Walks a deck in shuffled order. Owns the position and the question/answer
/// flag so the command loop stays stateless.
#[derive(Debug)]
pub struct StudySession {
    deck: Deck,
    order: Vec<usize>,
    position: usize,
    show_answer: bool,
    rng: StdRng,
}

impl StudySession {
    pub fn new(deck: Deck, shuffle: bool, rng: StdRng) -> Self {
        let order = (0..deck.len()).collect();
        let mut session = Self {
            deck,
            order,
            position: 0,
            show_answer: false,
            rng,
        };
        if shuffle {
            session.order.shuffle(&mut session.rng);
        }
        session
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current(&self) -> Option<NormalizedRecord<'_>> {
        let index = *self.order.get(self.position)?;
        self.deck.record(index)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.order.get(self.position).copied()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn flip(&mut self) {
        self.show_answer = !self.show_answer;
    }

    /// Returns false when already on the last card.
    pub fn next(&mut self) -> bool {
        if self.position + 1 >= self.order.len() {
            return false;
        }
        self.position += 1;
        self.show_answer = false;
        true
    }

    /// Returns false when already on the first card.
    pub fn prev(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        self.show_answer = false;
        true
    }

    pub fn shuffle(&mut self) {
        self.order.shuffle(&mut self.rng);
        self.position = 0;
        self.show_answer = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::Field;
    use rand::SeedableRng;

    fn deck() -> Deck {
        Deck::from_csv("test", "word,meaning\neins,하나\nzwei,둘\ndrei,셋\nvier,넷\n").unwrap()
    }

    #[test]
    fn test_unshuffled_order_and_bounds() {
        let mut session = StudySession::new(deck(), false, StdRng::seed_from_u64(7));
        assert_eq!(session.len(), 4);
        assert_eq!(session.current().unwrap().get(Field::GermanWord), Some("eins"));

        assert!(!session.prev());
        assert_eq!(session.position(), 0);

        assert!(session.next());
        assert!(session.next());
        assert!(session.next());
        assert_eq!(session.current().unwrap().get(Field::GermanWord), Some("vier"));
        assert!(!session.next());
        assert_eq!(session.position(), 3);

        assert!(session.prev());
        assert_eq!(session.current().unwrap().get(Field::GermanWord), Some("drei"));
    }

    #[test]
    fn test_navigation_hides_answer() {
        let mut session = StudySession::new(deck(), false, StdRng::seed_from_u64(7));
        assert!(!session.show_answer());
        session.flip();
        assert!(session.show_answer());
        session.flip();
        assert!(!session.show_answer());

        session.flip();
        session.next();
        assert!(!session.show_answer());

        session.flip();
        session.prev();
        assert!(!session.show_answer());

        // a blocked move leaves the flag alone
        session.flip();
        assert!(!session.prev());
        assert!(session.show_answer());
    }

    #[test]
    fn test_shuffle_is_permutation_and_resets() {
        let mut session = StudySession::new(deck(), true, StdRng::seed_from_u64(42));
        session.next();
        session.next();
        session.flip();
        session.shuffle();
        assert_eq!(session.position(), 0);
        assert!(!session.show_answer());

        let mut seen: Vec<usize> = (0..session.len())
            .map(|_| {
                let index = session.current_index().unwrap();
                session.next();
                index
            })
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_same_seed_same_order() {
        let order = |seed| {
            let session = StudySession::new(deck(), true, StdRng::seed_from_u64(seed));
            session.order.clone()
        };
        assert_eq!(order(3), order(3));
    }
}
