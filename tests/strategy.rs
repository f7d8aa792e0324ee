//! Strategy rule tests.

use patience::strategy::{
    AcesUpHomecell, AcesUpStock, AcesUpTableau, BakersDozenTableau, FreecellFreecell,
    FreecellTableau, HomecellStrategy,
};
use patience::{
    Card, Category, DECK_SIZE, Deck, DeckError, MoveError, Operation, PileStrategy, Rank,
    StrategyKind, Suit,
};

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, Rank::from_value(rank).unwrap())
}

#[test]
fn strategy_kinds_map_to_categories() {
    assert_eq!(HomecellStrategy.kind().category(), Category::Homecell);
    assert_eq!(BakersDozenTableau.kind().category(), Category::Tableau);
    assert_eq!(FreecellTableau.kind().category(), Category::Tableau);
    assert_eq!(FreecellFreecell.kind().category(), Category::Freecell);
    assert_eq!(AcesUpTableau.kind().category(), Category::Tableau);
    assert_eq!(AcesUpHomecell.kind().category(), Category::Homecell);
    assert_eq!(AcesUpStock.kind(), StrategyKind::AcesUpStock);
    assert_eq!(AcesUpStock.kind().category(), Category::Stock);
}

#[test]
fn homecell_starts_empty_without_touching_deck() {
    let mut deck = Deck::shuffled(1);
    let piles = HomecellStrategy.initial_layout(&mut deck).unwrap();
    assert_eq!(piles.len(), 4);
    assert!(piles.iter().all(patience::Pile::is_empty));
    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn homecell_empty_pile_takes_only_aces() {
    for suit in Suit::ALL {
        assert!(HomecellStrategy.is_adding_legal(card(suit, 1), None));
        for rank in 2..=13 {
            assert!(!HomecellStrategy.is_adding_legal(card(suit, rank), None));
        }
    }
}

#[test]
fn homecell_builds_up_in_suit() {
    let top = Some(card(Suit::Hearts, 4));
    assert!(HomecellStrategy.is_adding_legal(card(Suit::Hearts, 5), top));
    assert!(!HomecellStrategy.is_adding_legal(card(Suit::Diamonds, 5), top));
    assert!(!HomecellStrategy.is_adding_legal(card(Suit::Hearts, 6), top));
    assert!(!HomecellStrategy.is_adding_legal(card(Suit::Hearts, 3), top));
}

#[test]
fn homecell_never_releases_cards() {
    assert_eq!(HomecellStrategy.is_removing_legal(None), Ok(false));
    assert_eq!(
        HomecellStrategy.is_removing_legal(Some(card(Suit::Spades, 1))),
        Ok(false)
    );
    assert_eq!(
        HomecellStrategy.is_removing_legal_to(None, &[None, None, None], Category::Tableau),
        Err(MoveError::Unsupported(Operation::RemovalToDestination))
    );
}

#[test]
fn bakers_dozen_tableau_ignores_suit() {
    let strategy = BakersDozenTableau;
    let king = Some(card(Suit::Hearts, 13));
    assert!(strategy.is_adding_legal(card(Suit::Hearts, 12), king));
    assert!(strategy.is_adding_legal(card(Suit::Spades, 12), king));
    assert!(!strategy.is_adding_legal(card(Suit::Spades, 11), king));
    assert!(strategy.is_adding_legal(card(Suit::Clubs, 1), Some(card(Suit::Diamonds, 2))));
    assert!(!strategy.is_adding_legal(card(Suit::Clubs, 4), Some(card(Suit::Diamonds, 6))));
    assert!(!strategy.is_adding_legal(card(Suit::Clubs, 11), Some(card(Suit::Diamonds, 10))));
}

#[test]
fn bakers_dozen_tableau_rejects_empty_piles() {
    assert!(!BakersDozenTableau.is_adding_legal(card(Suit::Clubs, 13), None));
    assert_eq!(BakersDozenTableau.is_removing_legal(None), Ok(false));
    assert_eq!(
        BakersDozenTableau.is_removing_legal(Some(card(Suit::Clubs, 3))),
        Ok(true)
    );
    assert_eq!(
        BakersDozenTableau.is_removing_legal_to(None, &[], Category::Homecell),
        Err(MoveError::Unsupported(Operation::RemovalToDestination))
    );
}

#[test]
fn bakers_dozen_layout_moves_kings_down() {
    let front = [
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 13),
        card(Suit::Diamonds, 5),
        card(Suit::Spades, 13),
    ];
    let mut cards = front.to_vec();
    cards.extend(
        Deck::ordered()
            .cards()
            .iter()
            .filter(|c| !front.contains(*c)),
    );
    let mut deck = Deck::from_cards(cards);

    let piles = BakersDozenTableau.initial_layout(&mut deck).unwrap();
    assert_eq!(piles.len(), 13);
    assert!(deck.is_empty());
    assert_eq!(
        piles[0].cards(),
        &[
            card(Suit::Clubs, 13),
            card(Suit::Spades, 13),
            card(Suit::Hearts, 2),
            card(Suit::Diamonds, 5),
        ]
    );
    assert_eq!(piles[0].top(), Some(card(Suit::Diamonds, 5)));
}

#[test]
fn bakers_dozen_layout_needs_a_full_deck() {
    let mut deck = Deck::from_cards(Deck::ordered().cards()[..50].to_vec());
    assert_eq!(
        BakersDozenTableau.initial_layout(&mut deck).unwrap_err(),
        DeckError::NotEnoughCards {
            requested: 4,
            remaining: 2,
        }
    );
}

#[test]
fn freecell_tableau_alternates_colors_downward() {
    let strategy = FreecellTableau;
    let top = Some(card(Suit::Spades, 9));
    assert!(strategy.is_adding_legal(card(Suit::Hearts, 8), top));
    assert!(strategy.is_adding_legal(card(Suit::Diamonds, 8), top));
    assert!(!strategy.is_adding_legal(card(Suit::Clubs, 8), top));
    assert!(!strategy.is_adding_legal(card(Suit::Hearts, 7), top));
    assert!(!strategy.is_adding_legal(card(Suit::Hearts, 10), top));
    assert!(strategy.is_adding_legal(card(Suit::Clubs, 4), None));
}

#[test]
fn freecell_tableau_layout_alternates_six_and_seven() {
    let mut deck = Deck::shuffled(9);
    let piles = FreecellTableau.initial_layout(&mut deck).unwrap();
    let sizes: Vec<usize> = piles.iter().map(patience::Pile::len).collect();
    assert_eq!(sizes, [6, 7, 6, 7, 6, 7, 6, 7]);
    assert!(deck.is_empty());
}

#[test]
fn free_cells_hold_one_card() {
    let strategy = FreecellFreecell;
    assert!(strategy.is_adding_legal(card(Suit::Clubs, 4), None));
    assert!(!strategy.is_adding_legal(card(Suit::Clubs, 4), Some(card(Suit::Hearts, 1))));
    assert_eq!(strategy.is_removing_legal(None), Ok(false));
    assert_eq!(strategy.is_removing_legal(Some(card(Suit::Hearts, 1))), Ok(true));
}

#[test]
fn aces_up_tableau_only_fills_empty_piles() {
    assert!(AcesUpTableau.is_adding_legal(card(Suit::Clubs, 4), None));
    assert!(!AcesUpTableau.is_adding_legal(card(Suit::Clubs, 4), Some(card(Suit::Clubs, 5))));
    assert_eq!(
        AcesUpTableau.is_removing_legal(Some(card(Suit::Clubs, 5))),
        Err(MoveError::Unsupported(Operation::Removal))
    );
}

#[test]
fn aces_up_tableau_validates_arguments() {
    let top = Some(card(Suit::Clubs, 5));
    assert_eq!(
        AcesUpTableau.is_removing_legal_to(top, &[None, None], Category::Tableau),
        Err(MoveError::OtherTopsLength {
            expected: 3,
            actual: 2,
        })
    );
    assert_eq!(
        AcesUpTableau.is_removing_legal_to(top, &[None, None, None], Category::Freecell),
        Err(MoveError::InvalidDestination(Category::Freecell))
    );
    assert_eq!(
        AcesUpTableau.is_removing_legal_to(top, &[None, None, None], Category::Stock),
        Err(MoveError::InvalidDestination(Category::Stock))
    );
}

#[test]
fn aces_up_tableau_moves_need_an_empty_pile() {
    let top = Some(card(Suit::Clubs, 5));
    let full = [
        Some(card(Suit::Hearts, 2)),
        Some(card(Suit::Hearts, 3)),
        Some(card(Suit::Hearts, 4)),
    ];
    let gap = [Some(card(Suit::Hearts, 2)), None, Some(card(Suit::Hearts, 4))];

    assert_eq!(
        AcesUpTableau.is_removing_legal_to(top, &full, Category::Tableau),
        Ok(false)
    );
    assert_eq!(
        AcesUpTableau.is_removing_legal_to(top, &gap, Category::Tableau),
        Ok(true)
    );
    assert_eq!(
        AcesUpTableau.is_removing_legal_to(None, &gap, Category::Tableau),
        Ok(false)
    );
}

#[test]
fn aces_up_discards_under_a_higher_card_of_the_same_suit() {
    let top = Some(card(Suit::Clubs, 5));
    let higher = [
        Some(card(Suit::Hearts, 13)),
        Some(card(Suit::Clubs, 9)),
        None,
    ];
    let lower = [
        Some(card(Suit::Hearts, 13)),
        Some(card(Suit::Clubs, 4)),
        None,
    ];
    let ace = [Some(card(Suit::Clubs, 1)), None, None];
    let other_suit = [Some(card(Suit::Spades, 12)), None, None];

    assert_eq!(
        AcesUpTableau.is_removing_legal_to(top, &higher, Category::Homecell),
        Ok(true)
    );
    assert_eq!(
        AcesUpTableau.is_removing_legal_to(top, &lower, Category::Homecell),
        Ok(false)
    );
    assert_eq!(
        AcesUpTableau.is_removing_legal_to(top, &ace, Category::Homecell),
        Ok(true)
    );
    assert_eq!(
        AcesUpTableau.is_removing_legal_to(top, &other_suit, Category::Homecell),
        Ok(false)
    );
}

#[test]
fn aces_up_never_discards_an_ace() {
    let top = Some(card(Suit::Diamonds, 1));
    let others = [
        Some(card(Suit::Diamonds, 13)),
        Some(card(Suit::Diamonds, 2)),
        Some(card(Suit::Clubs, 1)),
    ];
    assert_eq!(
        AcesUpTableau.is_removing_legal_to(top, &others, Category::Homecell),
        Ok(false)
    );
}

#[test]
fn aces_up_homecell_accepts_everything_and_releases_nothing() {
    let mut deck = Deck::shuffled(2);
    let piles = AcesUpHomecell.initial_layout(&mut deck).unwrap();
    assert_eq!(piles.len(), 1);
    assert!(piles[0].is_empty());

    assert!(AcesUpHomecell.is_adding_legal(card(Suit::Clubs, 7), None));
    assert!(AcesUpHomecell.is_adding_legal(card(Suit::Clubs, 7), Some(card(Suit::Hearts, 2))));
    assert_eq!(
        AcesUpHomecell.is_removing_legal(Some(card(Suit::Clubs, 7))),
        Err(MoveError::Unsupported(Operation::Removal))
    );
    assert_eq!(
        AcesUpHomecell.is_removing_legal_to(Some(card(Suit::Clubs, 7)), &[], Category::Tableau),
        Err(MoveError::Unsupported(Operation::RemovalToDestination))
    );
}

#[test]
fn aces_up_stock_only_feeds_the_tableau() {
    let top = Some(card(Suit::Clubs, 7));
    assert!(!AcesUpStock.is_adding_legal(card(Suit::Clubs, 8), None));
    assert_eq!(
        AcesUpStock.is_removing_legal(top),
        Err(MoveError::Unsupported(Operation::Removal))
    );
    assert_eq!(
        AcesUpStock.is_removing_legal_to(top, &[], Category::Tableau),
        Ok(true)
    );
    assert_eq!(
        AcesUpStock.is_removing_legal_to(top, &[], Category::Homecell),
        Ok(false)
    );
    assert_eq!(
        AcesUpStock.is_removing_legal_to(None, &[], Category::Tableau),
        Ok(false)
    );
    assert_eq!(
        AcesUpStock.is_removing_legal_to(top, &[None], Category::Tableau),
        Err(MoveError::OtherTopsLength {
            expected: 0,
            actual: 1,
        })
    );
}

#[test]
fn aces_up_stock_layout_needs_exactly_48_cards() {
    let mut full = Deck::ordered();
    assert_eq!(
        AcesUpStock.initial_layout(&mut full).unwrap_err(),
        DeckError::UnexpectedSize {
            expected: 48,
            actual: 52,
        }
    );
    assert_eq!(full.len(), DECK_SIZE);

    let mut deck = Deck::ordered();
    deck.take(4).unwrap();
    let next = deck.cards()[0];
    let piles = AcesUpStock.initial_layout(&mut deck).unwrap();
    assert_eq!(piles.len(), 1);
    assert_eq!(piles[0].len(), 48);
    assert_eq!(piles[0].top(), Some(next));
    assert!(deck.is_empty());
}
