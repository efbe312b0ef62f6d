use urn_rs::estimate::tally;
use urn_rs::urn::{Urn, UrnError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Marble {
    Black,
    Red,
    Green,
}

fn marble_urn() -> Urn<Marble> {
    Urn::try_from_counts([(Marble::Black, 6), (Marble::Red, 4), (Marble::Green, 3)]).unwrap()
}

#[test]
fn works_with_non_string_labels() {
    let mut urn = marble_urn();
    assert_eq!(urn.len(), 13);
    assert_eq!(urn.count_of(&Marble::Red), 4);
    let drawn = urn.draw_seeded(5, 1);
    assert_eq!(drawn.len(), 5);
    assert_eq!(urn.len(), 8);
}

#[test]
fn split_draws_conserve_every_item() {
    let mut urn = marble_urn();
    let mut all = urn.draw_seeded(5, 21);
    all.extend(urn.draw_seeded(urn.len(), 22));
    assert!(urn.is_empty());
    assert_eq!(all.len(), 13);

    let counts = tally(&all);
    assert_eq!(counts.get(&&Marble::Black), Some(&6));
    assert_eq!(counts.get(&&Marble::Red), Some(&4));
    assert_eq!(counts.get(&&Marble::Green), Some(&3));
}

#[test]
fn overdraw_saturates_no_matter_how_large() {
    let mut urn = marble_urn();
    let drawn = urn.draw_seeded(usize::MAX, 3);
    assert_eq!(drawn.len(), 13);
    assert!(urn.is_empty());
    // Further draws yield nothing.
    assert!(urn.draw_seeded(1, 3).is_empty());
}

#[test]
fn repeated_draws_on_one_urn_keep_depleting() {
    let mut urn = marble_urn();
    urn.draw_seeded(5, 7);
    urn.draw_seeded(5, 8);
    assert_eq!(urn.len(), 3);
    urn.draw_seeded(5, 9);
    assert!(urn.is_empty());
}

#[test]
fn contents_never_exceed_snapshot() {
    let mut urn = marble_urn();
    for seed in 0..5 {
        urn.draw_seeded(2, seed);
        assert!(urn.len() <= urn.initial_len());
    }
    urn.reset();
    assert_eq!(urn.len(), urn.initial_len());
}

#[test]
fn fresh_copies_do_not_alias_the_reference() {
    let reference = marble_urn();
    let mut a = reference.fresh();
    let mut b = reference.fresh();
    a.draw_seeded(13, 1);
    assert!(a.is_empty());
    assert_eq!(b.len(), 13);
    assert_eq!(reference.len(), 13);
    b.draw_seeded(4, 2);
    assert_eq!(reference.len(), 13);
}

#[test]
fn construction_rejects_any_negative_count() {
    let err = Urn::try_from_counts([(Marble::Black, 3), (Marble::Red, -7)]).unwrap_err();
    assert_eq!(err, UrnError::NegativeCount(-7));
}
