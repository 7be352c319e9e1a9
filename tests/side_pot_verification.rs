//! Side pot settlement through the public table API.
//!
//! These scenarios pin the tiered distribution exactly: short all-in
//! winners cap at their own layer, ties split with a deterministic
//! odd-chip rule, and every chip that went in comes back out.

mod common;

use common::{SumRanker, scripted_hand};
use holdem_table::{Card, Chips, Street, Suit, Table, TableConfig};

fn config(min_buy_in: Chips) -> TableConfig {
    TableConfig {
        small_blind: 5,
        big_blind: 10,
        min_players: 2,
        max_players: 6,
        min_buy_in,
        max_buy_in: 1000,
        straddle_limit: 0,
    }
}

#[test]
fn test_short_all_in_winner_takes_only_the_main_pot() {
    // alice is all-in for 10 with the best hand, bob all-in for 30
    // with the second best, carol matches 30 with the worst. The main
    // pot (10 x 3) goes to alice, the side pot (20 x 2) to bob.
    let deck = scripted_hand(
        &[
            [Card(14, Suit::Spade), Card(14, Suit::Heart)], // alice
            [Card(13, Suit::Spade), Card(13, Suit::Heart)], // bob
            [Card(12, Suit::Spade), Card(12, Suit::Heart)], // carol
        ],
        [
            Card(2, Suit::Spade),
            Card(3, Suit::Spade),
            Card(4, Suit::Spade),
            Card(5, Suit::Heart),
            Card(7, Suit::Club),
        ],
    );
    let mut table = Table::new(config(10), Box::new(SumRanker))
        .unwrap()
        .with_deck_provider(Box::new(deck));
    table.add_player("alice", 10, false).unwrap();
    table.add_player("bob", 30, false).unwrap();
    table.add_player("carol", 30, false).unwrap();
    table.start_game();

    // bob 5, carol 10, alice to act.
    table.all_in("alice").unwrap();
    table.all_in("bob").unwrap();
    table.call("carol").unwrap();

    // Everyone is all-in; the board races out and the hand settles.
    assert_eq!(table.street(), Some(Street::Showdown));
    assert_eq!(table.player("alice").unwrap().stack, 30);
    assert_eq!(table.player("bob").unwrap().stack, 40);
    assert_eq!(table.player("carol").unwrap().stack, 0);
    assert_eq!(table.losers(), ["carol".to_string()]);

    let winners = table.winners();
    assert_eq!(winners.len(), 2);
    assert_eq!(winners[0].name, "alice");
    assert_eq!(winners[0].amount, 30);
    assert_eq!(winners[1].name, "bob");
    assert_eq!(winners[1].amount, 40);
}

#[test]
fn test_staggered_all_ins_build_three_pots() {
    // Stacks 25/75/150/150; the shortest stack has the best hand and
    // each deeper stack wins the layer above.
    let deck = scripted_hand(
        &[
            [Card(14, Suit::Spade), Card(14, Suit::Heart)], // alice
            [Card(13, Suit::Spade), Card(13, Suit::Heart)], // bob
            [Card(12, Suit::Spade), Card(12, Suit::Heart)], // carol
            [Card(11, Suit::Spade), Card(11, Suit::Heart)], // dave
        ],
        [
            Card(2, Suit::Spade),
            Card(3, Suit::Spade),
            Card(4, Suit::Spade),
            Card(5, Suit::Heart),
            Card(6, Suit::Diamond),
        ],
    );
    let mut table = Table::new(config(25), Box::new(SumRanker))
        .unwrap()
        .with_deck_provider(Box::new(deck));
    table.add_player("alice", 25, false).unwrap();
    table.add_player("bob", 75, false).unwrap();
    table.add_player("carol", 150, false).unwrap();
    table.add_player("dave", 150, false).unwrap();
    table.start_game();

    // bob 5, carol 10, dave opens.
    table.all_in("dave").unwrap();
    table.all_in("alice").unwrap();
    table.all_in("bob").unwrap();
    table.call("carol").unwrap();

    assert_eq!(table.street(), Some(Street::Showdown));
    assert_eq!(table.player("alice").unwrap().stack, 100); // 25 x 4
    assert_eq!(table.player("bob").unwrap().stack, 150); // 50 x 3
    assert_eq!(table.player("carol").unwrap().stack, 150); // 75 x 2
    assert_eq!(table.player("dave").unwrap().stack, 0);
    assert_eq!(table.losers(), ["dave".to_string()]);

    let total: Chips = table
        .seats()
        .iter()
        .flatten()
        .map(|p| p.stack)
        .sum();
    assert_eq!(total, 400);
}

#[test]
fn test_tied_winners_split_with_odd_chip_clockwise_from_dealer() {
    // bob and carol tie; the 45-chip pot splits 23/22 with the odd
    // chip going to the seat nearest clockwise from the dealer.
    let deck = scripted_hand(
        &[
            [Card(2, Suit::Club), Card(3, Suit::Club)],     // alice
            [Card(13, Suit::Club), Card(12, Suit::Club)],   // bob
            [Card(13, Suit::Diamond), Card(12, Suit::Diamond)], // carol
        ],
        [
            Card(5, Suit::Spade),
            Card(6, Suit::Spade),
            Card(7, Suit::Spade),
            Card(8, Suit::Heart),
            Card(9, Suit::Diamond),
        ],
    );
    let mut table = Table::new(config(100), Box::new(SumRanker))
        .unwrap()
        .with_deck_provider(Box::new(deck));
    table.add_player("alice", 500, false).unwrap();
    table.add_player("bob", 500, false).unwrap();
    table.add_player("carol", 500, false).unwrap();
    table.start_game();

    table.call("alice").unwrap();
    table.call("bob").unwrap();
    table.check("carol").unwrap();

    // A 5-chip flop bet brings the pot to 45.
    table.bet("bob", 5).unwrap();
    table.call("carol").unwrap();
    table.call("alice").unwrap();
    for _ in 0..2 {
        table.check("bob").unwrap();
        table.check("carol").unwrap();
        table.check("alice").unwrap();
    }

    assert_eq!(table.street(), Some(Street::Showdown));
    assert_eq!(table.player("bob").unwrap().stack, 508); // 485 + 23
    assert_eq!(table.player("carol").unwrap().stack, 507); // 485 + 22
    assert_eq!(table.player("alice").unwrap().stack, 485);

    let paid: Chips = table.winners().iter().map(|w| w.amount).sum();
    assert_eq!(paid, 45);
}

#[test]
fn test_folded_contributions_stay_in_the_pot() {
    // carol folds after committing the blind; her chips are part of
    // the pot the eventual winner collects.
    let deck = scripted_hand(
        &[
            [Card(14, Suit::Spade), Card(14, Suit::Heart)], // alice
            [Card(2, Suit::Club), Card(3, Suit::Club)],     // bob
            [Card(4, Suit::Club), Card(5, Suit::Club)],     // carol
        ],
        [
            Card(7, Suit::Spade),
            Card(8, Suit::Spade),
            Card(9, Suit::Spade),
            Card(10, Suit::Heart),
            Card(12, Suit::Diamond),
        ],
    );
    let mut table = Table::new(config(100), Box::new(SumRanker))
        .unwrap()
        .with_deck_provider(Box::new(deck));
    table.add_player("alice", 500, false).unwrap();
    table.add_player("bob", 500, false).unwrap();
    table.add_player("carol", 500, false).unwrap();
    table.start_game();

    table.call("alice").unwrap();
    table.call("bob").unwrap();
    table.fold("carol").unwrap();

    // Check it down heads-up.
    while table.is_hand_active() {
        let name = table.current_actor().unwrap().to_string();
        table.check(&name).unwrap();
    }

    assert_eq!(table.winners()[0].name, "alice");
    assert_eq!(table.winners()[0].amount, 30);
    assert_eq!(table.player("alice").unwrap().stack, 520);
    assert_eq!(table.player("carol").unwrap().stack, 490);
}
