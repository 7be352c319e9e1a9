//! Chip conservation property tests.
//!
//! For any sequence of valid actions, the chips sitting in stacks,
//! outstanding bets, and the pot always add up to what the players
//! bought in for; settlement hands every last chip back out.

mod common;

use common::{ScriptedDeck, SumRanker};
use holdem_table::{Chips, Table, TableConfig};
use proptest::prelude::*;

const BUY_IN: Chips = 200;

fn build_table(num_players: usize) -> Table {
    let config = TableConfig {
        small_blind: 5,
        big_blind: 10,
        min_players: 2,
        max_players: 6,
        min_buy_in: 100,
        max_buy_in: 1000,
        straddle_limit: 0,
    };
    let mut table = Table::new(config, Box::new(SumRanker))
        .unwrap()
        .with_deck_provider(Box::new(ScriptedDeck::new(&[])));
    for i in 0..num_players {
        table.add_player(&format!("p{i}"), BUY_IN, false).unwrap();
    }
    table
}

fn chips_on_table(table: &Table) -> Chips {
    table
        .seats()
        .iter()
        .flatten()
        .map(|p| p.stack + p.current_bet)
        .sum()
}

proptest! {
    /// Random action sequences never create or destroy chips, whether
    /// the hand settles or is still mid-street when actions run out.
    #[test]
    fn test_chips_conserved_through_any_action_sequence(
        actions in prop::collection::vec(any::<u8>(), 1..120),
        num_players in 2usize..=6,
    ) {
        let total = BUY_IN * num_players as Chips;
        let mut table = build_table(num_players);
        table.start_game();

        for byte in actions {
            if !table.is_hand_active() {
                break;
            }
            let Some(name) = table.current_actor().map(str::to_string) else {
                break;
            };
            let _ = match byte % 5 {
                0 => table.check(&name).map(|()| 0),
                1 => table.call(&name),
                2 => table.fold(&name).map(|()| 0),
                3 => table.bet(&name, i64::from(byte) * 2),
                _ => table.all_in(&name),
            };
            prop_assert_eq!(chips_on_table(&table) + table.pot(), total);
        }

        if !table.is_hand_active() {
            // Fully settled: the pot is empty and the stacks hold
            // every chip.
            prop_assert_eq!(table.pot(), 0);
            prop_assert_eq!(chips_on_table(&table), total);
            let paid: Chips = table.winners().iter().map(|w| w.amount).sum();
            prop_assert!(paid > 0);
        }
    }

    /// Folding a random player mid-hand keeps the books balanced and
    /// the seat reserved until the boundary.
    #[test]
    fn test_mid_hand_removal_conserves_chips(
        leaver in 0usize..4,
        actions in prop::collection::vec(any::<u8>(), 0..40),
    ) {
        let total = BUY_IN * 4;
        let mut table = build_table(4);
        table.start_game();

        let name = format!("p{leaver}");
        table.remove_player(&name).unwrap();
        prop_assert_eq!(chips_on_table(&table) + table.pot(), total);
        prop_assert!(table.seats()[leaver].is_some());

        for byte in actions {
            if !table.is_hand_active() {
                break;
            }
            let Some(actor) = table.current_actor().map(str::to_string) else {
                break;
            };
            let _ = match byte % 3 {
                0 => table.call(&actor),
                1 => table.fold(&actor).map(|()| 0),
                _ => table.bet(&actor, i64::from(byte)),
            };
            prop_assert_eq!(chips_on_table(&table) + table.pot(), total);
        }
    }

    /// The dealer button lands on an occupied, active seat after every
    /// boundary, and chips survive entire hands played back to back.
    #[test]
    fn test_multiple_hands_back_to_back(rounds in 1usize..=4) {
        let total = BUY_IN * 3;
        let mut table = build_table(3);
        table.start_game();

        for _ in 0..rounds {
            while table.is_hand_active() {
                let name = table.current_actor().unwrap().to_string();
                if table.check(&name).is_err() {
                    let _ = table.call(&name);
                }
            }
            prop_assert_eq!(chips_on_table(&table), total);
            let dealer = table.dealer_seat();
            prop_assert!(table.seats()[dealer].is_some());
            table.init_new_round();
        }
    }
}
