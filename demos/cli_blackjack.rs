//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{Card, GameResult, GameState, Rank, Suit, Turn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut state = GameState::setup(&mut rng);

    loop {
        if state.turn() == Turn::Dealer || state.player_hand().is_bust() {
            state = resolve_round(state);
            print_table(&state);
            print_result(&state);

            match prompt_line("[r]eset [q]uit: ").as_str() {
                "r" | "reset" => {
                    state = GameState::setup(&mut rng);
                    continue;
                }
                _ => return,
            }
        }

        print_table(&state);
        println!("Actions: [h]it [s]tand [r]eset [q]uit");
        let action = prompt_line("Action: ");

        let result = match action.as_str() {
            "h" | "hit" => state.clone().player_hits(),
            "s" | "stand" => state.clone().player_stands(),
            "r" | "reset" => {
                state = GameState::setup(&mut rng);
                continue;
            }
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match result {
            Ok(next) => state = next,
            Err(err) => println!("Action error: {err}"),
        }
    }
}

/// Drives the dealer's one-draw policy step until the dealer stands.
fn resolve_round(mut state: GameState) -> GameState {
    if state.turn() == Turn::Player {
        state = match state.clone().player_stands() {
            Ok(next) => next,
            Err(err) => {
                println!("Action error: {err}");
                return state;
            }
        };
    }

    while state.turn() == Turn::Dealer && state.dealer_must_draw() {
        state = match state.clone().dealer_draws() {
            Ok(next) => next,
            Err(err) => {
                println!("Dealer error: {err}");
                return state;
            }
        };
    }

    state
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(state: &GameState) {
    println!("\nDeck: {} cards remaining", state.cards_remaining());

    println!("\nDealer: {}", format_dealer(state));
    println!(
        "Player: {} (score {})",
        format_cards(state.player_hand().cards()),
        state.player_hand().score()
    );
    println!();
}

fn print_result(state: &GameState) {
    let text = match state.result() {
        GameResult::PlayerWin => "Player wins.",
        GameResult::DealerWin => "Dealer wins.",
        GameResult::Draw => "Draw.",
        GameResult::NoResult => "No result.",
    };
    println!("{text}");
}

fn format_dealer(state: &GameState) -> String {
    // The hole card stays face down until the player stands.
    if state.turn() == Turn::Player {
        let mut parts = Vec::new();
        if let Some(card) = state.dealer_up_card() {
            parts.push(format_card(card));
        }
        if state.dealer_hand().len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    } else {
        format!(
            "{} (score {})",
            format_cards(state.dealer_hand().cards()),
            state.dealer_hand().score()
        )
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        Rank::Ace => ("A".to_string(), true),
        Rank::Jack => ("J".to_string(), true),
        Rank::Queen => ("Q".to_string(), true),
        Rank::King => ("K".to_string(), true),
        other => (other.base_value().to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
