//! CLI solitaire example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use patience::{Card, Category, Game, GameKind, GameOptions, PileRef, Rank, Suit, new_game};

fn main() {
    println!("Patience CLI example (type 'q' to quit, '?' for help)");

    let mut game = prompt_game();

    loop {
        print_board(game.as_ref());

        let line = prompt_line("> ");
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["q" | "quit"] => {
                println!("Goodbye.");
                break;
            }
            ["?" | "help"] => print_help(),
            ["n" | "new"] => game = prompt_game(),
            ["d" | "deal"] => match game.invoke_default_special_action() {
                Ok(0) => println!("The stock is empty."),
                Ok(dealt) => println!("Dealt {dealt} cards."),
                Err(err) => println!("Deal error: {err}"),
            },
            [from, to] => {
                let (Some(from), Some(to)) =
                    (parse_pile(game.kind(), from), parse_pile(game.kind(), to))
                else {
                    println!("Unknown pile. Type '?' for help.");
                    continue;
                };
                match game.move_card(from, to) {
                    Ok(true) => {}
                    Ok(false) => println!("That move is not allowed."),
                    Err(err) => println!("Move error: {err}"),
                }
            }
            _ => println!("Unknown command. Type '?' for help."),
        }
    }
}

fn prompt_game() -> Box<dyn Game> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    loop {
        let line = prompt_line("Game (0 = Baker's Dozen, 1 = Freecell, 2 = Aces Up): ");
        let Ok(id) = line.parse::<u32>() else {
            println!("Please enter a number.");
            continue;
        };
        match GameOptions::from_id(id, seed) {
            Ok(options) => return new_game(&options),
            Err(err) => println!("{err}"),
        }
    }
}

fn print_help() {
    println!("  <from> <to>  move a top card, e.g. 't3 h0'");
    println!("               piles: t = tableau, h = homecell, f = free cell, s = stock");
    println!("  d            deal from the stock (Aces Up)");
    println!("  n            start a new game");
    println!("  q            quit");
}

/// Parses `t3`, `h0`, `f1` or `s` into a pile of the given variant.
fn parse_pile(kind: GameKind, text: &str) -> Option<PileRef> {
    let mut chars = text.chars();
    let category = match chars.next()? {
        't' => Category::Tableau,
        'h' => Category::Homecell,
        'f' => Category::Freecell,
        's' => Category::Stock,
        _ => return None,
    };
    if !kind.categories().contains(&category) {
        return None;
    }

    let rest = chars.as_str();
    let pos = if rest.is_empty() { 0 } else { rest.parse().ok()? };
    Some(PileRef::new(category, pos))
}

fn print_board(game: &dyn Game) {
    println!();
    for &category in game.kind().categories() {
        let count = game.pile_count(category).unwrap_or(0);
        let label = match category {
            Category::Tableau => "t",
            Category::Homecell => "h",
            Category::Freecell => "f",
            Category::Stock => "s",
        };

        for pos in 0..count {
            let Some(pile) = game.group(category).ok().and_then(|group| group.pile(pos)) else {
                continue;
            };
            let cards = if pile.is_empty() {
                colorize("--", "90")
            } else if category == Category::Stock {
                format!("[{} cards]", pile.len())
            } else {
                pile.cards()
                    .iter()
                    .map(format_card)
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            println!("{label}{pos:<2} {cards}");
        }
    }
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

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => other.value().to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
