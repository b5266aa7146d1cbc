//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjrules::{Card, Rank, Round, RoundStatus, RuleOptions, Suit, Table};

const STARTING_BALANCE: usize = 500;

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = Table::new(RuleOptions::default(), seed);

    let player_id = table.open_account(STARTING_BALANCE);

    loop {
        let money = table.account(player_id).map_or(0, |account| account.balance);
        if money == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(bet) = prompt_usize(&format!("Bet amount (1-{money}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        let round_id = match table.start_round(player_id, bet) {
            Ok(id) => id,
            Err(err) => {
                println!("Bet error: {err}");
                continue;
            }
        };

        while let Some(round) = table.round(round_id) {
            if round.status() != RoundStatus::Active {
                break;
            }
            print_table(&round);

            let action = prompt_line("Action ([h]it, [s]tand): ");
            let result = match action.as_str() {
                "h" | "hit" => table.hit(round_id).map(|card| {
                    println!("You draw {}.", format_card(&card));
                }),
                "s" | "stand" => table.stand(round_id).map(|drawn| {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
                break;
            }
        }

        if let Some(round) = table.round(round_id) {
            print_table(&round);
            match round.status() {
                RoundStatus::PlayerWon => println!("You win!"),
                RoundStatus::DealerWon => println!("Dealer wins."),
                RoundStatus::Tie => println!("It's a tie."),
                RoundStatus::Active => {}
            }
        }

        if let Some(settlement) = table.settlement(round_id) {
            println!("Payout: {} (net {})", settlement.payout, settlement.net);
        }
    }

    if let Some(account) = table.account(player_id) {
        println!(
            "Final balance {} | wins {} | losses {} | ties {}",
            account.balance, account.wins, account.losses, account.ties
        );
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

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(round: &Round) {
    println!("\nDeck: {} cards remaining", round.cards_remaining());

    let dealer_view = if round.status() == RoundStatus::Active {
        let mut parts: Vec<String> = round.dealer_up_card().map(format_card).into_iter().collect();
        parts.push("??".to_string());
        parts.join(" ")
    } else {
        format_cards(round.dealer().cards())
    };
    println!(
        "Dealer: {dealer_view} (value {})",
        round.dealer_visible_score()
    );
    println!(
        "You:    {} (value {}) | bet {}",
        format_cards(round.player().cards()),
        round.player_score(),
        round.bet()
    );
    println!();
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    let rank = card.rank.label();
    let colored_rank = if card.rank.is_face() || card.rank == Rank::Ace {
        colorize(rank, color_code)
    } else {
        rank.to_string()
    };
    let colored_suit = colorize(&card.suit.letter().to_string(), color_code);
    format!("{colored_rank}{colored_suit}")
}
