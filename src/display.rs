use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use itertools::Itertools;

use crate::cards::{Hand, Suit};
use crate::hand_evaluator::{HandCategory, Standing};

pub fn hand_display(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(|card| {
            let pretty = card.pretty();
            match card.suit {
                Suit::Spades => pretty.white().to_string(),
                Suit::Hearts => pretty.red().to_string(),
                Suit::Diamonds => pretty.blue().to_string(),
                Suit::Clubs => pretty.green().to_string(),
            }
        })
        .join(" ")
}

pub fn styled_category(category: HandCategory) -> String {
    let name = category.to_string();
    match category {
        HandCategory::RoyalFlush | HandCategory::StraightFlush => {
            name.magenta().bold().to_string()
        }
        HandCategory::FourOfAKind | HandCategory::FullHouse => name.red().bold().to_string(),
        HandCategory::Flush | HandCategory::Straight => name.yellow().bold().to_string(),
        HandCategory::HighCard => name.dimmed().to_string(),
        _ => name.bold().to_string(),
    }
}

pub fn standings_table(standings: &[Standing<'_>]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").set_alignment(CellAlignment::Center),
        Cell::new("Hand"),
        Cell::new("Category"),
        Cell::new("Key").set_alignment(CellAlignment::Right),
    ]);

    for s in standings {
        let hand = if s.place == 1 {
            s.hand.green().bold().to_string()
        } else {
            s.hand.to_string()
        };
        let key = format!(
            "({}) ({})",
            s.key.category.iter().join(","),
            s.key.ranks.iter().join(",")
        );
        table.add_row(vec![
            Cell::new(s.place).set_alignment(CellAlignment::Center),
            Cell::new(hand),
            Cell::new(styled_category(s.category)),
            Cell::new(key.dimmed().to_string()).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

pub fn winner_line(standing: &Standing<'_>) -> String {
    format!(
        "{}  {}  {}",
        standing.hand.green().bold(),
        hand_display(&standing.cards),
        styled_category(standing.category)
    )
}

pub fn section_title(title: &str) -> String {
    format!("\n{}", title.cyan().bold())
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
