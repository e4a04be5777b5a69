use std::fmt::Write;

use crate::models::{Difficulty, Verdict};
use crate::services::catalog::Catalog;
use crate::services::pool::is_visible;
use crate::services::session::Round;

fn section(out: &mut String, title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}", title);
    for line in lines {
        let _ = writeln!(out, "  - {}", line);
    }
}

/// Render a verdict as the text shown after "Check"
pub fn render_verdict(verdict: &Verdict, catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Result ({} Mode)", verdict.difficulty);

    let summary = match (verdict.is_perfect, verdict.difficulty) {
        (true, Difficulty::Easy) => "Perfect! You picked all the correct ingredients.",
        (true, Difficulty::Hard) => "Perfect! You nailed both ingredients and their amounts.",
        (false, Difficulty::Easy) => "Not quite. Here's how you did:",
        (false, Difficulty::Hard) => "Not quite. Here's the breakdown:",
    };
    let _ = writeln!(out, "{}", summary);

    match verdict.difficulty {
        Difficulty::Easy => {
            let names = |ids: Vec<&str>| -> Vec<String> {
                ids.into_iter().map(|id| catalog.display_name(id).to_string()).collect()
            };
            section(&mut out, "Correct ingredients", &names(verdict.correct_ids()));
            section(&mut out, "Missing ingredients", &names(verdict.missing_ids()));
        }
        Difficulty::Hard => {
            let correct: Vec<String> = verdict
                .correct
                .iter()
                .map(|ri| {
                    let name = catalog.display_name(&ri.ingredient_id);
                    format!("{}: {} {}", name, ri.amount, ri.unit)
                })
                .collect();
            let wrong: Vec<String> = verdict
                .wrong_amounts
                .iter()
                .map(|wa| {
                    format!(
                        "{}: you used {}, correct is {} {}",
                        catalog.display_name(&wa.ingredient_id),
                        wa.user_amount,
                        wa.recipe_amount,
                        wa.unit
                    )
                })
                .collect();
            let missing: Vec<String> = verdict
                .missing
                .iter()
                .map(|ri| {
                    let name = catalog.display_name(&ri.ingredient_id);
                    format!("{}: should be {} {}", name, ri.amount, ri.unit)
                })
                .collect();
            section(&mut out, "Correct ingredients and amounts", &correct);
            section(&mut out, "Wrong amounts", &wrong);
            section(&mut out, "Missing ingredients", &missing);
        }
    }

    let extra: Vec<String> = verdict
        .extra
        .iter()
        .map(|id| catalog.display_name(id).to_string())
        .collect();
    section(&mut out, "Extra ingredients", &extra);

    out
}

/// List the ingredients on offer this round, with ticks, amounts and unit hints
pub fn render_bar(round: &Round, catalog: &Catalog, difficulty: Difficulty) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Make a {}", round.recipe.name);

    for ing in catalog.ingredients() {
        if !is_visible(&round.visible, &ing.id) {
            continue;
        }
        let entry = round.selection.get(&ing.id);
        let mark = if entry.map(|e| e.checked).unwrap_or(false) { "x" } else { " " };
        let _ = write!(out, "  [{}] {:<20} ({})", mark, ing.display_name, ing.id);

        if difficulty == Difficulty::Hard {
            let amount = entry.map(|e| e.amount_text.as_str()).unwrap_or("");
            let unit = round.recipe.unit_hint(&ing.id);
            if !amount.is_empty() || !unit.is_empty() {
                let _ = write!(out, "  {} {}", if amount.is_empty() { "_" } else { amount }, unit);
            }
        }
        let _ = writeln!(out);
    }
    out
}
