use std::collections::HashSet;

use log::info;

use crate::models::{Difficulty, Recipe, Selection, UserAmount, Verdict, WrongAmount, NO_AMOUNT};
use crate::utils::{amounts_match, dedup_ids, parse_amount};

/// Grade an Easy-mode answer: only which ingredients were picked matters.
///
/// `correct` and `missing` follow recipe order, `extra` follows the order of
/// `selected_ids`. Repeated ids in the selection count once.
pub fn grade_easy<I, S>(recipe: &Recipe, selected_ids: I) -> Verdict
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let selected = dedup_ids(selected_ids);
    let selected_set: HashSet<&str> = selected.iter().map(String::as_str).collect();
    let recipe_ids: HashSet<&str> = recipe.ingredient_ids().collect();

    let (correct, missing): (Vec<_>, Vec<_>) = recipe
        .ingredients
        .iter()
        .cloned()
        .partition(|ri| selected_set.contains(ri.ingredient_id.as_str()));

    let extra: Vec<String> = selected
        .iter()
        .filter(|id| !recipe_ids.contains(id.as_str()))
        .cloned()
        .collect();

    let is_perfect = missing.is_empty() && extra.is_empty();
    info!(
        "Easy grade for {}: {} correct, {} missing, {} extra",
        recipe.name,
        correct.len(),
        missing.len(),
        extra.len()
    );

    Verdict {
        difficulty: Difficulty::Easy,
        correct,
        missing,
        wrong_amounts: Vec::new(),
        extra,
        is_perfect,
    }
}

/// Grade a Hard-mode answer: every recipe ingredient has to be picked with
/// the right amount.
///
/// Picked but blank or unparseable amounts count as wrong amounts, not as
/// missing.
pub fn grade_hard(recipe: &Recipe, selection: &Selection) -> Verdict {
    let mut correct = Vec::new();
    let mut missing = Vec::new();
    let mut wrong_amounts = Vec::new();

    for ri in &recipe.ingredients {
        let entry = match selection.get(&ri.ingredient_id) {
            Some(entry) if entry.checked => entry,
            _ => {
                missing.push(ri.clone());
                continue;
            }
        };

        let raw = entry.amount_text.trim();
        match parse_amount(raw) {
            Some(amount) if amounts_match(amount, ri.amount) => correct.push(ri.clone()),
            Some(amount) => wrong_amounts.push(WrongAmount {
                ingredient_id: ri.ingredient_id.clone(),
                user_amount: UserAmount::Number(amount),
                recipe_amount: ri.amount,
                unit: ri.unit.clone(),
            }),
            None => {
                let shown = if raw.is_empty() { NO_AMOUNT } else { raw };
                wrong_amounts.push(WrongAmount {
                    ingredient_id: ri.ingredient_id.clone(),
                    user_amount: UserAmount::Raw(shown.to_string()),
                    recipe_amount: ri.amount,
                    unit: ri.unit.clone(),
                });
            }
        }
    }

    let extra: Vec<String> = selection
        .checked()
        .filter(|(id, _)| recipe.find(id).is_none())
        .map(|(id, _)| id.to_string())
        .collect();

    let is_perfect = correct.len() == recipe.ingredients.len()
        && wrong_amounts.is_empty()
        && missing.is_empty()
        && extra.is_empty();

    info!(
        "Hard grade for {}: {} correct, {} wrong amounts, {} missing, {} extra",
        recipe.name,
        correct.len(),
        wrong_amounts.len(),
        missing.len(),
        extra.len()
    );

    Verdict {
        difficulty: Difficulty::Hard,
        correct,
        missing,
        wrong_amounts,
        extra,
        is_perfect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeIngredient;

    fn ri(id: &str, amount: f64, unit: &str) -> RecipeIngredient {
        RecipeIngredient {
            ingredient_id: id.to_string(),
            amount,
            unit: unit.to_string(),
        }
    }

    fn margarita() -> Recipe {
        Recipe {
            name: "Margarita".to_string(),
            ingredients: vec![
                ri("tequila", 2.0, "oz"),
                ri("lime_juice", 1.0, "oz"),
                ri("triple_sec", 0.5, "oz"),
            ],
        }
    }

    fn mojito() -> Recipe {
        Recipe {
            name: "Mojito".to_string(),
            ingredients: vec![
                ri("white_rum", 2.0, "oz"),
                ri("lime_juice", 0.75, "oz"),
                ri("simple_syrup", 0.5, "oz"),
                ri("mint", 8.0, "leaves"),
                ri("soda_water", 2.0, "oz"),
            ],
        }
    }

    fn hard_selection(picks: &[(&str, &str)]) -> Selection {
        let mut sel = Selection::new();
        for (id, amount) in picks {
            sel.set_checked(id, true);
            sel.set_amount(id, amount);
        }
        sel
    }

    fn exact_selection(recipe: &Recipe) -> Selection {
        let mut sel = Selection::new();
        for ing in &recipe.ingredients {
            sel.set_checked(&ing.ingredient_id, true);
            sel.set_amount(&ing.ingredient_id, &ing.amount.to_string());
        }
        sel
    }

    #[test]
    fn test_easy_exact_pick_is_perfect() {
        for recipe in [margarita(), mojito()] {
            let ids: Vec<&str> = recipe.ingredient_ids().collect();
            let verdict = grade_easy(&recipe, ids);
            assert!(verdict.is_perfect, "{} should be perfect", recipe.name);
            assert_eq!(verdict.correct, recipe.ingredients);
            assert!(verdict.missing.is_empty());
            assert!(verdict.extra.is_empty());
        }
    }

    #[test]
    fn test_easy_exact_pick_in_any_order_is_perfect() {
        let verdict = grade_easy(&margarita(), ["triple_sec", "tequila", "lime_juice"]);
        assert!(verdict.is_perfect);
        // Still reported in recipe order
        assert_eq!(verdict.correct_ids(), vec!["tequila", "lime_juice", "triple_sec"]);
    }

    #[test]
    fn test_easy_missing_one() {
        let verdict = grade_easy(&margarita(), ["tequila", "lime_juice"]);
        assert_eq!(verdict.correct_ids(), vec!["tequila", "lime_juice"]);
        assert_eq!(verdict.missing_ids(), vec!["triple_sec"]);
        assert!(verdict.extra.is_empty());
        assert!(verdict.wrong_amounts.is_empty());
        assert!(!verdict.is_perfect);
        assert_eq!(verdict.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_easy_extras_reported_in_pick_order() {
        let recipe = margarita();
        let verdict = grade_easy(
            &recipe,
            ["salt", "tequila", "lime_juice", "triple_sec", "agave_syrup", "salt"],
        );
        assert_eq!(verdict.extra, vec!["salt", "agave_syrup"]);
        assert!(verdict.missing.is_empty());
        assert_eq!(verdict.correct.len(), 3);
        assert!(!verdict.is_perfect);
    }

    #[test]
    fn test_easy_nothing_selected() {
        let verdict = grade_easy(&margarita(), Vec::<String>::new());
        assert!(verdict.correct.is_empty());
        assert_eq!(verdict.missing.len(), 3);
        assert!(!verdict.is_perfect);
    }

    #[test]
    fn test_easy_empty_recipe() {
        let empty = Recipe {
            name: "Nothing".to_string(),
            ingredients: Vec::new(),
        };
        assert!(grade_easy(&empty, Vec::<String>::new()).is_perfect);
        assert!(!grade_easy(&empty, ["gin"]).is_perfect);
    }

    #[test]
    fn test_hard_exact_amounts_are_perfect() {
        for recipe in [margarita(), mojito()] {
            let verdict = grade_hard(&recipe, &exact_selection(&recipe));
            assert!(verdict.is_perfect, "{} should be perfect", recipe.name);
            assert_eq!(verdict.correct, recipe.ingredients);
        }
    }

    #[test]
    fn test_hard_margarita_perfect() {
        let sel = hard_selection(&[("tequila", "2"), ("lime_juice", "1"), ("triple_sec", "0.5")]);
        let verdict = grade_hard(&margarita(), &sel);
        assert_eq!(verdict.correct_ids(), vec!["tequila", "lime_juice", "triple_sec"]);
        assert!(verdict.is_perfect);
        assert_eq!(verdict.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_hard_wrong_amount_and_missing() {
        let sel = hard_selection(&[("tequila", "1.75"), ("lime_juice", "1")]);
        let verdict = grade_hard(&margarita(), &sel);

        assert_eq!(verdict.correct_ids(), vec!["lime_juice"]);
        assert_eq!(
            verdict.wrong_amounts,
            vec![WrongAmount {
                ingredient_id: "tequila".to_string(),
                user_amount: UserAmount::Number(1.75),
                recipe_amount: 2.0,
                unit: "oz".to_string(),
            }]
        );
        assert_eq!(verdict.missing, vec![ri("triple_sec", 0.5, "oz")]);
        assert!(verdict.extra.is_empty());
        assert!(!verdict.is_perfect);
    }

    #[test]
    fn test_hard_blank_amount_is_wrong_not_missing() {
        let sel = hard_selection(&[("tequila", ""), ("lime_juice", "1"), ("triple_sec", "0.5")]);
        let verdict = grade_hard(&margarita(), &sel);
        assert!(verdict.missing.is_empty());
        assert_eq!(verdict.wrong_amounts.len(), 1);
        assert_eq!(verdict.wrong_amounts[0].user_amount, UserAmount::Raw(NO_AMOUNT.to_string()));
        assert!(!verdict.is_perfect);
    }

    #[test]
    fn test_hard_unparseable_amount_keeps_raw_text() {
        let sel = hard_selection(&[
            ("tequila", "  a splash "),
            ("lime_juice", "1"),
            ("triple_sec", "0.5"),
        ]);
        let verdict = grade_hard(&margarita(), &sel);
        assert_eq!(verdict.wrong_amounts[0].user_amount, UserAmount::Raw("a splash".to_string()));
        assert_eq!(verdict.wrong_amounts[0].recipe_amount, 2.0);
    }

    #[test]
    fn test_hard_whitespace_around_amount_is_ignored() {
        let sel = hard_selection(&[
            ("tequila", " 2 "),
            ("lime_juice", "1.0"),
            ("triple_sec", ".5"),
        ]);
        assert!(grade_hard(&margarita(), &sel).is_perfect);
    }

    #[test]
    fn test_hard_tolerance_boundary() {
        let close = hard_selection(&[
            ("tequila", "2.0000005"),
            ("lime_juice", "1"),
            ("triple_sec", "0.5"),
        ]);
        assert!(grade_hard(&margarita(), &close).is_perfect);

        let off = hard_selection(&[
            ("tequila", "2.000001"),
            ("lime_juice", "1"),
            ("triple_sec", "0.5"),
        ]);
        let verdict = grade_hard(&margarita(), &off);
        assert!(!verdict.is_perfect);
        assert_eq!(verdict.wrong_amounts[0].ingredient_id, "tequila");
    }

    #[test]
    fn test_hard_extra_ignores_amount() {
        let sel = hard_selection(&[
            ("tequila", "2"),
            ("salt", ""),
            ("lime_juice", "1"),
            ("triple_sec", "0.5"),
            ("orange_juice", "3"),
        ]);
        let verdict = grade_hard(&margarita(), &sel);
        assert_eq!(verdict.correct.len(), 3);
        assert_eq!(verdict.extra, vec!["salt", "orange_juice"]);
        assert!(!verdict.is_perfect);
    }

    #[test]
    fn test_hard_unchecked_entries_are_ignored() {
        let mut sel = hard_selection(&[
            ("tequila", "2"),
            ("lime_juice", "1"),
            ("triple_sec", "0.5"),
            ("salt", "1"),
        ]);
        sel.set_checked("salt", false);
        sel.set_checked("triple_sec", false);
        let verdict = grade_hard(&margarita(), &sel);
        assert!(verdict.extra.is_empty());
        assert_eq!(verdict.missing_ids(), vec!["triple_sec"]);
    }
}
