use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Placeholder recorded when an ingredient is picked in Hard mode with no amount.
pub const NO_AMOUNT: &str = "(no amount)";

/// A bottle, juice or garnish on the bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

/// Wire shape of `ingredients.json`
#[derive(Debug, Default, Deserialize)]
pub struct IngredientDocument {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub ingredient_id: String,
    pub amount: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn ingredient_ids(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|ri| ri.ingredient_id.as_str())
    }

    pub fn find(&self, id: &str) -> Option<&RecipeIngredient> {
        self.ingredients.iter().find(|ri| ri.ingredient_id == id)
    }

    /// Unit shown next to an ingredient while making this recipe
    pub fn unit_hint(&self, id: &str) -> &str {
        self.find(id).map(|ri| ri.unit.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown mode '{}' (expected easy or hard)", other)),
        }
    }
}

/// Which ingredients are put in front of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolMode {
    /// Whole bar, no filtering
    #[default]
    Full,
    /// Recipe ingredients plus a handful of distractors
    Training,
}

impl fmt::Display for PoolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolMode::Full => write!(f, "Full bar"),
            PoolMode::Training => write!(f, "Training"),
        }
    }
}

impl FromStr for PoolMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(PoolMode::Full),
            "training" => Ok(PoolMode::Training),
            other => Err(format!("unknown pool '{}' (expected full or training)", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionEntry {
    pub checked: bool,
    pub amount_text: String,
}

/// What the player has ticked (and typed) during the current round.
///
/// Keeps pick order so that extra ingredients are reported in the order they
/// were picked. Ticking an ingredient again after unticking it counts as a
/// new pick and moves it to the end.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    entries: Vec<(String, SelectionEntry)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry_mut(&mut self, id: &str) -> &mut SelectionEntry {
        let pos = match self.entries.iter().position(|(k, _)| k == id) {
            Some(pos) => pos,
            None => {
                self.entries.push((id.to_string(), SelectionEntry::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1
    }

    /// Unchecking an ingredient also clears whatever amount was typed for it.
    pub fn set_checked(&mut self, id: &str, checked: bool) {
        if checked {
            if let Some(pos) = self.entries.iter().position(|(k, e)| k == id && !e.checked) {
                let repicked = self.entries.remove(pos);
                self.entries.push(repicked);
            }
        }
        let entry = self.entry_mut(id);
        entry.checked = checked;
        if !checked {
            entry.amount_text.clear();
        }
    }

    pub fn set_amount(&mut self, id: &str, text: &str) {
        self.entry_mut(id).amount_text = text.to_string();
    }

    pub fn get(&self, id: &str) -> Option<&SelectionEntry> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, e)| e)
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.get(id).map(|e| e.checked).unwrap_or(false)
    }

    pub fn checked_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, e)| e.checked)
            .map(|(k, _)| k.clone())
            .collect()
    }

    pub fn checked(&self) -> impl Iterator<Item = (&str, &SelectionEntry)> {
        self.entries
            .iter()
            .filter(|(_, e)| e.checked)
            .map(|(k, e)| (k.as_str(), e))
    }

    pub fn clear_amounts(&mut self) {
        for (_, entry) in &mut self.entries {
            entry.amount_text.clear();
        }
    }
}

/// The amount a player entered, as far as it could be understood
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UserAmount {
    Number(f64),
    Raw(String),
}

impl fmt::Display for UserAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAmount::Number(n) => write!(f, "{}", n),
            UserAmount::Raw(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WrongAmount {
    pub ingredient_id: String,
    pub user_amount: UserAmount,
    pub recipe_amount: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub difficulty: Difficulty,
    pub correct: Vec<RecipeIngredient>,
    pub missing: Vec<RecipeIngredient>,
    pub wrong_amounts: Vec<WrongAmount>,
    pub extra: Vec<String>,
    pub is_perfect: bool,
}

impl Verdict {
    pub fn correct_ids(&self) -> Vec<&str> {
        self.correct.iter().map(|ri| ri.ingredient_id.as_str()).collect()
    }

    pub fn missing_ids(&self) -> Vec<&str> {
        self.missing.iter().map(|ri| ri.ingredient_id.as_str()).collect()
    }
}
