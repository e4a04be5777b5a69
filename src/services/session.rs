use log::{info, warn};
use rand::Rng;

use crate::error::QuizError;
use crate::models::{Difficulty, PoolMode, Recipe, Selection, Verdict};
use crate::services::catalog::Catalog;
use crate::services::grader::{grade_easy, grade_hard};
use crate::services::pool::{compute_visible_ids, is_visible, VisibleIds};

/// State for the cocktail currently being made
#[derive(Debug, Clone)]
pub struct Round {
    pub recipe: Recipe,
    pub visible: VisibleIds,
    pub selection: Selection,
}

/// Everything a quiz host needs between events: the loaded catalog, the
/// active modes and the round in progress.
#[derive(Debug, Default)]
pub struct Session {
    catalog: Option<Catalog>,
    difficulty: Difficulty,
    pool_mode: PoolMode,
    round: Option<Round>,
}

impl Session {
    pub fn new(difficulty: Difficulty, pool_mode: PoolMode) -> Self {
        Self {
            catalog: None,
            difficulty,
            pool_mode,
            round: None,
        }
    }

    /// Record the outcome of loading the catalog documents and return the
    /// status line to show. A failed load leaves the session not ready.
    pub fn install(&mut self, loaded: Result<Catalog, QuizError>) -> String {
        match loaded {
            Ok(catalog) => {
                self.catalog = Some(catalog);
                self.round = None;
                "Configs loaded. Choose a mode and click \"New Cocktail\" to begin.".to_string()
            }
            Err(e) => {
                warn!("Error loading configs: {}", e);
                "Error loading configuration files. Make sure they exist and are valid JSON."
                    .to_string()
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn pool_mode(&self) -> PoolMode {
        self.pool_mode
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Pick a cocktail uniformly at random and start a fresh round
    pub fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Round, QuizError> {
        let catalog = self.catalog.as_ref().ok_or(QuizError::NotReady)?;
        if catalog.recipes().is_empty() {
            return Err(QuizError::NoRecipes);
        }

        let index = rng.gen_range(0..catalog.recipes().len());
        let recipe = catalog.recipes()[index].clone();
        let visible = compute_visible_ids(&recipe, self.pool_mode, &catalog.ingredient_ids(), rng);
        info!(
            "New round: {} ({} mode, {} pool)",
            recipe.name, self.difficulty, self.pool_mode
        );

        Ok(&*self.round.insert(Round {
            recipe,
            visible,
            selection: Selection::new(),
        }))
    }

    /// Status line prompting the player for the current round
    pub fn prompt(&self) -> String {
        let suffix = match self.difficulty {
            Difficulty::Easy => ".",
            Difficulty::Hard => " and their amounts.",
        };
        format!("Select the ingredients you think belong in this cocktail{}", suffix)
    }

    /// The active round, provided `id` is a catalog ingredient on this
    /// round's bar. A full-bar round offers exactly the catalog.
    fn round_offering(&mut self, id: &str) -> Result<&mut Round, QuizError> {
        let round = self.round.as_mut().ok_or(QuizError::NoActiveRecipe)?;
        let on_bar = self
            .catalog
            .as_ref()
            .map_or(false, |catalog| catalog.ingredient(id).is_some());
        if !on_bar || !is_visible(&round.visible, id) {
            return Err(QuizError::IngredientNotOffered(id.to_string()));
        }
        Ok(round)
    }

    /// Tick or untick an ingredient
    pub fn select(&mut self, id: &str, checked: bool) -> Result<(), QuizError> {
        self.round_offering(id)?.selection.set_checked(id, checked);
        Ok(())
    }

    /// Type an amount for an ingredient (Hard mode only). Ticks it as well.
    pub fn set_amount(&mut self, id: &str, text: &str) -> Result<(), QuizError> {
        if self.difficulty == Difficulty::Easy {
            return Err(QuizError::AmountsDisabled);
        }
        let round = self.round_offering(id)?;
        round.selection.set_checked(id, true);
        round.selection.set_amount(id, text);
        Ok(())
    }

    /// Switch between Easy and Hard. The current cocktail is kept; going to
    /// Easy drops any amounts typed so far.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> String {
        if difficulty != self.difficulty {
            self.difficulty = difficulty;
            if difficulty == Difficulty::Easy {
                if let Some(round) = self.round.as_mut() {
                    round.selection.clear_amounts();
                }
            }
        }

        let mode = self.difficulty;
        match &self.round {
            Some(round) => format!(
                "Mode changed to {}. Current cocktail: {}.",
                mode, round.recipe.name
            ),
            None => format!("Mode changed to {}. Click \"New Cocktail\" to start.", mode),
        }
    }

    /// Switch the ingredient pool. Applies from the next round on.
    pub fn set_pool_mode(&mut self, pool_mode: PoolMode) -> String {
        self.pool_mode = pool_mode;
        format!("Pool set to {}. It applies from the next cocktail.", pool_mode)
    }

    /// Grade the current round with the grader matching the active mode
    pub fn check(&self) -> Result<Verdict, QuizError> {
        let round = self.round.as_ref().ok_or(QuizError::NoActiveRecipe)?;
        let verdict = match self.difficulty {
            Difficulty::Easy => grade_easy(&round.recipe, round.selection.checked_ids()),
            Difficulty::Hard => grade_hard(&round.recipe, &round.selection),
        };
        Ok(verdict)
    }
}
