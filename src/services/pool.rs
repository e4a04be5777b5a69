use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{PoolMode, Recipe};

/// How many non-recipe ingredients a training pool adds
pub const DISTRACTOR_COUNT: usize = 5;

/// Ingredient ids the player gets to see this round.
/// `None` means the whole bar is shown.
pub type VisibleIds = Option<HashSet<String>>;

/// Work out which ingredients are offered for `recipe`.
///
/// In training mode the pool is the recipe's own ingredients plus up to
/// [`DISTRACTOR_COUNT`] other ingredients sampled uniformly without
/// replacement from `all_ids`.
pub fn compute_visible_ids<R: Rng + ?Sized>(
    recipe: &Recipe,
    mode: PoolMode,
    all_ids: &[String],
    rng: &mut R,
) -> VisibleIds {
    match mode {
        PoolMode::Full => None,
        PoolMode::Training => Some(training_pool(recipe, all_ids, rng)),
    }
}

fn training_pool<R: Rng + ?Sized>(
    recipe: &Recipe,
    all_ids: &[String],
    rng: &mut R,
) -> HashSet<String> {
    let mut visible: HashSet<String> = recipe.ingredient_ids().map(str::to_string).collect();

    let mut candidates: Vec<&String> = Vec::new();
    let mut seen = HashSet::new();
    for id in all_ids {
        if !visible.contains(id) && seen.insert(id.as_str()) {
            candidates.push(id);
        }
    }

    // Partial Fisher-Yates: only the first `take` slots get shuffled
    let take = DISTRACTOR_COUNT.min(candidates.len());
    let (distractors, _) = candidates.partial_shuffle(rng, take);

    debug!(
        "Training pool for {}: {} recipe ingredients + {} distractors out of {} candidates",
        recipe.name,
        visible.len(),
        distractors.len(),
        seen.len()
    );

    visible.extend(distractors.iter().map(|id| (*id).clone()));
    visible
}

/// True when `id` should be shown given a round's pool
pub fn is_visible(visible: &VisibleIds, id: &str) -> bool {
    match visible {
        None => true,
        Some(ids) => ids.contains(id),
    }
}
