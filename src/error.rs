use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("I/O error for config file '{0}': {1}")]
    ConfigRead(String, #[source] std::io::Error),

    #[error("Failed to parse JSON from '{0}': {1}")]
    ConfigParse(String, #[source] serde_json::Error),

    #[error("Configs not loaded yet.")]
    NotReady,

    #[error("No recipes found.")]
    NoRecipes,

    #[error("No cocktail selected. Click \"New Cocktail\" first.")]
    NoActiveRecipe,

    #[error("Ingredient '{0}' is not on the bar for this round")]
    IngredientNotOffered(String),

    #[error("Amounts are only used in Hard mode")]
    AmountsDisabled,

    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),
}

impl QuizError {
    /// True for failures that happen while loading the two catalog documents.
    pub fn is_config_load(&self) -> bool {
        matches!(self, QuizError::ConfigRead(..) | QuizError::ConfigParse(..))
    }
}
