use std::collections::HashMap;
use std::fs;

use log::{info, warn};

use crate::error::QuizError;
use crate::models::{Ingredient, IngredientDocument, Recipe};

/// The loaded bar: every ingredient plus every recipe. Read-only after load.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(ingredients: Vec<Ingredient>, recipes: Vec<Recipe>) -> Self {
        let mut index = HashMap::new();
        for (i, ing) in ingredients.iter().enumerate() {
            if index.insert(ing.id.clone(), i).is_some() {
                warn!("Duplicate ingredient id '{}' in catalog; keeping the last one.", ing.id);
            }
        }
        Self {
            ingredients,
            recipes,
            index,
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.index.get(id).map(|&i| &self.ingredients[i])
    }

    /// Ingredient ids in catalog order
    pub fn ingredient_ids(&self) -> Vec<String> {
        self.ingredients.iter().map(|ing| ing.id.clone()).collect()
    }

    /// Display name for an id, or the id itself when it does not resolve
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.ingredient(id)
            .map(|ing| ing.display_name.as_str())
            .unwrap_or(id)
    }

    /// `(recipe name, ingredient id)` pairs that point at nothing in the catalog
    pub fn unresolved_references(&self) -> Vec<(String, String)> {
        self.recipes
            .iter()
            .flat_map(|r| {
                r.ingredient_ids()
                    .filter(|id| !self.index.contains_key(*id))
                    .map(|id| (r.name.clone(), id.to_string()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

fn build_catalog(doc: IngredientDocument, recipes: Vec<Recipe>) -> Catalog {
    for recipe in &recipes {
        let ids: Vec<&str> = recipe.ingredient_ids().collect();
        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                warn!("Recipe '{}' lists '{}' more than once.", recipe.name, id);
            }
        }
    }

    let catalog = Catalog::new(doc.ingredients, recipes);
    for (recipe, id) in catalog.unresolved_references() {
        warn!("Recipe '{}' references unknown ingredient '{}'.", recipe, id);
    }
    catalog
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Document {
    Ingredients,
    Recipes,
}

/// Deserialize both documents, tagging a failure with whichever one broke
fn parse_documents<E>(
    ingredients_json: &str,
    recipes_json: &str,
    on_error: impl Fn(Document, serde_json::Error) -> E,
) -> Result<Catalog, E> {
    let doc: IngredientDocument = serde_json::from_str(ingredients_json)
        .map_err(|e| on_error(Document::Ingredients, e))?;
    let recipes: Vec<Recipe> = serde_json::from_str(recipes_json)
        .map_err(|e| on_error(Document::Recipes, e))?;
    Ok(build_catalog(doc, recipes))
}

/// Build a catalog from the two JSON documents
pub fn parse_catalog(
    ingredients_json: &str,
    recipes_json: &str,
) -> Result<Catalog, serde_json::Error> {
    parse_documents(ingredients_json, recipes_json, |_, e| e)
}

fn read_document(path: &str) -> Result<String, QuizError> {
    fs::read_to_string(path).map_err(|e| QuizError::ConfigRead(path.to_string(), e))
}

/// Load `ingredients.json` and `recipes.json` from disk
pub fn load_catalog(ingredients_path: &str, recipes_path: &str) -> Result<Catalog, QuizError> {
    let ingredients_json = read_document(ingredients_path)?;
    let recipes_json = read_document(recipes_path)?;

    let catalog = parse_documents(&ingredients_json, &recipes_json, |which, e| {
        let path = match which {
            Document::Ingredients => ingredients_path,
            Document::Recipes => recipes_path,
        };
        QuizError::ConfigParse(path.to_string(), e)
    })?;
    info!(
        "Loaded {} ingredients and {} recipes.",
        catalog.ingredients().len(),
        catalog.recipes().len()
    );
    Ok(catalog)
}
