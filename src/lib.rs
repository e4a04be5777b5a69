//! Cocktail recipe quiz.
//!
//! Loads an ingredient catalog and a recipe list, picks cocktails, decides
//! which ingredients are put in front of the player and grades their answer.

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;
