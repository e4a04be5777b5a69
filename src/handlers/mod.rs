pub mod commands;
pub mod feedback;
