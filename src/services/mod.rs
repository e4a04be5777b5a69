pub mod catalog;
pub mod grader;
pub mod pool;
pub mod session;
