pub mod config;
pub mod error;
pub mod leagues;
pub mod seating;
pub mod stats;
// cmd and reports belong to the binary (main.rs); the pipelines they drive
// live here so tests and benches can reach them.
