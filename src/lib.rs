// Domain layer (template contract logic)
pub mod domain;

// Re-export domain modules at the crate root
pub use domain::input;
pub use domain::template;
pub use domain::validation;

// Infrastructure
pub mod config;
pub mod error;
pub mod telemetry;

// Application layer
pub mod runner;
