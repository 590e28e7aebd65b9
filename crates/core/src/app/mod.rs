pub mod commands;
pub mod queries;
pub mod session;

// Re-exports
pub use commands::*;
pub use queries::*;
pub use session::*;
