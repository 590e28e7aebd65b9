pub mod course;
pub mod grade;
pub mod calculator;
pub mod input;
pub mod events;

// Re-exports for convenience
pub use course::*;
pub use grade::*;
pub use calculator::*;
pub use input::*;
pub use events::*;
