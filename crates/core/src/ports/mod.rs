pub mod observer;

// Re-exports
pub use observer::*;
