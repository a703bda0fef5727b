pub mod cli;
pub mod demo;

// Container crate, re-exported for the binary and tests
pub use arraylist;
