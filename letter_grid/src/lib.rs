// lib.rs - Interactive letter grid
// A 10x10 board of letters flipping between lit and unlit in random spatial patterns

pub mod app;
pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod logging;
pub mod patterns;
pub mod ui;

pub use app::{LetterGridApp, LetterGridInterface};
pub use error::{LetterGridError, Result};
