//! Game state for a small Minesweeper variant: a 4×4 board with lives instead
//! of a single loss, a few temporary "safe click" hints and linear undo.

#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use history::*;
pub use outcome::*;
pub use schedule::*;
pub use session::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod config;
mod error;
mod history;
mod outcome;
mod schedule;
mod session;
mod types;
mod view;
