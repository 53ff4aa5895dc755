//! Shared models

mod game_record;

pub use game_record::{GameGraphRecord, GameNodeRecord};
