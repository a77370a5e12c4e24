pub mod clues;
pub mod debug;
pub mod guess;
pub mod handlers;
pub mod recents;
pub mod select;
