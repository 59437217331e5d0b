pub mod content;
pub mod tags;
