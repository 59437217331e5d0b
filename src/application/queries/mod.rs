pub mod catalog;
pub mod content;
pub mod tags;
pub mod unified;
