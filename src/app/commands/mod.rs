pub mod catalog;
pub mod collect;
pub mod generate;
pub mod outcome;
pub mod render;
