//! Main module for typlex library functionality

pub mod highlighting;
pub mod keywords;
pub mod lexing;
pub mod parsing;
pub mod spelling;
pub mod testing;
pub mod token;
