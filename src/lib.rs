//! To-do list library: the list store and its terminal Display Surface

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
