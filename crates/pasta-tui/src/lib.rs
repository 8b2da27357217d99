// Library root: re-exports the front-end modules so integration tests can
// reach them.

pub mod cli;
pub mod display;
pub mod print;
pub mod tui;
