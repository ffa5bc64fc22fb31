// Presentation layer: display copy for the CLI.

pub mod presenter;
