//! Terminal presentation layer: setup, screen routing, widgets.

pub mod terminal;
pub mod ui;
pub mod widgets;
