//! Terminal Pokedex catalog viewer: fetch the list once, filter it live
//! by substring, open stat detail in a modal, export it to PDF.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod export;
pub mod reducer;
pub mod state;
pub mod ui;
