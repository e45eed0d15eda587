//! Main application state and UI logic for Sketchdeck.
//!
//! This module contains the egui application state, worker message plumbing, and the root
//! `eframe::App` implementation.

mod messages;
mod overlay;
mod polling;
mod root;
pub(crate) mod state;
mod store;
mod update;

pub use messages::{DeckMsg, DiagramMsg};
pub use root::SketchdeckApp;

pub(crate) use store::{
    Action, AsyncAction, DeckAction, DiagramAction, NavigationAction, NoticeAction,
};
