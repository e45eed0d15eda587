//! Desktop front end (egui).

pub mod app;
pub mod spacing;
pub mod typography;
pub mod views;
