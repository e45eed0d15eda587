//! Domain types for Sketchdeck.
//! Requests, options and the error taxonomy shared by the diagram and deck workflows.

pub mod error;
pub mod request;
pub mod sample;

pub use error::*;
pub use request::*;
pub use sample::SAMPLE_MARKDOWN;
