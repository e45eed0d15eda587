//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-heavy integrations: the hosted LLM, external
//! CLI tools, image decoding, configuration and the platform file opener.

pub mod app_config;
pub mod converter;
pub mod image;
pub mod llm;
pub mod opener;
pub mod platform;
pub mod process;
pub mod renderer;
pub mod shell;
