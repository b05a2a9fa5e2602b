// src/render/mod.rs
//! Presentation of the form and of analysis results. No business logic here.

pub mod html;
pub mod terminal;

pub use html::{render_page, render_results, PageView};
pub use terminal::TerminalRenderer;
