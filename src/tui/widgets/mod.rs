//! Reusable TUI widgets

pub mod editor;

pub use editor::LineEditor;
