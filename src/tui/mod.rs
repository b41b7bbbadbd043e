//! Terminal User Interface module
//!
//! The interactive dashboard, built on ratatui. Three screens (overview,
//! account detail, profile), inline editing of balances, amounts, and
//! profile fields, an add-transaction dialog, and a recovery screen for
//! caught rendering failures.

pub mod app;
pub mod event;
pub mod fallback;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
