//! moneydeck - Terminal-based multi-currency account dashboard
//!
//! This library provides the core functionality for the moneydeck dashboard:
//! a fixed demo dataset of currency accounts and a transaction feed, a
//! single-owner state container with named mutations, and a ratatui TUI
//! with inline editing.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, money, profile)
//! - `seed`: The built-in demo dataset
//! - `state`: The dashboard state container, navigation, and edit parsing
//! - `display`: Table formatting for the non-interactive subcommands
//! - `logging`: File-backed session logging
//! - `tui`: The interactive dashboard
//!
//! All dashboard data lives in memory for the lifetime of a session; only
//! user settings are persisted.

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod seed;
pub mod state;
pub mod tui;

pub use error::{DeckError, DeckResult};
