//! # Pawfeed
//!
//! A small terminal screen that toggles between two remote sources, cat
//! facts and dog pictures, shows the latest fetched item and keeps a score
//! of successful fetches per source.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → CatFactService / DogImageService → ScreenController → TUI
//!               (emissions + counters)          (selection, score)
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the TUI
//! pawfeed
//!
//! # Print three cat facts
//! pawfeed cat -n 3
//!
//! # Save a dog picture
//! pawfeed dog -o dog.jpg
//! ```

/// Application context and error types.
///
/// The [`AppContext`](app::AppContext) struct wires together the HTTP
/// fetcher and both services.
pub mod app;

/// Command-line interface using clap.
///
/// - `tui` - Launch the TUI (default)
/// - `cat [-n N]` - Print cat facts
/// - `dog [-o FILE]` - Fetch a dog picture
pub mod cli;

/// Configuration loaded from `~/.config/pawfeed/config.toml`:
/// endpoints, HTTP timeout, colors and keybindings.
pub mod config;

/// Screen logic independent of any terminal: source selection, the
/// "more" and "reset" actions, and the displayed content and score.
pub mod controller;

/// Core domain models.
///
/// - [`Fact`](domain::Fact): text from the cat endpoint
/// - [`DogImageRef`](domain::DogImageRef): image URL from the dog endpoint
/// - [`ImageBytes`](domain::ImageBytes): downloaded image payload
/// - [`Selection`](domain::Selection), [`Score`](domain::Score): screen state
pub mod domain;

/// HTTP GET behind the [`Fetcher`](fetcher::Fetcher) trait, with a
/// reqwest-based [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher).
pub mod fetcher;

/// The two data-source services and their counters.
pub mod service;

/// Terminal user interface built with ratatui.
///
/// Keybindings: Tab switches source, m fetches more, r resets the score,
/// q quits.
pub mod tui;
