//! # Folio Architecture
//!
//! Folio is a **UI-agnostic book-catalog browser library**. It filters a fixed
//! catalog by title, author and genre, and reveals the matches page by page.
//! The terminal client in `cli/` is one consumer; anything that can implement
//! [`view::View`] is another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, reads stdin         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  API Layer (api.rs)           │ │  Controller (controller)  │
//! │  - One-shot queries           │ │  - UI events → engine     │
//! │  - Returns CmdResult          │ │  - Pushes into a View     │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (commands/, engine, filter, pagination, preview)      │
//! │  - Pure logic over Rust types, no I/O                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dataset Layer (dataset/)                                   │
//! │  - Dataset trait, StaticDataset, JSON and built-in loaders  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` and `controller.rs` inward, code never writes to
//! stdout/stderr and never exits the process. Logging goes through `tracing`;
//! the binary decides where it ends up (see [`logging`]).
//!
//! ## Testing Strategy
//!
//! 1. **Core** (`engine.rs`, `filter.rs`, `pagination.rs`, `commands/*.rs`):
//!    thorough unit tests of the filtering and paging rules.
//! 2. **Controller**: drives [`controller::Browser`] against the in-memory
//!    [`view::ViewState`] and checks every region it touches.
//! 3. **CLI**: argument parsing, rendering of given results, and end-to-end
//!    runs of the binary in `tests/`.
//!
//! Test data comes from `dataset::memory::fixtures`, available under
//! `cfg(test)` or the `test_utils` feature.
//!
//! ## Module Overview
//!
//! - [`api`]: facade for one-shot queries
//! - [`commands`]: logic behind each query
//! - [`controller`]: event handling for interactive browsing
//! - [`engine`]: filtered set plus page cursor
//! - [`filter`]: search criteria and matching
//! - [`pagination`]: page size and window arithmetic
//! - [`preview`]: list entries and detail records
//! - [`view`]: the UI regions a client must provide
//! - [`dataset`]: catalog storage and loading
//! - [`model`]: book records and ids
//! - [`theme`]: color themes and system scheme detection
//! - [`config`]: `config.json` loading
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: error types
//! - `cli`: argument parsing, templated rendering and the line-oriented browser (binary only)

pub mod api;
pub mod commands;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod filter;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod preview;
pub mod theme;
pub mod view;
