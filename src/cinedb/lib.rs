//! # Cinedb Architecture
//!
//! Cinedb curates a small relational dataset of cinema-industry people and
//! projects kept as one JSON document, and copies that document to and from a
//! remote bucket on request.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (shell.rs, wired by main.rs)                         │
//! │  - Menu, prompts, inline field validation, rendering        │
//! │  - The ONLY place that reads stdin or writes the dialogue   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning the store and the remote sync         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → normalize/validate → repository add → save        │
//! │  - Returns structured `CmdResult`, never prints             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (slug.rs, model.rs, repository.rs)                    │
//! │  - Slug rules, record types, per-collection uniqueness      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Adapters (store/, sync.rs)                                 │
//! │  - Whole-document JSON persistence, external transfer tool  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Integrity
//!
//! Every ID goes through [`slug::normalize_id`] before [`slug::validate_id`],
//! so stray capitals and spaces are corrected rather than rejected. IDs are
//! unique per collection, never across collections. Project relations
//! (director, casting director, cast) are stored as typed and never checked
//! against the people collections.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Add and sync operations
//! - [`config`]: Layered configuration
//! - [`error`]: Error types
//! - [`model`]: `Dataset`, `Person`, `Project`
//! - [`repository`]: Append-only collections with ID uniqueness
//! - [`shell`]: Interactive menu and prompts
//! - [`slug`]: ID normalization and field validation
//! - [`store`]: Local document persistence
//! - [`sync`]: Remote bucket transfer

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod shell;
pub mod slug;
pub mod store;
pub mod sync;
