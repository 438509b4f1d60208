//! # Warehouse Architecture
//!
//! Warehouse is a **UI-agnostic inventory and order library** with a console
//! client. It tracks clients, products, wishlists, invoices and payments in
//! memory and snapshots the whole state to a single file on demand.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Console Layer (cli/, wired by main.rs)                     │
//! │  - Menu loop, typed prompts, table printing                 │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Warehouse state and the snapshot store          │
//! │  - Normalizes inputs (raw strings → typed ids)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per menu action, returns CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (catalog, directory, orders, ids, model)            │
//! │  Storage (store/): SnapshotStore trait                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never writes to stdout or stderr. Diagnostics go
//! through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per group of menu actions
//! - [`catalog`]: Products and stock
//! - [`directory`]: Clients and wishlists
//! - [`orders`]: Order placement, payments, invoices
//! - [`ids`]: Sequential client and product ids
//! - [`warehouse`]: The application state that gets snapshotted
//! - [`store`]: Snapshot persistence
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod ids;
pub mod model;
pub mod orders;
pub mod store;
pub mod warehouse;
