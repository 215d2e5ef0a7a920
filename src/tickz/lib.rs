//! # Tickz Architecture
//!
//! Tickz is a **UI-agnostic to-do library**: a Collection of Lists, each List
//! holding Items, with the state management, view derivation and controller
//! wiring needed to mount the data into any host. The bundled CLI is just one
//! such host—the library never assumes a terminal.
//!
//! ## The Store / View / Component Split
//!
//! Three parallel component variants share one architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (cli/, or any UI toolkit)                             │
//! │  - Mounts views, raises intents, owns all presentation      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Component Layer (component/)                               │
//! │  - Mediates between store notifications and host mounts     │
//! │  - Validates input, runs the settle-delay and confirmation  │
//! │    state machines                                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (view/)                                         │
//! │  - Pure functions: snapshot + filter -> view value          │
//! │  - Full-replace: every call rebuilds the view from scratch  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Stores (collection.rs, list.rs) over StorageBackend        │
//! │  - Canonical in-memory Collection, mutate-persist-notify    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The three variants: [`collection::CollectionStore`] manages the Lists
//! themselves, [`list::ListStore`] manages one List's Items, and the preview
//! (`component::preview_list`) is store + view only, with no mutation path.
//!
//! ## Full-Replace Rendering
//!
//! Views are plain values rebuilt from scratch on every render. The host
//! throws away whatever it mounted before and mounts the new value; input
//! bindings attach to the freshly produced row descriptors. Lists are small
//! and renders are user-triggered, so rebuilding beats incremental diffing
//! on simplicity without a measurable cost.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the component layer inward, code takes regular Rust arguments,
//! returns regular Rust types, never touches stdout/stderr and never assumes
//! a terminal. Persistence goes through the [`store::StorageBackend`] trait
//! so tests substitute an in-memory backend.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Collection`, `TodoList`, `Item`)
//! - [`store`]: Storage abstraction and backends
//! - [`collection`]: The Collection-of-Lists store
//! - [`list`]: The single List-of-Items store
//! - [`view`]: Pure view derivation (filters, summaries, row descriptors)
//! - [`component`]: Mediators, the settle-delay queue, the `ViewHost` seam
//! - [`error`]: Error types

pub mod collection;
pub mod component;
pub mod error;
pub mod list;
pub mod model;
pub mod store;
pub mod view;
