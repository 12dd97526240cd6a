//! Catalog domain module
//!
//! The catalog is toolgate's **progressive discovery layer**: instead of
//! handing an agent every tool definition up front, all actions from all
//! loaded sources are folded into one [`ActionIndex`] that the agent
//! queries on demand.
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────────────────┐
//! │ SourceConfig │──┐  │ ActionIndex                   │
//! └──────────────┘  │  │  entries:   Vec<CatalogEntry> │──▶ search()
//! ┌──────────────┐  ├─▶│  actions:   name → Resolved   │──▶ get()
//! │ SourceConfig │──┘  │  summaries: Vec<SourceSummary>│──▶ summarize()
//! └──────────────┘     └───────────────────────────────┘
//! ```
//!
//! The index is built exactly once at startup and never mutated afterwards:
//! every query borrows from the same immutable aggregate, so no locking is
//! needed for concurrent reads.
//!
//! # Key Types
//!
//! - [`CatalogEntry`] — the searchable, discovery-facing view of one action
//! - [`SourceSummary`] — per-source rollup (name, description, action count)
//! - [`ActionIndex`] — the aggregate: entries + exact-name lookup + summaries

pub mod entities;
pub mod index;

pub use entities::{CatalogEntry, SourceSummary};
pub use index::ActionIndex;
