//! Table orchestration facing the (external) view layer.
//!
//! # Responsibility
//! - Own the active sort and pagination state for one table session.
//! - Route user actions into repository mutations and view engines.
//!
//! # Invariants
//! - The rendered view is always recomputed from the live repository
//!   snapshot; no cached rows can go stale.

pub mod controller;
