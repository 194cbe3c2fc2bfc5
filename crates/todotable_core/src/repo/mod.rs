//! Repository layer over the in-memory task collection.
//!
//! # Responsibility
//! - Own the authoritative ordered collection for the running session.
//! - Route every mutation through write-through snapshot persistence.
//!
//! # Invariants
//! - Mutations validate before touching state; rejected mutations leave
//!   both memory and storage untouched.
//! - Repository APIs return semantic errors (`NotFound`, validation) in
//!   addition to persistence transport errors.

pub mod task_repo;
