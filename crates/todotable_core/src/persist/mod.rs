//! Snapshot persistence between the repository and blob storage.
//!
//! # Responsibility
//! - Encode and decode the full task collection as one durable entry.
//! - Keep storage failures from ever blocking startup.
//!
//! # Invariants
//! - Record order survives every save/load round trip.
//! - Loads are fail-open; saves propagate write failures.

pub mod snapshot;
