//! Pure view engines: stable sorting and pagination windows.
//!
//! # Responsibility
//! - Turn the repository's insertion-ordered collection into the ordered,
//!   windowed view the table renders.
//!
//! # Invariants
//! - Engines never mutate storage order; they operate on copies.
//! - Both engines are total: every input yields a result, never an error.

pub mod paginate;
pub mod sort;
