//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todotable_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("todotable_core ping={}", todotable_core::ping());
    println!("todotable_core version={}", todotable_core::core_version());
}
