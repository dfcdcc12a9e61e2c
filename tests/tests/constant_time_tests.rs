//! Timing comparisons between secret input classes
//!
//! These are sensitive to machine load and run only on request:
//! `cargo test -p ksig-tests --release -- --ignored`

mod constant_time;
