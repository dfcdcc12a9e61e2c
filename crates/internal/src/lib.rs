//! Internal utilities for the ksig library
//!
//! Not part of the public API. Used by the arithmetic and signing crates.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
