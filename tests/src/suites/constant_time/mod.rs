//! Timing comparison of an operation run on two input classes

pub mod tester;

pub use config::TestConfig;
pub use tester::{summarize, TimingAnalysis, TimingTester};
