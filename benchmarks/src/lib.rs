//! Sample idiom-comparison suites for the `idiobench` harness.
//!
//! Each suite pits a handful of equivalent implementation idioms against
//! each other. The suites are disposable example workloads; swapping them
//! out does not touch the harness.

pub mod suites;
