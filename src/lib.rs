//! Core library for the `barrage` CLI.
//!
//! This crate provides the internal building blocks used by the binary:
//! CLI argument types, target-list handling, the paced attack engine and
//! its per-rate orchestrator, metrics aggregation, and report rendering.
//! The primary user-facing interface is the `barrage` command-line
//! application; library APIs may evolve as the CLI grows.
pub mod args;
pub mod attack;
pub mod error;
pub mod metrics;
pub mod output;
pub mod report;
pub mod targets;
