//! Command-line surface for the repohub server.
//!
//! `main.rs` is the composition root; this library only holds the argument
//! definitions so they can be tested without starting a server.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary target
use anyhow as _;
use dotenvy as _;
use repohub_axum as _;
use tokio as _;
use tracing as _;
use tracing_subscriber as _;

pub mod commands;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;
