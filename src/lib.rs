//! # Severity Chain
//!
//! Routes log messages by severity through a chain of handler links and
//! writes them through pluggable sinks.
//!
//! ## Features
//!
//! - **Sinks as commands**: console and append-only file sinks behind one `Sink` trait
//! - **Chain of responsibility**: each link accepts exactly one severity and forwards the rest
//! - **Typed failures**: fatal messages and missing links are distinct error variants
//! - **Inspectable routing**: chains are plain data with per-chain metrics

pub mod core;
pub mod scenario;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ChainBuilder, ChainError, ChainMetrics, Delivery, HandlerChain, HandlerLink, LogMessage,
        Result, Severity, Sink,
    };
    pub use crate::scenario::Scenario;
    pub use crate::sinks::{ConsoleSink, FileSink, OpenFailurePolicy};
}

pub use crate::core::{
    ChainBuilder, ChainError, ChainMetrics, Delivery, HandlerChain, HandlerLink, LogMessage,
    Result, Severity, Sink,
};
pub use scenario::{Scenario, DEFAULT_FILE_PATH};
pub use sinks::{ConsoleSink, FileSink, OpenFailurePolicy};
