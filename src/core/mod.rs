//! Core chain types and traits

pub mod chain;
pub mod error;
pub mod message;
pub mod metrics;
pub mod severity;
pub mod sink;

pub use chain::{ChainBuilder, Delivery, HandlerChain, HandlerLink};
pub use error::{ChainError, Result};
pub use message::LogMessage;
pub use metrics::ChainMetrics;
pub use severity::Severity;
pub use sink::Sink;
