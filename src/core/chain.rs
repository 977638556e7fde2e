//! Severity-routed handler chain
//!
//! A chain is an ordered list of links, outermost first. Each link accepts
//! exactly one [`Severity`] and forwards everything else to the next link.
//! Routing walks the list once; the first accepting link emits the message
//! and no later link is consulted. Falling off the end is an error.

use super::{
    error::{ChainError, Result},
    message::LogMessage,
    metrics::ChainMetrics,
    severity::Severity,
};
use serde::{Deserialize, Serialize};

/// One link in the chain, bound to a single severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerLink {
    severity: Severity,
}

impl HandlerLink {
    pub const fn new(severity: Severity) -> Self {
        Self { severity }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn accepts(&self, message: &LogMessage<'_>) -> bool {
        message.classify() == self.severity
    }
}

/// Result of a successful routing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub severity: Severity,
    /// Position of the accepting link, 0 being the outermost
    pub link_index: usize,
    /// Text returned by the message's emit
    pub text: String,
}

impl Delivery {
    /// Number of links that forwarded the message before it was accepted
    pub fn forwards(&self) -> usize {
        self.link_index
    }
}

#[derive(Debug, Default)]
pub struct HandlerChain {
    links: Vec<HandlerLink>,
    metrics: ChainMetrics,
}

impl HandlerChain {
    /// The chain used by the demo driver: UnknownMessage, FatalError, Error,
    /// Warning. Warnings forward three times before they are accepted.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_links(vec![
            HandlerLink::new(Severity::UnknownMessage),
            HandlerLink::new(Severity::FatalError),
            HandlerLink::new(Severity::Error),
            HandlerLink::new(Severity::Warning),
        ])
    }

    /// Create a builder for HandlerChain
    ///
    /// # Example
    /// ```
    /// use severity_chain::prelude::*;
    ///
    /// let chain = HandlerChain::builder()
    ///     .link(Severity::Error)
    ///     .link(Severity::Warning)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(chain.missing(), vec![Severity::FatalError, Severity::UnknownMessage]);
    /// ```
    #[must_use]
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    fn from_links(links: Vec<HandlerLink>) -> Self {
        Self {
            links,
            metrics: ChainMetrics::new(),
        }
    }

    /// Route `message` to the link that accepts its severity.
    ///
    /// Errors raised by the message's emit are returned as-is; the message
    /// still counts as handled by that link. When no link accepts it, the
    /// result is [`ChainError::Unhandled`] and no sink is written.
    pub fn receive(&self, message: &LogMessage<'_>) -> Result<Delivery> {
        self.metrics.record_routed();

        let Some(link_index) = self.links.iter().position(|link| link.accepts(message)) else {
            self.metrics.record_forwards(self.links.len().saturating_sub(1) as u64);
            self.metrics.record_unhandled();
            return Err(ChainError::unhandled(message.classify()));
        };

        self.metrics.record_forwards(link_index as u64);
        match message.emit() {
            Ok(text) => {
                self.metrics.record_handled();
                Ok(Delivery {
                    severity: self.links[link_index].severity(),
                    link_index,
                    text,
                })
            }
            Err(e) => {
                if e.is_fatal() {
                    self.metrics.record_fatal();
                } else {
                    self.metrics.record_sink_failure();
                }
                Err(e)
            }
        }
    }

    pub fn links(&self) -> &[HandlerLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn covers(&self, severity: Severity) -> bool {
        self.links.iter().any(|link| link.severity == severity)
    }

    /// Severities no link accepts, in declaration order
    pub fn missing(&self) -> Vec<Severity> {
        Severity::ALL
            .into_iter()
            .filter(|severity| !self.covers(*severity))
            .collect()
    }

    pub fn metrics(&self) -> &ChainMetrics {
        &self.metrics
    }
}

/// Builder for constructing a HandlerChain, outermost link first
pub struct ChainBuilder {
    links: Vec<HandlerLink>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Append a link after the ones added so far
    #[must_use = "builder methods return a new value"]
    pub fn link(mut self, severity: Severity) -> Self {
        self.links.push(HandlerLink::new(severity));
        self
    }

    /// Build the chain, rejecting severities bound to more than one link
    pub fn build(self) -> Result<HandlerChain> {
        for (idx, link) in self.links.iter().enumerate() {
            if self.links[..idx].contains(link) {
                return Err(ChainError::duplicate_link(link.severity));
            }
        }
        Ok(HandlerChain::from_links(self.links))
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::ConsoleSink;

    #[test]
    fn test_standard_order() {
        let chain = HandlerChain::standard();
        let order: Vec<Severity> = chain.links().iter().map(HandlerLink::severity).collect();
        assert_eq!(
            order,
            vec![
                Severity::UnknownMessage,
                Severity::FatalError,
                Severity::Error,
                Severity::Warning,
            ]
        );
        assert!(chain.missing().is_empty());
    }

    #[test]
    fn test_warning_forwards_three_times() {
        let chain = HandlerChain::standard();
        let sink = ConsoleSink::new(Vec::new());

        let delivery = chain.receive(&LogMessage::warning(&sink)).unwrap();
        assert_eq!(delivery.severity, Severity::Warning);
        assert_eq!(delivery.link_index, 3);
        assert_eq!(delivery.forwards(), 3);
        assert_eq!(delivery.text, "warning");
        assert_eq!(chain.metrics().forwards(), 3);
    }

    #[test]
    fn test_error_is_accepted_by_error_link() {
        let chain = HandlerChain::standard();
        let sink = ConsoleSink::new(Vec::new());

        let delivery = chain.receive(&LogMessage::error(&sink)).unwrap();
        assert_eq!(delivery.link_index, 2);
        assert_eq!(delivery.text, "Error");
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "Error\n");
    }

    #[test]
    fn test_fatal_message_fails_after_being_accepted() {
        let chain = HandlerChain::standard();

        let err = chain.receive(&LogMessage::fatal()).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "FatalError!");
        assert_eq!(chain.metrics().fatal(), 1);
        assert_eq!(chain.metrics().sink_failures(), 0);
        assert_eq!(chain.metrics().forwards(), 1);
        assert_eq!(chain.metrics().unhandled(), 0);
    }

    #[test]
    fn test_sink_failure_is_not_counted_as_fatal() {
        struct ClosedStream;

        impl std::io::Write for ClosedStream {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let chain = HandlerChain::standard();
        let sink = ConsoleSink::new(ClosedStream);

        let err = chain.receive(&LogMessage::warning(&sink)).unwrap_err();
        assert!(matches!(err, ChainError::Io(_)));
        assert_eq!(chain.metrics().sink_failures(), 1);
        assert_eq!(chain.metrics().fatal(), 0);
        assert_eq!(chain.metrics().handled(), 0);
    }

    #[test]
    fn test_unknown_message_matches_immediately() {
        let chain = HandlerChain::standard();

        let err = chain.receive(&LogMessage::unknown()).unwrap_err();
        assert_eq!(err.to_string(), "UnknownMessage!");
        assert_eq!(chain.metrics().forwards(), 0);
    }

    #[test]
    fn test_incomplete_chain_is_unhandled() {
        let chain = HandlerChain::builder()
            .link(Severity::UnknownMessage)
            .link(Severity::FatalError)
            .build()
            .unwrap();
        let sink = ConsoleSink::new(Vec::new());

        let err = chain.receive(&LogMessage::warning(&sink)).unwrap_err();
        assert!(err.is_unhandled());
        assert!(matches!(err, ChainError::Unhandled { severity: Severity::Warning }));
        assert_eq!(chain.metrics().unhandled(), 1);
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn test_empty_chain_handles_nothing() {
        let chain = HandlerChain::default();
        assert!(chain.is_empty());
        assert_eq!(chain.missing(), Severity::ALL.to_vec());
        assert!(chain.receive(&LogMessage::unknown()).unwrap_err().is_unhandled());
        assert_eq!(chain.metrics().forwards(), 0);
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let err = HandlerChain::builder()
            .link(Severity::Error)
            .link(Severity::Warning)
            .link(Severity::Error)
            .build()
            .unwrap_err();
        assert!(matches!(err, ChainError::DuplicateLink { severity: Severity::Error }));
    }

    #[test]
    fn test_builder_preserves_order() {
        let chain = ChainBuilder::default()
            .link(Severity::Warning)
            .link(Severity::Error)
            .build()
            .unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.links()[0], HandlerLink::new(Severity::Warning));
        assert!(chain.covers(Severity::Error));
        assert!(!chain.covers(Severity::FatalError));
    }
}
