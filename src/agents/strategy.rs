//! Response Strategy - the seam where a real generation backend would go
//!
//! Information Hiding:
//! - Strategy implementations hide how text is produced (canned table today,
//!   a model call tomorrow) behind one async trait
//! - Prompt assembly is a pure formatting concern on `ResponseRequest`,
//!   independent of any particular backend

use crate::agents::message::Message;
use async_trait::async_trait;
use thiserror::Error;

/// Errors a response backend may surface. The simulated strategies never
/// fail; a real backend would map timeouts and malformed output here. The
/// coordinator records a sentinel contribution instead of aborting the round
/// loop when a strategy errors.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("response backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("malformed backend output: {0}")]
    MalformedOutput(String),
}

/// Everything a backend needs to form one contribution: the agent's
/// identity, the topic, and the trailing window of the current discussion.
#[derive(Debug)]
pub struct ResponseRequest<'a> {
    pub agent_name: &'a str,
    pub specialization: &'a str,
    pub expertise: &'a [String],
    pub topic: &'a str,
    /// Most recent messages of the current discussion, oldest first,
    /// already truncated to the agent's context window.
    pub recent: &'a [Message],
}

impl ResponseRequest<'_> {
    /// Render the structured instruction a model-backed strategy would be
    /// given. The simulated strategies ignore it, but it is built and logged
    /// on every turn so swapping in a real backend changes nothing upstream.
    pub fn render_prompt(&self) -> String {
        let context: Vec<String> = self
            .recent
            .iter()
            .map(|msg| format!("{}: {}", msg.agent_name, msg.content))
            .collect();

        format!(
            "You are {}, a {} specializing in {}.\n\n\
             Topic: {}\n\n\
             Recent conversation:\n{}\n\n\
             Provide your expert insight on this topic, focusing on potential \
             breakthroughs or important considerations for animal health. \
             Be specific and actionable.",
            self.agent_name,
            self.specialization,
            self.expertise.join(", "),
            self.topic,
            context.join("\n")
        )
    }
}

/// Pluggable response backend, invoked once per agent turn. Implementations
/// must be deterministic-friendly for tests: the canned strategies in
/// [`crate::agents::simulated`] always return the same text for the same
/// specialization and topic.
#[async_trait]
pub trait ResponseStrategy: Send + Sync {
    async fn respond(&self, request: &ResponseRequest<'_>) -> Result<String, StrategyError>;
}
