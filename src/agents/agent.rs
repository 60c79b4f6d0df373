//! Agent - a named specialist with a private contribution history
//!
//! Information Hiding:
//! - Context windowing applied internally before the strategy sees anything
//! - Private history mutated only by appending on each contribution
//! - The strategy behind `respond` is invisible to callers

use crate::agents::message::Message;
use crate::agents::strategy::{ResponseRequest, ResponseStrategy, StrategyError};
use std::sync::Arc;

/// A discussion participant. Created once at team-assembly time and kept for
/// the life of the process; the only mutation is appending to its own
/// history on each contribution.
pub struct Agent {
    name: String,
    specialization: String,
    expertise: Vec<String>,
    history: Vec<Message>,
    strategy: Arc<dyn ResponseStrategy>,
    context_window: usize,
}

impl Agent {
    pub(crate) fn from_parts(
        name: String,
        specialization: String,
        expertise: Vec<String>,
        strategy: Arc<dyn ResponseStrategy>,
        context_window: usize,
    ) -> Self {
        Self {
            name,
            specialization,
            expertise,
            history: Vec::new(),
            strategy,
            context_window,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn expertise(&self) -> &[String] {
        &self.expertise
    }

    /// Messages this agent has authored, oldest first. Distinct from the
    /// coordinator's global log.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Produce response text for a topic given the discussion so far.
    ///
    /// `context` is the full ordered message sequence of the current
    /// discussion; only the trailing `context_window` messages are handed to
    /// the strategy. A window of 0 means no prior turns are considered.
    /// No side effects.
    pub async fn generate_response(
        &self,
        topic: &str,
        context: &[Message],
    ) -> Result<String, StrategyError> {
        let window_start = context.len().saturating_sub(self.context_window);
        let request = ResponseRequest {
            agent_name: &self.name,
            specialization: &self.specialization,
            expertise: &self.expertise,
            topic,
            recent: &context[window_start..],
        };

        tracing::debug!(agent = %self.name, "prompt:\n{}", request.render_prompt());

        self.strategy.respond(&request).await
    }

    /// Make one contribution: generate a response, stamp it with the current
    /// time and this agent's name, and append it to the private history.
    pub async fn contribute(
        &mut self,
        topic: &str,
        context: &[Message],
    ) -> Result<Message, StrategyError> {
        let response = self.generate_response(topic, context).await?;
        let message = Message::new(&self.name, response, topic);
        self.history.push(message.clone());
        Ok(message)
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("specialization", &self.specialization)
            .field("expertise", &self.expertise)
            .field("history_len", &self.history.len())
            .field("context_window", &self.context_window)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::builder::AgentBuilder;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the context length seen on each call.
    struct WindowProbe {
        seen: Mutex<Vec<usize>>,
    }

    #[async_trait]
    impl ResponseStrategy for WindowProbe {
        async fn respond(&self, request: &ResponseRequest<'_>) -> Result<String, StrategyError> {
            self.seen.lock().unwrap().push(request.recent.len());
            Ok("probed".to_string())
        }
    }

    fn context_of(len: usize) -> Vec<Message> {
        (0..len)
            .map(|i| Message::new("Dr. Prior", format!("msg {i}"), "t"))
            .collect()
    }

    #[tokio::test]
    async fn test_contribute_appends_to_history() {
        let mut agent = AgentBuilder::new("Dr. Test")
            .specialization("Genetics")
            .build();

        let message = agent.contribute("gene therapy", &[]).await.unwrap();
        assert_eq!(message.agent_name, "Dr. Test");
        assert_eq!(message.topic, "gene therapy");
        assert_eq!(agent.history().len(), 1);
        assert_eq!(agent.history()[0].content, message.content);
    }

    #[tokio::test]
    async fn test_context_truncated_to_window() {
        let probe = Arc::new(WindowProbe {
            seen: Mutex::new(Vec::new()),
        });
        let agent = AgentBuilder::new("Dr. Test")
            .strategy(probe.clone() as Arc<dyn ResponseStrategy>)
            .context_window(3)
            .build();

        agent.generate_response("t", &context_of(10)).await.unwrap();
        agent.generate_response("t", &context_of(2)).await.unwrap();
        agent.generate_response("t", &[]).await.unwrap();

        assert_eq!(*probe.seen.lock().unwrap(), vec![3, 2, 0]);
    }

    #[tokio::test]
    async fn test_zero_window_sees_no_prior_turns() {
        let probe = Arc::new(WindowProbe {
            seen: Mutex::new(Vec::new()),
        });
        let agent = AgentBuilder::new("Dr. Test")
            .strategy(probe.clone() as Arc<dyn ResponseStrategy>)
            .context_window(0)
            .build();

        agent.generate_response("t", &context_of(4)).await.unwrap();
        assert_eq!(*probe.seen.lock().unwrap(), vec![0]);
    }

    #[tokio::test]
    async fn test_generate_response_has_no_side_effects() {
        let agent = AgentBuilder::new("Dr. Test")
            .specialization("Genetics")
            .build();

        agent.generate_response("t", &[]).await.unwrap();
        assert!(agent.history().is_empty());
    }
}
