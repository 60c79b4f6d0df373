//! Agent Builder - fluent construction of discussion agents
//!
//! Information Hiding:
//! - Strategy selection and Arc wrapping hidden from callers
//! - Sensible defaults derived from the specialization

use crate::agents::agent::Agent;
use crate::agents::simulated;
use crate::agents::strategy::ResponseStrategy;
use crate::config::settings::DEFAULT_MAX_CONTEXT_MESSAGES;
use std::sync::Arc;

/// Builder for discussion agents.
///
/// Unless overridden, the agent gets the canned strategy matching its
/// specialization (or the generic fallback) and the default context window.
///
/// # Example
/// ```
/// use colloquy::AgentBuilder;
///
/// let agent = AgentBuilder::new("Dr. Emma Thompson")
///     .specialization("Veterinary Medicine")
///     .expertise(["oncology", "immunology"])
///     .build();
/// ```
pub struct AgentBuilder {
    name: String,
    specialization: Option<String>,
    expertise: Vec<String>,
    strategy: Option<Arc<dyn ResponseStrategy>>,
    context_window: usize,
}

impl AgentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialization: None,
            expertise: Vec::new(),
            strategy: None,
            context_window: DEFAULT_MAX_CONTEXT_MESSAGES,
        }
    }

    /// Set the specialization. This drives both the default canned strategy
    /// and the grouping of this agent's contributions in summaries.
    pub fn specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }

    /// Set the expertise tags rendered into the prompt.
    pub fn expertise<I, S>(mut self, expertise: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expertise = expertise.into_iter().map(Into::into).collect();
        self
    }

    /// Inject a response strategy, replacing the canned default. Tests use
    /// this to plug in deterministic fakes; a real model backend would be
    /// wired the same way.
    pub fn strategy(mut self, strategy: Arc<dyn ResponseStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Override how many trailing messages the agent considers.
    pub fn context_window(mut self, window: usize) -> Self {
        self.context_window = window;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn build(self) -> Agent {
        let specialization = self
            .specialization
            .unwrap_or_else(|| "General Research".to_string());
        let strategy = self
            .strategy
            .unwrap_or_else(|| simulated::strategy_for(&specialization));

        Agent::from_parts(
            self.name,
            specialization,
            self.expertise,
            strategy,
            self.context_window,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let agent = AgentBuilder::new("Dr. Test")
            .specialization("Genetics")
            .expertise(["genomics", "breeding"])
            .context_window(3)
            .build();

        assert_eq!(agent.name(), "Dr. Test");
        assert_eq!(agent.specialization(), "Genetics");
        assert_eq!(agent.expertise(), ["genomics", "breeding"]);
        assert!(agent.history().is_empty());
    }

    #[test]
    fn test_builder_defaults() {
        let agent = AgentBuilder::new("Dr. Test").build();
        assert_eq!(agent.specialization(), "General Research");
        assert!(agent.expertise().is_empty());
    }

    #[tokio::test]
    async fn test_default_strategy_matches_specialization() {
        let agent = AgentBuilder::new("Dr. Test")
            .specialization("Epidemiology")
            .build();

        let text = agent.generate_response("rabies outbreaks", &[]).await.unwrap();
        assert!(text.contains("epidemiological standpoint"));
    }
}
