//! Research Coordinator - round-robin discussion engine and summarizer
//!
//! Information Hiding:
//! - Turn scheduling and context assembly internal to `conduct_discussion`
//! - Global log is append-only; callers only ever see slices
//! - Summary grouping resolves specializations through the roster, hidden
//!   from the message data itself

use crate::agents::agent::Agent;
use crate::agents::message::Message;
use crate::utils::display;

/// Owns the agent roster and the cumulative log of every message produced
/// across all discussions run against this instance.
///
/// Roster insertion order is turn order. The global log accumulates for the
/// life of the coordinator; call [`clear_log`](Self::clear_log) to reset it
/// between sessions.
pub struct ResearchCoordinator {
    agents: Vec<Agent>,
    conversation_log: Vec<Message>,
    summary_content_limit: usize,
}

impl ResearchCoordinator {
    pub fn new() -> Self {
        Self {
            agents: Vec::new(),
            conversation_log: Vec::new(),
            summary_content_limit: crate::config::settings::DEFAULT_MAX_SUMMARY_CONTENT_LENGTH,
        }
    }

    /// Override the per-message content limit used in summary bodies.
    pub fn with_summary_content_limit(mut self, limit: usize) -> Self {
        self.summary_content_limit = limit;
        self
    }

    /// Append an agent to the roster. No uniqueness check; order determines
    /// both turn order and prompt attribution.
    pub fn add_agent(&mut self, agent: Agent) {
        tracing::debug!(agent = %agent.name(), specialization = %agent.specialization(), "added to roster");
        self.agents.push(agent);
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Every message produced across all discussions, in order.
    pub fn conversation_log(&self) -> &[Message] {
        &self.conversation_log
    }

    /// Drop the accumulated global log. Never called implicitly.
    pub fn clear_log(&mut self) {
        self.conversation_log.clear();
    }

    /// Run a multi-round discussion on a topic.
    ///
    /// Exactly `rounds` rounds; within each round every roster agent
    /// contributes once, in roster order. Each turn receives the full
    /// ordered sequence of messages produced so far in this discussion, so
    /// later agents in a round see earlier agents' messages from the same
    /// round. Every message is appended to both the returned discussion
    /// buffer and the global log, and echoed to the console as it is
    /// produced.
    ///
    /// A failing response strategy does not abort the discussion: the turn
    /// is recorded as a sentinel contribution and the loop continues.
    pub async fn conduct_discussion(&mut self, topic: &str, rounds: usize) -> Vec<Message> {
        display::print_discussion_banner(topic);
        tracing::info!(topic, rounds, roster = self.agents.len(), "discussion started");

        let mut discussion_messages: Vec<Message> = Vec::new();

        for round in 0..rounds {
            display::print_round_header(round + 1);

            for idx in 0..self.agents.len() {
                let message = match self.agents[idx].contribute(topic, &discussion_messages).await
                {
                    Ok(message) => message,
                    Err(e) => {
                        let agent = &self.agents[idx];
                        tracing::warn!(agent = %agent.name(), error = %e, "contribution failed");
                        Message::new(agent.name(), format!("[no contribution: {e}]"), topic)
                    }
                };

                let agent = &self.agents[idx];
                display::print_contribution(agent.name(), agent.specialization(), &message.content);

                discussion_messages.push(message.clone());
                self.conversation_log.push(message);
            }
        }

        tracing::info!(topic, messages = discussion_messages.len(), "discussion complete");
        discussion_messages
    }

    /// Render a textual summary of a discussion.
    ///
    /// The topic is taken from the first message; the participant list is
    /// deduplicated in first-seen order; the body groups contents by the
    /// specialization of the authoring agent (resolved by roster name
    /// lookup) in the order specializations are first encountered. Messages
    /// whose agent name has no roster match are omitted from the body but
    /// still counted in the header total.
    pub fn generate_research_summary(&self, messages: &[Message]) -> String {
        if messages.is_empty() {
            return "No discussion to summarize.".to_string();
        }

        let topic = &messages[0].topic;
        let participants = first_seen_participants(messages);
        let period_start = messages[0].timestamp.format("%Y-%m-%d %H:%M");
        let period_end = messages[messages.len() - 1].timestamp.format("%H:%M");

        let mut summary = format!(
            "\nRESEARCH SUMMARY: {}\n{}\n\n\
             Participants: {}\n\
             Total Contributions: {}\n\
             Discussion Period: {} - {}\n\n\
             Key Areas Discussed:\n",
            topic,
            "=".repeat(80),
            participants.join(", "),
            messages.len(),
            period_start,
            period_end,
        );

        for (specialization, contents) in self.group_by_specialization(messages) {
            summary.push_str(&format!("\n{}:\n", specialization));
            for content in contents {
                summary.push_str(&format!(
                    "  - {}\n",
                    truncate_content(content, self.summary_content_limit)
                ));
            }
        }

        summary.push_str(&format!("\n{}\n", "=".repeat(80)));
        summary
    }

    /// Group message contents by the authoring agent's specialization,
    /// keeping first-encountered group order and original relative order
    /// within a group. Unmatched agent names are dropped here.
    fn group_by_specialization<'a>(&'a self, messages: &'a [Message]) -> Vec<(&'a str, Vec<&'a str>)> {
        let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();

        for message in messages {
            let Some(agent) = self
                .agents
                .iter()
                .find(|a| a.name() == message.agent_name)
            else {
                tracing::debug!(agent = %message.agent_name, "no roster match, dropped from summary body");
                continue;
            };

            let specialization = agent.specialization();
            match groups.iter_mut().find(|(s, _)| *s == specialization) {
                Some((_, contents)) => contents.push(message.content.as_str()),
                None => groups.push((specialization, vec![message.content.as_str()])),
            }
        }

        groups
    }
}

impl Default for ResearchCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Deduplicate agent names in first-seen order so summaries are
/// reproducible.
fn first_seen_participants(messages: &[Message]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for message in messages {
        if !names.contains(&message.agent_name.as_str()) {
            names.push(&message.agent_name);
        }
    }
    names
}

/// Truncate to `limit` characters with a continuation marker, counting
/// characters rather than bytes.
fn truncate_content(content: &str, limit: usize) -> String {
    if content.chars().count() > limit {
        let truncated: String = content.chars().take(limit).collect();
        format!("{}...", truncated)
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::builder::AgentBuilder;

    fn roster_coordinator() -> ResearchCoordinator {
        let mut coordinator = ResearchCoordinator::new();
        coordinator.add_agent(
            AgentBuilder::new("X")
                .specialization("Vet")
                .build(),
        );
        coordinator
    }

    #[test]
    fn test_empty_summary_sentinel() {
        let coordinator = ResearchCoordinator::new();
        assert_eq!(
            coordinator.generate_research_summary(&[]),
            "No discussion to summarize."
        );
    }

    #[test]
    fn test_summary_single_short_message() {
        let coordinator = roster_coordinator();
        let messages = vec![Message::new("X", "short", "T")];

        let summary = coordinator.generate_research_summary(&messages);
        assert!(summary.contains("RESEARCH SUMMARY: T"));
        assert!(summary.contains("Participants: X\n"));
        assert!(summary.contains("Total Contributions: 1"));
        assert!(summary.contains("\nVet:\n  - short\n"));
    }

    #[test]
    fn test_summary_truncates_long_content() {
        let coordinator = roster_coordinator().with_summary_content_limit(100);
        let long = "x".repeat(150);
        let messages = vec![Message::new("X", long.clone(), "T")];

        let summary = coordinator.generate_research_summary(&messages);
        let expected = format!("  - {}...\n", "x".repeat(100));
        assert!(summary.contains(&expected));
        assert!(!summary.contains(&long));
    }

    #[test]
    fn test_summary_drops_unmatched_names_from_body_only() {
        let coordinator = roster_coordinator();
        let messages = vec![
            Message::new("X", "from roster", "T"),
            Message::new("Ghost", "not on roster", "T"),
        ];

        let summary = coordinator.generate_research_summary(&messages);
        assert!(summary.contains("Total Contributions: 2"));
        assert!(summary.contains("from roster"));
        assert!(!summary.contains("not on roster"));
        // Still listed as a participant; only the grouped body drops it.
        assert!(summary.contains("Participants: X, Ghost"));
    }

    #[test]
    fn test_participants_deduplicated_first_seen() {
        let messages = vec![
            Message::new("B", "1", "T"),
            Message::new("A", "2", "T"),
            Message::new("B", "3", "T"),
        ];
        assert_eq!(first_seen_participants(&messages), vec!["B", "A"]);
    }

    #[test]
    fn test_group_order_is_first_encountered() {
        let mut coordinator = ResearchCoordinator::new();
        coordinator.add_agent(AgentBuilder::new("A").specialization("Alpha").build());
        coordinator.add_agent(AgentBuilder::new("B").specialization("Beta").build());

        // Beta speaks first, so it leads the body despite roster order.
        let messages = vec![
            Message::new("B", "b1", "T"),
            Message::new("A", "a1", "T"),
            Message::new("B", "b2", "T"),
        ];

        let groups = coordinator.group_by_specialization(&messages);
        assert_eq!(groups[0].0, "Beta");
        assert_eq!(groups[0].1, vec!["b1", "b2"]);
        assert_eq!(groups[1].0, "Alpha");
        assert_eq!(groups[1].1, vec!["a1"]);
    }

    #[test]
    fn test_truncate_content_counts_chars_not_bytes() {
        let content = "é".repeat(10);
        assert_eq!(truncate_content(&content, 5), format!("{}...", "é".repeat(5)));
        assert_eq!(truncate_content("short", 100), "short");
    }

    #[tokio::test]
    async fn test_zero_rounds_yields_empty_discussion() {
        let mut coordinator = roster_coordinator();
        let messages = coordinator.conduct_discussion("T", 0).await;
        assert!(messages.is_empty());
        assert!(coordinator.conversation_log().is_empty());
    }
}
