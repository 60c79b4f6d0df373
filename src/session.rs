//! Research Session - end-to-end driver over a topic list
//!
//! Information Hiding:
//! - Topic iteration and per-topic summary printing internal to `run`
//! - Callers get back aggregate counts, not console state

use crate::agents::coordinator::ResearchCoordinator;
use crate::utils::display;
use anyhow::Result;

/// Aggregate counts reported after a session completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub topics_run: usize,
    pub total_messages: usize,
}

/// Drives a coordinator through an ordered topic list: one discussion per
/// topic, each followed by its printed summary, then aggregate totals.
pub struct ResearchSession {
    coordinator: ResearchCoordinator,
    topics: Vec<String>,
    rounds: usize,
}

impl ResearchSession {
    pub fn new(coordinator: ResearchCoordinator, topics: Vec<String>, rounds: usize) -> Self {
        Self {
            coordinator,
            topics,
            rounds,
        }
    }

    pub fn coordinator(&self) -> &ResearchCoordinator {
        &self.coordinator
    }

    /// Run every topic to completion and print the closing totals.
    pub async fn run(&mut self) -> Result<SessionReport> {
        display::print_header("COLLOQUY - Agents Researching Animal Health Breakthroughs");

        for topic in &self.topics {
            let messages = self.coordinator.conduct_discussion(topic, self.rounds).await;
            let summary = self.coordinator.generate_research_summary(&messages);
            println!("{}", summary);
        }

        let report = SessionReport {
            topics_run: self.topics.len(),
            total_messages: self.coordinator.conversation_log().len(),
        };

        display::print_success("\nResearch session complete!");
        display::print_info(&format!("Total discussions: {}", report.topics_run));
        display::print_info(&format!("Total contributions: {}", report.total_messages));
        tracing::info!(
            topics = report.topics_run,
            messages = report.total_messages,
            "session complete"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::team::create_animal_health_team;
    use crate::config::Settings;

    #[tokio::test]
    async fn test_session_reports_aggregate_counts() {
        let coordinator = create_animal_health_team(&Settings::default());
        let topics = vec!["topic one".to_string(), "topic two".to_string()];
        let mut session = ResearchSession::new(coordinator, topics, 2);

        let report = session.run().await.unwrap();
        assert_eq!(report.topics_run, 2);
        // 2 topics x 2 rounds x 5 agents
        assert_eq!(report.total_messages, 20);
    }

    #[tokio::test]
    async fn test_empty_topic_list_is_a_no_op() {
        let coordinator = create_animal_health_team(&Settings::default());
        let mut session = ResearchSession::new(coordinator, Vec::new(), 2);

        let report = session.run().await.unwrap();
        assert_eq!(report.topics_run, 0);
        assert_eq!(report.total_messages, 0);
    }
}
