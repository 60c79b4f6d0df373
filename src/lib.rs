//! Colloquy - Simulated multi-agent research discussions
//!
//! A roster of specialist agents takes strict round-robin turns producing
//! deterministic, specialization-keyed contributions on a topic. A
//! coordinator collects the messages and renders a grouped summary. The
//! response-generation step sits behind a pluggable strategy so a real model
//! backend could be substituted without touching the orchestration loop.

pub mod agents;
pub mod cli;
mod config;
pub mod session;
pub mod utils;

pub use agents::coordinator::ResearchCoordinator;
pub use agents::message::Message;
pub use agents::strategy::{ResponseRequest, ResponseStrategy, StrategyError};
pub use agents::team::{create_animal_health_team, default_research_topics};
pub use agents::{Agent, AgentBuilder};
pub use config::Settings;
pub use session::{ResearchSession, SessionReport};
