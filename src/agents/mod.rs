//! Agent System - roster, discussion orchestration, and summaries
//!
//! Information Hiding:
//! - Response generation hidden behind the `ResponseStrategy` trait
//! - Per-agent history and context windowing internal to `Agent`
//! - Roster and global log owned by `ResearchCoordinator`

pub mod agent;
pub mod builder;
pub mod coordinator;
pub mod message;
pub mod simulated;
pub mod strategy;
pub mod team;

pub use agent::Agent;
pub use builder::AgentBuilder;
pub use coordinator::ResearchCoordinator;
pub use message::Message;
