//! Custom research session built from the public API instead of the
//! canned team: three agents, two topics, three rounds each.
//!
//! Run with: cargo run --example custom_session

use anyhow::Result;
use colloquy::{AgentBuilder, ResearchCoordinator};

#[tokio::main]
async fn main() -> Result<()> {
    let mut coordinator = ResearchCoordinator::new();

    coordinator.add_agent(
        AgentBuilder::new("Dr. Emma Thompson")
            .specialization("Veterinary Medicine")
            .expertise(["oncology", "immunology", "diagnostics"])
            .build(),
    );
    coordinator.add_agent(
        AgentBuilder::new("Dr. Carlos Martinez")
            .specialization("Animal Nutrition")
            .expertise(["nutraceuticals", "longevity", "metabolic disorders"])
            .build(),
    );
    coordinator.add_agent(
        AgentBuilder::new("Dr. Yuki Tanaka")
            .specialization("Genetics")
            .expertise(["genomics", "CRISPR", "hereditary conditions"])
            .build(),
    );

    let topics = [
        "Gene editing approaches for eliminating hereditary diseases in dogs",
        "Immunotherapy breakthroughs for treating pet cancers",
    ];

    for topic in topics {
        let messages = coordinator.conduct_discussion(topic, 3).await;
        println!("{}", coordinator.generate_research_summary(&messages));
    }

    println!("\nCustom research session complete!");
    Ok(())
}
