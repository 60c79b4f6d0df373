use anyhow::Result;
use clap::Parser;
use colloquy::cli::{Cli, Commands};
use colloquy::{create_animal_health_team, default_research_topics, utils, ResearchSession, Settings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone())),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { topic, rounds } => handle_run(&settings, topic, rounds).await,
        Commands::Discuss {
            topic,
            rounds,
            json,
        } => handle_discuss(&settings, topic, rounds, json).await,
        Commands::Roster => handle_roster(&settings),
    }
}

async fn handle_run(
    settings: &Settings,
    topics: Vec<String>,
    rounds: Option<usize>,
) -> Result<()> {
    let topics = if topics.is_empty() {
        default_research_topics()
    } else {
        topics
    };
    let rounds = rounds.unwrap_or(settings.discussion.rounds);

    let coordinator = create_animal_health_team(settings);
    let mut session = ResearchSession::new(coordinator, topics, rounds);
    session.run().await?;
    Ok(())
}

async fn handle_discuss(
    settings: &Settings,
    topic: String,
    rounds: Option<usize>,
    json: bool,
) -> Result<()> {
    let rounds = rounds.unwrap_or(settings.discussion.rounds);

    let mut coordinator = create_animal_health_team(settings);
    let messages = coordinator.conduct_discussion(&topic, rounds).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
    } else {
        println!("{}", coordinator.generate_research_summary(&messages));
    }
    Ok(())
}

fn handle_roster(settings: &Settings) -> Result<()> {
    let coordinator = create_animal_health_team(settings);

    utils::print_header("Default Research Team");
    for agent in coordinator.agents() {
        println!(
            "{} ({}) - {}",
            agent.name(),
            agent.specialization(),
            agent.expertise().join(", ")
        );
    }
    Ok(())
}
