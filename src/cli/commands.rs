use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "colloquy")]
#[command(author, version, about = "Simulated multi-agent research discussions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a full research session over the built-in topic list
    Run {
        /// Discuss only these topics instead of the built-in list (repeatable)
        #[arg(short, long)]
        topic: Vec<String>,

        /// Rounds per discussion (default from settings)
        #[arg(short, long)]
        rounds: Option<usize>,
    },

    /// Run a single discussion on one topic and print its summary
    Discuss {
        topic: String,

        /// Rounds for this discussion (default from settings)
        #[arg(short, long)]
        rounds: Option<usize>,

        /// Emit the discussion messages as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Show the default research team
    Roster,
}
