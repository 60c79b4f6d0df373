use colored::*;

pub fn print_header(text: &str) {
    println!("\n{}", text.bright_cyan().bold());
    println!("{}", "=".repeat(text.len()).bright_cyan());
}

pub fn print_success(text: &str) {
    println!("{}", text.green());
}

pub fn print_info(text: &str) {
    println!("{}", text.blue());
}

/// Full-width banner announcing a discussion.
pub fn print_discussion_banner(topic: &str) {
    let rule = "=".repeat(80);
    println!("\n{}", rule.bright_cyan());
    println!("{}", format!("RESEARCH DISCUSSION: {}", topic).bright_cyan().bold());
    println!("{}\n", rule.bright_cyan());
}

pub fn print_round_header(round: usize) {
    println!("\n{}\n", format!("--- Round {} ---", round).yellow().bold());
}

/// One attributed contribution, emitted as it is produced.
pub fn print_contribution(name: &str, specialization: &str, content: &str) {
    println!("{} ({}):", name.green().bold(), specialization.cyan());
    println!("  {}\n", content);
}
