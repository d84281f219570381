//! Lookup sessions
//!
//! Drives either a single lookup from a command-line argument or an
//! interactive read loop, over one reused client.

use std::io::Write;

use colored::Colorize;
use integration_github::{GitHubClient, GitHubLookup};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::render;

/// Inputs that leave the interactive loop, matched case-insensitively
const EXIT_KEYWORDS: [&str; 3] = ["quit", "q", "exit"];

/// Answers that continue the loop after a successful lookup; an empty
/// answer counts as yes
const CONTINUE_ANSWERS: [&str; 3] = ["", "y", "yes"];

fn is_exit_keyword(input: &str) -> bool {
    let token = input.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&token.as_str())
}

fn wants_another(answer: &str) -> bool {
    let token = answer.trim().to_lowercase();
    CONTINUE_ANSWERS.contains(&token.as_str())
}

/// Run one lookup and print the outcome; returns whether it succeeded
async fn run_lookup<C: GitHubClient>(lookup: &GitHubLookup<C>, raw_name: &str) -> bool {
    let name = raw_name.trim();
    if name.is_empty() {
        println!("{}\n", render::username_required());
        return false;
    }

    println!("{}\n", render::searching(name));

    match lookup.run(name).await {
        Ok(report) => {
            println!("{}\n", render::separator());
            println!("{}", render::report(&report));
            true
        },
        Err(e) => {
            println!("{}\n", render::error_line(&e.to_string()));
            false
        },
    }
}

/// Single-shot mode: one lookup, then exit regardless of outcome
pub async fn run_single<C: GitHubClient>(lookup: &GitHubLookup<C>, username: &str) {
    println!("{}", render::header());
    run_lookup(lookup, username).await;
}

/// Interactive mode: prompt for names until quit, Ctrl-C, or end of input
pub async fn run_interactive<C: GitHubClient>(lookup: &GitHubLookup<C>) {
    println!("{}", render::header());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let name_prompt = format!("{} (or 'quit' to exit): ", "GitHub username".bold());
        let Some(input) = prompt(&mut lines, &name_prompt).await else {
            break;
        };

        if is_exit_keyword(&input) {
            break;
        }

        println!();
        let success = run_lookup(lookup, &input).await;

        if success {
            let continue_prompt = "Search for another user? (y/n): ".dimmed().to_string();
            let Some(answer) = prompt(&mut lines, &continue_prompt).await else {
                break;
            };
            if !wants_another(&answer) {
                break;
            }
        }

        println!();
    }

    println!("{}", render::goodbye());
}

/// Show `text` and read one line; `None` on Ctrl-C or end of input
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, text: &str) -> Option<String> {
    print!("{text}");
    let _ = std::io::stdout().flush();

    tokio::select! {
        line = lines.next_line() => line.ok().flatten(),
        _ = tokio::signal::ctrl_c() => {
            println!();
            None
        },
    }
}
