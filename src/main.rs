use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use taskroad::cli::{Args, Commands, PlannerConfig, load_task_file};
use taskroad::llm::GeminiProvider;
use taskroad::plan::{PlanBoard, PlanSession};
use taskroad::render::{render_board, render_card};
use taskroad::PlanGenerator;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(if args.verbose() {
            "taskroad=debug"
        } else {
            "taskroad=info"
        })
        .init();

    match args.command {
        Commands::Plan { goal, config, .. } => run_plan(&goal, config.as_deref()).await,
        Commands::Render { file, .. } => run_render(&file),
        Commands::Interactive { config, .. } => run_interactive(config.as_deref()).await,
    }
}

fn build_generator(config_path: Option<&Path>) -> anyhow::Result<PlanGenerator> {
    let config = PlannerConfig::discover(config_path)?;
    let api_key = config
        .api_key
        .context("no API key configured; set GEMINI_API_KEY or api_key in taskroad.toml")?;

    let mut provider = GeminiProvider::new(api_key);
    if let Some(endpoint) = config.endpoint {
        provider = provider.with_base_url(endpoint);
    }

    Ok(PlanGenerator::new(Arc::new(provider)))
}

async fn run_plan(goal: &str, config_path: Option<&Path>) -> anyhow::Result<()> {
    let generator = build_generator(config_path)?;

    let records = generator.generate_plan(goal).await?;
    let board = PlanBoard::from_records(records);
    println!("{}", render_board(&board));

    Ok(())
}

fn run_render(file: &Path) -> anyhow::Result<()> {
    let records = load_task_file(file)?;
    info!("loaded {} tasks from {:?}", records.len(), file);

    let board = PlanBoard::from_records(records);
    println!("{}", render_board(&board));

    Ok(())
}

async fn run_interactive(config_path: Option<&Path>) -> anyhow::Result<()> {
    let generator = build_generator(config_path)?;
    let mut session = PlanSession::new();

    println!("Enter a goal to plan, or 'help' for commands.");

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let input = input.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                show_interactive_help();
                continue;
            }
            _ => {}
        }

        if let Some(argument) = input.strip_prefix("done ") {
            handle_done(&mut session, argument);
            continue;
        }
        if let Some(argument) = input.strip_prefix("show ") {
            handle_show(&session, argument);
            continue;
        }

        // Anything else is a new goal. Take a ticket before the request goes
        // out so a response overtaken by a newer goal is dropped on arrival.
        let ticket = session.begin();
        match generator.generate_plan(input).await {
            Ok(records) => {
                if let Some(board) = session.install(ticket, records) {
                    println!("{}", render_board(board));
                }
            }
            Err(source) => {
                error!("plan generation failed: {source}");
                println!("Error generating plan: {source}");
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn handle_done(session: &mut PlanSession, argument: &str) {
    let Some(board) = session.board_mut() else {
        println!("No roadmap yet. Enter a goal first.");
        return;
    };
    match argument.trim().parse::<usize>() {
        Ok(number) => {
            if board.complete(number) {
                println!("Task {number} completed.");
            } else if board.card(number).is_some() {
                println!("Task {number} is already completed.");
            } else {
                println!("No task {number} on the current roadmap.");
            }
        }
        Err(_) => println!("Usage: done <task number>"),
    }
}

fn handle_show(session: &PlanSession, argument: &str) {
    let Some(board) = session.board() else {
        println!("No roadmap yet. Enter a goal first.");
        return;
    };
    match argument.trim().parse::<usize>() {
        Ok(number) => match board.card(number) {
            Some(card) => println!("{}", render_card(card)),
            None => println!("No task {number} on the current roadmap."),
        },
        Err(_) => println!("Usage: show <task number>"),
    }
}

fn show_interactive_help() {
    println!("Commands:");
    println!("  show N  - show the task a dependency link points at");
    println!("  done N  - mark task N complete");
    println!("  help    - show this help message");
    println!("  quit    - exit");
    println!("\nAnything else is treated as a new goal to plan.");
}
