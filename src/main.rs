use anyhow::Context;
use chrono::{Local, Utc};
use clap::Parser;
use solace::application::{
    init::init, ConfigService, JournalService, RecommendService, StatsService,
};
use solace::cli::output::{format_mood_logged, format_phase};
use solace::cli::{format_recommendations, format_stats, format_timeline, Cli, Commands};
use solace::domain::breathing::{BreathingTimer, TickOutcome};
use solace::domain::chatbot::{respond, GREETING};
use solace::domain::daily::{affirmation_for, prompt_for};
use solace::domain::{load_catalog, Category, EntryDraft, MoodLevel};
use solace::error::SolaceError;
use solace::infrastructure::FileSystemRepository;
use std::io::BufRead;
use std::str::FromStr;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: {:#}", e);
    }

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by SOLACE_LOG (default: warn)
fn init_logging() -> anyhow::Result<()> {
    let filter = match std::env::var("SOLACE_LOG") {
        Ok(directives) => EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid SOLACE_LOG value '{}'", directives))?,
        Err(_) => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install log subscriber")
}

fn parse_mood(input: &str) -> Result<MoodLevel, SolaceError> {
    MoodLevel::from_str(input).map_err(SolaceError::InvalidMood)
}

/// Discover the journal and resolve the acting owner
fn open_journal() -> Result<(FileSystemRepository, String), SolaceError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let owner = config.get_owner()?;
    Ok((repo, owner))
}

fn run(cli: Cli) -> Result<(), SolaceError> {
    match cli.command {
        Some(Commands::Init { path, owner }) => {
            let config = init(&path, owner)?;
            println!("Initialized solace journal at {}", path.display());
            println!("Owner: {}", config.owner);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("owner = {}", config.owner);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: solace config [--list | <key> [<value>]]");
                println!("Valid keys: owner, created");
                Ok(())
            }
        }
        Some(Commands::Write {
            text,
            mood,
            prompt,
            tags,
        }) => {
            let mood = parse_mood(&mood)?;
            let (repo, owner) = open_journal()?;
            let service = JournalService::new(repo, owner);

            let mut draft = EntryDraft::new(text, mood).with_tags(tags);
            if let Some(prompt) = prompt {
                draft = draft.with_prompt(prompt);
            }

            let entry = service.write_entry(draft, Utc::now())?;
            println!(
                "{} Saved entry ({}, {} characters)",
                entry.mood.emoji(),
                entry.mood.label(),
                entry.content.chars().count()
            );
            Ok(())
        }
        Some(Commands::Mood { mood, note }) => {
            let mood = parse_mood(&mood)?;
            let (repo, owner) = open_journal()?;
            let service = JournalService::new(repo, owner);

            let log = service.log_mood(mood, note.as_deref(), Utc::now())?;
            println!("{}", format_mood_logged(&log));
            Ok(())
        }
        Some(Commands::Timeline { page }) => {
            let (repo, owner) = open_journal()?;
            let service = JournalService::new(repo, owner);

            let page = service.timeline(page)?;
            println!("{}", format_timeline(&page, Local::now().date_naive(), &Local));
            Ok(())
        }
        Some(Commands::Stats) => {
            let (repo, owner) = open_journal()?;
            let summary = StatsService::new(repo, owner).summary(Utc::now(), &Local)?;
            println!("{}", format_stats(&summary));
            Ok(())
        }
        Some(Commands::Recommend { category }) => {
            let category = match category.as_deref().map(str::trim) {
                None | Some("all") => None,
                Some(name) => Some(
                    Category::from_str(name)
                        .map_err(|_| SolaceError::InvalidCategory(name.to_string()))?,
                ),
            };

            let (repo, owner) = open_journal()?;
            let catalog = load_catalog(repo.root())?;
            let service = RecommendService::new(repo, owner, catalog);

            let set = service.recommend(Utc::now().date_naive(), category)?;
            println!("{}", format_recommendations(&set));
            Ok(())
        }
        Some(Commands::Chat { message }) => {
            if !message.is_empty() {
                println!("{}", respond(&message.join(" ")).text);
                return Ok(());
            }

            println!("{}", GREETING);
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
                    break;
                }
                println!("\n{}\n", respond(line).text);
            }
            Ok(())
        }
        Some(Commands::Breathe { cycles, tick_ms }) => {
            breathe(cycles, Duration::from_millis(tick_ms));
            Ok(())
        }
        Some(Commands::Affirm) => {
            println!("{}", affirmation_for(Local::now().date_naive()));
            Ok(())
        }
        Some(Commands::Prompt) => {
            println!("{}", prompt_for(Local::now().date_naive()));
            Ok(())
        }
        None => {
            println!("solace - Terminal wellbeing journal");
            println!();
            println!("{}", affirmation_for(Local::now().date_naive()));
            println!();
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Drive a breathing timer for `cycles` full cycles, one tick per `tick`.
fn breathe(cycles: u32, tick: Duration) {
    if cycles == 0 {
        return;
    }

    let mut timer = BreathingTimer::new().on_complete(move || {
        println!("Well done. {} cycle(s) of calm breathing complete.", cycles);
    });

    timer.start();
    println!("{}", format_phase(timer.phase(), timer.remaining()));

    while timer.completed_cycles() < cycles {
        thread::sleep(tick);
        match timer.tick() {
            TickOutcome::PhaseChanged(phase) if timer.completed_cycles() < cycles => {
                println!("{}", format_phase(phase, timer.remaining()));
            }
            TickOutcome::Idle => break,
            _ => {}
        }
    }

    timer.complete();
}
