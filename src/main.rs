use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Arg, Command};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use barquiz::handlers::commands::{dispatch, parse_command, Command as QuizCommand, HELP};
use barquiz::models::{Difficulty, PoolMode};
use barquiz::services::catalog::load_catalog;
use barquiz::services::session::Session;

// Function to initialize logging
fn init_logging(log_file: Option<&String>) -> anyhow::Result<()> {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .with_context(|| format!("Failed to open log file {}", file))?;

        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let matches = Command::new("barquiz")
        .version("1.1")
        .author("Ron Straight <straightre@gmail.com>")
        .about("Cocktail recipe quiz")
        .arg(
            Arg::new("ingredients")
                .long("ingredients")
                .num_args(1)
                .default_value("./share/ingredients.json")
                .help("Path to the ingredient catalog"),
        )
        .arg(
            Arg::new("recipes")
                .long("recipes")
                .num_args(1)
                .default_value("./share/recipes.json")
                .help("Path to the recipe list"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .num_args(1)
                .default_value("easy")
                .help("Difficulty: easy (ingredients only) or hard (ingredients and amounts)"),
        )
        .arg(
            Arg::new("pool")
                .long("pool")
                .num_args(1)
                .default_value("full")
                .help("Ingredient pool: full bar or training (recipe plus a few distractors)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .num_args(1)
                .value_parser(clap::value_parser!(u64))
                .help("Seed for a reproducible session"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .get_matches();

    let log_file = matches.get_one::<String>("log-file");
    init_logging(log_file)?;

    let ingredients_path = matches
        .get_one::<String>("ingredients")
        .context("ingredients argument must always have a default value")?;
    let recipes_path = matches
        .get_one::<String>("recipes")
        .context("recipes argument must always have a default value")?;
    let difficulty: Difficulty = matches
        .get_one::<String>("mode")
        .context("mode argument must always have a default value")?
        .parse()
        .map_err(anyhow::Error::msg)?;
    let pool_mode: PoolMode = matches
        .get_one::<String>("pool")
        .context("pool argument must always have a default value")?
        .parse()
        .map_err(anyhow::Error::msg)?;

    let mut rng = match matches.get_one::<u64>("seed") {
        Some(&seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut session = Session::new(difficulty, pool_mode);
    info!("Loading catalog from {} and {}", ingredients_path, recipes_path);
    let status = session.install(load_catalog(ingredients_path, recipes_path));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", status)?;
    writeln!(out, "{}", HELP)?;

    let stdin = io::stdin();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        let quit = cmd == QuizCommand::Quit;
        writeln!(out, "{}", dispatch(&mut session, cmd, &mut rng))?;
        if quit {
            break;
        }
    }

    Ok(())
}
