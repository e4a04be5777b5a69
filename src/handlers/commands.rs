use log::info;
use rand::Rng;

use crate::error::QuizError;
use crate::handlers::feedback::{render_bar, render_verdict};
use crate::models::{Difficulty, PoolMode};
use crate::services::session::Session;

pub const HELP: &str = "\
Commands:
  new                    start a new cocktail
  list                   show the ingredients on the bar
  pick <id> [amount]     tick an ingredient (amount in Hard mode)
  amount <id> <amount>   set the amount for an ingredient (Hard mode)
  drop <id>              untick an ingredient
  check                  grade your answer
  mode <easy|hard>       switch difficulty
  pool <full|training>   switch between the full bar and a training pool
  help                   show this message
  quit                   leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    NewCocktail,
    List,
    Pick { id: String, amount: Option<String> },
    Amount { id: String, text: String },
    Drop { id: String },
    Check,
    Mode(Difficulty),
    Pool(PoolMode),
    Help,
    Quit,
}

/// Turn one line of input into a command. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, QuizError> {
    let mut words = line.split_whitespace();
    let verb = match words.next() {
        Some(v) => v.to_lowercase(),
        None => return Ok(None),
    };
    let rest: Vec<&str> = words.collect();
    let unknown = || QuizError::UnknownCommand(line.trim().to_string());

    let cmd = match (verb.as_str(), rest.as_slice()) {
        ("new" | "next", []) => Command::NewCocktail,
        ("list" | "ls", []) => Command::List,
        ("pick", [id]) => Command::Pick { id: id.to_string(), amount: None },
        ("pick", [id, amount @ ..]) => Command::Pick {
            id: id.to_string(),
            amount: Some(amount.join(" ")),
        },
        ("amount", [id, text @ ..]) => Command::Amount {
            id: id.to_string(),
            text: text.join(" "),
        },
        ("drop", [id]) => Command::Drop { id: id.to_string() },
        ("check", []) => Command::Check,
        ("mode", [mode]) => Command::Mode(mode.parse().map_err(|_| unknown())?),
        ("pool", [pool]) => Command::Pool(pool.parse().map_err(|_| unknown())?),
        ("help" | "?", _) => Command::Help,
        ("quit" | "exit" | "q", []) => Command::Quit,
        _ => return Err(unknown()),
    };
    Ok(Some(cmd))
}

/// Run a command against the session and return the text to display.
/// Failures come back as status text; nothing here ends the session.
pub fn dispatch<R: Rng + ?Sized>(session: &mut Session, cmd: Command, rng: &mut R) -> String {
    match run(session, cmd, rng) {
        Ok(text) => text,
        Err(e) => {
            info!("Command rejected: {}", e);
            e.to_string()
        }
    }
}

fn run<R: Rng + ?Sized>(
    session: &mut Session,
    cmd: Command,
    rng: &mut R,
) -> Result<String, QuizError> {
    match cmd {
        Command::NewCocktail => {
            session.new_round(rng)?;
            Ok(format!("{}\n{}", bar_listing(session)?, session.prompt()))
        }
        Command::List => bar_listing(session),
        Command::Pick { id, amount } => {
            match amount {
                Some(text) => session.set_amount(&id, &text)?,
                None => session.select(&id, true)?,
            }
            Ok(format!("Picked {}.", display_name(session, &id)))
        }
        Command::Amount { id, text } => {
            session.set_amount(&id, &text)?;
            Ok(format!("{}: {}", display_name(session, &id), text))
        }
        Command::Drop { id } => {
            session.select(&id, false)?;
            Ok(format!("Dropped {}.", display_name(session, &id)))
        }
        Command::Check => {
            let verdict = session.check()?;
            let catalog = session.catalog().ok_or(QuizError::NotReady)?;
            Ok(render_verdict(&verdict, catalog))
        }
        Command::Mode(difficulty) => Ok(session.set_difficulty(difficulty)),
        Command::Pool(pool) => Ok(session.set_pool_mode(pool)),
        Command::Help => Ok(HELP.to_string()),
        Command::Quit => Ok("Cheers!".to_string()),
    }
}

fn bar_listing(session: &Session) -> Result<String, QuizError> {
    let catalog = session.catalog().ok_or(QuizError::NotReady)?;
    let round = session.round().ok_or(QuizError::NoActiveRecipe)?;
    Ok(render_bar(round, catalog, session.difficulty()))
}

fn display_name(session: &Session, id: &str) -> String {
    session
        .catalog()
        .map(|c| c.display_name(id).to_string())
        .unwrap_or_else(|| id.to_string())
}
