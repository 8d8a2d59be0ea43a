use std::{io::{self, BufRead}, str::FromStr, thread};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use crate::model::ItemId;


// Events sent from the input reader to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Closed,
}

// A user request parsed from one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Increment(ItemId),
    Decrement(ItemId),
    Order,
    Clear,
    Help,
    Quit,
    Nothing,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?} (type h for help)")]
    Unknown(String),
    #[error("{0} needs an item id")]
    MissingId(&'static str),
    #[error("{0:?} is not an item id")]
    BadId(String),
}


fn parse_id(raw: &str) -> Result<ItemId, CommandError> {
    raw.trim()
        .parse()
        .map_err(|_| CommandError::BadId(raw.trim().to_string()))
}

fn with_id(
    action: &'static str,
    arg: &str,
    make: fn(ItemId) -> Command,
) -> Result<Command, CommandError> {
    if arg.trim().is_empty() {
        return Err(CommandError::MissingId(action));
    }
    parse_id(arg).map(make)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().to_ascii_lowercase();
        if line.is_empty() {
            return Ok(Command::Nothing);
        }

        if let Some(rest) = line.strip_prefix('+') {
            return with_id("add", rest, Command::Increment);
        }
        if let Some(rest) = line.strip_prefix('-') {
            return with_id("remove", rest, Command::Decrement);
        }

        let (word, arg) = line.split_once(char::is_whitespace).unwrap_or((line.as_str(), ""));
        match word {
            "add" => with_id("add", arg, Command::Increment),
            "remove" => with_id("remove", arg, Command::Decrement),
            "o" | "order" => Ok(Command::Order),
            "c" | "clear" => Ok(Command::Clear),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(s.trim().to_string())),
        }
    }
}


// Read lines until end of input and forward them to the view
pub fn read_lines<R: BufRead>(reader: R, tx: mpsc::UnboundedSender<InputEvent>) {
    for line in reader.lines() {
        match line {
            Ok(line) => {
                debug!(%line, "input");
                if tx.send(InputEvent::Line(line)).is_err() {
                    return;
                }
            }
            Err(err) => {
                warn!(%err, "reading input failed");
                break;
            }
        }
    }
    let _ = tx.send(InputEvent::Closed);
}


// Detached thread: a blocked stdin read must not hold up runtime shutdown
pub fn spawn_stdin_reader(tx: mpsc::UnboundedSender<InputEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || read_lines(io::stdin().lock(), tx))
        .map(|_| ())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quantity_controls() {
        assert_eq!("+1".parse(), Ok(Command::Increment(1)));
        assert_eq!(" + 5 ".parse(), Ok(Command::Increment(5)));
        assert_eq!("ADD 3".parse(), Ok(Command::Increment(3)));
        assert_eq!("-2".parse(), Ok(Command::Decrement(2)));
        assert_eq!("remove 4".parse(), Ok(Command::Decrement(4)));
    }

    #[test]
    fn parses_actions() {
        assert_eq!("o".parse(), Ok(Command::Order));
        assert_eq!("Order".parse(), Ok(Command::Order));
        assert_eq!("clear".parse(), Ok(Command::Clear));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("exit".parse(), Ok(Command::Quit));
        assert_eq!("   ".parse(), Ok(Command::Nothing));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("+".parse::<Command>(), Err(CommandError::MissingId("add")));
        assert_eq!("remove".parse::<Command>(), Err(CommandError::MissingId("remove")));
        assert_eq!("+x".parse::<Command>(), Err(CommandError::BadId("x".to_string())));
        assert_eq!("- -1".parse::<Command>(), Err(CommandError::BadId("-1".to_string())));
        assert_eq!(
            "burger".parse::<Command>(),
            Err(CommandError::Unknown("burger".to_string()))
        );
    }

    #[test]
    fn forwards_lines_then_closes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        read_lines(&b"+1\no\n"[..], tx);

        assert_eq!(rx.try_recv(), Ok(InputEvent::Line("+1".to_string())));
        assert_eq!(rx.try_recv(), Ok(InputEvent::Line("o".to_string())));
        assert_eq!(rx.try_recv(), Ok(InputEvent::Closed));
        assert!(rx.try_recv().is_err());
    }
}
