//! Line-oriented terminal front end for the to-do list.
//!
//! Usage:
//!
//! ```text
//! todolist
//! > add History Test 05/30/2023
//! > remove 1
//! > list
//! > quit
//! ```
//!
//! `add` takes a name followed by a due date in `mm/dd/yyyy` form.
//! `remove` takes either a 1-based card position or an item identifier.
//! After every command the list is redrawn: the placeholder message when the
//! list is empty, otherwise one line per card with overdue cards tagged by
//! their highlight colour. Rejected additions change nothing and print
//! nothing extra.
//!
//! Set `TODOLIST_CONFIG` to a JSON file to override display settings, and
//! `RUST_LOG` to control diagnostic output on stderr.

use mockable::DefaultClock;
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use thiserror::Error;
use todolist::todo::{
    adapters::memory::InMemoryTodoList,
    domain::TodoId,
    services::{AddTodoRequest, TodoListManager},
    view::{TodoListConfig, TodoListView, TodoView},
};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_ENV: &str = "TODOLIST_CONFIG";
const USAGE: &str = "usage: add <name> <mm/dd/yyyy> | remove <position|id> | list | quit";

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Manager = TodoListManager<InMemoryTodoList, DefaultClock>;

/// Errors that end the session.
#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// Target of a `remove` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RemoveTarget {
    Position(usize),
    Id(TodoId),
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add(AddTodoRequest),
    Remove(RemoveTarget),
    List,
    Quit,
}

impl Command {
    /// Parses an input line; `None` means the line is not a command.
    fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next()?;
        let rest: Vec<&str> = words.collect();
        match verb {
            "add" => Some(Self::Add(parse_add(&rest))),
            "remove" | "rm" => match rest.as_slice() {
                [target] => parse_remove_target(target).map(Self::Remove),
                _ => None,
            },
            "list" | "ls" if rest.is_empty() => Some(Self::List),
            "quit" | "exit" if rest.is_empty() => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Splits `add` arguments into a name and a trailing due date.
///
/// A single word is taken as the name with the date left blank, which the
/// manager rejects like an unfilled form.
fn parse_add(words: &[&str]) -> AddTodoRequest {
    match words.split_last() {
        None => AddTodoRequest::without_due_date(""),
        Some((only, [])) => AddTodoRequest::without_due_date(*only),
        Some((date, name)) => AddTodoRequest::from_form(name.join(" "), *date),
    }
}

fn parse_remove_target(text: &str) -> Option<RemoveTarget> {
    if let Ok(position) = text.parse::<usize>() {
        return Some(RemoveTarget::Position(position));
    }
    text.parse::<TodoId>().ok().map(RemoveTarget::Id)
}

fn resolve_target(view: &TodoListView, target: RemoveTarget) -> Option<TodoId> {
    match target {
        RemoveTarget::Id(id) => Some(id),
        RemoveTarget::Position(position) => view
            .cards()
            .get(position.checked_sub(1)?)
            .map(|card| card.id),
    }
}

fn load_config() -> Result<TodoListConfig, CliError> {
    let Some(path) = env::var_os(CONFIG_ENV) else {
        return Ok(TodoListConfig::default());
    };
    let path_text = path.to_string_lossy().into_owned();
    let payload = fs::read_to_string(&path).map_err(|source| CliError::ConfigRead {
        path: path_text.clone(),
        source,
    })?;
    TodoListConfig::from_json(&payload).map_err(|source| CliError::ConfigParse {
        path: path_text,
        source,
    })
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn draw(out: &mut impl Write, view: &TodoListView) -> io::Result<()> {
    match view {
        TodoListView::Placeholder { message } => writeln!(out, "{message}"),
        TodoListView::Collection { cards } => {
            for (position, card) in (1_usize..).zip(cards) {
                write!(out, "{position}. {}  due {}", card.name, card.due_date)?;
                if let Some(background) = card.background {
                    write!(out, "  [{} {background}]", card.highlight)?;
                }
                writeln!(out, "  ({})", card.id)?;
            }
            Ok(())
        }
    }
}

fn apply(manager: &mut Manager, view: &TodoView<DefaultClock>, command: Command) {
    match command {
        Command::Add(request) => {
            if let Err(err) = manager.add(request) {
                debug!(reason = %err, "add declined");
            }
        }
        Command::Remove(target) => {
            if let Some(id) = resolve_target(&view.current(), target) {
                manager.remove(id);
            }
        }
        Command::List | Command::Quit => {}
    }
}

fn run(input: impl BufRead, out: &mut impl Write, config: TodoListConfig) -> Result<(), CliError> {
    let clock = Arc::new(DefaultClock);
    let view = TodoView::new(Arc::clone(&clock), config);
    let mut manager = TodoListManager::new(InMemoryTodoList::new(), clock);
    manager.subscribe(view.clone());

    draw(out, &view.current())?;
    for line in input.lines() {
        let text = line?;
        if text.trim().is_empty() {
            continue;
        }
        let Some(command) = Command::parse(&text) else {
            warn!(input = %text, "unrecognised command");
            writeln!(out, "{USAGE}")?;
            continue;
        };
        if command == Command::Quit {
            break;
        }
        apply(&mut manager, &view, command);
        draw(out, &view.current())?;
        out.flush()?;
    }
    Ok(())
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let config = load_config()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run(stdin.lock(), &mut stdout, config).map_err(Into::into)
}
