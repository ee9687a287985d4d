//! Parses terminal input lines into app commands.

use pantry_core::{Msg, Route};

pub const HELP: &str = "\
Commands:
  list                 show the recipe list
  favs                 show favorites and their shopping list
  open <id>            show one recipe (repeat to retry)
  search [text]        filter the list by name; empty clears
  category [name]      filter the list by category; empty shows all
  categories           reload the category names
  fetch [category]     load every recipe (from the local cache when
                       present), or fetch one category remotely
  reload               same as `fetch`
  next | prev          move one page
  page <n>             jump to page n
  fav <id>             add or remove a favorite
  unfav <id>           remove a favorite
  help                 show this text
  quit                 exit";

pub const HELP_HINT: &str = "Type `help` for commands.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

/// `Ok(None)` for a blank line; `Err` carries a message for the user.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let msg = match verb.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "exit" | "q" => return Ok(Some(Command::Quit)),
        "list" => Msg::Navigate(Route::List),
        "favs" | "favorites" => Msg::Navigate(Route::Favorites),
        "open" => Msg::Navigate(Route::Detail(required(rest, "open <id>")?)),
        "search" => Msg::SearchInput(rest.to_string()),
        "category" => Msg::CategorySelected(optional(rest)),
        "categories" => Msg::CategoriesRequested,
        "fetch" | "reload" => match optional(rest) {
            Some(category) => Msg::CategoryFetchRequested(category),
            None => Msg::CatalogRequested,
        },
        "next" => Msg::NextPage,
        "prev" => Msg::PrevPage,
        "page" => Msg::PageSelected(parse_page(rest)?),
        "fav" => Msg::FavoriteToggled {
            id: required(rest, "fav <id>")?,
        },
        "unfav" => Msg::FavoriteRemoved {
            id: required(rest, "unfav <id>")?,
        },
        other => return Err(format!("Unknown command `{other}`. {HELP_HINT}")),
    };
    Ok(Some(Command::Dispatch(msg)))
}

fn required(rest: &str, usage: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("Usage: {usage}"))
    } else {
        Ok(rest.to_string())
    }
}

fn optional(rest: &str) -> Option<String> {
    (!rest.is_empty()).then(|| rest.to_string())
}

fn parse_page(rest: &str) -> Result<usize, String> {
    match rest.parse::<usize>() {
        Ok(page) if page > 0 => Ok(page),
        _ => Err("Usage: page <n> (n starts at 1)".to_string()),
    }
}
