//! Line commands driving the session from standard input.

use salonview_domain::pagination::PageNav;

/// Help text listing every accepted command.
pub const HELP: &str = "\
commands:
  /<text> | search <text>   filter by service name or id (empty clears)
  first | prev | next | last
  <number>                  jump to page
  <enter>                   redraw
  help | quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Navigate(PageNav),
    Redraw,
    Help,
    Quit,
}

/// Input line that matches no command.
#[derive(Debug, thiserror::Error)]
#[error("unknown command {0:?}, type `help` for the list")]
pub struct UnknownCommand(String);

/// Parse one line of input (without its line terminator).
///
/// # Errors
///
/// Returns [`UnknownCommand`] when the line is not a known command.
pub fn parse(line: &str) -> Result<Command, UnknownCommand> {
    if let Some(query) = line.strip_prefix('/') {
        return Ok(Command::Search(query.to_string()));
    }

    let trimmed = line.trim();
    if let Some(query) = trimmed.strip_prefix("search")
        && (query.is_empty() || query.starts_with(' '))
    {
        return Ok(Command::Search(query.trim_start().to_string()));
    }

    let command = match trimmed {
        "" => Command::Redraw,
        "first" | "f" => Command::Navigate(PageNav::First),
        "prev" | "p" => Command::Navigate(PageNav::Prev),
        "next" | "n" => Command::Navigate(PageNav::Next),
        "last" | "l" => Command::Navigate(PageNav::Last),
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => match other.parse::<usize>() {
            Ok(page) => Command::Navigate(PageNav::Number(page)),
            Err(_) => return Err(UnknownCommand(other.to_string())),
        },
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_slash_search_verbatim() {
        assert_eq!(
            parse("/Hair Spa").unwrap(),
            Command::Search("Hair Spa".to_string())
        );
        assert_eq!(parse("/").unwrap(), Command::Search(String::new()));
    }

    #[test]
    fn should_parse_search_keyword() {
        assert_eq!(
            parse("search facial").unwrap(),
            Command::Search("facial".to_string())
        );
        assert_eq!(parse("search").unwrap(), Command::Search(String::new()));
    }

    #[test]
    fn should_not_treat_search_prefix_as_keyword() {
        assert!(parse("searching").is_err());
    }

    #[test]
    fn should_parse_navigation() {
        assert_eq!(parse("first").unwrap(), Command::Navigate(PageNav::First));
        assert_eq!(parse(" p ").unwrap(), Command::Navigate(PageNav::Prev));
        assert_eq!(parse("n").unwrap(), Command::Navigate(PageNav::Next));
        assert_eq!(parse("last").unwrap(), Command::Navigate(PageNav::Last));
        assert_eq!(parse("3").unwrap(), Command::Navigate(PageNav::Number(3)));
    }

    #[test]
    fn should_parse_redraw_help_and_quit() {
        assert_eq!(parse("").unwrap(), Command::Redraw);
        assert_eq!(parse("?").unwrap(), Command::Help);
        assert_eq!(parse("quit").unwrap(), Command::Quit);
        assert_eq!(parse("q").unwrap(), Command::Quit);
    }

    #[test]
    fn should_reject_unknown_command() {
        let err = parse("sort price").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown command \"sort price\", type `help` for the list"
        );
    }
}
