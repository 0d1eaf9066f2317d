// src/cli.rs
//
// One-shot lookups (`--name`, `--first`, `--last`, `--conference`) and an
// interactive prompt that drives the same coordinator the GUI uses.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::{
    api::{BallDontLie, Conference, StatsClient},
    config::options::ApiOptions,
    search::{DisplayStatus, NameFilter, SearchCoordinator, SearchMode},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    Name(NameFilter),
    Team(Conference),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub api: ApiOptions,
    pub query: Option<Query>,
    pub interactive: bool,
    /// `--help` was given; nothing else runs.
    pub help: bool,
}

pub const HELP: &str = include_str!("cli_help.txt");

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(std::env::args().skip(1), ApiOptions::from_env())?;
    if params.help {
        eprintln!("{}", HELP);
        return Ok(());
    }
    logf!("CLI: {:?} interactive={}", params.query, params.interactive);

    let client = Arc::new(BallDontLie::new(&params.api)?);
    let mut search = SearchCoordinator::new(client);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(query) = &params.query {
        one_shot(&mut search, query, &mut out)?;
    }
    if params.interactive {
        let stdin = io::stdin();
        repl(&mut search, stdin.lock(), &mut out)?;
    }
    Ok(())
}

pub fn parse_args(
    args: impl IntoIterator<Item = String>,
    api: ApiOptions,
) -> Result<Params, Box<dyn Error>> {
    let mut params = Params { api, query: None, interactive: false, help: false };
    let mut name = NameFilter::default();
    let mut conference: Option<Conference> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-n" | "--name" => {
                let v = args.next().ok_or("Missing value for --name")?;
                let mut parts = v.split_whitespace();
                name.first_name = parts.next().map(String::from).unwrap_or_default();
                name.last_name = parts.collect::<Vec<_>>().join(" ");
            }
            "-f" | "--first" => name.first_name = args.next().ok_or("Missing value for --first")?,
            "-l" | "--last" => name.last_name = args.next().ok_or("Missing value for --last")?,
            "-c" | "--conference" => {
                let v = args.next().ok_or("Missing value for --conference")?;
                conference = Some(
                    Conference::parse(&v).ok_or_else(|| format!("Unknown conference: {}", v))?,
                );
            }
            "-k" | "--api-key" => params.api.api_key = args.next().ok_or("Missing value for --api-key")?,
            "--base-url" => params.api.base_url = args.next().ok_or("Missing value for --base-url")?,
            "--per-page" => {
                let v: u32 = args.next().ok_or("Missing value for --per-page")?.parse()?;
                if v == 0 || v > 100 { return Err("--per-page must be 1..100".into()); }
                params.api.per_page = v;
            }
            "--timeout" => {
                let secs: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                params.api.timeout = Some(std::time::Duration::from_secs(secs));
            }
            "-i" | "--interactive" => params.interactive = true,
            "-h" | "--help" => {
                params.help = true;
                return Ok(params);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let has_name = name != NameFilter::default();
    params.query = match (has_name, conference) {
        (true, Some(_)) => return Err("Search by name or by conference, not both".into()),
        (true, None) => Some(Query::Name(name)),
        (false, Some(c)) => Some(Query::Team(c)),
        (false, None) => None,
    };

    if params.query.is_none() && !params.interactive {
        return Err("Specify --name/--first/--last, --conference, or --interactive".into());
    }
    Ok(params)
}

fn one_shot<C: StatsClient>(
    search: &mut SearchCoordinator<C>,
    query: &Query,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    match query {
        Query::Name(filter) => {
            search.select_mode(SearchMode::ByName);
            *search.name_filter_mut() = filter.clone();
        }
        Query::Team(conf) => {
            search.select_mode(SearchMode::ByTeam);
            search.team_filter_mut().conference = Some(*conf);
        }
    }
    search.submit()?;
    search.wait_live();
    print_status(search.display_status(), out)?;

    if let DisplayStatus::Fatal(cause) = search.display_status() {
        return Err(cause.into());
    }
    Ok(())
}

/* ---------------- interactive ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Mode(SearchMode),
    First(String),
    Last(String),
    Conference(Option<Conference>),
    Search,
    Reset,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_ascii_lowercase().as_str() {
            "mode" | "m" => SearchMode::parse(rest)
                .map(Command::Mode)
                .ok_or_else(|| format!("Unknown mode: {} (none|name|team)", rest)),
            "first" | "f" => Ok(Command::First(s!(rest))),
            "last" | "l" => Ok(Command::Last(s!(rest))),
            "conf" | "conference" | "c" if rest.is_empty() => Ok(Command::Conference(None)),
            "conf" | "conference" | "c" => Conference::parse(rest)
                .map(|c| Command::Conference(Some(c)))
                .ok_or_else(|| format!("Unknown conference: {} (east|west)", rest)),
            "search" | "s" | "" => Ok(Command::Search),
            "reset" | "r" => Ok(Command::Reset),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command: {} (try help)", other)),
        }
    }
}

const REPL_HELP: &str = "\
mode none|name|team   pick what to search by (clears everything)
first <text>          first name (name mode)
last <text>           last name (name mode)
conf east|west        conference (team mode)
search                run the query (empty line does the same)
reset                 back to no mode
show                  print current state
quit";

pub fn repl<C: StatsClient>(
    search: &mut SearchCoordinator<C>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    writeln!(out, "Search by: {} (type help)", search.mode().label())?;
    prompt(search, out)?;

    for line in input.lines() {
        let line = line?;
        let cmd = match Command::parse(&line) {
            Ok(cmd) => cmd,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                prompt(search, out)?;
                continue;
            }
        };

        match cmd {
            Command::Mode(mode) => search.select_mode(mode),
            Command::Reset => search.reset(),
            Command::First(v) | Command::Last(v) if search.mode() != SearchMode::ByName => {
                writeln!(out, "Not in name mode; ignored {:?}", v)?;
            }
            Command::First(v) => search.name_filter_mut().first_name = v,
            Command::Last(v) => search.name_filter_mut().last_name = v,
            Command::Conference(_) if search.mode() != SearchMode::ByTeam => {
                writeln!(out, "Not in team mode")?;
            }
            Command::Conference(c) => search.team_filter_mut().conference = c,
            Command::Search => match search.submit() {
                Ok(_) => {
                    search.wait_live();
                    print_status(search.display_status(), out)?;
                    if search.is_fatal() {
                        // Terminal for the session.
                        return Ok(());
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::Show => print_state(search, out)?,
            Command::Help => writeln!(out, "{}", REPL_HELP)?,
            Command::Quit => return Ok(()),
        }
        prompt(search, out)?;
    }
    Ok(())
}

fn prompt<C: StatsClient>(search: &SearchCoordinator<C>, out: &mut impl Write) -> io::Result<()> {
    let tag = match search.mode() {
        SearchMode::None => "-",
        SearchMode::ByName => "name",
        SearchMode::ByTeam => "team",
    };
    write!(out, "[{}]> ", tag)?;
    out.flush()
}

fn print_state<C: StatsClient>(search: &SearchCoordinator<C>, out: &mut impl Write) -> io::Result<()> {
    match search.mode() {
        SearchMode::None => writeln!(out, "mode: {}", SearchMode::None.label()),
        SearchMode::ByName => {
            let f = search.name_filter();
            writeln!(out, "mode: name  first={:?} last={:?}", f.first(), f.last())
        }
        SearchMode::ByTeam => {
            let conf = search.team_filter().conference.map_or("-", Conference::as_str);
            writeln!(out, "mode: team  conference={}", conf)
        }
    }
}

pub fn print_status(status: DisplayStatus<'_>, out: &mut impl Write) -> io::Result<()> {
    if let Some(msg) = status.message() {
        writeln!(out, "{}", msg)?;
    }
    for line in status.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn name_splits_first_and_rest() {
        let p = parse_args(args(&["--name", "Karl Anthony Towns"]), ApiOptions::default()).unwrap();
        assert_eq!(p.query, Some(Query::Name(NameFilter::new("Karl", "Anthony Towns"))));
    }

    #[test]
    fn first_only() {
        let p = parse_args(args(&["-f", "LeBron"]), ApiOptions::default()).unwrap();
        assert_eq!(p.query, Some(Query::Name(NameFilter::new("LeBron", ""))));
    }

    #[test]
    fn conference_and_key() {
        let p = parse_args(args(&["-c", "EAST", "-k", "abc", "--per-page", "50"]), ApiOptions::default()).unwrap();
        assert_eq!(p.query, Some(Query::Team(Conference::East)));
        assert_eq!(p.api.api_key, "abc");
        assert_eq!(p.api.per_page, 50);
    }

    #[test]
    fn both_facets_rejected() {
        assert!(parse_args(args(&["-f", "a", "-c", "west"]), ApiOptions::default()).is_err());
    }

    #[test]
    fn nothing_to_do_rejected() {
        assert!(parse_args(Vec::new(), ApiOptions::default()).is_err());
        assert!(parse_args(args(&["-i"]), ApiOptions::default()).is_ok());
    }

    #[test]
    fn help_short_circuits_parsing() {
        let p = parse_args(args(&["--help", "--bogus"]), ApiOptions::default()).unwrap();
        assert!(p.help);
        assert_eq!(p.query, None);

        let p = parse_args(args(&["-f", "LeBron", "-h"]), ApiOptions::default()).unwrap();
        assert!(p.help);
        assert!(!parse_args(args(&["-i"]), ApiOptions::default()).unwrap().help);
        assert!(HELP.contains("--conference"));
    }

    #[test]
    fn bad_values_rejected() {
        assert!(parse_args(args(&["-c", "north"]), ApiOptions::default()).is_err());
        assert!(parse_args(args(&["--per-page", "0", "-i"]), ApiOptions::default()).is_err());
        assert!(parse_args(args(&["--bogus"]), ApiOptions::default()).is_err());
        assert!(parse_args(args(&["--first"]), ApiOptions::default()).is_err());
    }

    #[test]
    fn command_parsing() {
        assert_eq!(Command::parse("mode name"), Ok(Command::Mode(SearchMode::ByName)));
        assert_eq!(Command::parse("first  Le Bron "), Ok(Command::First(s!("Le Bron"))));
        assert_eq!(Command::parse("conf west"), Ok(Command::Conference(Some(Conference::West))));
        assert_eq!(Command::parse("conf"), Ok(Command::Conference(None)));
        assert_eq!(Command::parse(""), Ok(Command::Search));
        assert_eq!(Command::parse("Q"), Ok(Command::Quit));
        assert!(Command::parse("conf south").is_err());
        assert!(Command::parse("dance").is_err());
    }

    #[test]
    fn print_status_formats_lines() {
        use crate::api::Player;
        let players = vec![Player::new(237, "LeBron", "James")];
        let mut buf = Vec::new();
        print_status(DisplayStatus::Players(&players), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "(237) LeBron James\n");

        let mut buf = Vec::new();
        print_status(DisplayStatus::NoResults, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No results found\n");
    }
}
