//! CLI argument parsing module
//!
//! This module handles command-line argument parsing and application entry point.

use crate::browser::CompatibilityMode;
use crate::config::{Config, OutputConfig};
use crate::cookies::{DocCookies, Expiry, SameSiteInput, WriteAttributes};
use crate::error::{CookieError, Result};
use crate::exit_code::{exit_code_for_error, EXIT_FALSE};
use crate::output::OutputWriter;
use crate::store::FileStore;
use crate::utils::DateUtils;
use clap::{Arg, ArgAction, ArgMatches, Command};

/// Main entry point for the CLI application
pub fn run() {
    let matches = create_app().get_matches();
    crate::logging::init(matches.get_flag("verbose"));

    match run_with_args(&matches) {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_FALSE),
        Err(e) => {
            eprintln!("doc-cookies: error: {}", e);
            std::process::exit(exit_code_for_error(&e));
        }
    }
}

/// Run with parsed arguments; `Ok(false)` means the operation reported failure
pub fn run_with_args(matches: &ArgMatches) -> Result<bool> {
    let config = build_config_from_args(matches);
    let mut output = OutputWriter::stdout(config.output.clone());

    let Some((subcommand, sub)) = matches.subcommand() else {
        return Err(CookieError::Config("No subcommand given".to_string()));
    };

    if subcommand == "check-ua" {
        let user_agent = sub
            .get_one::<String>("agent")
            .unwrap_or(&config.user_agent);
        let mode = CompatibilityMode::detect(user_agent);
        output.write_compatibility(user_agent, mode.allows_same_site_none())?;
        return Ok(true);
    }

    let store_path = config.resolve_store_path()?;
    output.write_verbose(&format!("Using cookie store {}", store_path.display()));
    let mut cookies = DocCookies::new(FileStore::new(store_path), config.compatibility_mode());
    output.write_verbose(&format!(
        "SameSite=None {}",
        if cookies.mode().allows_same_site_none() {
            "allowed"
        } else {
            "suppressed"
        }
    ));

    match subcommand {
        "set" => {
            let name = required(sub, "name")?;
            let value = required(sub, "value")?;
            let attributes = build_attributes(sub).expiry(parse_expiry(sub));
            let outcome = cookies.set_item(name, value, &attributes)?;
            output.write_outcome("set", name, outcome)?;
            Ok(outcome)
        }
        "get" => {
            let name = required(sub, "name")?;
            let value = cookies.get_item(name)?;
            output.write_value(name, value.as_deref())?;
            Ok(value.is_some())
        }
        "has" => {
            let name = required(sub, "name")?;
            let outcome = cookies.has_item(name)?;
            output.write_outcome("has", name, outcome)?;
            Ok(outcome)
        }
        "remove" => {
            let name = required(sub, "name")?;
            let attributes = build_attributes(sub);
            let outcome = cookies.remove_item(name, &attributes)?;
            output.write_outcome("remove", name, outcome)?;
            Ok(outcome)
        }
        "keys" => {
            output.write_keys(&cookies.keys()?)?;
            Ok(true)
        }
        "clear" => {
            let attributes = build_attributes(sub);
            cookies.clear(&attributes)?;
            Ok(true)
        }
        other => Err(CookieError::Config(format!("Unknown subcommand: {}", other))),
    }
}

/// Create the CLI application structure
pub fn create_app() -> Command {
    Command::new("doc-cookies")
        .version(crate::VERSION)
        .about("Read and write document.cookie style cookies")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(Arg::new("store")
            .long("store")
            .value_name("FILE")
            .env("DOC_COOKIES_STORE")
            .global(true)
            .help("Cookie store file"))
        .arg(Arg::new("user-agent")
            .short('A')
            .long("user-agent")
            .value_name("STRING")
            .env("DOC_COOKIES_USER_AGENT")
            .global(true)
            .help("User agent used to decide whether SameSite=None is emitted"))
        .arg(Arg::new("json")
            .long("json")
            .global(true)
            .help("Print results as JSON")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .global(true)
            .help("Verbose output")
            .action(ArgAction::SetTrue))
        .subcommand(with_attribute_args(
            Command::new("set")
                .about("Create or overwrite a cookie")
                .arg(name_arg())
                .arg(Arg::new("value")
                    .help("Cookie value")
                    .required(true)
                    .index(2))
                .arg(Arg::new("max-age")
                    .long("max-age")
                    .value_name("SECONDS")
                    .value_parser(clap::value_parser!(u64))
                    .conflicts_with_all(["expires", "forever"])
                    .help("Lifetime in seconds"))
                .arg(Arg::new("expires")
                    .long("expires")
                    .value_name("DATE")
                    .conflicts_with("forever")
                    .help("Expiry date, e.g. 'Fri, 31 Dec 2027 23:59:59 GMT'"))
                .arg(Arg::new("forever")
                    .long("forever")
                    .help("Never expire")
                    .action(ArgAction::SetTrue)),
        ))
        .subcommand(Command::new("get")
            .about("Print a cookie's value")
            .arg(name_arg()))
        .subcommand(Command::new("has")
            .about("Check whether a cookie exists")
            .arg(name_arg()))
        .subcommand(with_attribute_args(
            Command::new("remove")
                .about("Expire a cookie")
                .arg(name_arg()),
        ))
        .subcommand(Command::new("keys")
            .about("List cookie names"))
        .subcommand(with_attribute_args(
            Command::new("clear")
                .about("Expire every cookie set with the given attributes"),
        ))
        .subcommand(Command::new("check-ua")
            .about("Report whether SameSite=None is safe for a user agent")
            .arg(Arg::new("agent")
                .value_name("USER_AGENT")
                .help("User agent string (defaults to --user-agent)")
                .index(1)))
}

fn name_arg() -> Arg {
    Arg::new("name")
        .help("Cookie name")
        .required(true)
        .index(1)
}

fn with_attribute_args(command: Command) -> Command {
    command
        .arg(Arg::new("path")
            .long("path")
            .value_name("PATH")
            .help("Cookie path"))
        .arg(Arg::new("domain")
            .long("domain")
            .value_name("DOMAIN")
            .help("Cookie domain"))
        .arg(Arg::new("secure")
            .long("secure")
            .help("Secure cookie")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("same-site")
            .long("same-site")
            .value_name("POLICY")
            .allow_hyphen_values(true)
            .help("strict, lax, no_restriction, or a legacy alias: numbers read as text (1, -1), true/false as booleans (false means none)"))
}

/// Build configuration from command line arguments
pub fn build_config_from_args(matches: &ArgMatches) -> Config {
    let mut config = Config::default();

    if let Some(store) = matches.get_one::<String>("store") {
        config.store_path = store.clone();
    }
    if let Some(user_agent) = matches.get_one::<String>("user-agent") {
        config.user_agent = user_agent.clone();
    }
    config.output = OutputConfig {
        verbose: matches.get_flag("verbose"),
        format_json: matches.get_flag("json"),
    };

    config
}

fn build_attributes(matches: &ArgMatches) -> WriteAttributes {
    let mut attributes = WriteAttributes::new().secure(matches.get_flag("secure"));

    if let Some(path) = matches.get_one::<String>("path") {
        attributes = attributes.path(path.clone());
    }
    if let Some(domain) = matches.get_one::<String>("domain") {
        attributes = attributes.domain(domain.clone());
    }
    if let Some(same_site) = matches.get_one::<String>("same-site") {
        attributes = attributes.same_site(parse_same_site(same_site));
    }

    attributes
}

/// Expiry flags of `set`; a date that does not parse is passed through verbatim
fn parse_expiry(matches: &ArgMatches) -> Expiry {
    if matches.get_flag("forever") {
        return Expiry::Infinite;
    }
    if let Some(seconds) = matches.get_one::<u64>("max-age") {
        return Expiry::RelativeSeconds(*seconds);
    }
    if let Some(expires) = matches.get_one::<String>("expires") {
        return match DateUtils::parse_utc_string(expires) {
            Some(date) => Expiry::AbsoluteDate(date),
            None => Expiry::Raw(expires.clone()),
        };
    }
    Expiry::Session
}

/// Read a same-site flag the way the legacy API accepted it
///
/// `true` and `false` are the boolean aliases; everything else, numbers
/// included, goes through the text rules.
pub fn parse_same_site(input: &str) -> SameSiteInput {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" => SameSiteInput::Flag(true),
        "false" => SameSiteInput::Flag(false),
        _ => SameSiteInput::Text(input.to_string()),
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(id)
        .ok_or_else(|| CookieError::Config(format!("Missing argument: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::{
        build_attributes, build_config_from_args, create_app, parse_expiry, parse_same_site,
    };
    use crate::cookies::{Expiry, SameSite, SameSiteInput};

    #[test]
    fn cli_definition_is_consistent() {
        create_app().debug_assert();
    }

    #[test]
    fn set_parses_attributes() {
        let matches = create_app()
            .try_get_matches_from([
                "doc-cookies", "set", "n", "v", "--max-age", "60", "--path", "/", "--domain",
                "example.com", "--secure", "--same-site", "-1",
            ])
            .expect("matches");
        let (_, sub) = matches.subcommand().expect("subcommand");
        let attributes = build_attributes(sub);
        assert_eq!(parse_expiry(sub), Expiry::RelativeSeconds(60));
        assert_eq!(attributes.path.as_deref(), Some("/"));
        assert_eq!(attributes.domain.as_deref(), Some("example.com"));
        assert!(attributes.secure);
        assert_eq!(attributes.same_site.normalize(), SameSite::None);
    }

    #[test]
    fn set_parses_expires_date_and_raw() {
        let matches = create_app()
            .try_get_matches_from([
                "doc-cookies", "set", "n", "v", "--expires", "Fri, 31 Dec 9999 23:59:59 GMT",
            ])
            .expect("matches");
        let (_, sub) = matches.subcommand().expect("subcommand");
        assert!(matches!(parse_expiry(sub), Expiry::AbsoluteDate(_)));

        let matches = create_app()
            .try_get_matches_from(["doc-cookies", "set", "n", "v", "--expires", "soon"])
            .expect("matches");
        let (_, sub) = matches.subcommand().expect("subcommand");
        assert_eq!(parse_expiry(sub), Expiry::Raw("soon".to_string()));
    }

    #[test]
    fn remove_attributes_are_session_scoped() {
        let matches = create_app()
            .try_get_matches_from(["doc-cookies", "remove", "n", "--path", "/"])
            .expect("matches");
        let (_, sub) = matches.subcommand().expect("subcommand");
        assert_eq!(build_attributes(sub).expiry, Expiry::Session);
    }

    #[test]
    fn max_age_conflicts_with_forever() {
        let result = create_app().try_get_matches_from([
            "doc-cookies", "set", "n", "v", "--max-age", "1", "--forever",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_build_config() {
        let matches = create_app()
            .try_get_matches_from([
                "doc-cookies", "keys", "--store", "/tmp/jar.json", "--json", "-A", "Chrome/60.0",
            ])
            .expect("matches");
        let config = build_config_from_args(&matches);
        assert_eq!(config.store_path, "/tmp/jar.json");
        assert_eq!(config.user_agent, "Chrome/60.0");
        assert!(config.output.format_json);
        assert!(!config.compatibility_mode().allows_same_site_none());
    }

    #[test]
    fn same_site_flag_keeps_legacy_types() {
        assert_eq!(parse_same_site("true"), SameSiteInput::Flag(true));
        assert_eq!(parse_same_site("False"), SameSiteInput::Flag(false));
        assert_eq!(parse_same_site("0.5"), SameSiteInput::Text("0.5".to_string()));
        assert_eq!(parse_same_site("Lax"), SameSiteInput::Text("Lax".to_string()));
    }

    #[test]
    fn same_site_flag_numbers_follow_text_rules() {
        assert_eq!(parse_same_site("nan").normalize(), SameSite::Strict);
        assert_eq!(parse_same_site("-1").normalize(), SameSite::None);
        assert_eq!(parse_same_site("0.5").normalize(), SameSite::Lax);
        assert_eq!(parse_same_site("false").normalize(), SameSite::None);
    }
}
