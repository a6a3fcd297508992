//! Domain Scout CLI Application
//!
//! A command-line interface for resolving domain availability from DNS and
//! RDAP evidence. This CLI application provides a user-friendly interface
//! to the domain-scout-lib library.

mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use domain_scout_lib::{parse_timeout, CheckConfig, ConfigManager, DomainResolver, FileConfig};
use std::process;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for domain-scout
#[derive(Parser, Debug)]
#[command(name = "domain-scout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve domain availability from DNS presence and RDAP records")]
#[command(
    long_about = "Resolve domain availability by combining live DNS probes with registry RDAP records.\n\nCheck a single domain for its registration details, or scan a keyword across a TLD list to find available names."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Fully qualified domain to check (e.g. example.com)
    #[arg(value_name = "DOMAIN", help_heading = "Lookup")]
    pub domain: Option<String>,

    /// Keyword to scan across a TLD list instead of checking one domain
    #[arg(
        short = 'k',
        long = "keyword",
        value_name = "KEYWORD",
        help_heading = "Lookup"
    )]
    pub keyword: Option<String>,

    /// TLDs for keyword scans (comma-separated or multiple -t flags)
    #[arg(short = 't', long = "tld", value_name = "TLD", value_delimiter = ',', action = clap::ArgAction::Append, help_heading = "Lookup")]
    pub tlds: Option<Vec<String>>,

    /// Per-probe timeout (e.g. "5s", "500ms")
    #[arg(long = "timeout", value_name = "DURATION", help_heading = "Performance")]
    pub timeout: Option<String>,

    /// Output results in JSON format
    #[arg(short = 'j', long = "json", help_heading = "Output Format")]
    pub json: bool,

    /// Colored output with per-TLD progress during scans
    #[arg(short = 'p', long = "pretty", help_heading = "Output Format")]
    pub pretty: bool,

    /// Use specific config file instead of automatic discovery
    #[arg(long = "config", value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Verbose logging to stderr
    #[arg(short = 'v', long = "verbose", help_heading = "Configuration")]
    pub verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Validate arguments
    if let Err(e) = validate_args(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Set up logging if verbose
    if args.verbose {
        init_logging();
    }

    // Run the resolution
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Validate command line arguments
fn validate_args(args: &Args) -> Result<(), String> {
    // Must have exactly one lookup target
    match (&args.domain, &args.keyword) {
        (None, None) => {
            return Err(
                "You must specify a domain to check, or a keyword with -k/--keyword".to_string(),
            );
        }
        (Some(_), Some(_)) => {
            return Err(
                "Cannot specify both a domain and a keyword. Use one or the other".to_string(),
            );
        }
        _ => {}
    }

    // TLD lists only apply to keyword scans
    if args.tlds.is_some() && args.keyword.is_none() {
        return Err("-t/--tld only applies to keyword scans (-k/--keyword)".to_string());
    }

    // Can't have conflicting output modes
    if args.json && args.pretty {
        return Err("Cannot specify both --json and --pretty output".to_string());
    }

    Ok(())
}

/// Route tracing output to stderr so stdout stays machine-readable.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("domain_scout=debug,domain_scout_lib=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main resolution logic
async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Load file configuration (explicit file or discovery chain)
    let file_config = load_file_config(&args)?;

    let pretty = use_pretty(&args, &file_config);

    // File defaults first, then CLI args on top
    let config = build_config(&args, &file_config)?;
    let resolver = DomainResolver::with_config(config)?;

    if let Some(domain) = &args.domain {
        run_check(&resolver, domain, &args, pretty).await
    } else if let Some(keyword) = &args.keyword {
        run_scan(&resolver, keyword, &args, pretty).await
    } else {
        unreachable!("validate_args guarantees a lookup target")
    }
}

/// Decide whether output should be pretty-styled.
///
/// A file config may default `pretty` on, but an explicit `--json` is a
/// machine-readable contract and always wins over file defaults.
fn use_pretty(args: &Args, file_config: &FileConfig) -> bool {
    if args.json {
        return false;
    }

    args.pretty
        || file_config
            .defaults
            .as_ref()
            .and_then(|d| d.pretty)
            .unwrap_or(false)
}

/// Load configuration from an explicit file or standard discovery paths.
fn load_file_config(args: &Args) -> Result<FileConfig, Box<dyn std::error::Error>> {
    let manager = ConfigManager::new(args.verbose);

    let config = match &args.config {
        // Explicit file must exist and parse - hard error otherwise
        Some(path) => manager.load_file(path)?,
        None => manager.discover_and_load()?,
    };

    Ok(config)
}

/// Build the resolver configuration from file defaults and CLI overrides.
fn build_config(args: &Args, file_config: &FileConfig) -> Result<CheckConfig, Box<dyn std::error::Error>> {
    let mut config = file_config.apply(CheckConfig::default())?;

    if let Some(timeout) = &args.timeout {
        let timeout = parse_timeout(timeout)?;
        config.dns_timeout = timeout;
        config.rdap_timeout = timeout;
    }

    if let Some(tlds) = &args.tlds {
        let tlds: Vec<String> = tlds.iter().map(|t| t.trim().to_lowercase()).collect();
        config.tlds = Some(tlds);
    }

    Ok(config)
}

/// Check a single domain and print the verdict.
async fn run_check(
    resolver: &DomainResolver,
    domain: &str,
    args: &Args,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let verdict = resolver.resolve(domain).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else if pretty {
        ui::print_verdict(&verdict);
    } else {
        println!("{}", verdict);
    }

    Ok(())
}

/// Scan a keyword across the configured TLD list.
///
/// In pretty mode results stream to the terminal as each candidate
/// completes; otherwise the full report is printed at the end.
async fn run_scan(
    resolver: &DomainResolver,
    keyword: &str,
    args: &Args,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !pretty {
        let report = resolver.scan(keyword).await?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            // The report text is already newline-terminated
            print!("{}", report);
        }

        return Ok(());
    }

    use futures_util::StreamExt;

    let tlds = resolver.config().scan_tlds();
    ui::print_scan_header(keyword, tlds.len());

    let mut available = Vec::new();
    let mut completed = 0usize;
    let total = tlds.len();

    let mut stream = resolver.scan_stream(keyword)?;
    while let Some(outcome) = stream.next().await {
        completed += 1;
        ui::print_scan_line(&outcome, (completed, total));
        if outcome.available {
            available.push(outcome.domain);
        }
    }

    ui::print_scan_summary(keyword, total, &available);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            domain: None,
            keyword: None,
            tlds: None,
            timeout: None,
            json: false,
            pretty: false,
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_requires_target() {
        let args = base_args();
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_rejects_domain_and_keyword() {
        let mut args = base_args();
        args.domain = Some("example.com".to_string());
        args.keyword = Some("example".to_string());
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_rejects_tlds_without_keyword() {
        let mut args = base_args();
        args.domain = Some("example.com".to_string());
        args.tlds = Some(vec!["com".to_string()]);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_rejects_conflicting_output() {
        let mut args = base_args();
        args.keyword = Some("example".to_string());
        args.json = true;
        args.pretty = true;
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_accepts_scan_with_tlds() {
        let mut args = base_args();
        args.keyword = Some("example".to_string());
        args.tlds = Some(vec!["com".to_string(), "io".to_string()]);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_json_flag_wins_over_file_pretty_default() {
        use domain_scout_lib::DefaultsConfig;

        let file_config = FileConfig {
            defaults: Some(DefaultsConfig {
                tlds: None,
                timeout: None,
                pretty: Some(true),
            }),
        };

        let mut args = base_args();
        args.keyword = Some("example".to_string());
        args.json = true;
        assert!(!use_pretty(&args, &file_config));

        // Without --json the file default does turn pretty on
        args.json = false;
        assert!(use_pretty(&args, &file_config));
    }

    #[test]
    fn test_pretty_defaults_off() {
        let mut args = base_args();
        args.keyword = Some("example".to_string());
        assert!(!use_pretty(&args, &FileConfig::default()));

        args.pretty = true;
        assert!(use_pretty(&args, &FileConfig::default()));
    }

    #[test]
    fn test_build_config_cli_overrides_file() {
        use domain_scout_lib::DefaultsConfig;
        use std::time::Duration;

        let mut args = base_args();
        args.keyword = Some("example".to_string());
        args.tlds = Some(vec!["IO".to_string(), "dev".to_string()]);
        args.timeout = Some("2s".to_string());

        let file_config = FileConfig {
            defaults: Some(DefaultsConfig {
                tlds: Some(vec!["com".to_string()]),
                timeout: Some("9s".to_string()),
                pretty: None,
            }),
        };

        let config = build_config(&args, &file_config).unwrap();
        assert_eq!(config.dns_timeout, Duration::from_secs(2));
        assert_eq!(config.scan_tlds(), vec!["io", "dev"]);
    }
}
