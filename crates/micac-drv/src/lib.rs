//! micac-drv - Tokenizer Driver
//!
//! The driver that feeds source files through the Mica front end. It is a
//! thin consumer of `micac-lex`: it reads each input file, tokenizes it,
//! and prints the token stream and/or the lexical table. Lexical errors are
//! rendered as diagnostics with the offending source line.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use micac_lex::{LexOutput, Lexer, KEYWORDS, OPERATORS, SEPARATORS};
use micac_util::Diagnostic;

/// What the driver prints for each input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitType {
    /// Token stream only
    Tokens,
    /// Lexical table only
    Table,
    /// Token stream followed by the lexical table
    All,
}

/// Driver configuration, populated from command-line arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source files to tokenize, in argument order.
    pub input_files: Vec<PathBuf>,
    /// What to print for each file.
    pub emit: EmitType,
    /// Enable debug-level logging.
    pub verbose: bool,
    /// `--help` was requested.
    pub help: bool,
    /// `--version` was requested.
    pub version: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            emit: EmitType::All,
            verbose: false,
            help: false,
            version: false,
        }
    }
}

/// Parse command line arguments (excluding the program name).
pub fn parse_args_from(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--help" || arg == "-h" {
            config.help = true;
            return Ok(config);
        } else if arg == "--version" || arg == "-V" {
            config.version = true;
            return Ok(config);
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else if arg == "--emit" {
            if i + 1 >= args.len() {
                return Err("Missing argument for --emit".to_string());
            }
            i += 1;
            config.emit = match args[i].as_str() {
                "tokens" => EmitType::Tokens,
                "table" => EmitType::Table,
                "all" => EmitType::All,
                _ => return Err(format!("Unknown emit type: {}", args[i])),
            };
        } else if arg.starts_with('-') {
            return Err(format!("Unknown option: {}", arg));
        } else {
            config.input_files.push(PathBuf::from(arg));
        }
        i += 1;
    }

    Ok(config)
}

/// Parse the process's own command line.
pub fn parse_args() -> Result<Config, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(&args)
}

/// Print help message
pub fn print_help() {
    println!("Mica Tokenizer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: micac [OPTIONS] <input files>");
    println!();
    println!("Options:");
    println!("  -h, --help           Print this help message");
    println!("  -V, --version        Print version information");
    println!("  -v, --verbose        Enable verbose output");
    println!("  --emit <TYPE>        Output type: tokens, table, all (default: all)");
    println!();
    println!("Examples:");
    println!("  micac hello.mica              Print tokens and lexical table");
    println!("  micac --emit tokens hello.mica");
}

/// Print version
pub fn print_version() {
    println!("micac {}", env!("CARGO_PKG_VERSION"));
}

/// Initialize the logging system.
///
/// Verbose mode selects debug level; otherwise only info and above are
/// shown. Log output goes to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}

/// A tokenization session over the configured input files.
pub struct Session {
    /// The parsed driver configuration.
    pub config: Config,
}

impl Session {
    /// Create a session for the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Tokenize every input file and print the requested output.
    ///
    /// The first lexical error aborts the session: the diagnostic is
    /// rendered to stderr and an error is returned.
    pub fn run(&self) -> Result<()> {
        let show_headers = self.config.input_files.len() > 1;

        for path in &self.config.input_files {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;

            debug!(path = %path.display(), "lexing");

            let output = match Lexer::new(&source).tokenize() {
                Ok(output) => output,
                Err(err) => {
                    let diag = Diagnostic::error(err.message(), err.span()).with_source(&source);
                    eprintln!("{}", diag);
                    bail!("could not tokenize {}", path.display());
                }
            };

            debug!(tokens = output.tokens.len(), "lexed");

            if show_headers {
                println!("==> {} <==", path.display());
            }
            if self.config.emit != EmitType::Table {
                print!("{}", format_tokens(&output));
            }
            if self.config.emit != EmitType::Tokens {
                print!("{}", format_table(&output));
            }
        }

        Ok(())
    }
}

/// Render the token stream, one token per line.
pub fn format_tokens(output: &LexOutput) -> String {
    let mut out = String::new();
    for token in &output.tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// Render the lexical table report: the sorted identifier and constant
/// sets, plus the fixed keyword/operator/separator lists for reference.
pub fn format_table(output: &LexOutput) -> String {
    let constants: Vec<String> = output
        .table
        .constants()
        .iter()
        .map(|c| format!("{:?}", c))
        .collect();
    let separators: Vec<String> = SEPARATORS.iter().map(|c| c.to_string()).collect();

    let mut out = String::new();
    out.push_str("--- lexical table ---\n");
    out.push_str(&format!(
        "identifiers: {}\n",
        output.table.identifiers().join(", ")
    ));
    out.push_str(&format!("constants:   {}\n", constants.join(", ")));
    out.push_str(&format!("keywords:    {}\n", KEYWORDS.join(", ")));
    out.push_str(&format!("operators:   {}\n", OPERATORS.join(" ")));
    out.push_str(&format!("separators:  {}\n", separators.join(" ")));
    out
}

/// Driver entry point: parse arguments, set up logging, run the session.
pub fn run() -> Result<()> {
    let config = parse_args().map_err(|e| anyhow::anyhow!(e))?;

    if config.help {
        print_help();
        return Ok(());
    }
    if config.version {
        print_version();
        return Ok(());
    }

    init_logging(config.verbose)?;

    if config.input_files.is_empty() {
        bail!("no input files (try --help)");
    }

    Session::new(config).run()
}
