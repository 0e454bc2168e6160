//! html-inline CLI - render HTML markup as a single line of plain text

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use html_inline::markup::DEFAULT_TAB_SIZE;
use html_inline::{preformatted, DocType, HtmlInliner, InlineOptions, InlinePreset, QuoteStyle};

#[derive(Parser)]
#[command(name = "html-inline")]
#[command(author = "futape")]
#[command(version)]
#[command(about = "Render HTML markup as a single line of plain text", long_about = None)]
struct Cli {
    /// Input HTML file (stdin if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Also remove headings, page chrome and navigation
    #[arg(long)]
    semantic: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render HTML as inline text
    Inline {
        /// Input HTML file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Also remove headings, page chrome and navigation
        #[arg(long)]
        semantic: bool,

        /// Additional tags to remove with their content
        #[arg(long, value_name = "TAG", value_delimiter = ',')]
        remove: Vec<String>,

        /// JSON options file (replaces the preset)
        #[arg(long, value_name = "JSON", env = "HTML_INLINE_CONFIG")]
        config: Option<PathBuf>,

        /// Entity reference flavour
        #[arg(long, value_enum)]
        doc_type: Option<DocTypeArg>,

        /// Which quote references are decoded
        #[arg(long, value_enum)]
        quotes: Option<QuotesArg>,
    },

    /// Format plain text as whitespace-preserving HTML
    #[command(alias = "pre")]
    Preformat {
        /// Input text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Number of non-breaking spaces per tab
        #[arg(long, default_value_t = DEFAULT_TAB_SIZE)]
        tab_size: usize,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum DocTypeArg {
    /// HTML 4.01 named references
    Html401,
    /// HTML 4.01 names plus &apos;
    Xhtml,
    /// XML predefined references only
    Xml1,
}

impl From<DocTypeArg> for DocType {
    fn from(arg: DocTypeArg) -> Self {
        match arg {
            DocTypeArg::Html401 => DocType::Html401,
            DocTypeArg::Xhtml => DocType::Xhtml,
            DocTypeArg::Xml1 => DocType::Xml1,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum QuotesArg {
    /// Decode double quotes only (default)
    Compat,
    /// Decode double and single quotes
    Quotes,
    /// Decode neither
    #[value(name = "none")]
    NoQuotes,
}

impl From<QuotesArg> for QuoteStyle {
    fn from(arg: QuotesArg) -> Self {
        match arg {
            QuotesArg::Compat => QuoteStyle::Compat,
            QuotesArg::Quotes => QuoteStyle::Quotes,
            QuotesArg::NoQuotes => QuoteStyle::NoQuotes,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Inline {
            input,
            output,
            semantic,
            remove,
            config,
            doc_type,
            quotes,
        }) => build_options(semantic, &remove, config.as_deref(), doc_type, quotes)
            .and_then(|options| cmd_inline(input.as_deref(), output.as_deref(), options)),
        Some(Commands::Preformat {
            input,
            output,
            tab_size,
        }) => cmd_preformat(input.as_deref(), output.as_deref(), tab_size),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render the input with a preset
            let preset = if cli.semantic {
                InlinePreset::Semantic
            } else {
                InlinePreset::Base
            };
            cmd_inline(cli.input.as_deref(), None, InlineOptions::from_preset(preset))
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(
    semantic: bool,
    remove: &[String],
    config: Option<&Path>,
    doc_type: Option<DocTypeArg>,
    quotes: Option<QuotesArg>,
) -> Result<InlineOptions, Box<dyn std::error::Error>> {
    let mut options = match config {
        Some(path) => {
            log::debug!("loading options from {}", path.display());
            InlineOptions::from_json_file(path)?
        }
        None if semantic => InlineOptions::semantic(),
        None => InlineOptions::base(),
    };

    if !remove.is_empty() {
        options = options.with_additional_tags(remove);
    }
    if let Some(doc_type) = doc_type {
        options = options.with_doc_type(doc_type.into());
    }
    if let Some(quotes) = quotes {
        options = options.with_quotes(quotes.into());
    }

    Ok(options)
}

fn read_input(input: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<&Path>, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_inline(
    input: Option<&Path>,
    output: Option<&Path>,
    options: InlineOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = read_input(input)?;
    let inliner = HtmlInliner::new(options);
    log::debug!("removing tags: {}", inliner.tags_to_remove().join(","));

    write_output(output, &inliner.render(&html))
}

fn cmd_preformat(
    input: Option<&Path>,
    output: Option<&Path>,
    tab_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;

    write_output(output, &preformatted(&text, tab_size, QuoteStyle::Compat))
}

fn cmd_version() {
    println!("{} {}", "html-inline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("HTML to inline text renderer");
    println!();
    println!("License: MIT");
}
