//! undocx CLI - DOCX text extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use undocx::{parse_file, render, JsonFormat, LineEnding, RenderOptions};

/// Input path used when none is given on the command line.
const DEFAULT_INPUT: &str = "input.docx";

/// Output path used when none is given on the command line.
const DEFAULT_OUTPUT: &str = "output.txt";

#[derive(Parser)]
#[command(name = "undocx")]
#[command(version)]
#[command(about = "Extract DOCX paragraph text to plain text and JSON", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output text file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Write CRLF line terminators
    #[arg(long)]
    crlf: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert DOCX to plain text
    Text {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write CRLF line terminators
        #[arg(long)]
        crlf: bool,
    },

    /// Convert DOCX to JSON
    Json {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Text {
            input,
            output,
            crlf,
        }) => cmd_text(&input, output.as_deref(), line_ending(crlf)),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: one-shot conversion with literal defaults
            let input = cli.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            let output = cli.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
            cmd_convert(&input, &output, line_ending(cli.crlf))
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn line_ending(crlf: bool) -> LineEnding {
    if crlf {
        LineEnding::CrLf
    } else {
        LineEnding::Lf
    }
}

fn cmd_convert(
    input: &Path,
    output: &Path,
    line_ending: LineEnding,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = RenderOptions::new().with_line_ending(line_ending);
    undocx::convert_to_file_with_options(input, output, &options)?;

    println!(
        "{} {} -> {}",
        "Converted".green().bold(),
        input.display(),
        output.display()
    );

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    line_ending: LineEnding,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let options = RenderOptions::new().with_line_ending(line_ending);
    let text = render::to_text(&doc, &options)?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", text);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Paragraphs".bold(), doc.paragraph_count());

    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = doc.metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref keywords) = doc.metadata.keywords {
        println!("{}: {}", "Keywords".bold(), keywords);
    }
    if let Some(ref last_modified_by) = doc.metadata.last_modified_by {
        println!("{}: {}", "Last modified by".bold(), last_modified_by);
    }
    if let Some(ref revision) = doc.metadata.revision {
        println!("{}: {}", "Revision".bold(), revision);
    }
    if let Some(ref created) = doc.metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = doc.metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = doc.plain_text();
    let words: usize = text.split_whitespace().count();
    let chars = text.chars().count();

    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), chars);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "undocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("DOCX paragraph text extraction tool");
}
