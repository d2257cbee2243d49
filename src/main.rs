use clap::{Args, Parser as ClapParser, Subcommand};
use letcfg::InputFormat;
use letcfg::cli::{self, CliError, TranslateOptions, TranslateResult};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "letcfg")]
#[command(about = "letcfg - Translate TOML with constants and expressions into a bracketed config format")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a document (the default when no command is given)
    Translate(TranslateArgs),

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'letcfg docs' to list categories)
        category: String,
    },
}

#[derive(Args, Clone)]
struct TranslateArgs {
    /// Input file (reads from stdin if not provided)
    file: Option<PathBuf>,

    /// Syntax of the input document
    #[arg(short, long, default_value = "toml", value_parser = parse_format)]
    format: InputFormat,

    /// Print the declared constants as JSON instead of the translated document
    #[arg(long)]
    dump_constants: bool,
}

fn parse_format(s: &str) -> Result<InputFormat, String> {
    InputFormat::from_name(s).ok_or_else(|| format!("unknown format '{}' (expected toml or json)", s))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Translate(args)) => run_translate(args),
        Some(Commands::Docs) => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Some(Commands::Doc { category }) => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
        None => run_translate(cli.translate),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_translate(args: TranslateArgs) -> Result<(), CliError> {
    let input = match args.file {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = TranslateOptions {
        input,
        format: args.format,
        dump_constants: args.dump_constants,
    };

    match cli::execute_translate(&options)? {
        TranslateResult::Lines(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        TranslateResult::Constants(constants) => {
            println!("{}", serde_json::to_string_pretty(&constants)?);
        }
    }
    Ok(())
}
