use std::io::{IsTerminal, Read};

use clap::{Args, CommandFactory, Parser, Subcommand};
use taskdown::{AppError, GenerateOptions};

#[derive(Parser)]
#[command(name = "taskdown")]
#[command(version)]
#[command(
    about = "Resolve prompt templates and variables for AI-assisted Markdown breakdown",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .taskdown/ configuration and base directories
    #[clap(visible_alias = "i")]
    Init,
}

#[derive(Args)]
struct GenerateArgs {
    /// Directive for the generated prompt (e.g. to, summary, defect)
    directive: Option<String>,

    /// Layer the prompt targets (e.g. project, issue, task)
    layer: Option<String>,

    /// Input source path
    #[arg(short, long)]
    from: Option<String>,

    /// Output destination file or directory
    #[arg(short = 'o', long)]
    destination: Option<String>,

    /// Explicit input-layer override
    #[arg(short, long)]
    input: Option<String>,

    /// Prompt filename suffix
    #[arg(short, long)]
    adaptation: Option<String>,

    /// Configuration profile name
    #[arg(short = 'c', long)]
    config: Option<String>,
}

fn main() {
    let (args, custom_variables) = split_custom_variables(std::env::args());
    let cli = Cli::parse_from(args);

    let result: Result<(), AppError> = match cli.command {
        Some(Commands::Init) => run_init(),
        None => run_generate(cli.generate, custom_variables),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_init() -> Result<(), AppError> {
    let path = taskdown::init()?;
    println!("✅ Created {}", path.display());
    Ok(())
}

fn run_generate(
    args: GenerateArgs,
    custom_variables: Vec<(String, String)>,
) -> Result<(), AppError> {
    let GenerateArgs { directive, layer, from, destination, input, adaptation, config } = args;
    let (Some(directive), Some(layer)) = (directive, layer) else {
        Cli::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "two positional parameters <DIRECTIVE> <LAYER> are required",
            )
            .exit();
    };

    let options = GenerateOptions {
        from_file: from,
        destination,
        input_layer: input,
        adaptation,
        config_profile: config,
        custom_variables,
        stdin_text: read_piped_stdin(),
    };

    let generated = taskdown::generate(&directive, &layer, &options)?;
    print!("{}", generated.content);
    Ok(())
}

/// Split `--uv-<name>=<value>` options out of the raw argument list.
///
/// clap cannot express dynamically named flags, so these are peeled off
/// before parsing and handed to the assembler with their prefix intact.
fn split_custom_variables(
    args: impl Iterator<Item = String>,
) -> (Vec<String>, Vec<(String, String)>) {
    let mut rest = Vec::new();
    let mut custom = Vec::new();
    for arg in args {
        if let Some(body) = arg.strip_prefix("--uv-") {
            let (name, value) = body.split_once('=').unwrap_or((body, ""));
            custom.push((format!("uv-{name}"), value.to_string()));
        } else {
            rest.push(arg);
        }
    }
    (rest, custom)
}

fn read_piped_stdin() -> Option<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return None;
    }
    let mut buffer = String::new();
    if stdin.read_to_string(&mut buffer).is_err() || buffer.is_empty() {
        return None;
    }
    Some(buffer)
}
