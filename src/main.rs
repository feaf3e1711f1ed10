//! trellis - Render markdown-style text and pages to HTML

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use trellis::export::DirectorySink;
use trellis::markdown;
use trellis::page::PageConfig;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(version, about = "Render markdown-style text and pages to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    trellis render notes.txt               Print the HTML fragment for notes.txt
    echo '# Hi' | trellis render           Read text from stdin
    trellis page home.json                 Print the page described by home.json
    trellis page home.json -o views        Write views/home.html")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transform text into an HTML fragment
    Render {
        /// Input file (reads stdin when omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
    },
    /// Build a full page from a JSON description
    Page {
        /// Page description (JSON)
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Write the page into this directory instead of stdout
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// View name; defaults to the config file stem
        #[arg(short, long)]
        name: Option<String>,

        /// File extension for written views
        #[arg(long, default_value = "html")]
        extension: String,
    },
}

fn init_tracing(verbose: u8) {
    if verbose == 0 && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "warn,trellis=info".to_string(),
            2 => "info,trellis=debug".to_string(),
            _ => "debug,trellis=trace".to_string(),
        },
    };
    let filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Render { input } => render(input),
        Command::Page {
            config,
            out_dir,
            name,
            extension,
        } => build_page(config, out_dir, name, extension),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn render(input: Option<PathBuf>) -> Result<(), String> {
    let text = match input {
        Some(path) => fs::read_to_string(&path)
            .map_err(|e| format!("{}: {e}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| e.to_string())?;
            text
        }
    };

    let html = markdown::transform(&text).map_err(|e| e.to_string())?;
    println!("{html}");
    Ok(())
}

fn build_page(
    config_path: PathBuf,
    out_dir: Option<PathBuf>,
    name: Option<String>,
    extension: String,
) -> Result<(), String> {
    let json = fs::read_to_string(&config_path)
        .map_err(|e| format!("{}: {e}", config_path.display()))?;
    let config = PageConfig::from_json(&json).map_err(|e| e.to_string())?;
    debug!(title = %config.title, dependencies = config.dependencies.len(), "loaded page config");

    let page = config.build().map_err(|e| e.to_string())?;

    match out_dir {
        Some(dir) => {
            let name = match name {
                Some(name) => name,
                None => config_path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .ok_or_else(|| "cannot derive a view name; pass --name".to_string())?,
            };
            let sink = DirectorySink::new(dir).with_extension(extension);
            page.save(&sink, &name).map_err(|e| e.to_string())?;
            println!("{}", sink.path_for(&name).map_err(|e| e.to_string())?.display());
        }
        None => println!("{}", page.render()),
    }

    Ok(())
}
