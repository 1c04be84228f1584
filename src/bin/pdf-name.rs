use clap::{Parser, Subcommand};
use log::{debug, error, info};
use pdf_resources::parser::parse_name;
use pdf_resources::{
    ObjectStore, PdfName, PdfResources, PdfResult, PdfValue, ResourceType, ResourcesConfig,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdf-name")]
#[command(about = "Inspect PDF name escaping and resource name generation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file with resource options
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the lexical form of a UTF-8 name
    Escape {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Decode a lexical name, with or without the leading slash
    Unescape {
        #[arg(value_name = "LEXICAL")]
        lexical: String,
    },

    /// Show the names a resource category would hand out
    Allocate {
        /// Resource category, e.g. Font or XObject
        #[arg(short = 't', long = "category")]
        category: ResourceType,

        /// Number of names to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Names already present in the category
        #[arg(short, long)]
        existing: Vec<String>,

        /// Start from canvas resources instead of an empty dictionary
        #[arg(long)]
        canvas: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_secs()
        .init();

    let result = match cli.command {
        Commands::Escape { text } => handle_escape(&text),
        Commands::Unescape { lexical } => handle_unescape(&lexical),
        Commands::Allocate {
            category,
            count,
            existing,
            canvas,
        } => load_config(cli.config.as_ref())
            .and_then(|config| handle_allocate(category, count, &existing, canvas, &config)),
    };

    if let Err(e) = result {
        error!("Operation failed: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> PdfResult<ResourcesConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            let source = fs::read_to_string(path)?;
            ResourcesConfig::from_toml_str(&source)
        }
        None => Ok(ResourcesConfig::default()),
    }
}

fn handle_escape(text: &str) -> PdfResult<()> {
    let name = PdfName::from_utf8(text)?;
    debug!("Raw bytes: {}", hex(name.as_bytes()));
    println!("{}", name.to_lexical()?);
    Ok(())
}

fn handle_unescape(lexical: &str) -> PdfResult<()> {
    let name = if lexical.starts_with('/') {
        parse_name(lexical.as_bytes())?
    } else {
        PdfName::from_escaped(lexical)
    };
    println!("text: {}", name.as_str());
    println!("raw:  {}", hex(name.as_bytes()));
    Ok(())
}

fn handle_allocate(
    category: ResourceType,
    count: usize,
    existing: &[String],
    canvas: bool,
    config: &ResourcesConfig,
) -> PdfResult<()> {
    let mut store = ObjectStore::new();
    let mut resources = if canvas {
        PdfResources::for_canvas_with(config)
    } else {
        PdfResources::new()
    };

    for key in existing {
        let key = PdfName::from_utf8(key)?;
        resources.add_named_resource(category, key, PdfValue::Null, &mut store)?;
    }

    for _ in 0..count {
        let name = resources.add_resource(category, PdfValue::Null, &mut store)?;
        println!("{}", name.to_lexical()?);
    }

    if canvas {
        println!("{}", resources.dictionary());
    }
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
