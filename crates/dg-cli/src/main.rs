//! CLI frontend for the table-driven dungeon generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(
    name = "dgen",
    about = "Generate dungeon rooms by rolling on probability tables",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding tables/ and custom_tables/
    #[arg(long, global = true, env = "DGEN_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and install the standard tables
    Init {
        /// Overwrite standard tables that already exist
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a new dungeon
    Generate {
        /// Number of rooms (default: 5)
        #[arg(short = 'n', long)]
        rooms: Option<u32>,

        /// Dungeon name (default: "Random Dungeon")
        #[arg(long)]
        name: Option<String>,

        /// Name the dungeon after a theme
        #[arg(short, long, conflicts_with = "name")]
        theme: Option<String>,

        /// RNG seed for a reproducible dungeon
        #[arg(short, long)]
        seed: Option<u64>,

        /// Let custom tables override standard ones
        #[arg(long)]
        custom: bool,

        /// Save the dungeon to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a saved dungeon
    Show {
        /// Dungeon JSON file
        file: PathBuf,

        /// Only show this room
        #[arg(short, long)]
        room: Option<u32>,
    },

    /// Replace one room of a saved dungeon with a new one
    Regenerate {
        /// Dungeon JSON file (rewritten in place)
        file: PathBuf,

        /// Id of the room to replace
        room: u32,

        /// RNG seed for a reproducible room
        #[arg(short, long)]
        seed: Option<u64>,

        /// Let custom tables override standard ones
        #[arg(long)]
        custom: bool,
    },

    /// Export a saved dungeon to another format
    Export {
        /// Dungeon JSON file
        file: PathBuf,

        /// Output format: markdown, text, json
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Roll a dice expression such as 1d100 or 3d6+2
    Roll {
        /// Dice expression
        expr: String,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Inspect and edit probability tables
    Tables {
        #[command(subcommand)]
        command: TablesCommand,
    },

    /// Interactive generation loop
    Console {
        /// Let custom tables override standard ones
        #[arg(long)]
        custom: bool,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Subcommand)]
enum TablesCommand {
    /// List tables in both scopes
    List,

    /// Show a table's entries
    Show {
        /// Table name
        name: String,

        /// Scope: standard or custom
        #[arg(long, default_value = "standard")]
        scope: String,
    },

    /// Create an empty custom table
    Create {
        /// Table name (letters, numbers, underscores)
        name: String,

        /// What the table is for
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Append an entry to a custom table
    AddEntry {
        /// Table name
        table: String,

        /// Outcome text
        name: String,

        /// Lowest roll (1-100)
        min: u32,

        /// Highest roll (1-100)
        max: u32,

        /// Mark the outcome as roll-again
        #[arg(long)]
        roll_again: bool,
    },

    /// Remove an entry from a custom table by row number
    RemoveEntry {
        /// Table name
        table: String,

        /// 1-based row number as shown by `tables show`
        row: usize,
    },

    /// Roll once on a table
    Roll {
        /// Table name
        name: String,

        /// Scope: standard or custom
        #[arg(long, default_value = "standard")]
        scope: String,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = cli.data_dir.as_path();
    let result = match cli.command {
        Commands::Init { force } => commands::init::run(data_dir, force),
        Commands::Generate {
            rooms,
            name,
            theme,
            seed,
            custom,
            output,
        } => commands::generate::run(
            data_dir,
            &commands::generate::Options {
                rooms,
                name,
                theme,
                seed,
                custom,
                output,
            },
        ),
        Commands::Show { file, room } => commands::show::run(&file, room),
        Commands::Regenerate {
            file,
            room,
            seed,
            custom,
        } => commands::regenerate::run(data_dir, &file, room, seed, custom),
        Commands::Export {
            file,
            format,
            output,
        } => commands::export::run(&file, &format, output.as_deref()),
        Commands::Roll { expr, seed } => commands::roll::run(&expr, seed),
        Commands::Tables { command } => match command {
            TablesCommand::List => commands::tables::list(data_dir),
            TablesCommand::Show { name, scope } => commands::tables::show(data_dir, &name, &scope),
            TablesCommand::Create { name, description } => {
                commands::tables::create(data_dir, &name, &description)
            }
            TablesCommand::AddEntry {
                table,
                name,
                min,
                max,
                roll_again,
            } => commands::tables::add_entry(data_dir, &table, &name, min, max, roll_again),
            TablesCommand::RemoveEntry { table, row } => {
                commands::tables::remove_entry(data_dir, &table, row)
            }
            TablesCommand::Roll { name, scope, seed } => {
                commands::tables::roll(data_dir, &name, &scope, seed)
            }
        },
        Commands::Console { custom, seed } => commands::console::run(data_dir, seed, custom),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
