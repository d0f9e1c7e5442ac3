//! CLI frontend for drawing tarot cards and keeping a reading journal.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use commands::GlobalOpts;

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Tarot: draw cards, lay out spreads and keep a reading journal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Directory for history and settings (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Card image directory; repeat to search several in order
    #[arg(long = "assets", global = true)]
    assets: Vec<PathBuf>,

    /// RNG seed for reproducible draws
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a spread and show the cards
    Draw {
        /// Spread name (see `tarot spreads`)
        #[arg(default_value = "Single Card")]
        spread: String,

        /// Do not record the reading in history
        #[arg(long)]
        no_save: bool,
    },

    /// List the available spreads
    Spreads,

    /// List all 78 cards in deck order
    Deck,

    /// Show past readings, most recent first
    History {
        /// Maximum number of readings to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Write, list or export journal entries
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },

    /// Show which image file a card resolves to
    Resolve {
        /// Card identifier, e.g. "The Fool" or "Ace of Wands"
        card: String,
    },
}

#[derive(Subcommand)]
enum JournalAction {
    /// Add a journal entry
    Add {
        /// Entry text
        text: String,
    },

    /// List journal entries, most recent first
    List,

    /// Export readings and journal
    Export {
        /// Output format: markdown, text
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Set a flag: sound or animation, to on or off
    Set {
        /// Setting name
        key: String,
        /// New value (on, off, true, false)
        value: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let opts = GlobalOpts {
        data_dir: cli.global.data_dir,
        assets: cli.global.assets,
        seed: cli.global.seed,
    };

    let result = match cli.command {
        Commands::Draw { spread, no_save } => commands::draw::run(&opts, &spread, !no_save),
        Commands::Spreads => commands::spreads::run(&opts),
        Commands::Deck => commands::deck::run(&opts),
        Commands::History { limit } => commands::history::run(&opts, limit),
        Commands::Journal { action } => match action {
            JournalAction::Add { text } => commands::journal::add(&opts, &text),
            JournalAction::List => commands::journal::list(&opts),
            JournalAction::Export { format, output } => {
                commands::journal::export(&opts, &format, output.as_deref())
            }
        },
        Commands::Settings { action } => match action {
            None => commands::settings::show(&opts),
            Some(SettingsAction::Set { key, value }) => {
                commands::settings::set(&opts, &key, &value)
            }
        },
        Commands::Resolve { card } => commands::resolve::run(&opts, &card),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
