use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use commands::{add, clear, config, edit, list, poster, stats, AppContext};
use watchdeck_core::TagFilter;
use watchdeck_models::{ContentType, Platform, Rating};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "watchdeck")]
#[command(about = "Watchdeck - Track the movies, series and documentaries you watch")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a movie, series or documentary to the catalog
    #[command(long_about = "Add a new item. Title, platform and release date are required; use --interactive to be prompted for anything not given on the command line. The poster is resolved from the title once, at creation.")]
    Add {
        /// Title, e.g. "Dune: Part Two"
        title: Option<String>,

        /// Content type
        #[arg(long = "type", short = 't', default_value = "movie")]
        content_type: ContentType,

        /// Platform (netflix, prime, apple, hbo, disney, theaters)
        #[arg(long, short = 'p')]
        platform: Option<Platform>,

        /// Release date (YYYY-MM-DD or RFC 3339)
        #[arg(long, short = 'r', value_name = "DATE")]
        release_date: Option<String>,

        /// Comma-separated genres, e.g. "Drama,Science Fiction"
        #[arg(long, short = 'g')]
        genre: Option<String>,

        /// Prompt for missing fields
        #[arg(long, short = 'i', action = ArgAction::SetTrue)]
        interactive: bool,
    },
    /// List catalog items
    #[command(long_about = "List items in catalog order. Type, search and filter combine: an item is shown only if it matches all of them.")]
    List {
        /// Only show this content type
        #[arg(long = "type", short = 't')]
        content_type: Option<ContentType>,

        /// Named view: favorites, watchLater, history or rated
        #[arg(long, short = 'f')]
        filter: Option<TagFilter>,

        /// Case-insensitive match on title or genre
        #[arg(long, short = 's')]
        search: Option<String>,
    },
    /// Show one item in detail
    Show {
        /// Item id or unique id prefix
        id: String,
    },
    /// Change fields of an existing item
    #[command(long_about = "Update fields of an item. Only the given fields change; the poster and content type are kept. Unknown ids are ignored.")]
    Update {
        /// Item id or unique id prefix
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        platform: Option<Platform>,

        /// Replace genres (comma-separated; empty string clears)
        #[arg(long)]
        genre: Option<String>,

        #[arg(long, value_name = "DATE")]
        release_date: Option<String>,

        #[arg(long)]
        watched: Option<bool>,

        /// Set the rating (1-5)
        #[arg(long, conflicts_with = "clear_rating")]
        rating: Option<Rating>,

        /// Remove the rating
        #[arg(long, action = ArgAction::SetTrue)]
        clear_rating: bool,
    },
    /// Toggle the watched flag
    Watch {
        /// Item id or unique id prefix
        id: String,
    },
    /// Rate an item 1-5; giving the current rating again clears it
    Rate {
        /// Item id or unique id prefix
        id: String,

        /// Stars (1-5)
        stars: Rating,
    },
    /// Move an item to a new position in the catalog
    Move {
        /// Item id or unique id prefix
        id: String,

        /// New 1-based position (values past the end move it last)
        position: usize,
    },
    /// Remove an item from the catalog
    Remove {
        /// Item id or unique id prefix
        id: String,
    },
    /// Show watch progress and platform distribution
    Stats,
    /// Show which poster a title would get
    Poster {
        title: String,

        #[arg(long = "type", short = 't', default_value = "movie")]
        content_type: ContentType,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
    /// Remove every item from the catalog
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short = 'y', action = ArgAction::SetTrue)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration and file locations
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let ctx = AppContext::load().wrap_err("Failed to load configuration")?;

    logging::init_logging(cli.verbose, cli.quiet, &ctx.config.logging)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Add {
            title,
            content_type,
            platform,
            release_date,
            genre,
            interactive,
        } => {
            let args = add::AddArgs {
                title,
                content_type,
                platform,
                release_date,
                genre,
                interactive,
            };
            add::run_add(&ctx, args, &output)
        }
        Commands::List {
            content_type,
            filter,
            search,
        } => list::run_list(&ctx, content_type, filter, search, &output),
        Commands::Show { id } => list::run_show(&ctx, &id, &output),
        Commands::Update {
            id,
            title,
            platform,
            genre,
            release_date,
            watched,
            rating,
            clear_rating,
        } => {
            let args = edit::UpdateArgs {
                title,
                platform,
                genre,
                release_date,
                watched,
                rating,
                clear_rating,
            };
            edit::run_update(&ctx, &id, args, &output)
        }
        Commands::Watch { id } => edit::run_watch(&ctx, &id, &output),
        Commands::Rate { id, stars } => edit::run_rate(&ctx, &id, stars, &output),
        Commands::Move { id, position } => edit::run_move(&ctx, &id, position, &output),
        Commands::Remove { id } => edit::run_remove(&ctx, &id, &output),
        Commands::Stats => stats::run_stats(&ctx, &output),
        Commands::Poster { title, content_type } => poster::run_poster(&ctx, &title, content_type, &output),
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(&ctx, cmd, &output)
        }
        Commands::Clear { yes } => clear::run_clear(&ctx, yes, &output),
    }
}
