//! Entry point for the **aerospace-alfred** workflow binary.
//!
//! `run` executes one action (the workflow's Run Script step) and exits with
//! the `aerospace` exit code.  `filter` prints Script Filter JSON.  Alfred
//! exports item variables as environment variables, so every `run` option
//! also reads the variable of the same name.

use aerospace_alfred::action::ActionRequest;
use aerospace_alfred::aerospace::cli::{AerospaceCli, DEFAULT_BINARY};
use aerospace_alfred::config::{config_dir, Config};
use aerospace_alfred::dispatcher::Dispatcher;
use aerospace_alfred::filter;
use aerospace_alfred::icons::{default_cache_dir, IconCache, SpotlightLocator};
use clap::{Args, Parser, Subcommand};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "aerospace-alfred",
    about = "Alfred workflow backend for the AeroSpace window manager",
    version
)]
struct Cli {
    /// Path or name of the aerospace binary
    #[arg(long, global = true, env = "AEROSPACE_BIN")]
    aerospace_bin: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/aerospace-alfred/config.json)
    #[arg(long, global = true, env = "AEROSPACE_ALFRED_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one workflow action against AeroSpace
    Run(RunArgs),

    /// Print Alfred Script Filter JSON for a query
    Filter {
        /// Query words, joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
}

#[derive(Args)]
struct RunArgs {
    /// The action's main parameter: workspace name, window id or direction
    #[arg(allow_hyphen_values = true)]
    arg: Option<String>,

    /// Action name, e.g. focus-workspace
    #[arg(long, env = "action")]
    action: Option<String>,

    /// Workspace name, used when the positional argument is empty
    #[arg(long, env = "workspace")]
    workspace: Option<String>,

    /// AeroSpace window id
    #[arg(long = "window-id", env = "window_id")]
    window_id: Option<String>,

    /// left, right, up or down
    #[arg(long, env = "direction")]
    direction: Option<String>,
}

impl From<RunArgs> for ActionRequest {
    fn from(args: RunArgs) -> Self {
        ActionRequest {
            action: args.action,
            arg: args.arg,
            workspace: args.workspace,
            window_id: args.window_id,
            direction: args.direction,
        }
    }
}

/// Load the config from `path`, or `$XDG_CONFIG_HOME/aerospace-alfred/config.json`,
/// falling back to compiled-in defaults.
fn load_config(path: Option<&Path>) -> Config {
    let explicit = path.is_some();
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config_dir().join("config.json"));
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) if explicit => {
            warn!("{}, using defaults", e);
            Config::default()
        }
        Err(e) => {
            debug!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let binary = cli
        .aerospace_bin
        .or_else(|| config.aerospace_bin.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BINARY));
    let wm = AerospaceCli::new(binary);

    let code = match cli.command {
        Commands::Run(args) => run_action(wm, args.into()),
        Commands::Filter { query } => run_filter(&wm, &config, &query.join(" ")),
    };
    std::process::exit(code);
}

/// Dispatch one action; diagnostics go to stderr.
fn run_action(wm: AerospaceCli, request: ActionRequest) -> i32 {
    let dispatcher = Dispatcher::new(wm);
    match dispatcher.dispatch(&request) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}

/// Print the Script Filter document for `query`.
fn run_filter(wm: &AerospaceCli, config: &Config, query: &str) -> i32 {
    let mut cache = if config.icons.enabled {
        let dir = config
            .icons
            .cache_dir
            .clone()
            .unwrap_or_else(default_cache_dir);
        IconCache::load(&dir, config.icons.cache_ttl_secs)
    } else {
        IconCache::disabled()
    };

    let (document, code) = match filter::run(wm, &mut cache, &SpotlightLocator::new(), query) {
        Ok(doc) => (doc, 0),
        Err(e) => {
            warn!("script filter failed: {}", e);
            (e.to_document(), 1)
        }
    };

    match serde_json::to_string(&document) {
        Ok(json) => {
            println!("{}", json);
            code
        }
        Err(e) => {
            eprintln!("failed to encode script filter output: {}", e);
            1
        }
    }
}
