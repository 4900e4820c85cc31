use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use teamline_core::{
    LayoutOptions, ViewState, Zoom, build_day_grid, build_timeline, checked_resolve_window,
    present_expanded, rank_users, time::parse_day,
};
use teamline_ingest::load_board;
use tracing::{info, warn};

mod config;
mod logging;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(name = "teamline", version, about = "Team task timeline layout")]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Less log output (-q warn, -qq error)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the visible week and its day grid
    Window {
        /// Reference date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Weeks forward (+) or back (-) from the reference week
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,

        /// Zoom factor, 0.5..=2.0
        #[arg(long, default_value_t = 1.0)]
        zoom: f64,
    },

    /// Lay out a board export as per-user timeline rows
    Layout {
        /// Board export JSON ({"users": [...], "tasks": [...]})
        #[arg(long)]
        input: PathBuf,

        /// Reference date for week navigation (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Day used for urgency, "today" counters and ranking (default: today)
        #[arg(long)]
        today: Option<String>,

        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,

        #[arg(long, default_value_t = 1.0)]
        zoom: f64,

        /// Expand a user's lane (repeatable)
        #[arg(long = "expand")]
        expand: Vec<String>,

        /// Expand every lane
        #[arg(long)]
        expand_all: bool,

        /// Order users by tasks relevant today, then by task count
        #[arg(long)]
        rank: bool,

        /// Add a lane for tasks with no known assignee
        #[arg(long)]
        unassigned: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Classify every task's due-date urgency
    Urgency {
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        today: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Rank users by tasks relevant to a day
    Rank {
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        date: Option<String>,
    },

    /// Config file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config.toml if none exists
    Init,
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet)?;

    let cfg = config::load_config()?;
    info!(timezone = %cfg.board.timezone, "config loaded");

    match cli.command {
        Command::Window { date, offset, zoom } => {
            let reference = day_or_today(date.as_deref(), &cfg)?;
            let window = checked_resolve_window(reference, offset)?;
            let grid = build_day_grid(&window, Zoom::new(zoom)?);
            print!("{}", render::render_grid(&grid));
        }

        Command::Layout {
            input,
            date,
            today,
            offset,
            zoom,
            expand,
            expand_all,
            rank,
            unassigned,
            json,
        } => {
            let reference = day_or_today(date.as_deref(), &cfg)?;
            let today = day_or_today(today.as_deref(), &cfg)?;
            checked_resolve_window(reference, offset)?;
            let board = load_board(&input, cfg.timezone()?, unassigned)
                .with_context(|| format!("loading {}", input.display()))?;
            if board.without_created_at > 0 {
                warn!(count = board.without_created_at, "tasks without createdAt are not shown");
            }

            let mut view = ViewState::new()
                .with_week_offset(offset)
                .with_zoom(Zoom::new(zoom)?)
                .with_expanded(expand);
            if expand_all {
                view.expand_all(&board.groups);
            }
            let present = present_expanded(&board.groups, &view.expanded);
            for missing in view.expanded.difference(&present) {
                warn!(user = %missing, "--expand names a user not on this board");
            }

            let layout = build_timeline(
                &board.groups,
                &view,
                reference,
                today,
                LayoutOptions { rank_users: rank },
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                print!("{}", render::render_layout(&layout, &cfg.view));
            }
        }

        Command::Urgency { input, today, json } => {
            let today = day_or_today(today.as_deref(), &cfg)?;
            let board = load_board(&input, cfg.timezone()?, true)
                .with_context(|| format!("loading {}", input.display()))?;

            if json {
                let rows: Vec<serde_json::Value> = board
                    .groups
                    .iter()
                    .flat_map(|g| {
                        g.tasks.iter().map(move |t| {
                            serde_json::json!({
                                "userId": g.user_id,
                                "taskId": t.id,
                                "key": t.key,
                                "urgency": teamline_core::classify_urgency(t, today),
                            })
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", render::render_urgency(&board.groups, today));
            }
        }

        Command::Rank { input, date } => {
            let reference = day_or_today(date.as_deref(), &cfg)?;
            let board = load_board(&input, cfg.timezone()?, false)
                .with_context(|| format!("loading {}", input.display()))?;
            let ranked = rank_users(&board.groups, reference);
            print!("{}", render::render_ranking(&ranked, reference));
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn day_or_today(raw: Option<&str>, cfg: &config::Config) -> Result<NaiveDate> {
    match raw {
        Some(s) => parse_day(s),
        None => cfg.today(),
    }
}
