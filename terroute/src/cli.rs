//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use terroute_core::Cell;
use terroute_paths::{Euclidean, Heuristic, Octile, Planner, SearchOptions, Zero};

#[derive(Parser, Debug)]
#[command(name = "terroute")]
#[command(version, about = "Least-cost routes over terrain cost rasters")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Route over a JSON 2-D array of per-cell costs
    Route {
        #[arg(long)]
        grid: PathBuf,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Route over a JSON 2-D array of terrain labels (0 water .. 4 road)
    Terrain {
        #[arg(long)]
        labels: PathBuf,
        /// JSON object of per-terrain cost overrides, e.g. {"road": 10}
        #[arg(long)]
        costs: Option<PathBuf>,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Classify an image by color, then route over the terrain costs
    Image {
        /// PNG image; one pixel per cell
        #[arg(long)]
        image: PathBuf,
        /// JSON object of per-terrain cost overrides, e.g. {"road": 10}
        #[arg(long)]
        costs: Option<PathBuf>,
        /// Write the image with the route drawn on it
        #[arg(long)]
        out: Option<PathBuf>,
        /// Draw on the terrain classes instead of the source image
        #[arg(long, requires = "out")]
        colorize: bool,
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Start cell as ROW,COL
    #[arg(long, value_parser = parse_cell)]
    pub start: Cell,
    /// End cell as ROW,COL
    #[arg(long, value_parser = parse_cell)]
    pub end: Cell,
    #[arg(long, value_enum, default_value_t = HeuristicKind::Euclidean)]
    pub heuristic: HeuristicKind,
    /// Abort the search after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
    /// Abort the search after expanding this many cells
    #[arg(long)]
    pub max_expansions: Option<u64>,
    /// Also print a text map of the route
    #[arg(long)]
    pub overlay: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeuristicKind {
    Euclidean,
    Octile,
    Zero,
}

impl SearchArgs {
    /// Build the planner these arguments describe.
    pub fn planner(&self) -> Planner<Box<dyn Heuristic>> {
        let heuristic: Box<dyn Heuristic> = match self.heuristic {
            HeuristicKind::Euclidean => Box::new(Euclidean),
            HeuristicKind::Octile => Box::new(Octile),
            HeuristicKind::Zero => Box::new(Zero),
        };
        let mut options = SearchOptions::new();
        if let Some(ms) = self.timeout_ms {
            options = options.with_timeout(Duration::from_millis(ms));
        }
        if let Some(limit) = self.max_expansions {
            options = options.with_max_expansions(limit);
        }
        Planner::with_heuristic(heuristic).options(options)
    }
}

/// Parse `ROW,COL` into a [`Cell`].
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row \u{201c}{row}\u{201d}: {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column \u{201c}{col}\u{201d}: {e}"))?;
    Ok(Cell::new(row, col))
}

/// `log` level filter for a `-v` count.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells() {
        assert_eq!(parse_cell("3,4"), Ok(Cell::new(3, 4)));
        assert_eq!(parse_cell(" 10 , 0 "), Ok(Cell::new(10, 0)));
        assert_eq!(parse_cell("-1,2"), Ok(Cell::new(-1, 2)));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,b").is_err());
    }

    #[test]
    fn parses_route_command() {
        let cli = Cli::try_parse_from([
            "terroute", "-vv", "route", "--grid", "g.json", "--start", "0,0", "--end", "4,4",
            "--heuristic", "zero", "--overlay",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Route { grid, search } = cli.command else {
            panic!("expected route");
        };
        assert_eq!(grid, PathBuf::from("g.json"));
        assert_eq!(search.end, Cell::new(4, 4));
        assert_eq!(search.heuristic, HeuristicKind::Zero);
        assert!(search.overlay);
        assert!(search.timeout_ms.is_none());
    }

    #[test]
    fn rejects_missing_endpoint() {
        let res = Cli::try_parse_from(["terroute", "route", "--grid", "g.json", "--start", "0,0"]);
        assert!(res.is_err());
    }

    #[test]
    fn parses_image_command() {
        let cli = Cli::try_parse_from([
            "terroute", "image", "--image", "map.png", "--start", "0,0", "--end", "2,2",
            "--out", "route.png", "--colorize", "--max-expansions", "500",
        ])
        .unwrap();
        let Command::Image {
            image,
            out,
            colorize,
            costs,
            search,
        } = cli.command
        else {
            panic!("expected image");
        };
        assert_eq!(image, PathBuf::from("map.png"));
        assert_eq!(out, Some(PathBuf::from("route.png")));
        assert!(colorize);
        assert!(costs.is_none());
        assert_eq!(search.max_expansions, Some(500));
    }

    #[test]
    fn colorize_needs_an_output() {
        let res = Cli::try_parse_from([
            "terroute", "image", "--image", "map.png", "--start", "0,0", "--end", "2,2",
            "--colorize",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(2), "debug");
        assert_eq!(log_filter(9), "trace");
    }
}
