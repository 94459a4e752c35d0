//! Command-line front end for terroute: load a grid or image, plan a route,
//! report it.

pub mod cli;
pub mod input;
pub mod overlay;
pub mod raster;
pub mod report;

use std::error::Error;
use std::path::Path;

use terroute_core::CostSurface;
use terroute_terrain::{CostTable, LabelGrid, class_statistics, terrain_statistics};

use cli::{Cli, Command, SearchArgs};
use report::RouteReport;

/// What a run prints: the JSON report and, if requested, a text map.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub report: RouteReport,
    pub overlay: Option<String>,
}

impl Output {
    pub fn found(&self) -> bool {
        self.report.status == report::Status::Found
    }
}

/// Execute one parsed command.
pub fn run(cli: &Cli) -> Result<Output, Box<dyn Error>> {
    match &cli.command {
        Command::Route { grid, search } => {
            let surface = input::parse_cost_grid(&input::read(grid)?)?;
            log::info!("loaded {} cost grid from {}", surface.dims(), grid.display());
            let report = plan(&surface, search)?;
            let overlay = search.overlay.then(|| {
                overlay::render(
                    surface.dims(),
                    &report.path,
                    search.start,
                    search.end,
                    overlay::cost_base(&surface),
                )
            });
            Ok(Output { report, overlay })
        }
        Command::Terrain {
            labels,
            costs,
            search,
        } => {
            let grid = input::parse_label_grid(&input::read(labels)?)?;
            log::info!("loaded {} label grid from {}", grid.dims(), labels.display());
            plan_terrain(&grid, costs.as_deref(), search)
        }
        Command::Image {
            image,
            costs,
            out,
            colorize,
            search,
        } => {
            let img = raster::load(image)?;
            let grid = LabelGrid::classify(raster::dims(&img), &raster::pixels(&img))?;
            log::info!("classified {} image {}", grid.dims(), image.display());
            let mut output = plan_terrain(&grid, costs.as_deref(), search)?;
            output.report = output.report.with_classes(class_statistics(&grid));
            if let Some(out) = out {
                let mut canvas = if *colorize {
                    raster::colorize(&grid)
                } else {
                    img
                };
                raster::draw_route(&mut canvas, &output.report.path, search.start, search.end);
                raster::save(&canvas, out)?;
            }
            Ok(output)
        }
    }
}

fn plan_terrain(
    grid: &LabelGrid,
    costs: Option<&Path>,
    search: &SearchArgs,
) -> Result<Output, Box<dyn Error>> {
    let table = match costs {
        Some(path) => input::parse_cost_table(&input::read(path)?)?,
        None => CostTable::default(),
    };
    let surface = table.build_surface(grid)?;
    let report = plan(&surface, search)?.with_terrain(terrain_statistics(grid, &table));
    let overlay = search.overlay.then(|| {
        overlay::render(
            grid.dims(),
            &report.path,
            search.start,
            search.end,
            overlay::label_base(grid),
        )
    });
    Ok(Output { report, overlay })
}

fn plan(surface: &CostSurface, search: &SearchArgs) -> Result<RouteReport, Box<dyn Error>> {
    let outcome = search
        .planner()
        .find_path(surface, search.start, search.end)?;
    if let Some(route) = outcome.route() {
        log::info!(
            "route of {} cells, cost {}",
            route.stats.length,
            route.stats.total_cost
        );
    } else {
        log::info!("no route from {} to {}", search.start, search.end);
    }
    Ok(RouteReport::new(
        &outcome,
        search.start,
        search.end,
        surface.dims(),
        surface.summary(),
    ))
}
