use std::fs;
use std::io::{self, Write};
use std::path::Path as FsPath;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;
use tilepath_core::{Point, Tile, TileGrid};
use tilepath_paths::{CostTable, Neighbors, Path, find_path};

mod args;
use args::{Cli, Command};

#[derive(Serialize)]
struct FindReport<'a> {
    from: Point,
    to: Point,
    found: bool,
    path: &'a Path,
}

fn load_map(path: &FsPath) -> Result<TileGrid> {
    let grid = TileGrid::from_path(path)
        .with_context(|| format!("loading map {}", path.display()))?;
    info!(
        "loaded {} ({}x{})",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

fn load_costs(file: Option<&FsPath>, overrides: &[(char, i32)]) -> Result<CostTable> {
    let mut costs = match file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading cost table {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing cost table {}", path.display()))?
        }
        None => CostTable::default(),
    };
    for &(ch, cost) in overrides {
        costs
            .insert(Tile(ch), cost)
            .with_context(|| format!("--cost {ch}={cost}"))?;
    }
    debug!("cost table: {:?}", costs.iter().collect::<Vec<_>>());
    Ok(costs)
}

fn write_neighbors(out: &mut impl Write, grid: &TileGrid, at: Point) -> Result<()> {
    let mut nb = Neighbors::new();
    let cells: Vec<String> = nb.passable(grid, at).iter().map(|p| p.to_string()).collect();
    writeln!(out, "[{}]", cells.join(", "))?;
    Ok(())
}

fn write_route(
    out: &mut impl Write,
    grid: &TileGrid,
    from: Point,
    to: Point,
    path: &Path,
    json: bool,
) -> Result<()> {
    if json {
        let report = FindReport {
            from,
            to,
            found: !path.is_empty(),
            path,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }
    if path.is_empty() {
        writeln!(out, "no path from {from} to {to}")?;
        return Ok(());
    }
    write!(out, "{}", grid.with_overlay(path, Tile::PATH_MARK))?;
    writeln!(out, "cost {} over {} cells", path.cost, path.len())?;
    Ok(())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Show { map } => {
            let grid = load_map(&map)?;
            write!(out, "{grid}")?;
        }
        Command::Neighbors { map, x, y } => {
            let grid = load_map(&map)?;
            write_neighbors(out, &grid, Point::new(x, y))?;
        }
        Command::Find {
            map,
            from,
            to,
            cost,
            costs_file,
            json,
        } => {
            let grid = load_map(&map)?;
            let costs = load_costs(costs_file.as_deref(), &cost)?;
            let path = find_path(&grid, &costs, from, to)
                .with_context(|| format!("searching {from} -> {to}"))?;
            write_route(out, &grid, from, to, &path, json)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}
