use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tilepath_core::Point;

#[derive(Parser, Debug)]
#[command(
    name = "tilepath",
    version,
    about = "Find least-cost routes on text tile maps"
)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a map file
    Show {
        /// Map file, one row of tile symbols per line
        map: PathBuf,
    },

    /// List the cells reachable in one step from X,Y
    #[command(allow_negative_numbers = true)]
    Neighbors {
        map: PathBuf,
        x: i32,
        y: i32,
    },

    /// Find the least-cost route between two cells
    Find {
        map: PathBuf,

        /// Start cell as X,Y
        #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,

        /// Goal cell as X,Y
        #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,

        /// Set the cost of a tile symbol (repeatable)
        #[arg(long = "cost", value_name = "SYMBOL=COST", value_parser = parse_cost)]
        cost: Vec<(char, i32)>,

        /// JSON cost table replacing the default, e.g. {"1": 1, "~": 4}
        #[arg(long = "costs", value_name = "PATH")]
        costs_file: Option<PathBuf>,

        /// Print the result as JSON instead of an annotated map
        #[arg(long)]
        json: bool,
    },
}

pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok(Point::new(x, y))
}

pub fn parse_cost(s: &str) -> Result<(char, i32), String> {
    let (sym, cost) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SYMBOL=COST, got '{s}'"))?;
    let mut chars = sym.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(format!("symbol must be a single character, got '{sym}'"));
    };
    let cost = cost
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad cost in '{s}': {e}"))?;
    Ok((ch, cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" -1, 2"), Ok(Point::new(-1, 2)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn costs() {
        assert_eq!(parse_cost("~=4"), Ok(('~', 4)));
        assert_eq!(parse_cost("2=7"), Ok(('2', 7)));
        assert!(parse_cost("ab=1").is_err());
        assert!(parse_cost("=1").is_err());
        assert!(parse_cost("x").is_err());
        assert!(parse_cost("x=y").is_err());
    }

    #[test]
    fn parses_find_command() {
        let cli = Cli::try_parse_from([
            "tilepath", "-v", "find", "map.txt", "--from", "0,0", "--to", "3,3", "--cost", "~=5",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Find {
                from, to, cost, json, ..
            } => {
                assert_eq!(from, Point::new(0, 0));
                assert_eq!(to, Point::new(3, 3));
                assert_eq!(cost, vec![('~', 5)]);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_negative_neighbor_query() {
        let cli = Cli::try_parse_from(["tilepath", "neighbors", "map.txt", "-1", "0"]).unwrap();
        assert!(matches!(cli.command, Command::Neighbors { x: -1, y: 0, .. }));
    }
}
