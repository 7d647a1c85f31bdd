//! Front end for the `wayfind` binary: gathers a grid and two endpoints,
//! runs the search and reports the outcome.

pub mod args;
pub mod error;
pub mod input;
pub mod report;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use wayfind_paths::{PathFinder, PathResult};

pub use args::Args;
pub use error::InputError;

/// Run one search as described by `args`, prompting on `input` for anything
/// not given on the command line, and writing all output to `out`.
pub fn run<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    out: &mut W,
) -> Result<PathResult, InputError> {
    let grid_path = match &args.grid {
        Some(p) => p.clone(),
        None => PathBuf::from(input::prompt_line(input, out, input::GRID_PROMPT)?.trim()),
    };
    let grid = input::load_grid(&grid_path, args.grid_config())?;

    let (source, destination) = match &args.endpoints {
        Some(p) => input::load_endpoints(p)?,
        None => input::prompt_endpoints(input, out)?,
    };
    writeln!(out, "Source: {source}")?;
    writeln!(out, "Destination: {destination}")?;

    let (result, stats) = PathFinder::new(&grid).search_with_stats(source, destination);
    log::info!(
        "search finished: {} expanded, {} pushed, {} stale",
        stats.expanded,
        stats.pushed,
        stats.stale
    );

    report::write_report(out, &result)?;
    if args.render {
        if let PathResult::Found(path) = &result {
            writeln!(out)?;
            write!(out, "{}", report::render(&grid, path))?;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::io::Cursor;
    use wayfind_core::Coord;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("wayfind-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn run_with_prompts() {
        let grid = temp_file("prompted.txt", "1 1 1\n0 0 1\n1 1 1\n");
        let args = Args::parse_from(["wayfind", "--rows", "3", "--cols", "3"]);
        let mut input = Cursor::new(format!("{}\n0 0\n2 0\n", grid.display()));
        let mut out = Vec::new();

        let result = run(&args, &mut input, &mut out).unwrap();
        let path = result.into_path().unwrap();
        assert_eq!(path.cost(), 6);
        assert_eq!(path.destination(), Coord::new(2, 0));

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with(input::GRID_PROMPT));
        assert!(shown.contains("Source: (0, 0)\nDestination: (2, 0)\n"));
        assert!(shown.contains("The Path is -> (0, 0) -> (0, 1)"));
        fs::remove_file(grid).unwrap();
    }

    #[test]
    fn run_with_endpoints_file_and_render() {
        let grid = temp_file("render.txt", "1 1\n0 1\n");
        let ends = temp_file("ends.txt", "0 0 1 1\n");
        let args = Args::parse_from([
            "wayfind".to_string(),
            grid.display().to_string(),
            "--endpoints".to_string(),
            ends.display().to_string(),
            "--rows=2".to_string(),
            "--cols=2".to_string(),
            "--render".to_string(),
        ]);
        let mut out = Vec::new();

        let result = run(&args, &mut Cursor::new(""), &mut out).unwrap();
        assert!(result.is_success());
        assert!(String::from_utf8(out).unwrap().ends_with("\n**\n#*\n"));
        fs::remove_file(grid).unwrap();
        fs::remove_file(ends).unwrap();
    }

    #[test]
    fn run_reports_blocked_endpoint() {
        let grid = temp_file("blocked.txt", "1 0\n1 1\n");
        let args = Args::parse_from([
            "wayfind".to_string(),
            grid.display().to_string(),
            "--rows=2".to_string(),
            "--cols=2".to_string(),
        ]);
        let mut out = Vec::new();
        let result = run(&args, &mut Cursor::new("1 1\n0 1\n"), &mut out).unwrap();
        assert_eq!(
            result,
            PathResult::BlockedEndpoint(wayfind_paths::Endpoint::Destination)
        );
        assert!(String::from_utf8(out).unwrap().contains("Destination is blocked\n"));
        fs::remove_file(grid).unwrap();
    }
}
