//! Fills a crossword grid from a word list.
//!
//! # Usage
//!
//! ```sh
//! crossfill data/structure1.txt data/words1.txt
//! ```
//!
//! Also write the filled grid as an SVG image:
//!
//! ```sh
//! crossfill data/structure1.txt data/words1.txt output.svg
//! ```
//!
//! Maintain arc consistency during search and print statistics:
//!
//! ```sh
//! crossfill data/structure1.txt data/words1.txt --inference mac --stats
//! ```

use std::{fs, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use crossfill_app::{
    AppError,
    load::load_catalog,
    render::{render_svg, render_text},
};
use crossfill_solver::{BacktrackSolver, Inference, SolverOptions, SolverStats, TieBreak};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InferenceKind {
    /// Plain backtracking over the initially propagated domains.
    None,
    /// Maintain arc consistency after every tentative assignment.
    Mac,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid structure file: `_` marks an open cell, anything else a blocked cell.
    structure: PathBuf,

    /// Word list file, one word per line.
    words: PathBuf,

    /// Write the filled grid as an SVG image to this path.
    output: Option<PathBuf>,

    /// Propagation performed during search.
    #[arg(long, value_name = "KIND", default_value = "none")]
    inference: InferenceKind,

    /// Break heuristic ties in a pseudo-random order derived from this seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Give up after this many tentative assignments.
    #[arg(long, value_name = "COUNT")]
    step_limit: Option<usize>,

    /// Print propagation and search statistics to stderr.
    #[arg(long)]
    stats: bool,
}

impl Args {
    fn solver_options(&self) -> SolverOptions {
        SolverOptions {
            inference: match self.inference {
                InferenceKind::None => Inference::None,
                InferenceKind::Mac => Inference::MaintainArcConsistency,
            },
            tie_break: self
                .seed
                .map_or(TieBreak::Lowest, |seed| TieBreak::Shuffled { seed }),
            step_limit: self.step_limit,
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let catalog = load_catalog(&args.structure, &args.words)?;
    let solver = BacktrackSolver::new(args.solver_options());
    let mut stats = SolverStats::default();
    let result = solver.solve_with_stats(&catalog, &mut stats);
    if args.stats {
        print_stats(&stats);
    }

    let Some(assignment) = result? else {
        println!("No solution.");
        return Ok(());
    };
    print!("{}", render_text(&catalog, &assignment));
    if let Some(path) = &args.output {
        fs::write(path, render_svg(&catalog, &assignment)).map_err(|source| {
            AppError::Write {
                path: path.clone(),
                source,
            }
        })?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn print_stats(stats: &SolverStats) {
    let propagation = stats.propagation();
    eprintln!("revisions:  {}", propagation.revisions());
    eprintln!("removals:   {}", propagation.removals());
    eprintln!("nodes:      {}", stats.nodes());
    eprintln!("backtracks: {}", stats.backtracks());
    if let Some(reason) = stats.unsatisfiable() {
        eprintln!("unsatisfiable by {reason}");
    }
}
