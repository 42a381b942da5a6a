use std::ops::ControlFlow;
use std::path::PathBuf;

use cubekin::{CubeError, Cubelet, Lattice, Move, Presenter, SolverAlphabet, Step};
use eyre::{Context, Result};
use itertools::Itertools;
use serde::Serialize;

use crate::scramble::ScrambleParams;
use crate::settings::Settings;

/// Cubekin command-line interface
///
/// Scrambles a 3x3x3 cube, prints facelet strings for a two-phase solver, and
/// replays a solver's answer one quarter turn at a time.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Settings file (YAML) layered over the built-in defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Generate a random scramble and print it with the resulting facelet
    /// string.
    Scramble {
        /// Number of moves (defaults to the configured length).
        #[arg(short, long)]
        length: Option<u32>,
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<String>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Apply moves to a solved cube and print the facelet string.
    Encode {
        /// Moves to apply (such as `R U R' U'`).
        moves: Vec<String>,
        /// Print sticker color initials instead of solver letters.
        #[arg(short, long)]
        initials: bool,
    },
    /// Replay a solution one quarter turn at a time.
    Replay {
        /// Solution to replay (such as `R2 U' F`).
        #[arg(long, allow_hyphen_values = true)]
        solution: String,
        /// Moves applied to a solved cube before the solution.
        #[arg(long, conflicts_with = "seed")]
        scramble: Option<String>,
        /// Seed of a generated scramble applied before the solution.
        #[arg(short, long)]
        seed: Option<String>,
        /// Length of the generated scramble.
        #[arg(short, long, requires = "seed")]
        length: Option<u32>,
        /// Stop after this many quarter turns.
        #[arg(long)]
        max_steps: Option<usize>,
        /// Print each step as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize, Debug)]
struct ScrambleReport {
    seed: String,
    length: u32,
    scramble: Vec<Move>,
    facelets: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct StepReport {
    index: usize,
    token_index: usize,
    token: Move,
    primitive: Move,
    affected: Vec<[i8; 3]>,
    facelets: String,
}

#[derive(Serialize, Debug)]
struct ReplayReport {
    steps: Vec<StepReport>,
    completed: bool,
    solved: bool,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let settings = Settings::load(args.config.as_deref())?;

    match args.subcommand {
        Subcommand::Scramble { length, seed, json } => {
            let params = ScrambleParams::new(length.unwrap_or(settings.scramble.length), seed);
            let scramble = params.generate(&settings.scramble.moves)?;

            let mut lattice = Lattice::new();
            lattice.apply_all(scramble.iter().copied())?;
            let facelets = lattice.encode(&settings.alphabet)?;

            if json {
                write_json_output(&ScrambleReport {
                    seed: params.seed,
                    length: params.length,
                    scramble,
                    facelets,
                })
            } else {
                println!("seed: {}", params.seed);
                println!("{}", cubekin_notation::format_moves(scramble));
                println!("{facelets}");
                Ok(())
            }
        }

        Subcommand::Encode { moves, initials } => {
            let moves = parse_moves(&moves.join(" "))?;
            let mut lattice = Lattice::new();
            lattice.apply_all(moves)?;

            let alphabet = if initials {
                SolverAlphabet::initials()
            } else {
                settings.alphabet
            };
            println!("{}", lattice.encode(&alphabet)?);
            Ok(())
        }

        Subcommand::Replay {
            solution,
            scramble,
            seed,
            length,
            max_steps,
            json,
        } => {
            let scramble = match (scramble, seed) {
                (Some(s), _) => parse_moves(&s)?,
                (None, Some(seed)) => {
                    ScrambleParams::new(length.unwrap_or(settings.scramble.length), Some(seed))
                        .generate(&settings.scramble.moves)?
                }
                (None, None) => vec![],
            };
            let solution = parse_moves(&solution)?;

            let mut lattice = Lattice::new();
            lattice.apply_all(scramble)?;
            log::info!("replaying {} moves", solution.len());

            let mut printer = StepPrinter {
                alphabet: settings.alphabet,
                max_steps,
                echo: !json,
                steps: vec![],
                error: None,
            };
            let summary = lattice.replay(solution, &mut printer)?;
            if let Some(e) = printer.error {
                return Err(e).context("error encoding intermediate state");
            }

            let solved = lattice.is_solved();
            if json {
                write_json_output(&ReplayReport {
                    steps: printer.steps,
                    completed: summary.completed,
                    solved,
                })
            } else {
                println!(
                    "{} quarter turns, {} moves, {}",
                    summary.steps,
                    summary.tokens,
                    if solved { "solved" } else { "not solved" },
                );
                Ok(())
            }
        }
    }
}

/// Records each replay step, optionally echoing it to stdout.
struct StepPrinter {
    alphabet: SolverAlphabet,
    max_steps: Option<usize>,
    echo: bool,
    steps: Vec<StepReport>,
    error: Option<CubeError>,
}

impl Presenter for StepPrinter {
    fn present(
        &mut self,
        step: &Step,
        affected: &[Cubelet],
        lattice: &Lattice,
    ) -> ControlFlow<()> {
        let facelets = match lattice.encode(&self.alphabet) {
            Ok(s) => s,
            Err(e) => {
                self.error = Some(e);
                return ControlFlow::Break(());
            }
        };
        log::trace!("step {}: {} (from {})", step.index, step.primitive, step.token);

        let report = StepReport {
            index: step.index,
            token_index: step.token_index,
            token: step.token,
            primitive: step.primitive,
            affected: affected.iter().map(|c| c.position().into()).collect(),
            facelets,
        };
        if self.echo {
            println!(
                "{:>4} {:<3} {:<2} {}",
                report.index,
                report.token.to_string(),
                report.primitive.to_string(),
                report.facelets,
            );
        }
        self.steps.push(report);

        match self.max_steps {
            Some(max) if self.steps.len() >= max => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}

fn parse_moves(s: &str) -> Result<Vec<Move>> {
    let (moves, errors): (Vec<_>, Vec<_>) =
        cubekin_notation::parse_moves(s).partition_result();
    if let Some(e) = errors.first() {
        let bad_tokens = errors.iter().map(|e| e.token()).join(", ");
        return Err(e.clone()).with_context(|| format!("bad moves: {bad_tokens}"));
    }
    Ok(moves)
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
