#![warn(rust_2018_idioms)]

#[macro_use]
extern crate log;

use std::env;
use std::error::Error;
use std::fmt::Display;
use std::process;
use std::time::Instant;

use clap::{App, Arg};

use puzzle_search::config::Problem;
use puzzle_search::solution_formatter::SolutionFormatter;
use puzzle_search::solver::SolverOk;
use puzzle_search::state::{CreationCounter, SearchState};
use puzzle_search::{LoadPuzzles, Solve};

struct Options {
    use_heuristic: bool,
    print_solution: bool,
    print_stats: bool,
    print_status: bool,
}

fn main() {
    env_logger::init();

    let matches = App::new("puzzle-search")
        .author("martin-t")
        .version("0.1")
        .about("Solves Lights Out and Eight Puzzle instances using A*")
        .arg(
            Arg::with_name("no-heuristic")
                .long("--no-heuristic")
                .help("Search without a heuristic (uniform cost search)"),
        )
        .arg(
            Arg::with_name("print-solution")
                .short("-p")
                .long("--print-solution")
                .help("Print every state of the solution"),
        )
        .arg(
            Arg::with_name("stats")
                .short("-s")
                .long("--stats")
                .help("Print search statistics"),
        )
        .arg(
            Arg::with_name("status")
                .long("--status")
                .help("Print stats every time the search reaches a new depth"),
        )
        .arg(
            Arg::with_name("problem")
                .required(true)
                .possible_values(&Problem::NAMES)
                .help("Which puzzle the file contains"),
        )
        .arg(
            Arg::with_name("file")
                .required(true)
                .help("File with one or more puzzles"),
        )
        .get_matches();

    let options = Options {
        use_heuristic: !matches.is_present("no-heuristic"),
        print_solution: matches.is_present("print-solution"),
        print_stats: matches.is_present("stats"),
        print_status: matches.is_present("status"),
    };
    // clap already checked the value is one of the possible values
    let problem: Problem = matches
        .value_of("problem")
        .and_then(|name| name.parse().ok())
        .unwrap_or(Problem::EightPuzzle);
    // required arg
    let path = matches.value_of("file").unwrap_or_default();

    if let Err(err) = run(problem, path, &options) {
        match env::current_dir() {
            Ok(dir) => println!("Can't load {} in {}: {}", path, dir.display(), err),
            Err(_) => println!("Can't load {}: {}", path, err),
        }
        process::exit(1);
    }
}

fn run(problem: Problem, path: &str, options: &Options) -> Result<(), Box<dyn Error>> {
    // one counter for all searches so creation order never repeats
    let counter = CreationCounter::new();

    match problem {
        Problem::LightsOut => {
            for puzzle in path.load_lights_out()? {
                let solution = solve_one(&puzzle, &counter, options);
                if solution.is_solved() {
                    let toggles: Vec<_> = solution.path[1..]
                        .iter()
                        .filter_map(|state| state.toggled())
                        .map(|pos| pos.to_string())
                        .collect();
                    println!("Toggles: {}", toggles.join(" "));
                }
                print_counts("toggles", puzzle.expected, &solution);
            }
        }
        Problem::EightPuzzle => {
            for puzzle in path.load_eight_puzzles()? {
                let solution = solve_one(&puzzle, &counter, options);
                if solution.is_solved() {
                    let moves: String = solution.path[1..]
                        .iter()
                        .filter_map(|state| state.last_move())
                        .map(|dir| dir.to_string())
                        .collect();
                    println!("Moves: {}", moves);
                }
                print_counts("moves", puzzle.expected, &solution);
            }
        }
    }

    Ok(())
}

fn solve_one<P>(puzzle: &P, counter: &CreationCounter, options: &Options) -> SolverOk<P::State>
where
    P: Solve + Display,
{
    println!("{}", "-".repeat(40));
    print!("{}", puzzle);

    let started = Instant::now();
    let solution = puzzle.solve(options.use_heuristic, counter, options.print_status);
    info!(
        "Searched {} states in {} ms",
        solution.stats.total_unique_visited(),
        started.elapsed().as_millis()
    );

    if options.print_stats {
        println!("{}", solution.stats);
    }
    if !solution.is_solved() {
        println!("No solution");
    } else if options.print_solution {
        println!("Solution:");
        print!("{}", SolutionFormatter::new(&solution.path));
    }

    solution
}

fn print_counts<S: SearchState>(what: &str, expected: Option<usize>, solution: &SolverOk<S>) {
    if let Some(expected) = expected {
        println!("Expected {}: {}", what, expected);
    }
    if let Some(found) = solution.move_cnt() {
        println!("Found {}: {}", what, found);
    }
}
