//! Codeword Solver - CLI
//!
//! Loads a codeword puzzle and a dictionary, then solves the number→letter
//! substitution with one of the matching strategies.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use codeword_solver::{
    input::{load_codewords, load_dictionary, resolve_codeword_path},
    output::{print_puzzle_header, print_solution, print_substitution},
    solver::{PuzzleState, load_puzzle},
};

#[derive(Parser)]
#[command(
    name = "codeword_solver",
    about = "Codeword puzzle solver: recovers the number-to-letter substitution from a dictionary",
    version,
    author
)]
struct Cli {
    /// Codeword file: comma-separated numbers, one codeword per line
    /// (a missing .csv extension is filled in)
    puzzle: String,

    /// Dictionary file: tab-delimited, first column is the word
    #[arg(short = 'w', long)]
    wordlist: String,

    /// Puzzle alphabet; out-of-alphabet dictionary words are dropped
    #[arg(short, long, default_value = "abcdefghijklmnopqrstuvwxyz")]
    alphabet: String,

    /// Solving strategy
    #[arg(short, long, value_enum, default_value = "consensus")]
    method: Method,

    /// Stop searching once this many codewords are solved (default: all)
    #[arg(long)]
    min_target: Option<usize>,

    /// Refinement: drop assignments corroborated by fewer solved codewords
    #[arg(long, default_value_t = 3)]
    min_evidence: usize,

    /// Refinement: iteration cap
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Show the accepted word for each solved codeword
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    /// List forced codeword pairs without solving
    Pairs,
    /// Pair-seeded backtracking extension search
    Extend,
    /// Iterative evidence-based refinement
    Refine,
    /// Greedy unique-pair consensus propagation
    Consensus,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let puzzle_path = resolve_codeword_path(&cli.puzzle)
        .with_context(|| format!("no codeword file at '{}' or '{}.csv'", cli.puzzle, cli.puzzle))?;
    let puzzle_file = load_codewords(&puzzle_path)?;
    let words = load_dictionary(&cli.wordlist, &cli.alphabet)?;
    if puzzle_file.codewords.is_empty() {
        bail!("'{}' contains no codewords", puzzle_path.display());
    }

    let mut state = load_puzzle(puzzle_file.codewords, words, &cli.alphabet);
    print_puzzle_header(
        state.codewords(),
        state.dictionary().len(),
        &puzzle_file.comments,
    );

    let min_target = cli.min_target.unwrap_or_else(|| state.codewords().len());

    match cli.method {
        Method::Pairs => run_pairs(&state),
        Method::Extend => {
            let solution = state.start_matching_words(min_target);
            state.apply_solution(&solution);
            print_solution(state.codewords(), state.dictionary(), &solution, cli.verbose);
        }
        Method::Refine => {
            let solution =
                state.try_to_match_words_to_numbers(min_target, cli.min_evidence, cli.iterations);
            print_solution(state.codewords(), state.dictionary(), &solution, cli.verbose);
        }
        Method::Consensus => {
            let solution = state.solve_by_consensus();
            print_solution(state.codewords(), state.dictionary(), &solution, cli.verbose);
        }
    }

    if cli.verbose && !matches!(cli.method, Method::Pairs) {
        println!();
        print_substitution(state.substitution());
    }
    Ok(())
}

fn run_pairs(state: &PuzzleState) {
    let pairs = state.find_all_unique_pairs();
    if pairs.is_empty() {
        println!("no forced pairs");
        return;
    }
    for pair in &pairs {
        let ((cw1, cw2), (word1, word2)) = state.resolve_pair(pair);
        println!("{cw1} = {word1}   {cw2} = {word2}");
    }
}
