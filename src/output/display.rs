//! Display functions for solver results

use super::formatters::{decode_grid, solve_summary, substitution_table};
use crate::core::{Codeword, Substitution, Word};
use crate::solver::Solution;
use colored::Colorize;

/// Print the loaded puzzle: comments, codeword count, dictionary size
pub fn print_puzzle_header(codewords: &[Codeword], dictionary_size: usize, comments: &[String]) {
    println!("{}", "─".repeat(60).cyan());
    for comment in comments {
        println!("{}", comment.bright_black());
    }
    println!(
        "{} codewords, {} dictionary words",
        codewords.len().to_string().bright_yellow(),
        dictionary_size.to_string().bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the decode grid, coloring solved rows green
pub fn print_decoded(codewords: &[Codeword], substitution: &Substitution) {
    for (codeword, row) in codewords.iter().zip(decode_grid(codewords, substitution)) {
        if codeword.is_solved(substitution) {
            println!("{}", row.green());
        } else {
            println!("{row}");
        }
    }
}

/// Print the symbol → letter table
pub fn print_substitution(substitution: &Substitution) {
    if substitution.is_empty() {
        println!("{}", "no assignments yet".bright_black());
        return;
    }
    for line in substitution_table(substitution) {
        println!("{line}");
    }
}

/// Print a solving outcome
///
/// Verbose mode adds the accepted word for each solved codeword.
pub fn print_solution(
    codewords: &[Codeword],
    dictionary: &[Word],
    solution: &Solution,
    verbose: bool,
) {
    print_decoded(codewords, &solution.substitution);

    if verbose {
        println!();
        for &(codeword_index, word_index) in &solution.assignments {
            println!(
                "  {} = {}",
                codewords[codeword_index],
                dictionary[word_index].text().bright_yellow()
            );
        }
    }

    println!();
    let summary = solve_summary(codewords, &solution.substitution);
    if solution.solved_count() == codewords.len() {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.yellow());
    }
}
