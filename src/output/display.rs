//! Display functions for command results

use super::formatters::{create_progress_bar, format_word_grid};
use crate::commands::{GeneratedPuzzle, SurveyResult};
use crate::core::Word;
use colored::Colorize;

/// Print a generated puzzle
pub fn print_generated_puzzle(result: &GeneratedPuzzle) {
    println!("\n{}", "─".repeat(60).green());
    println!(
        "Generated puzzle: {}",
        result.difficulty.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).green());

    let words: Vec<Word> = result
        .words
        .iter()
        .filter_map(|w| Word::new(w.as_str()).ok())
        .collect();
    println!();
    for row in format_word_grid(&words, |_| false) {
        println!("  {}", row.bright_white());
    }

    if !result.hints.is_empty() {
        println!("\n{}", "Hints:".bright_cyan().bold());
        for (i, hint) in result.hints.iter().enumerate() {
            println!("  {}. {hint}", (i + 1).to_string().bright_black());
        }
    }

    if let Some(password) = &result.password {
        println!("\nPassword: {}", password.bright_green().bold());
    }
}

/// Print the result of a survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for tier in &result.tiers {
        let total = tier.generated + tier.failed;
        println!(
            "\n📊 {}",
            tier.difficulty.to_string().to_uppercase().bright_cyan().bold()
        );
        println!("   Generated:        {}/{total}", tier.generated);
        if tier.failed > 0 {
            println!(
                "   Failed:           {}",
                tier.failed.to_string().red().bold()
            );
        }
        println!("   Words per puzzle: {}", tier.words_per_puzzle);
        println!(
            "   Word length:      {}-{}",
            tier.min_word_length, tier.max_word_length
        );
        println!(
            "   Passwords:        {} distinct",
            tier.distinct_passwords
        );

        let bar = create_progress_bar(
            tier.average_decoy_likeness,
            tier.max_word_length as f64,
            20,
        );
        println!(
            "   Decoy likeness:   [{}] {}",
            bar.green(),
            format!("{:.2}", tier.average_decoy_likeness).bright_yellow()
        );

        if tier.violations == 0 {
            println!("   Checks:           {}", "all passed".green());
        } else {
            println!(
                "   Checks:           {}",
                format!("{} violations", tier.violations).red().bold()
            );
        }
    }

    println!("\n   Time taken:       {:.2}s", result.duration.as_secs_f64());
}
