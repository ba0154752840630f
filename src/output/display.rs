//! Display functions for command results

use super::formatters::{create_progress_bar, format_duration, format_slowdown, format_words};
use crate::commands::{ComparisonReport, SolveResult, SurveyReport};
use crate::core::Word;
use colored::Colorize;

/// Print the result of solving a pair
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let ladder = &result.ladder;
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} → {}",
        ladder.start().text().bright_yellow().bold(),
        ladder.end().text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, word) in ladder.iter().enumerate() {
        if i == 0 {
            println!("\n  {}", word.text().bright_white().bold());
        } else {
            println!("  {}. {}", i.to_string().bright_black(), word.text().bright_white());
        }
    }

    println!(
        "\n{}",
        format!("✅ {} moves with {}", ladder.moves(), result.algorithm)
            .green()
            .bold()
    );
    if verbose {
        println!("   Words expanded:  {}", result.expanded);
        println!("   Time taken:      {}", format_duration(result.elapsed));
    }
}

/// Print an algorithm comparison
pub fn print_comparison(report: &ComparisonReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {} ",
        "ALGORITHM COMPARISON:".bright_cyan().bold(),
        report.start.bright_yellow().bold(),
        report.end.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let fastest = report.fastest().map(|run| run.algorithm);
    let shortest = report.shortest().map(|run| run.algorithm);

    println!();
    for (run, (_, slowdown)) in report.runs.iter().zip(report.slowdowns()) {
        let moves = run
            .moves()
            .map_or_else(|| "no ladder".red().to_string(), |m| format!("{m} moves"));
        let name = format!("{:<4}", run.algorithm.name());
        let name = if Some(run.algorithm) == fastest {
            name.green().bold()
        } else {
            name.normal()
        };
        println!(
            "   {name} {:>10}  {:>8} expanded  {:<10} {}",
            format_duration(run.average),
            run.expanded,
            moves,
            format_slowdown(slowdown).bright_black()
        );
    }

    if let (Some(fastest), Some(shortest)) = (fastest, shortest) {
        println!("\n   Fastest:  {}", fastest.to_string().green().bold());
        println!("   Shortest: {}", shortest.to_string().green().bold());
    }
    if let Some(ladder) = report.shortest().and_then(|run| run.ladder.as_ref()) {
        println!("   Ladder:   {}", format_words(ladder));
    }
    if !report.all_agree() {
        println!("\n   {}", "⚠ Algorithms disagree on ladder length".yellow());
    }
}

/// Print the aggregate of a survey
pub fn print_survey(report: &SurveyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SURVEY RESULTS:".bright_cyan().bold(),
        report.mode.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Pairs:".bright_cyan().bold());
    println!("   Compared:         {}", report.pairs);
    println!("   Lengths agreed:   {}", report.agreed);
    if report.failed > 0 {
        println!("   Failed:           {}", report.failed.to_string().red());
    }
    println!("   Time taken:       {}", format_duration(report.elapsed));

    let most_expanded = report
        .summaries
        .iter()
        .map(|s| s.mean_expanded)
        .fold(0.0_f64, f64::max);

    println!("\n📈 {}", "Per algorithm:".bright_cyan().bold());
    for summary in &report.summaries {
        let bar = create_progress_bar(summary.mean_expanded, most_expanded.max(1.0), 30);
        println!(
            "   {:<4} {} {:>8.1} expanded  {:>10}  {} wins",
            summary.algorithm.name(),
            bar.green(),
            summary.mean_expanded,
            format_duration(summary.mean_time),
            summary.wins
        );
    }
}

/// Print the one-letter neighbors of a word
pub fn print_neighbors(word: &Word, neighbors: &[&Word]) {
    println!(
        "\n{} neighbors of {}:",
        neighbors.len().to_string().bright_cyan().bold(),
        word.text().bright_yellow().bold()
    );
    for neighbor in neighbors {
        println!("  • {}", neighbor.text());
    }
}
