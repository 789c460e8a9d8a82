// Colored terminal output for verdicts and normalization traces.
//
// main.rs delegates all terminal formatting here.

use colored::Colorize;

use crate::classifier::traits::Label;
use crate::prediction::{PredictionError, Verdict};
use crate::text::TextPipeline;

/// Display a classification verdict.
pub fn display_verdict(message: &str, verdict: &Verdict) {
    println!("\n{}", "=== Spam Check ===".bold());
    println!("  Message:    {}", super::truncate_chars(message, 120).dimmed());
    println!("  Normalized: {}", display_normalized(&verdict.normalized));

    let headline = match verdict.label {
        Label::Spam => "Spam message detected!".red().bold(),
        Label::Ham => "This message is not spam.".green().bold(),
    };
    println!("\n  {}", headline);

    if let Some(p) = verdict.spam_probability {
        println!("  Spam probability: {}", colorize_probability(p));
    }
}

/// Display a prediction failure. These are notices, not crashes.
pub fn display_prediction_error(error: &PredictionError) {
    let tag = match error {
        PredictionError::EmptyInput => "!".yellow(),
        PredictionError::ModelUnavailable(_) | PredictionError::VectorizationFailure(_) => {
            "!!".red().bold()
        }
        PredictionError::Unexpected(_) => "!!".red(),
    };
    println!("  {} {}", tag, error);
    if let PredictionError::ModelUnavailable(_) = error {
        println!(
            "{}",
            "  Run `spamsieve download-model` or set SPAMSIEVE_MODEL_DIR.".dimmed()
        );
    }
}

/// Display how a message was normalized.
pub fn display_normalization(raw: &str, normalized: &str, pipeline: TextPipeline) {
    println!("  Input:      {}", super::truncate_chars(raw, 120).dimmed());
    println!("  Normalized: {}", display_normalized(normalized));
    println!("  Pipeline:   {}", pipeline.to_string().dimmed());
}

fn display_normalized(normalized: &str) -> String {
    if normalized.is_empty() {
        "(no tokens)".dimmed().to_string()
    } else {
        normalized.to_string()
    }
}

/// Colorize a spam probability: red when likely spam, yellow when unsure.
fn colorize_probability(p: f64) -> colored::ColoredString {
    let text = format!("{:.1}%", p * 100.0);
    if p >= 0.8 {
        text.red().bold()
    } else if p >= 0.5 {
        text.bright_red()
    } else if p >= 0.2 {
        text.yellow()
    } else {
        text.green()
    }
}
