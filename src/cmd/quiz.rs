//! Quiz command implementation
//!
//! Handles `velura quiz`, which replays `--answer QUESTION=VALUE` arguments
//! against a fresh quiz and prints either the next question or the
//! recommendations.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use std::path::Path;

use super::{print_json, Site};
use crate::catalog::{Catalog, QuizQuestion};
use crate::error::VeluraError;
use crate::fmt::{catalog_icon, format_price, icon, INFO, LEAF, SPARKLES};
use crate::quiz::{QuizAnswer, QuizEngine, QuizProgress, QuizState, Recommendations};

#[derive(Serialize)]
struct QuizReport<'a> {
    #[serde(flatten)]
    state: QuizState,
    progress: QuizProgress,
    answers: &'a [QuizAnswer],
    next_question: Option<&'a QuizQuestion>,
    recommendations: Recommendations,
}

/// Split a `QUESTION=VALUE` argument
pub fn parse_answer(arg: &str) -> Result<(&str, &str), VeluraError> {
    match arg.split_once('=') {
        Some((question, value)) if !question.trim().is_empty() && !value.trim().is_empty() => {
            Ok((question.trim(), value.trim()))
        }
        _ => Err(VeluraError::InvalidAnswerFormat {
            arg: arg.to_string(),
        }),
    }
}

/// Run the quiz with the given answers
///
/// # Examples
///
/// ```no_run
/// use velura::cmd::quiz::cmd_quiz;
///
/// let answers = ["skinType=oily", "concerns=acne", "routine=minimal", "texture=light"]
///     .map(String::from);
/// cmd_quiz(&answers, false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if an argument is not `QUESTION=VALUE`, or if the quiz
/// rejects an answer (wrong order, unknown option, or past the last
/// question).
pub fn cmd_quiz(answers: &[String], json: bool, config_path: Option<&Path>) -> Result<()> {
    // Reject malformed arguments before touching the filesystem
    let parsed = answers
        .iter()
        .map(|arg| parse_answer(arg))
        .collect::<Result<Vec<_>, _>>()?;

    let site = Site::load(config_path)?;
    let mut session = site.session()?;
    session.open_quiz();

    for (question, value) in parsed {
        let quiz = session.quiz_mut().map_err(VeluraError::from)?;
        quiz.answer(question, value)
            .map_err(VeluraError::from)
            .with_context(|| format!("Failed to answer {}={}", question, value))?;
    }

    let quiz = &*session.quiz_mut().map_err(VeluraError::from)?;

    if json {
        return print_json(&QuizReport {
            state: quiz.state(),
            progress: quiz.progress(),
            answers: quiz.answers(),
            next_question: quiz.current_question(),
            recommendations: quiz.recommendations(),
        });
    }

    match quiz.current_question() {
        Some(question) => print_question(quiz, question),
        None => print_results(&site.catalog, quiz),
    }
    Ok(())
}

fn print_question(quiz: &QuizEngine, question: &QuizQuestion) {
    let progress = quiz.progress();
    println!(
        "{} Question {} of {} {}",
        icon(&INFO),
        progress.answered + 1,
        progress.total,
        style(format!("[{}%]", progress.percent)).dim()
    );
    println!();
    println!("  {}", style(&question.prompt).bold());
    for option in &question.options {
        println!(
            "    {} {:<12} {}",
            catalog_icon(option.icon.as_deref()),
            style(&option.value).cyan(),
            option.label
        );
    }
    println!();
    println!(
        "Continue with: {}",
        style(format!("--answer {}=<VALUE>", question.id)).yellow()
    );
}

fn print_results(catalog: &Catalog, quiz: &QuizEngine) {
    let picks = quiz.recommendations();

    println!("{} {}", icon(&SPARKLES), style("Your personalized routine").bold());
    println!();

    if picks.is_empty() {
        println!("  No recommendations for these answers.");
        return;
    }

    if !picks.products.is_empty() {
        println!("{}", style("Recommended products").bold());
        for name in &picks.products {
            // Rule tables may name products the catalog does not sell
            match catalog.product_by_name(name) {
                Some(product) => println!(
                    "  - {} {}",
                    name,
                    style(format_price(product.price)).green()
                ),
                None => println!("  - {}", name),
            }
        }
        println!();
    }

    if !picks.ingredients.is_empty() {
        println!("{}", style("Key ingredients").bold());
        for name in &picks.ingredients {
            println!("  {} {}", icon(&LEAF), name);
        }
    }
}
