//! Routine command implementation
//!
//! Handles `velura routine`, which builds a routine from the configured
//! default selection plus any `--toggle` arguments and prints it for one
//! time of day.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use std::path::Path;

use super::{print_json, Site};
use crate::catalog::{CareStep, TimeOfDay};
use crate::error::VeluraError;
use crate::fmt::{catalog_icon, format_minutes, icon, time_icon, CHECKMARK, STOPWATCH, UNCHECKED};
use crate::routine::RoutineSummary;
use crate::session::{Section, Session};

#[derive(Serialize)]
struct RoutineReport<'a> {
    selected: Vec<&'a str>,
    visible: Vec<VisibleStep<'a>>,
    #[serde(flatten)]
    summary: RoutineSummary,
}

#[derive(Serialize)]
struct VisibleStep<'a> {
    #[serde(flatten)]
    step: &'a CareStep,
    selected: bool,
}

/// Parse a `--time` argument into a routine tab
pub fn parse_time(value: &str) -> Result<TimeOfDay, VeluraError> {
    match value.parse::<TimeOfDay>() {
        Ok(time @ (TimeOfDay::Morning | TimeOfDay::Evening)) => Ok(time),
        _ => Err(VeluraError::InvalidTimeOfDay {
            value: value.to_string(),
        }),
    }
}

/// Build and print a routine
///
/// `time` defaults to the configured tab. Toggles apply in order; an
/// unknown id stops the command before anything is printed.
///
/// # Examples
///
/// ```no_run
/// use velura::cmd::routine::cmd_routine;
///
/// // Evening routine with the oil cleanser added and SPF removed
/// cmd_routine(Some("evening"), &["1".to_string(), "9".to_string()], false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_routine(
    time: Option<&str>,
    toggles: &[String],
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let site = Site::load(config_path)?;
    let mut session = site.session()?;
    session.navigate(Section::Routine);

    if let Some(time) = time {
        session.set_time(parse_time(time)?);
    }

    for id in toggles {
        session
            .toggle_step(id)
            .map_err(VeluraError::from)
            .with_context(|| format!("Failed to toggle step '{}'", id))?;
    }

    if json {
        return print_json(&report(&session));
    }

    print_routine(&session);
    Ok(())
}

fn report(session: &Session) -> RoutineReport<'_> {
    let routine = session.routine();
    let time = session.time();
    RoutineReport {
        selected: routine.selected_ids(),
        visible: routine
            .visible_steps(time)
            .into_iter()
            .map(|step| VisibleStep {
                step,
                selected: routine.is_selected(&step.id),
            })
            .collect(),
        summary: routine.summary(time),
    }
}

fn print_routine(session: &Session) {
    let routine = session.routine();
    let time = session.time();

    println!(
        "{} {} routine",
        icon(&time_icon(time)),
        style(time.title()).bold()
    );
    println!();

    for step in routine.visible_steps(time) {
        let mark = if routine.is_selected(&step.id) {
            icon(&CHECKMARK)
        } else {
            icon(&UNCHECKED)
        };
        println!(
            "  {} {:>3}  {} {:<16} {}",
            mark,
            style(&step.id).cyan(),
            catalog_icon(step.icon.as_deref()),
            step.name,
            style(&step.category).dim()
        );
    }
    println!();

    let summary = routine.summary(time);
    if summary.steps.is_empty() {
        println!("  No steps selected for the {} yet.", time.name());
        return;
    }

    println!("{}", style("My routine").bold());
    for (index, step) in summary.steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step.name);
    }
    println!();
    println!(
        "{} {} steps, {}",
        icon(&STOPWATCH),
        style(summary.step_count).green(),
        style(format_minutes(summary.estimated_minutes)).green()
    );
}
