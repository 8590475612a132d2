use std::io::{BufRead, Write};

use anyhow::Context;
use fit_config::FitConfig;

use crate::cli::root_commands::SessionArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::session::{InMemoryProfileStore, ProfileStore, Session};
use crate::views::Reply;

/// Handle `fittrack session`.
pub fn handle(args: &SessionArgs, config: &FitConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = args
        .user_id
        .clone()
        .unwrap_or_else(|| config.session.user_id.clone());
    let today = args.today.unwrap_or_else(|| flags.clock.today());
    tracing::debug!(%user_id, %today, "session started");

    let mut session = Session::new(
        InMemoryProfileStore::new(),
        user_id,
        today,
        config.session.show_examples,
    );
    run(
        &mut session,
        std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
        flags.format,
    )
}

/// Feed every input line to the session until EOF or `/quit`.
pub fn run<S: ProfileStore>(
    session: &mut Session<S>,
    input: impl BufRead,
    out: &mut impl Write,
    format: OutputFormat,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = session.handle_line(&line);
        output(out, &reply, format)?;
        if reply == Reply::Quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;

    use super::*;

    fn transcript(input: &str, format: OutputFormat) -> String {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut session = Session::new(InMemoryProfileStore::new(), "u1", today, false);
        let mut out = Vec::new();
        run(&mut session, Cursor::new(input), &mut out, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn stops_at_quit() {
        let text = transcript("/quit\nWorkout date 2025.12.15 duration 01:30\n", OutputFormat::Text);
        assert_eq!(text, "Bye!\n");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = transcript("\n   \n/bmi\n", OutputFormat::Raw);
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\"reply\":\"notice\""));
    }

    #[test]
    fn workout_flow_in_raw_json() {
        let input = "Workout date 2025.12.15 duration 01:30\n\
                     Exercise name \"Приседания\" sets 4 reps_per_set 10 weight 60.0\n\
                     /workout\n";
        let text = transcript(input, OutputFormat::Raw);
        let last: serde_json::Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();
        assert_eq!(last["reply"], "stored");
        assert_eq!(last["summary"]["metrics"]["exercise_count"], 1);
        assert_eq!(last["summary"]["metrics"]["total_volume"], 2400.0);
    }
}
