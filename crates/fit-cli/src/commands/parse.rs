use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use chrono::NaiveDate;

use crate::cli::root_commands::ParseArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::views::Reply;

/// Handle `fittrack parse`.
pub fn handle(args: &ParseArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let today = args.today.unwrap_or_else(|| flags.clock.today());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let (total, rejected) = if args.lines.is_empty() {
        let stdin = std::io::stdin();
        let lines = stdin
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("failed to read lines from stdin")?;
        parse_lines(lines.iter().map(String::as_str), today, flags.format, &mut out)?
    } else {
        parse_lines(args.lines.iter().map(String::as_str), today, flags.format, &mut out)?
    };

    if rejected > 0 {
        bail!("{rejected} of {total} line(s) rejected");
    }
    Ok(())
}

/// Parse every non-blank line and write one reply per line.
///
/// Returns (lines parsed, lines rejected).
pub fn parse_lines<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    today: NaiveDate,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<(usize, usize)> {
    let mut total = 0;
    let mut rejected = 0;
    for line in lines.into_iter().filter(|line| !line.trim().is_empty()) {
        total += 1;
        let reply = match fit_parser::create_from_text_at(line, today) {
            Ok(record) => Reply::created(record.into()),
            Err(error) => Reply::rejected(&error, false),
        };
        if reply.is_error() {
            rejected += 1;
        }
        output(out, &reply, format)?;
    }
    Ok((total, rejected))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn raw_output_is_one_json_document_per_line() {
        let lines = [
            "Workout date 2025.12.15 duration 01:30",
            "",
            "UserProfile gender",
        ];
        let mut out = Vec::new();
        let counts = parse_lines(lines, today(), OutputFormat::Raw, &mut out).unwrap();
        assert_eq!(counts, (2, 1));

        let text = String::from_utf8(out).unwrap();
        let docs: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["reply"], "created");
        assert_eq!(docs[0]["summary"]["record"]["kind"], "Workout");
        assert_eq!(docs[0]["summary"]["metrics"]["exercise_count"], 0);
        assert_eq!(docs[1]["kind"], "malformed_syntax");
    }

    #[test]
    fn emitted_summaries_match_record_summary_schema() {
        let lines = [
            r#"UserProfile gender "мужской" age 25 height 180.5 weight 75.0 goal "похудение" activity_type "средняя""#,
            r#"Exercise name "Приседания" sets 4 reps_per_set 10 weight 60.0 notes "медленно""#,
            "Workout date 2025.12.15 duration 01:30",
            r#"NutritionGoal goal_type "набор массы" calories 2800.0 protein 160.0 fat 80.0 carbs 350.0"#,
        ];
        let mut out = Vec::new();
        let counts = parse_lines(lines, today(), OutputFormat::Raw, &mut out).unwrap();
        assert_eq!(counts, (4, 0));

        let schemas = fit_schema::RecordSchemas::builtin();
        for line in String::from_utf8(out).unwrap().lines() {
            let doc: serde_json::Value = serde_json::from_str(line).unwrap();
            schemas.check("record_summary", &doc["summary"]).unwrap();
        }
    }

    #[test]
    fn today_decides_future_workouts() {
        let mut out = Vec::new();
        let early = NaiveDate::from_ymd_opt(2025, 12, 14).unwrap();
        let counts = parse_lines(
            ["Workout date 2025.12.15 duration 01:30"],
            early,
            OutputFormat::Text,
            &mut out,
        )
        .unwrap();
        assert_eq!(counts, (1, 1));
        assert!(String::from_utf8(out).unwrap().starts_with("Validation error:"));
    }
}
