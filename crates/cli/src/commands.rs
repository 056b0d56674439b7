//! Subcommands of the `utilkit` binary.
//!
//! Each command maps onto one library function and returns the text to print.

use std::time::Instant;

use anyhow::{bail, Context};
use serde_json::Value;
use utilkit_common::{
    format_date, parse_json_or, random_string, random_string_checked, sleep_checked,
};

use crate::config::CliConfig;

pub const USAGE: &str = "Usage: utilkit <command> [args]

Commands:
  sleep <ms>                       Sleep for <ms> milliseconds
  format-date <date>               Format a date as \"Month D, YYYY\"
  parse-json <text> [fallback]     Parse JSON, printing [fallback] (default null) on failure
  random-string [len]              Print a random alphanumeric string";

/// Runs `command` with its remaining `args`.
pub async fn run(command: &str, args: &[String], config: &CliConfig) -> anyhow::Result<String> {
    match command {
        "sleep" => {
            let raw = required(args, 0, "sleep <ms>")?;
            let ms: i64 = raw
                .parse()
                .with_context(|| format!("invalid duration '{raw}'"))?;
            let start = Instant::now();
            sleep_checked(ms).await?;
            Ok(format!("slept {} ms", start.elapsed().as_millis()))
        }
        "format-date" => {
            let text = required(args, 0, "format-date <date>")?;
            Ok(format_date(text)?)
        }
        "parse-json" => {
            let text = required(args, 0, "parse-json <text> [fallback]")?;
            let fallback = match args.get(1) {
                Some(raw) => serde_json::from_str(raw).context("fallback must be valid JSON")?,
                None => Value::Null,
            };
            let value: Value = parse_json_or(text, fallback);
            let rendered = if config.json_pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            Ok(rendered)
        }
        "random-string" => match args.first() {
            Some(raw) => {
                let len: i64 = raw
                    .parse()
                    .with_context(|| format!("invalid length '{raw}'"))?;
                Ok(random_string_checked(len)?)
            }
            None => Ok(random_string(config.random_length)),
        },
        other => bail!("Unknown command: {other}\n\n{USAGE}"),
    }
}

fn required<'a>(args: &'a [String], index: usize, usage: &str) -> anyhow::Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("missing argument\n\nUsage: utilkit {usage}"))
}
