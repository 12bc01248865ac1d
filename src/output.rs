use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use weekpick_lotto::{BatchOptions, Ticket, TicketBatch};
use weekpick_mealplan::{MISSING_HEADING, PlanState, WeeklyPlanEntry};

pub const COPY_DONE: &str = "복사 완료!";
pub const COPY_FAILED: &str = "복사 실패";
pub const NO_TICKETS_MESSAGE: &str = "생성된 번호가 없습니다.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct PlanView<'a> {
    meta: &'a str,
    plan: &'a [WeeklyPlanEntry],
}

#[derive(Serialize)]
struct BatchView<'a> {
    options: Option<BatchOptions>,
    tickets: &'a [Ticket],
}

pub fn render_plan(state: &PlanState, format: Format) -> weekpick_shared::Result<String> {
    match format {
        Format::Json => Ok(to_json(&PlanView {
            meta: state.meta(),
            plan: state.plan(),
        })?),
        Format::Text => {
            let mut lines = Vec::new();

            for entry in state.plan() {
                lines.push(format!("{}  [{}]", entry.title(), entry.badge()));
                lines.push(format!(
                    "  {}: {}",
                    MISSING_HEADING,
                    entry.missing_labels().join(", ")
                ));
            }

            lines.push(state.meta().to_owned());

            Ok(lines.join("\n"))
        }
    }
}

pub fn render_batch(batch: &TicketBatch, format: Format) -> weekpick_shared::Result<String> {
    match format {
        Format::Json => Ok(to_json(&BatchView {
            options: batch.options(),
            tickets: batch.tickets(),
        })?),
        Format::Text => Ok(batch
            .copy_text()
            .unwrap_or_else(|| NO_TICKETS_MESSAGE.to_owned())),
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write a copy block to `out`, reporting the outcome on stderr.
///
/// Returns whether anything was copied.
pub fn copy_to<W: Write>(out: &mut W, text: Option<String>) -> bool {
    let Some(text) = text else {
        tracing::info!("nothing to copy");
        return false;
    };

    match writeln!(out, "{text}").and_then(|_| out.flush()) {
        Ok(()) => {
            eprintln!("{COPY_DONE}");
            true
        }
        Err(err) => {
            tracing::error!(error = %err, "copy failed");
            eprintln!("{COPY_FAILED}");
            false
        }
    }
}
