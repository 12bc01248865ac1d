use rand::Rng;
use weekpick_lotto::{BatchOptions, TicketBatch};
use weekpick_mealplan::{PlanState, Recipe};

use crate::output::{Format, NO_TICKETS_MESSAGE, render_batch, render_plan};

pub const HELP: &str = "\
commands:
  plan <ingredients>   recommend a weekly menu (comma separated)
  lotto [count]        draw a batch of tickets
  again                redraw the last batch
  copy                 print the last result as a copy block
  reset [plan|lotto]   clear one or both results
  help                 show this help
  quit                 leave the session";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Focus {
    #[default]
    Plan,
    Lotto,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to print on stdout
    Show(String),
    /// Copy block, `None` when there is nothing to copy
    Copy(Option<String>),
    Quit,
}

/// Interactive state for both tools. Each command replaces the relevant
/// state value wholesale.
pub struct Session<R> {
    catalog: Vec<Recipe>,
    defaults: BatchOptions,
    rng: R,
    plan: PlanState,
    batch: TicketBatch,
    focus: Focus,
}

impl<R: Rng> Session<R> {
    pub fn new(catalog: Vec<Recipe>, defaults: BatchOptions, rng: R) -> Self {
        Self {
            catalog,
            defaults,
            rng,
            plan: PlanState::new(),
            batch: TicketBatch::new(),
            focus: Focus::default(),
        }
    }

    pub fn plan(&self) -> &PlanState {
        &self.plan
    }

    pub fn batch(&self) -> &TicketBatch {
        &self.batch
    }

    pub fn handle(&mut self, line: &str) -> weekpick_shared::Result<Reply> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        tracing::debug!(command, "session command");

        let reply = match command {
            "" => Reply::Show(String::new()),
            "plan" => {
                self.focus = Focus::Plan;
                self.plan.generate(rest, &self.catalog);
                Reply::Show(render_plan(&self.plan, Format::Text)?)
            }
            "lotto" => {
                let count = if rest.is_empty() {
                    self.defaults.count
                } else {
                    match rest.parse::<usize>() {
                        Ok(count) => count,
                        Err(_) => return Ok(Reply::Show(format!("invalid count: {rest}"))),
                    }
                };

                let options = BatchOptions::new(count, self.defaults.sorted, self.defaults.unique);
                self.focus = Focus::Lotto;
                self.batch.generate(&mut self.rng, options);
                Reply::Show(render_batch(&self.batch, Format::Text)?)
            }
            "again" => {
                self.focus = Focus::Lotto;
                if self.batch.options().is_none() {
                    self.batch.generate(&mut self.rng, self.defaults);
                } else {
                    self.batch.regenerate(&mut self.rng);
                }
                Reply::Show(render_batch(&self.batch, Format::Text)?)
            }
            "copy" => Reply::Copy(match self.focus {
                Focus::Plan => self.plan.copy_text(),
                Focus::Lotto => self.batch.copy_text(),
            }),
            "reset" => match rest {
                "plan" => {
                    self.plan.reset();
                    Reply::Show(self.plan.meta().to_owned())
                }
                "lotto" => {
                    self.batch.reset();
                    Reply::Show(NO_TICKETS_MESSAGE.to_owned())
                }
                "" => {
                    self.plan.reset();
                    self.batch.reset();
                    Reply::Show(self.plan.meta().to_owned())
                }
                other => Reply::Show(format!("unknown reset target: {other}")),
            },
            "help" => Reply::Show(HELP.to_owned()),
            "quit" | "exit" => Reply::Quit,
            other => Reply::Show(format!("unknown command: {other}\n{HELP}")),
        };

        Ok(reply)
    }
}
