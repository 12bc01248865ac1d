use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;

use crate::{Ticket, draw_ticket};

pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 10;
pub const DEFAULT_COUNT: usize = 5;

/// Draws allowed per requested ticket before a batch gives up on finding
/// more unique tickets.
pub const ATTEMPTS_PER_TICKET: usize = 300;

pub fn clamp_count(count: usize) -> usize {
    count.clamp(MIN_COUNT, MAX_COUNT)
}

/// Draw up to `count` tickets.
///
/// With `unique` set, a ticket whose key was already accepted is redrawn.
/// The loop stops after `count * ATTEMPTS_PER_TICKET` draws and returns the
/// tickets found so far, so the batch may come back short.
pub fn generate_ticket_batch<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    sorted: bool,
    unique: bool,
) -> Vec<Ticket> {
    let max_attempts = count.saturating_mul(ATTEMPTS_PER_TICKET);
    let mut tickets = Vec::with_capacity(count);
    let mut keys = HashSet::new();
    let mut attempts = 0;

    while tickets.len() < count && attempts < max_attempts {
        attempts += 1;

        let ticket = draw_ticket(rng, sorted);
        if unique && !keys.insert(ticket.key()) {
            tracing::debug!(key = %ticket.key(), "duplicate ticket redrawn");
            continue;
        }

        tickets.push(ticket);
    }

    if tickets.len() < count {
        tracing::warn!(
            requested = count,
            found = tickets.len(),
            attempts,
            "retry ceiling reached, returning a short batch"
        );
    }

    tickets
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchOptions {
    pub count: usize,
    pub sorted: bool,
    pub unique: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            sorted: true,
            unique: true,
        }
    }
}

impl BatchOptions {
    /// Options with `count` clamped into `MIN_COUNT..=MAX_COUNT`.
    pub fn new(count: usize, sorted: bool, unique: bool) -> Self {
        Self {
            count: clamp_count(count),
            sorted,
            unique,
        }
    }
}

/// The batch currently on screen. Owned by the caller; each generation
/// replaces the previous tickets wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketBatch {
    options: Option<BatchOptions>,
    tickets: Vec<Ticket>,
}

impl TicketBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R, options: BatchOptions) -> &[Ticket] {
        let options = BatchOptions::new(options.count, options.sorted, options.unique);

        self.tickets = generate_ticket_batch(rng, options.count, options.sorted, options.unique);
        self.options = Some(options);

        tracing::info!(
            count = options.count,
            sorted = options.sorted,
            unique = options.unique,
            drawn = self.tickets.len(),
            "ticket batch generated"
        );

        &self.tickets
    }

    /// Draw a fresh batch with the last options used, or the defaults.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[Ticket] {
        let options = self.options.unwrap_or_default();

        self.generate(rng, options)
    }

    pub fn reset(&mut self) {
        self.tickets.clear();
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn options(&self) -> Option<BatchOptions> {
        self.options
    }

    /// One line per ticket, e.g. `1. 3, 14, 15, 26, 35, 45 (2026-01-01 09:00:00)`.
    pub fn copy_text(&self) -> Option<String> {
        if self.tickets.is_empty() {
            return None;
        }

        let lines = self
            .tickets
            .iter()
            .enumerate()
            .map(|(index, ticket)| format!("{}. {} ({})", index + 1, ticket, ticket.time))
            .collect::<Vec<_>>();

        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(0), 1);
        assert_eq!(clamp_count(4), 4);
        assert_eq!(clamp_count(99), 10);
    }

    #[test]
    fn test_options_clamp_count() {
        assert_eq!(BatchOptions::new(25, false, true).count, MAX_COUNT);
        assert_eq!(BatchOptions::default().count, DEFAULT_COUNT);
    }

    #[test]
    fn test_generate_replaces_tickets() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut batch = TicketBatch::new();

        assert_eq!(batch.generate(&mut rng, BatchOptions::new(3, true, true)).len(), 3);
        let first = batch.tickets().to_vec();

        assert_eq!(batch.generate(&mut rng, BatchOptions::new(2, true, true)).len(), 2);
        assert_ne!(batch.tickets(), first.as_slice());
    }

    #[test]
    fn test_regenerate_reuses_options() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut batch = TicketBatch::new();

        batch.generate(&mut rng, BatchOptions::new(7, false, false));
        let before = batch.tickets().to_vec();

        assert_eq!(batch.regenerate(&mut rng).len(), 7);
        assert_eq!(batch.options(), Some(BatchOptions::new(7, false, false)));
        assert_ne!(batch.tickets(), before.as_slice());
    }

    #[test]
    fn test_regenerate_without_history_uses_defaults() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut batch = TicketBatch::new();

        assert_eq!(batch.regenerate(&mut rng).len(), DEFAULT_COUNT);
        assert!(batch.tickets().iter().all(Ticket::is_sorted));
    }

    #[test]
    fn test_reset_clears_tickets() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut batch = TicketBatch::new();

        batch.generate(&mut rng, BatchOptions::default());
        batch.reset();

        assert!(batch.tickets().is_empty());
        assert!(batch.copy_text().is_none());
    }

    #[test]
    fn test_copy_text_numbers_lines() {
        let batch = TicketBatch {
            options: None,
            tickets: vec![
                Ticket {
                    numbers: vec![1, 2, 3, 4, 5, 6],
                    time: "t1".to_owned(),
                },
                Ticket {
                    numbers: vec![40, 41, 42, 43, 44, 45],
                    time: "t2".to_owned(),
                },
            ],
        };

        assert_eq!(
            batch.copy_text().unwrap(),
            "1. 1, 2, 3, 4, 5, 6 (t1)\n2. 40, 41, 42, 43, 44, 45 (t2)"
        );
    }
}
