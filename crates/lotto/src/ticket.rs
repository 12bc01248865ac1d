use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use time::OffsetDateTime;
use time::macros::format_description;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;
pub const NUMBERS_PER_TICKET: usize = 6;

/// Rejection-sampling budget for a single ticket. Each draw hits a fresh
/// number with probability of at least 40/45, so a working generator never
/// gets near it; the cap only guards against a degenerate source.
pub const MAX_DRAWS_PER_TICKET: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub numbers: Vec<u8>,
    pub time: String,
}

impl Ticket {
    /// Batch uniqueness key. Order sensitive: unsorted tickets holding the
    /// same numbers in a different order get different keys.
    pub fn key(&self) -> String {
        self.numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn is_sorted(&self) -> bool {
        self.numbers.is_sorted()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers = self
            .numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>();

        f.write_str(&numbers.join(", "))
    }
}

/// Draw six distinct numbers in `MIN_NUMBER..=MAX_NUMBER`, kept in draw order
/// unless `sorted` is set.
pub fn draw_ticket<R: Rng + ?Sized>(rng: &mut R, sorted: bool) -> Ticket {
    let mut numbers = Vec::with_capacity(NUMBERS_PER_TICKET);
    let mut draws = 0;

    while numbers.len() < NUMBERS_PER_TICKET && draws < MAX_DRAWS_PER_TICKET {
        draws += 1;

        let number = rng.random_range(MIN_NUMBER..=MAX_NUMBER);
        if !numbers.contains(&number) {
            numbers.push(number);
        }
    }

    if numbers.len() < NUMBERS_PER_TICKET {
        let need = NUMBERS_PER_TICKET - numbers.len();
        let pool = (MIN_NUMBER..=MAX_NUMBER)
            .filter(|n| !numbers.contains(n))
            .collect::<Vec<_>>();

        tracing::debug!(draws, need, "draw budget exhausted, filling from remaining pool");

        numbers.extend(pool.choose_multiple(rng, need).copied());
    }

    if sorted {
        numbers.sort_unstable();
    }

    Ticket {
        numbers,
        time: timestamp(),
    }
}

fn timestamp() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_default()
}
