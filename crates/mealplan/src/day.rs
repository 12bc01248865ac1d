use serde::Serialize;
use strum::{AsRefStr, Display, VariantArray};

/// Cooking days covered by a weekly plan, in plan order.
#[derive(
    Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize,
)]
pub enum Weekday {
    #[strum(serialize = "월요일")]
    #[serde(rename = "월요일")]
    Monday,
    #[strum(serialize = "화요일")]
    #[serde(rename = "화요일")]
    Tuesday,
    #[strum(serialize = "수요일")]
    #[serde(rename = "수요일")]
    Wednesday,
    #[strum(serialize = "목요일")]
    #[serde(rename = "목요일")]
    Thursday,
    #[strum(serialize = "금요일")]
    #[serde(rename = "금요일")]
    Friday,
}

/// Fixed weekday table used when the caller has no reason to pick its own.
pub const WEEKDAYS: &[Weekday] = Weekday::VARIANTS;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekdays_are_five_in_order() {
        let labels = WEEKDAYS.iter().map(|d| d.to_string()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["월요일", "화요일", "수요일", "목요일", "금요일"]);
    }

    #[test]
    fn test_weekday_as_ref_matches_display() {
        assert_eq!(Weekday::Wednesday.as_ref(), "수요일");
    }
}
