use std::collections::HashSet;

use serde::Serialize;

use crate::{Recipe, WEEKDAYS, Weekday};

/// Ingredient key used on both sides of a comparison.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Split raw user text on commas and newlines into normalized tokens.
/// Repeated entries are kept.
pub fn parse_tokens(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(normalize)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Ingredient keys for matching; repeated entries collapse.
pub fn parse_ingredients(raw: &str) -> HashSet<String> {
    parse_tokens(raw).into_iter().collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    pub matched: usize,
    /// Ingredients absent from the available set, in catalog order.
    pub missing: Vec<&'a str>,
}

pub fn score_recipe<'a>(recipe: &'a Recipe, available: &HashSet<String>) -> ScoredRecipe<'a> {
    let missing = recipe
        .ingredients
        .iter()
        .filter(|item| !available.contains(&normalize(item)))
        .map(String::as_str)
        .collect::<Vec<_>>();

    ScoredRecipe {
        recipe,
        matched: recipe.total() - missing.len(),
        missing,
    }
}

/// Score every recipe, drop the ones with no overlap and order the rest by
/// most matched, then fewest missing. Ties keep catalog order.
pub fn rank<'a>(catalog: &'a [Recipe], available: &HashSet<String>) -> Vec<ScoredRecipe<'a>> {
    let mut scored = catalog
        .iter()
        .map(|recipe| score_recipe(recipe, available))
        .filter(|scored| scored.matched > 0)
        .collect::<Vec<_>>();

    scored.sort_by(|a, b| {
        b.matched
            .cmp(&a.matched)
            .then_with(|| a.missing.len().cmp(&b.missing.len()))
    });

    scored
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyPlanEntry {
    pub day: Weekday,
    pub name: String,
    pub missing: Vec<String>,
    pub matched: usize,
    pub total: usize,
}

/// Assign one ranked recipe per day, cycling through the ranking when it is
/// shorter than `days`. Empty when nothing overlaps.
pub fn pick_weekly_plan(
    available: &HashSet<String>,
    catalog: &[Recipe],
    days: &[Weekday],
) -> Vec<WeeklyPlanEntry> {
    let ranked = rank(catalog, available);

    if ranked.is_empty() {
        return Vec::new();
    }

    days.iter()
        .zip(ranked.iter().cycle())
        .map(|(day, scored)| WeeklyPlanEntry {
            day: *day,
            name: scored.recipe.name.to_owned(),
            missing: scored.missing.iter().map(|m| (*m).to_owned()).collect(),
            matched: scored.matched,
            total: scored.recipe.total(),
        })
        .collect()
}

pub fn compute_weekly_plan(text: &str, catalog: &[Recipe]) -> Vec<WeeklyPlanEntry> {
    let available = parse_ingredients(text);
    let plan = pick_weekly_plan(&available, catalog, WEEKDAYS);

    tracing::debug!(
        available = available.len(),
        recipes = catalog.len(),
        days = plan.len(),
        "weekly plan computed"
    );

    plan
}
