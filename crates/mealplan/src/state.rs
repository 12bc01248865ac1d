use std::collections::HashSet;

use crate::{
    EMPTY_INPUT_MESSAGE, RESET_MESSAGE, Recipe, WEEKDAYS, WeeklyPlanEntry, meta_line,
    parse_tokens, pick_weekly_plan,
};

/// The plan currently on screen together with its status line.
///
/// Owned by the caller and replaced wholesale on every generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanState {
    plan: Vec<WeeklyPlanEntry>,
    meta: String,
}

impl Default for PlanState {
    fn default() -> Self {
        Self {
            plan: Vec::new(),
            meta: RESET_MESSAGE.to_owned(),
        }
    }
}

impl PlanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&mut self, text: &str, catalog: &[Recipe]) -> &[WeeklyPlanEntry] {
        let tokens = parse_tokens(text);

        if tokens.is_empty() {
            self.plan = Vec::new();
            self.meta = EMPTY_INPUT_MESSAGE.to_owned();
            return &self.plan;
        }

        let available = tokens.iter().cloned().collect::<HashSet<_>>();

        self.plan = pick_weekly_plan(&available, catalog, WEEKDAYS);
        // Entered items are counted as typed, repeats included
        self.meta = meta_line(&self.plan, tokens.len());

        tracing::info!(
            entered = tokens.len(),
            available = available.len(),
            days = self.plan.len(),
            "weekly plan generated"
        );

        &self.plan
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn plan(&self) -> &[WeeklyPlanEntry] {
        &self.plan
    }

    pub fn meta(&self) -> &str {
        &self.meta
    }

    pub fn copy_text(&self) -> Option<String> {
        crate::copy_text(&self.plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NO_MENU_MESSAGE, catalog};

    #[test]
    fn test_new_state_shows_reset_message() {
        let state = PlanState::new();
        assert!(state.plan().is_empty());
        assert_eq!(state.meta(), RESET_MESSAGE);
        assert!(state.copy_text().is_none());
    }

    #[test]
    fn test_generate_blank_input() {
        let mut state = PlanState::new();
        assert!(state.generate("  \n ", &catalog::builtin()).is_empty());
        assert_eq!(state.meta(), EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn test_generate_without_feasible_menu() {
        let mut state = PlanState::new();
        assert!(state.generate("초콜릿", &catalog::builtin()).is_empty());
        assert_eq!(state.meta(), NO_MENU_MESSAGE);
    }

    #[test]
    fn test_generate_then_reset() {
        let mut state = PlanState::new();
        assert_eq!(state.generate("밥, 달걀", &catalog::builtin()).len(), 5);
        assert!(state.meta().starts_with("입력 재료 2개 기준"));
        assert!(state.copy_text().is_some());

        state.reset();
        assert_eq!(state, PlanState::default());
    }

    #[test]
    fn test_meta_counts_repeated_ingredients() {
        let mut state = PlanState::new();
        let plan = state.generate("대파, 대파, 양파", &catalog::builtin()).to_vec();
        let deduped = crate::parse_ingredients("대파, 양파");

        assert!(state.meta().starts_with("입력 재료 3개 기준"));
        assert_eq!(plan, pick_weekly_plan(&deduped, &catalog::builtin(), WEEKDAYS));
    }
}
