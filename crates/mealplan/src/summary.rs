use crate::WeeklyPlanEntry;

pub const EMPTY_INPUT_MESSAGE: &str = "재료를 입력하면 메뉴를 추천해드립니다.";
pub const NO_MENU_MESSAGE: &str =
    "입력한 재료로 만들 수 있는 메뉴가 없습니다. 재료를 추가해보세요.";
pub const RESET_MESSAGE: &str = "입력한 재료로 메뉴를 만들어보세요.";
pub const NO_MISSING_LABEL: &str = "부족한 재료 없음";
pub const MISSING_HEADING: &str = "부족한 재료";

impl WeeklyPlanEntry {
    /// Card title, e.g. `월요일 · 김치볶음밥`.
    pub fn title(&self) -> String {
        format!("{} · {}", self.day, self.name)
    }

    pub fn badge(&self) -> String {
        format!("{}/{} 재료 보유", self.matched, self.total)
    }

    /// Missing ingredients for display, never empty.
    pub fn missing_labels(&self) -> Vec<&str> {
        if self.missing.is_empty() {
            return vec![NO_MISSING_LABEL];
        }

        self.missing.iter().map(String::as_str).collect()
    }

    fn coverage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.matched as f64 / self.total as f64
    }
}

/// Mean share of owned ingredients over the plan, as a rounded percentage.
pub fn average_coverage(plan: &[WeeklyPlanEntry]) -> Option<u32> {
    if plan.is_empty() {
        return None;
    }

    let sum = plan.iter().map(WeeklyPlanEntry::coverage).sum::<f64>();

    Some((sum / plan.len() as f64 * 100.0).round() as u32)
}

/// Status line shown under a generated plan.
pub fn meta_line(plan: &[WeeklyPlanEntry], available_count: usize) -> String {
    match average_coverage(plan) {
        Some(average) => format!("입력 재료 {available_count}개 기준 · 평균 충족률 {average}%"),
        None => NO_MENU_MESSAGE.to_owned(),
    }
}

/// Plain-text block for copying a plan, one line per day.
pub fn copy_text(plan: &[WeeklyPlanEntry]) -> Option<String> {
    if plan.is_empty() {
        return None;
    }

    let lines = plan
        .iter()
        .map(|entry| {
            format!(
                "{} | 부족: {}",
                entry.title(),
                entry.missing_labels().join(", ")
            )
        })
        .collect::<Vec<_>>();

    Some(lines.join("\n"))
}
