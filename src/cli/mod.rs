pub mod lotto;
pub mod plan;
pub mod session;

/// Resolve an `--x` / `--no-x` style pair; `None` defers to config.
pub fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
