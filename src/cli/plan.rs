use std::io::Read;

use weekpick::Config;
use weekpick::output::{Format, copy_to, render_plan};
use weekpick_mealplan::PlanState;

#[tracing::instrument(skip(config, ingredients))]
pub fn run(
    config: Config,
    ingredients: Option<String>,
    catalog: Option<String>,
    format: Format,
    copy: bool,
) -> anyhow::Result<()> {
    let mut mealplan = config.mealplan;
    if catalog.is_some() {
        mealplan.catalog_path = catalog;
    }

    let recipes = mealplan.catalog()?;

    let text = match ingredients {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut state = PlanState::new();
    state.generate(&text, &recipes);

    if copy {
        copy_to(&mut std::io::stdout().lock(), state.copy_text());
        return Ok(());
    }

    println!("{}", render_plan(&state, format)?);

    Ok(())
}
