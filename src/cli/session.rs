use std::io::{BufRead, Write};

use weekpick::Config;
use weekpick::output::copy_to;
use weekpick::session::{HELP, Reply, Session};
use weekpick_lotto::rng_from_seed;

#[tracing::instrument(skip(config))]
pub fn run(config: Config) -> anyhow::Result<()> {
    let catalog = config.mealplan.catalog()?;
    let rng = rng_from_seed(config.lotto.seed);
    let mut session = Session::new(catalog, config.lotto.options(), rng);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{HELP}")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.handle(&line)? {
            Reply::Show(text) if text.is_empty() => {}
            Reply::Show(text) => writeln!(stdout, "{text}")?,
            Reply::Copy(text) => {
                copy_to(&mut stdout, text);
            }
            Reply::Quit => break,
        }
    }

    tracing::info!("session ended");

    Ok(())
}
