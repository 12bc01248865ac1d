use weekpick::Config;
use weekpick::output::{Format, copy_to, render_batch};
use weekpick_lotto::{BatchOptions, TicketBatch, rng_from_seed};

#[derive(Debug)]
pub struct Args {
    pub count: Option<usize>,
    pub sorted: Option<bool>,
    pub unique: Option<bool>,
    pub seed: Option<u64>,
    pub format: Format,
    pub copy: bool,
}

#[tracing::instrument(skip(config))]
pub fn run(config: Config, args: Args) -> anyhow::Result<()> {
    let defaults = config.lotto.options();
    let requested = args.count.unwrap_or(defaults.count);
    let options = BatchOptions::new(
        requested,
        args.sorted.unwrap_or(defaults.sorted),
        args.unique.unwrap_or(defaults.unique),
    );

    if options.count != requested {
        tracing::warn!(requested, count = options.count, "ticket count clamped");
    }

    let mut rng = rng_from_seed(args.seed.or(config.lotto.seed));
    let mut batch = TicketBatch::new();
    batch.generate(&mut rng, options);

    if args.copy {
        copy_to(&mut std::io::stdout().lock(), batch.copy_text());
        return Ok(());
    }

    println!("{}", render_batch(&batch, args.format)?);

    Ok(())
}
