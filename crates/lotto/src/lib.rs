mod batch;
mod ticket;

pub use batch::*;
pub use ticket::*;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded generator when `seed` is set, OS-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
