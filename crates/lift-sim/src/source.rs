//! Request sources — where pickup demand comes from.

use lift_core::{BankConfig, Floor, PickupRequest, SimRng};

/// A lazy, unbounded stream of pickup requests.
///
/// Implementations must uphold the dispatcher's boundary contract: both
/// floors in range, `from != to`.  Delivery cadence is not the source's
/// concern — the request pump asks for the next request on its own timer.
pub trait RequestSource {
    fn next_request(&mut self) -> PickupRequest;
}

/// Uniformly random origin/destination pairs from a seeded RNG.
///
/// Deterministic per seed, so a demo run can be replayed exactly.
pub struct RandomRequests {
    rng:        SimRng,
    num_floors: u16,
}

impl RandomRequests {
    pub fn new(num_floors: u16, seed: u64) -> Self {
        debug_assert!(num_floors >= 2, "need two floors to form a request");
        Self { rng: SimRng::new(seed), num_floors }
    }

    pub fn from_config(config: &BankConfig) -> Self {
        Self::new(config.num_floors, config.seed)
    }
}

impl RequestSource for RandomRequests {
    fn next_request(&mut self) -> PickupRequest {
        let from = Floor(self.rng.gen_range(0..self.num_floors));
        loop {
            let to = Floor(self.rng.gen_range(0..self.num_floors));
            if to != from {
                return PickupRequest::new(from, to);
            }
        }
    }
}
