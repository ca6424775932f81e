#[cfg(test)]
use mockall::automock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg_attr(test, automock)]
pub trait RandomSource {
    /// Uniform draw in the inclusive range `[min, max]`.
    fn draw_number(&mut self, min: u32, max: u32) -> u32;
    /// True one time out of three.
    fn draw_bool(&mut self) -> bool;
}

#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
}

impl Random {

    pub fn new() -> Self {
        Random {
            rng: StdRng::from_entropy()
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Random {
            rng: StdRng::seed_from_u64(seed)
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::new()
    }
}

impl RandomSource for Random {
    fn draw_number(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max)
    }

    fn draw_bool(&mut self) -> bool {
        self.draw_number(0, 2) == 1
    }
}
