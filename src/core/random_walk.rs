//! Gaussian random walk for the spot price.

use rand::Rng;

/// Draws a uniform sample in (0, 1), redrawing on an exact zero so the
/// logarithm in the Box-Muller transform stays finite.
fn nonzero_uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u: f64 = rng.gen();
        if u != 0.0 {
            return u;
        }
    }
}

/// Standard normal sample via the Box-Muller transform.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u = nonzero_uniform(rng);
    let v = nonzero_uniform(rng);
    (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos()
}

/// Produces successive spot prices as `previous + N(0, std_dev)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomWalk {
    pub std_dev: f64,
}

impl RandomWalk {
    pub fn new(std_dev: f64) -> Self {
        Self { std_dev }
    }

    pub fn next<R: Rng + ?Sized>(&self, previous_price: f64, rng: &mut R) -> f64 {
        previous_price + standard_normal(rng) * self.std_dev
    }
}
