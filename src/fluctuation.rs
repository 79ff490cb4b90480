use rand::Rng;

pub const DEFAULT_PERCENT_BOUND: f64 = 5.0;

/// Perturbs `base` by a uniform offset of up to `percent_bound` percent in
/// either direction, rounded to the nearest integer and floored at zero.
pub fn fluctuate<R: Rng + ?Sized>(rng: &mut R, base: f64, percent_bound: f64) -> u64 {
    let factor: f64 = rng.gen_range(-1.0..1.0);
    let offset = factor * (base * percent_bound / 100.0);
    (base + offset).round().max(0.0) as u64
}

/// Additive drift for rate fields: `base` plus a uniform offset in
/// `[low, high)`, rounded to one decimal place.
pub fn drift<R: Rng + ?Sized>(rng: &mut R, base: f64, low: f64, high: f64) -> f64 {
    let offset = if high > low { rng.gen_range(low..high) } else { low };
    round_tenths(base + offset)
}

pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
