use rand::Rng;

use warden_core::Entropy;

/// Uniform draws from `rand::thread_rng`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngEntropy;

impl Entropy for ThreadRngEntropy {
    fn unit(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}

/// Decorative authorization code such as `NX-3F2A`.
pub fn auth_code(entropy: &dyn Entropy, prefix: &str) -> String {
    let value = (entropy.unit().clamp(0.0, 1.0) * f64::from(u16::MAX)) as u16;
    format!("{prefix}-{value:04X}")
}
