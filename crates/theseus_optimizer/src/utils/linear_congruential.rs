use rand::RngCore;

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

/// 32-bit linear congruential generator:
/// `state = (state * 1664525 + 1013904223) mod 2^32`.
///
/// Seeded random tours depend on this exact sequence, do not swap it for
/// another generator.
#[derive(Clone, Debug)]
pub struct LinearCongruential {
    state: u32,
}

impl LinearCongruential {
    pub fn new(seed: u32) -> Self {
        LinearCongruential { state: seed }
    }
}

impl RngCore for LinearCongruential {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Uniform sample in `[0, 1)` taken from the next 32 bits of `rng`.
pub fn unit_sample(rng: &mut dyn RngCore) -> f64 {
    f64::from(rng.next_u32()) / MODULUS
}
