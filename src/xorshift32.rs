/// Source of randomness for ticket and winning-number draws. Implementors only
/// supply raw `u32` output; range mapping is shared.
pub trait RandomSource {
  fn next_u32(&mut self) -> u32;

  /// Uniform integer in `[min, max]`, both ends inclusive.
  fn random_int_in_range(
    &mut self,
    min: u32,
    max: u32,
  ) -> u32 {
    // Make sure min and max are in the correct order
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let span = (max - min) as u64 + 1;

    if span == 1 {
      return min;
    }

    // Reject the tail of the u32 space that would bias the modulo.
    let zone = (1u64 << 32) - ((1u64 << 32) % span);
    loop {
      let value = self.next_u32() as u64;
      if value < zone {
        return min + (value % span) as u32;
      }
    }
  }
}

pub struct Xorshift32 {
  state: u32,
}

impl Xorshift32 {
  // Zero is a fixed point of xorshift, so it is never used as the state.
  const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

  pub fn new(seed: u32) -> Self {
    Self {
      state: if seed == 0 {
        Self::ZERO_SEED_REPLACEMENT
      } else {
        seed
      },
    }
  }

  /// Fold several entropy components (block height, time, client seed...)
  /// into a single generator.
  pub fn from_components(components: &[u64]) -> Self {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for component in components.iter() {
      for byte in component.to_le_bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
      }
    }
    Self::new((hash ^ (hash >> 32)) as u32)
  }
}

impl RandomSource for Xorshift32 {
  fn next_u32(&mut self) -> u32 {
    let mut x = self.state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    self.state = x;
    x
  }
}
