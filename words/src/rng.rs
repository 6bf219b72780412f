use rand::seq::SliceRandom;
use rand_core::{impls, Error, RngCore, SeedableRng};

/// `Rand` is a simple XorShift RNG.
#[derive(Clone, Debug)]
pub struct Rand(u64);

impl Rand {
    /// XorShift never leaves the all-zero state, so a zero seed is replaced.
    pub fn new(seed: u64) -> Self {
        Self(if seed == 0 { 0x2545_F491_4F6C_DD1D } else { seed })
    }

    pub fn sample(&mut self) -> u64 {
        let x = &mut self.0;

        *x ^= *x << 13;
        *x ^= *x >> 17;
        *x ^= *x << 5;

        *x
    }
}

impl Default for Rand {
    /// Seeds the random state with the current time.
    fn default() -> Self {
        use std::time::SystemTime;
        let seed = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(seed)
    }
}

impl RngCore for Rand {
    fn next_u32(&mut self) -> u32 {
        (self.sample() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.sample()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Rand {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }
}

/// Picks `n` words from `words` without replacement, in random order.
///
/// Returns every word when `n >= words.len()`.
pub fn sample_words<S: AsRef<str>>(words: &[S], n: usize, rng: &mut Rand) -> Vec<String> {
    let mut indices: Vec<usize> = (0..words.len()).collect();
    let (picked, _) = indices.partial_shuffle(rng, n);
    picked.iter().map(|&i| words[i].as_ref().to_owned()).collect()
}
