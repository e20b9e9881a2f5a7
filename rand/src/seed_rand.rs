use crate::Rand;
use xrand::rngs::StdRng;
use xrand::{RngCore, SeedableRng};

/// 种子可复现的随机源, 相同的种子给出相同的字节序列 <br>
/// 用于测试中复现密钥生成的重试序列
#[derive(Clone)]
pub struct SeedRand {
    rng: StdRng,
}

impl SeedRand {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeedRand {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Rand for SeedRand {
    fn rand(&mut self, random: &mut [u8]) {
        self.rng.fill_bytes(random);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Rand, SeedRand};

    #[test]
    fn same_seed_same_sequence() {
        let (mut a, mut b) = (SeedRand::new(42), SeedRand::new(42));
        let (mut x, mut y) = ([0u8; 32], [0u8; 32]);
        a.rand(&mut x);
        b.rand(&mut y);
        assert_eq!(x, y);

        let mut c = SeedRand::new(43);
        let mut z = [0u8; 32];
        c.rand(&mut z);
        assert_ne!(x, z);
    }
}
