use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};
use rand::Rand;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ops::Deref;

pub struct BigUintExt<T: Borrow<BigUint>>(pub T);

impl<T: Borrow<BigUint>> Deref for BigUintExt<T> {
    type Target = BigUint;
    fn deref(&self) -> &Self::Target {
        self.0.borrow()
    }
}

impl<T: Borrow<BigUint>> PartialEq<BigUint> for BigUintExt<T> {
    fn eq(&self, other: &BigUint) -> bool {
        self.deref().eq(other)
    }
}

impl<T: Borrow<BigUint>> PartialEq<BigUint> for &BigUintExt<T> {
    fn eq(&self, other: &BigUint) -> bool {
        (*self).deref().eq(other)
    }
}

impl<T: Borrow<BigUint>> PartialOrd<BigUint> for BigUintExt<T> {
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
        self.deref().partial_cmp(other)
    }
}

impl<T: Borrow<BigUint>> PartialOrd<BigUint> for &BigUintExt<T> {
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
        (*self).deref().partial_cmp(other)
    }
}

impl<T: Borrow<BigUint>> BigUintExt<T> {
    /// 迭代版扩展欧几里得算法求模逆: self * inv = 1 \mod modulus <br>
    /// gcd(self, modulus)不为1时模逆不存在, 返回None;
    /// 结果规范化到[0, modulus)之间;
    pub fn modinv(&self, modulus: &BigUint) -> Option<BigUint> {
        if modulus.is_zero() {
            return None;
        } else if modulus.is_one() {
            // 模1之下一切同余于0
            return Some(BigUint::zero());
        }

        let m0 = BigInt::from(modulus.clone());
        let (mut a, mut m) = (BigInt::from(self.deref() % modulus), m0.clone());
        let (mut x0, mut x1) = (BigInt::zero(), BigInt::one());

        if a.is_zero() {
            return None;
        }

        while a > BigInt::one() {
            if m.is_zero() {
                // 此时gcd(self, modulus) = a > 1
                return None;
            }

            let q = &a / &m;
            let r = &a % &m;
            a = std::mem::replace(&mut m, r);
            let t = &x1 - &q * &x0;
            x1 = std::mem::replace(&mut x0, t);
        }

        if x1.is_negative() {
            x1 += &m0;
        }

        x1.to_biguint()
    }

    /// 确定性的素性检验: 试除到⌊√n⌋为止, 除数取6k±1的形式;
    /// 对任意大小的整数都精确, 代价为O(√n), 只适合演示规模的素数;
    pub fn is_prime(&self) -> bool {
        let n = self.deref();
        let (two, three) = (BigUint::from(2u8), BigUint::from(3u8));

        if n <= &BigUint::one() {
            return false;
        } else if n == &two || n == &three {
            return true;
        } else if (n % &two).is_zero() || (n % &three).is_zero() {
            return false;
        }

        let limit = n.sqrt();
        let mut i = BigUint::from(5u8);
        while i <= limit {
            if (n % &i).is_zero() || (n % (&i + &two)).is_zero() {
                return false;
            }
            i += 6u32;
        }

        true
    }

    // 生成[0..self)之间的随机数
    pub fn gen_random<Rng: Rand>(&self, rng: &mut Rng) -> BigUint {
        let bits = self.bits() as usize;
        let mut n = vec![0u8; (bits + 7) >> 3];

        loop {
            rng.rand(n.as_mut_slice());
            let r = BigUint::from_bytes_le(n.as_slice());
            if self > r {
                return r;
            }
        }
    }

    /// 从[2, limit)中随机抽取一个素数, 用于演示规模的密钥自动生成;
    /// 候选值只取位长不低于limit的区间高半部分, 避免抽出过小的素数;
    pub fn random_prime<Rng: Rand>(limit: &BigUint, rng: &mut Rng) -> Result<BigUint, String> {
        const MAX_ATTEMPTS: usize = 4096;

        if limit < &BigUint::from(3u8) {
            return Err("prime limit must be at least 3".to_string());
        }

        let min_bits = limit.bits().saturating_sub(1).max(2);
        let limit = BigUintExt(limit);
        for _ in 0..MAX_ATTEMPTS {
            let candidate = limit.gen_random(rng);
            if candidate.bits() < min_bits {
                continue;
            }

            if BigUintExt(&candidate).is_prime() {
                return Ok(candidate);
            }
        }

        Err(format!(
            "no prime found below {} in {} attempts",
            limit.deref(),
            MAX_ATTEMPTS
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::BigUintExt;
    use num_bigint::BigUint;
    use rand::SeedRand;

    fn sieve(limit: usize) -> Vec<bool> {
        let mut prime = vec![true; limit + 1];
        prime[0] = false;
        if limit >= 1 {
            prime[1] = false;
        }
        let mut p = 2;
        while p * p <= limit {
            if prime[p] {
                let mut k = p * p;
                while k <= limit {
                    prime[k] = false;
                    k += p;
                }
            }
            p += 1;
        }
        prime
    }

    #[test]
    fn trial_division_agrees_with_sieve() {
        let table = sieve(10000);
        for (k, &expected) in table.iter().enumerate() {
            assert_eq!(
                BigUintExt(BigUint::from(k)).is_prime(),
                expected,
                "primality of `{}` is wrong",
                k
            );
        }
    }

    #[test]
    fn modinv_fixtures() {
        let cases = [
            // (a, modulus, inverse)
            (17u32, 3120u32, 2753u32),
            (65537, 3120, 2753),
            (7, 40, 23),
            (3, 7, 5),
            (1, 97, 1),
        ];

        for (a, m, inv) in cases {
            let got = BigUintExt(BigUint::from(a))
                .modinv(&BigUint::from(m))
                .unwrap();
            assert_eq!(got, BigUint::from(inv), "modinv({}, {})", a, m);
            assert!(got < BigUint::from(m));
        }
    }

    #[test]
    fn modinv_nonexistent() {
        // gcd(3, 3120) = 3
        assert!(BigUintExt(BigUint::from(3u32))
            .modinv(&BigUint::from(3120u32))
            .is_none());
        // 0没有模逆
        assert!(BigUintExt(BigUint::from(0u32))
            .modinv(&BigUint::from(97u32))
            .is_none());
        assert!(BigUintExt(BigUint::from(6u32))
            .modinv(&BigUint::from(9u32))
            .is_none());
    }

    #[test]
    fn random_prime_is_reproducible() {
        let limit = BigUint::from(1000u32);

        let mut rng = SeedRand::new(7);
        let p = BigUintExt::<BigUint>::random_prime(&limit, &mut rng).unwrap();
        assert!(BigUintExt(&p).is_prime());
        assert!(p < limit);
        assert!(p.bits() >= limit.bits() - 1);

        let mut rng = SeedRand::new(7);
        let q = BigUintExt::<BigUint>::random_prime(&limit, &mut rng).unwrap();
        assert_eq!(p, q, "same seed must draw the same prime");
    }
}
