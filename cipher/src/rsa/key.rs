use crate::CipherError;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::Rand;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use utils::BigUintExt;

/// 公钥(e, n)
#[derive(Clone, Debug, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    // n = p * q
    n: BigUint,
    // public exponent, gcd(e, (p-1)(q-1)) = 1
    e: BigUint,
}

/// 私钥(d, n)
#[derive(Clone, Debug, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    n: BigUint,
    // d * e = 1 % (p-1)(q-1)
    d: BigUint,
}

/// 一次密钥生成得到的全部整数(p, q, n, phi, e, d), 生成之后不可变
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaKeyMaterial {
    p: BigUint,
    q: BigUint,
    n: BigUint,
    phi: BigUint,
    e: BigUint,
    d: BigUint,
}

impl PublicKey {
    /// note: not to check the `n` and `e` are right RSA parameters
    pub fn new_uncheck(n: BigUint, e: BigUint) -> Self {
        Self { n, e }
    }

    /// n
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// e
    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// RSAEP: $m^e \mod n$, 调用者保证$m < n$
    pub(super) fn rsaep(&self, m: &BigUint) -> BigUint {
        m.modpow(&self.e, &self.n)
    }
}

impl PrivateKey {
    /// note: not to check the `n` and `d` are right RSA parameters
    pub fn new_uncheck(n: BigUint, d: BigUint) -> Self {
        Self { n, d }
    }

    /// n
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// d
    pub fn exponent(&self) -> &BigUint {
        &self.d
    }

    /// RSADP: $c^d \mod n$, 调用者保证$c < n$
    pub(super) fn rsadp(&self, c: &BigUint) -> BigUint {
        c.modpow(&self.d, &self.n)
    }
}

// 公钥指数的确定性候选序列: 先试常用值, 再从19起按奇数递增
const EXP_CANDIDATES: [u32; 3] = [65537, 3, 17];
const EXP_ATTEMPTS: usize = 64;

fn select_public_exp(phi: &BigUint) -> Result<BigUint, CipherError> {
    for e in EXP_CANDIDATES {
        let e = BigUint::from(e);
        if e.gcd(phi).is_one() {
            log::debug!("selected public exponent e={}", e);
            return Ok(e);
        }
        log::trace!("candidate e={} is not coprime with phi", e);
    }

    let mut fallback = BigUint::from(19u32);
    for _ in 0..EXP_ATTEMPTS {
        if fallback.gcd(phi).is_one() {
            log::debug!("selected public exponent e={}", fallback);
            return Ok(fallback);
        }
        log::trace!("candidate e={} is not coprime with phi", fallback);
        fallback += 2u32;
    }

    Err(CipherError::KeyGenerationFailed {
        attempts: EXP_ATTEMPTS,
    })
}

impl RsaKeyMaterial {
    /// 由两个互不相等的素数生成密钥材料;
    /// 素性在这里用试除法重新校验, 不合法输入报InvalidPrimes;
    pub fn generate(p: BigUint, q: BigUint) -> Result<Self, CipherError> {
        if p == q {
            return Err(CipherError::InvalidPrimes(
                "p and q must be distinct".to_string(),
            ));
        }

        for x in [&p, &q] {
            if !BigUintExt(x).is_prime() {
                return Err(CipherError::InvalidPrimes(format!("`{}` is not prime", x)));
            }
        }

        let n = &p * &q;
        let phi = (&p - 1u32) * (&q - 1u32);
        let e = select_public_exp(&phi)?;
        let d = BigUintExt(&e)
            .modinv(&phi)
            .expect("this will never happened due to e and phi is coprime");

        log::debug!("generated rsa key material: n={}, phi={}, e={}", n, phi, e);

        Ok(Self { p, q, n, phi, e, d })
    }

    /// 两个素数由可注入的随机源在[2, limit)中抽取,
    /// 对应原型应用里p/q留空时的自动生成流程
    pub fn generate_demo<Rng: Rand>(limit: &BigUint, rng: &mut Rng) -> Result<Self, CipherError> {
        const DISTINCT_ATTEMPTS: usize = 64;

        let p =
            BigUintExt::<BigUint>::random_prime(limit, rng).map_err(CipherError::InvalidPrimes)?;
        for _ in 0..DISTINCT_ATTEMPTS {
            let q = BigUintExt::<BigUint>::random_prime(limit, rng)
                .map_err(CipherError::InvalidPrimes)?;
            if q != p {
                return Self::generate(p, q);
            }
        }

        Err(CipherError::KeyGenerationFailed {
            attempts: DISTINCT_ATTEMPTS,
        })
    }

    pub fn is_valid(&self) -> Result<(), CipherError> {
        if self.n != &self.p * &self.q {
            return Err(CipherError::InvalidPrimes(
                "rsa: modulus is not p*q".to_string(),
            ));
        }

        if self.phi != (&self.p - 1u32) * (&self.q - 1u32) {
            return Err(CipherError::InvalidPrimes(
                "rsa: phi is not (p-1)(q-1)".to_string(),
            ));
        }

        if !((&self.e * &self.d) % &self.phi).is_one() {
            return Err(CipherError::InvalidPrimes(
                "rsa: e*d != 1 mod phi".to_string(),
            ));
        }

        Ok(())
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn q(&self) -> &BigUint {
        &self.q
    }

    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    pub fn totient(&self) -> &BigUint {
        &self.phi
    }

    pub fn public_exponent(&self) -> &BigUint {
        &self.e
    }

    pub fn private_exponent(&self) -> &BigUint {
        &self.d
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey::new_uncheck(self.n.clone(), self.e.clone())
    }

    pub fn private_key(&self) -> PrivateKey {
        PrivateKey::new_uncheck(self.n.clone(), self.d.clone())
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{n={}, e={}}}", self.n, self.e)
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{n={}, d={}}}", self.n, self.d)
    }
}

impl Display for RsaKeyMaterial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{p={}, q={}, n={}, phi={}, e={}, d={}}}",
            self.p, self.q, self.n, self.phi, self.e, self.d
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::rsa::key::select_public_exp;
    use crate::rsa::RsaKeyMaterial;
    use crate::CipherError;
    use num_bigint::BigUint;
    use num_traits::One;
    use rand::SeedRand;

    #[test]
    fn textbook_61_53_key_material() {
        let key = RsaKeyMaterial::generate(BigUint::from(61u32), BigUint::from(53u32)).unwrap();
        assert_eq!(key.modulus(), &BigUint::from(3233u32));
        assert_eq!(key.totient(), &BigUint::from(3120u32));
        // gcd(65537, 3120) = 1, 第一个候选即被采纳
        assert_eq!(key.public_exponent(), &BigUint::from(65537u32));
        assert_eq!(key.private_exponent(), &BigUint::from(2753u32));
        key.is_valid().unwrap();
        assert!(((key.public_exponent() * key.private_exponent()) % key.totient()).is_one());
    }

    #[test]
    fn rejects_equal_or_composite_primes() {
        let cases = [(61u32, 61u32), (60, 53), (61, 54), (1, 53), (0, 53)];
        for (p, q) in cases {
            assert!(
                matches!(
                    RsaKeyMaterial::generate(BigUint::from(p), BigUint::from(q)),
                    Err(CipherError::InvalidPrimes(_))
                ),
                "(p, q) = ({}, {})",
                p,
                q
            );
        }
    }

    #[test]
    fn exponent_candidates_fall_through_in_order() {
        // phi是65537的倍数时落到3
        let phi = BigUint::from(65537u32) * 2u32;
        assert_eq!(select_public_exp(&phi).unwrap(), BigUint::from(3u32));

        // 再排除3, 落到17
        let phi = BigUint::from(65537u32) * 6u32;
        assert_eq!(select_public_exp(&phi).unwrap(), BigUint::from(17u32));

        // 全部固定候选都不互质, 从19起按奇数递增
        let phi = BigUint::from(65537u32) * 6u32 * 17u32;
        assert_eq!(select_public_exp(&phi).unwrap(), BigUint::from(19u32));
    }

    #[test]
    fn exponent_search_is_capped() {
        // phi被65537, 3, 17和所有不超过145的奇素数整除时, 每个候选都
        // 与phi有公因子, 搜索应在预算内报KeyGenerationFailed
        let mut phi = BigUint::from(65537u32);
        for prime in [
            3u32, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79,
            83, 89, 97, 101, 103, 107, 109, 113, 127, 131, 137, 139,
        ] {
            phi *= prime;
        }

        assert!(matches!(
            select_public_exp(&phi),
            Err(CipherError::KeyGenerationFailed { .. })
        ));
    }

    #[test]
    fn demo_generation_is_reproducible() {
        let limit = BigUint::from(10000u32);

        let mut rng = SeedRand::new(11);
        let a = RsaKeyMaterial::generate_demo(&limit, &mut rng).unwrap();
        a.is_valid().unwrap();
        assert_ne!(a.p(), a.q());

        let mut rng = SeedRand::new(11);
        let b = RsaKeyMaterial::generate_demo(&limit, &mut rng).unwrap();
        assert_eq!(a, b, "same seed must derive the same key material");
    }
}
