use super::{PrivateKey, PublicKey};
use crate::CipherError;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// 按字符模幂得到的整数序列, 每个源字符恰好对应一个[0, n)中的整数;
/// Display/FromStr给出十进制空格分隔的无损文本形式,
/// 更外层的传输编码(如base64)由调用方负责
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherNumberStream(Vec<BigUint>);

impl CipherNumberStream {
    pub fn values(&self) -> &[BigUint] {
        &self.0
    }

    pub fn into_values(self) -> Vec<BigUint> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<BigUint>> for CipherNumberStream {
    fn from(values: Vec<BigUint>) -> Self {
        Self(values)
    }
}

impl Display for CipherNumberStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for CipherNumberStream {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for token in s.split_whitespace() {
            let c = BigUint::from_str(token).map_err(|e| {
                CipherError::InvalidCiphertext(format!("bad integer token `{}`: {}", token, e))
            })?;
            values.push(c);
        }

        Ok(Self(values))
    }
}

impl PublicKey {
    /// 逐字符加密: $c_i = codepoint_i^e \mod n$, 保序;
    /// 码点不小于n的字符无法无损表示, 报MessageTooLarge
    pub fn encrypt(&self, msg: &str) -> Result<CipherNumberStream, CipherError> {
        let mut values = Vec::with_capacity(msg.len());
        for ch in msg.chars() {
            let code = ch as u32;
            let m = BigUint::from(code);
            if &m >= self.modulus() {
                return Err(CipherError::MessageTooLarge { ch, code });
            }

            values.push(self.rsaep(&m));
        }

        Ok(CipherNumberStream(values))
    }
}

impl PrivateKey {
    /// 逐个解密: $m_i = c_i^d \mod n$, 余数按码点还原成字符;
    /// 序列中的值不小于n, 或者余数不是合法码点时报InvalidCiphertext
    pub fn decrypt(&self, cipher: &CipherNumberStream) -> Result<String, CipherError> {
        let mut msg = String::with_capacity(cipher.len());
        for c in cipher.values() {
            if c >= self.modulus() {
                return Err(CipherError::InvalidCiphertext(format!(
                    "value `{}` is not less than the modulus",
                    c
                )));
            }

            let m = self.rsadp(c);
            let ch = m.to_u32().and_then(char::from_u32).ok_or_else(|| {
                CipherError::InvalidCiphertext(format!("residue `{}` is not a valid code point", m))
            })?;
            msg.push(ch);
        }

        Ok(msg)
    }
}
