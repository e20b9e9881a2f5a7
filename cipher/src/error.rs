use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum CipherError {
    /// 字母表无法填满请求的网格
    #[error("Invalid key square size `{size}x{size}`: the alphabet only has `{alphabet}` symbols")]
    InvalidKeySize { size: usize, alphabet: usize },

    /// 网格中查不到的字母, 正常情况下不可达
    #[error("letter `{0}` is not in the key square")]
    LetterNotInGrid(char),

    /// 密钥生成的素数输入不合法(相等或者不是素数)
    #[error("invalid primes: {0}")]
    InvalidPrimes(String),

    /// 公钥指数搜索超出重试预算
    #[error("key generation failed: no usable public exponent within `{attempts}` attempts")]
    KeyGenerationFailed { attempts: usize },

    /// 字符码点不小于模数, 无法无损加密
    #[error("message char `{ch}` (U+{code:04X}) is not less than the modulus")]
    MessageTooLarge { ch: char, code: u32 },

    /// 解密输入不是合法的密文
    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),
}
