//! RSA教学实现
//!
//! - 选择两个素数$p$和$q$($p \neq q$), 模数$n = p * q$;
//! - 欧拉函数$\phi = (p-1)(q-1)$;
//! - 公钥指数$e$满足$\gcd(e, \phi) = 1$;
//! - 私钥指数$d$满足$e * d \equiv 1 \mod \phi$;
//!
//! 加密: $c = m^e \mod n$;
//!
//! 解密: $m = c^d \mod n$;
//!
//! 原理: 欧拉定理$a^{\phi(n)} \equiv 1 \mod n$
//! - $m^{k(p-1)(q-1)+1} \equiv m \mod n$
//!
//! 这里是不加填充的教科书RSA: 按字符逐个对码点做模幂,
//! 只在码点严格小于$n$时有定义; 仅供教学演示, 没有密码学强度;

mod key;
pub use key::{PrivateKey, PublicKey, RsaKeyMaterial};

mod textbook;
pub use textbook::CipherNumberStream;
