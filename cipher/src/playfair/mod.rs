//! Playfair密码
//!
//! 古典的双字母替换密码: 把规范化后的明文两两成对,
//! 在由密钥短语生成的网格上按坐标规则逐对替换;
//!
//! - 同行: 各取右边一格, 列号模size回绕;
//! - 同列: 各取下面一格, 行号模size回绕;
//! - 矩形: 行号不变, 互换列号;
//!
//! 解密时同行/同列反向移动一格, 矩形规则自逆;
//!
//! 注意: 加密注入的填充字母在密文中没有标记, 解密只还原网格层面的
//! 变换, 填充字母会在明文里原样出现, 这是密码本身的性质;

mod digraph;
use digraph::Digraphs;

mod key_square;
pub use key_square::{GridSize, KeySquare};

mod text;
pub use text::normalize;

use crate::CipherError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// 持有生成好的网格; 对(规范化文本, 网格)而言加解密都是纯函数
#[derive(Clone, Debug)]
pub struct Playfair {
    square: KeySquare,
}

impl Playfair {
    pub fn new(key: &str, size: GridSize) -> Result<Self, CipherError> {
        Ok(Self {
            square: KeySquare::generate(key, size)?,
        })
    }

    pub const fn from_square(square: KeySquare) -> Self {
        Self { square }
    }

    pub const fn key_square(&self) -> &KeySquare {
        &self.square
    }

    /// 先把消息规范化到网格字母表, 再逐对替换
    pub fn encrypt(&self, msg: &str) -> Result<String, CipherError> {
        let normalized: Vec<char> = text::normalize(msg, self.square.size()).chars().collect();

        let mut out = String::with_capacity(normalized.len() + 1);
        for (a, b) in Digraphs::new(&normalized) {
            let (x, y) = self.transform(a, b, Direction::Forward)?;
            out.push(x);
            out.push(y);
        }

        Ok(out)
    }

    /// 解密假定输入已经是网格字母表上成对的密文, 不移除填充字母
    pub fn decrypt(&self, cipher: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = cipher.chars().collect();
        if chars.len() % 2 != 0 {
            return Err(CipherError::InvalidCiphertext(
                "playfair ciphertext must have even length".to_string(),
            ));
        }

        let mut out = String::with_capacity(chars.len());
        for pair in chars.chunks_exact(2) {
            let (x, y) = self.transform(pair[0], pair[1], Direction::Backward)?;
            out.push(x);
            out.push(y);
        }

        Ok(out)
    }

    fn transform(&self, a: char, b: char, dir: Direction) -> Result<(char, char), CipherError> {
        let (r1, c1) = self.square.position(a)?;
        let (r2, c2) = self.square.position(b)?;
        let n = self.square.dim();
        // 反向移动借模回绕表示为前进n-1格
        let shift = match dir {
            Direction::Forward => 1,
            Direction::Backward => n - 1,
        };

        Ok(if r1 == r2 {
            (
                self.square.at(r1, (c1 + shift) % n),
                self.square.at(r2, (c2 + shift) % n),
            )
        } else if c1 == c2 {
            (
                self.square.at((r1 + shift) % n, c1),
                self.square.at((r2 + shift) % n, c2),
            )
        } else {
            (self.square.at(r1, c2), self.square.at(r2, c1))
        })
    }
}
