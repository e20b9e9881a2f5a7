use crate::CipherError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Playfair网格的边长;
/// 5x5用J并入I的25字母表, 6x6用字母加数字的36符号表(不并入J)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridSize {
    Five,
    Six,
}

impl GridSize {
    pub const fn dim(self) -> usize {
        match self {
            GridSize::Five => 5,
            GridSize::Six => 6,
        }
    }

    pub const fn cells(self) -> usize {
        self.dim() * self.dim()
    }

    /// 网格的工作字母表, 补齐网格时按这里的顺序取剩余符号
    pub const fn alphabet(self) -> &'static str {
        match self {
            GridSize::Five => "ABCDEFGHIKLMNOPQRSTUVWXYZ",
            GridSize::Six => "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
        }
    }

    pub const fn from_dim(dim: usize) -> Option<Self> {
        match dim {
            5 => Some(GridSize::Five),
            6 => Some(GridSize::Six),
            _ => None,
        }
    }

    /// 符号送入网格前的折叠: 大写, 5x5时J折叠为I;
    /// 不属于工作字母表的符号给出None
    pub(super) fn fold(self, ch: char) -> Option<char> {
        let ch = ch.to_ascii_uppercase();
        let ch = match self {
            GridSize::Five if ch == 'J' => 'I',
            _ => ch,
        };
        self.alphabet().contains(ch).then_some(ch)
    }
}

/// 由密钥短语导出的网格, 工作字母表中的每个符号恰好出现一次;
/// 建成之后不可变, 同一密钥短语总是给出同一个网格
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySquare {
    letters: Vec<char>,
    size: GridSize,
}

impl KeySquare {
    /// 从左到右走一遍密钥短语, 每个符号首次出现时填入网格,
    /// 再按字母表顺序补上没出现过的符号
    pub fn generate(key: &str, size: GridSize) -> Result<Self, CipherError> {
        let alphabet = size.alphabet();
        if size.cells() > alphabet.len() {
            return Err(CipherError::InvalidKeySize {
                size: size.dim(),
                alphabet: alphabet.len(),
            });
        }

        let mut letters = Vec::with_capacity(size.cells());
        for ch in key.chars().filter_map(|c| size.fold(c)) {
            if !letters.contains(&ch) {
                letters.push(ch);
            }
        }
        for ch in alphabet.chars() {
            if !letters.contains(&ch) {
                letters.push(ch);
            }
        }
        debug_assert_eq!(letters.len(), size.cells());

        Ok(Self { letters, size })
    }

    pub const fn size(&self) -> GridSize {
        self.size
    }

    pub const fn dim(&self) -> usize {
        self.size.dim()
    }

    /// 符号的(行, 列)坐标; 网格外的符号报LetterNotInGrid
    pub fn position(&self, ch: char) -> Result<(usize, usize), CipherError> {
        self.letters
            .iter()
            .position(|&c| c == ch)
            .map(|idx| (idx / self.dim(), idx % self.dim()))
            .ok_or(CipherError::LetterNotInGrid(ch))
    }

    pub fn at(&self, row: usize, col: usize) -> char {
        self.letters[row * self.dim() + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(self.dim())
    }
}

impl Display for KeySquare {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            for (j, ch) in row.iter().enumerate() {
                if j != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
