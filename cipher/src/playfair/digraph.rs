/// 填充字母
pub(super) const FILLER: char = 'X';

/// 把规范化文本从左到右消费成字母对:
/// 相邻两个字母相同时注入填充字母并只前进一位(第二个字母留给下一对),
/// 末尾落单的字母补一个填充字母
pub(super) struct Digraphs<'a> {
    text: &'a [char],
    idx: usize,
}

impl<'a> Digraphs<'a> {
    pub(super) fn new(text: &'a [char]) -> Self {
        Self { text, idx: 0 }
    }
}

impl Iterator for Digraphs<'_> {
    type Item = (char, char);

    fn next(&mut self) -> Option<Self::Item> {
        let a = *self.text.get(self.idx)?;
        let b = self.text.get(self.idx + 1).copied().unwrap_or(FILLER);

        Some(if a == b {
            self.idx += 1;
            (a, FILLER)
        } else {
            self.idx += 2;
            (a, b)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Digraphs;

    fn pairs(text: &str) -> Vec<(char, char)> {
        let chars: Vec<char> = text.chars().collect();
        Digraphs::new(&chars).collect()
    }

    #[test]
    fn doubled_letters_get_a_filler() {
        assert_eq!(pairs("HELLO"), [('H', 'E'), ('L', 'X'), ('L', 'O')]);
        assert_eq!(
            pairs("BALLOON"),
            [('B', 'A'), ('L', 'X'), ('L', 'O'), ('O', 'N')]
        );
        assert_eq!(pairs("AAA"), [('A', 'X'), ('A', 'X'), ('A', 'X')]);
    }

    #[test]
    fn odd_length_gets_a_trailing_filler() {
        assert_eq!(pairs("ABC"), [('A', 'B'), ('C', 'X')]);
        assert_eq!(pairs("A"), [('A', 'X')]);
        // 落单的X与合成的填充字母相同, 按同字母规则成对
        assert_eq!(pairs("X"), [('X', 'X')]);
    }

    #[test]
    fn even_text_without_doubles_is_untouched() {
        assert_eq!(pairs("QUARTZ"), [('Q', 'U'), ('A', 'R'), ('T', 'Z')]);
        assert!(pairs("").is_empty());
    }
}
