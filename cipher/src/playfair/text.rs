use super::GridSize;

/// 数字逐位展开用的固定对照表
const DIGIT_WORDS: [&str; 10] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

/// 把任意文本规范化到网格的工作字母表上:
/// - 全部大写, 空白和其余符号静默丢弃, 空输入给出空输出;
/// - 5x5: J折叠为I, 数字串逐位展开成英文单词, 如"2025" -> "TWOZEROTWOFIVE";
/// - 6x6: 数字是一等符号, 原样保留, 不折叠J;
pub fn normalize(text: &str, size: GridSize) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let ch = ch.to_ascii_uppercase();
        if ch.is_ascii_digit() && size == GridSize::Five {
            out.push_str(DIGIT_WORDS[(ch as u8 - b'0') as usize]);
        } else if let Some(ch) = size.fold(ch) {
            out.push(ch);
        }
    }

    out
}
