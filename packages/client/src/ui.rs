//! 対話クライアントの入力プロンプト

use std::io::{self, Write};

/// カーソルを行頭に戻し、入力途中の行を消す（ANSI）
const CLEAR_LINE: &str = "\r\x1b[2K";

/// `name> ` 形式の入力プロンプト
///
/// rustyline が読み込み中でも、受信したイベントは別タスクから表示される。
/// そのたびにプロンプトを出し直して入力行を最下行に保つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    label: String,
}

impl Prompt {
    pub fn new(name: &str) -> Self {
        Self {
            label: format!("{}> ", name),
        }
    }

    /// rustyline に渡すプロンプト文字列
    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// `text` を表示し、その下にプロンプトを出し直す
    ///
    /// 画面上の入力途中の行は消えるが、rustyline のバッファには残る。
    pub fn print_above<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        write!(out, "{}{}{}", CLEAR_LINE, text, self.label)?;
        out.flush()
    }

    /// 標準出力への `print_above`。端末への書き込み失敗は無視する
    pub fn print_event(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        self.print_above(&mut stdout, text).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_label() {
        // テスト項目: 表示名からプロンプト文字列が作られる
        // given (前提条件):
        let prompt = Prompt::new("alice");

        // when (操作):
        let label = prompt.as_str();

        // then (期待する結果):
        assert_eq!(label, "alice> ");
    }

    #[test]
    fn test_print_above_clears_line_and_reprints_prompt() {
        // テスト項目: 入力行を消してからイベントを表示し、最後にプロンプトを出し直す
        // given (前提条件):
        let prompt = Prompt::new("bob");
        let mut out = Vec::new();

        // when (操作):
        prompt
            .print_above(&mut out, "\n* [09:00:00] alice has joined the chat\n")
            .unwrap();

        // then (期待する結果):
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\r\x1b[2K\n* [09:00:00] alice has joined the chat\nbob> "
        );
    }
}
