//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use tempfile::TempDir;

/// テスト用の翻訳テーブルファイルを作成する
///
/// # Arguments
/// * `dir` - テーブルを置く一時ディレクトリ
/// * `language` - 言語タグ（例: "fr-fr"）
/// * `content` - ファイルの内容
///
/// # Returns
/// 作成したファイルのパス
pub(crate) fn write_table(dir: &TempDir, language: &str, content: &str) -> PathBuf {
    let path = dir.path().join(format!("{language}.json"));
    std::fs::write(&path, content).unwrap();
    path
}
