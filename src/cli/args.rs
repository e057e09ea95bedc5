use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::value_enum::{CliOutputFormat, CliProbeStrategy};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "file_size",
    version = crate::VERSION,
    about = "ファイルサイズ (バイト数) を表示するツール"
)]
pub struct Args {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "plain", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 互換出力（失敗時は "File Not Found!" と -1 を標準出力へ）
    #[arg(long, conflicts_with = "format", help_heading = "出力")]
    pub compat: bool,

    /// 計測方式（seek: 末尾へシーク / metadata: メタデータ参照、通常ファイル以外は拒否）
    #[arg(long, value_enum, default_value = "seek", help_heading = "計測")]
    pub strategy: CliProbeStrategy,

    /// 詳細ログ
    #[arg(short, long, help_heading = "ログ")]
    pub verbose: bool,

    /// デバッグログ（--verbose を含む）
    #[arg(short, long, help_heading = "ログ")]
    pub debug: bool,

    /// 対象ファイル
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: PathBuf,
}
