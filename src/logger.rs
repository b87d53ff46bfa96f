//! 実行ログ
//!
//! 1イベント1行で標準出力とログファイルの両方に書き出す。
//! ログファイルは起動時に1回だけ追記モードで開き、drop時に閉じる。

use crate::error::{Result, TcgError};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE: &str = "Log.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct RunLog {
    path: PathBuf,
    file: File,
    console: bool,
    write_failed: bool,
}

impl RunLog {
    /// ログファイルを開く（無ければ作成）
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| TcgError::LogOpen {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            console: true,
            write_failed: false,
        })
    }

    /// 標準出力へのエコーを切り替え
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// 1行記録する
    ///
    /// ファイル書き込みに失敗しても処理は止めない（最初の1回だけ標準エラーに警告）
    pub fn log(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        if self.console {
            println!("{}", message);
        }

        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let written = writeln!(self.file, "[{}] {}", timestamp, message).and_then(|_| self.file.flush());
        if let Err(e) = written {
            if !self.write_failed {
                eprintln!("ログ書き込みエラー ({}): {}", self.path.display(), e);
                self.write_failed = true;
            }
        }
    }
}
