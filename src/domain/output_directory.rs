use super::path_error::PathError;
use std::fs;
use std::path::{Path, PathBuf};

/// 画像の書き出し先ディレクトリ。インスタンスが存在する時点でディレクトリの存在が保証される。
#[derive(Debug)]
pub struct OutputDirectory {
    path: PathBuf,
}

impl OutputDirectory {
    // コンストラクタ: 存在しなければ親ディレクトリごと作成する。既にあれば何もしない。
    pub fn ensure<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // 同名のファイルがある場合は create_dir_all が分かりにくいエラーを返すので先に弾く
        if path.exists() && !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        fs::create_dir_all(path).map_err(|source| PathError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// 出力ディレクトリ直下のファイルパスを組み立てる。
    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.path.join(filename)
    }
}
