use std::fmt;
use std::io;
use std::path::PathBuf;

// 出力ディレクトリの準備に失敗した理由
#[derive(Debug)]
pub enum PathError {
    NotADirectory(PathBuf),
    Create { path: PathBuf, source: io::Error },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NotADirectory(path) => {
                write!(f, "パス '{}' はディレクトリではありません。", path.display())
            }
            PathError::Create { path, source } => {
                write!(f, "ディレクトリ '{}' を作成できません: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::Create { source, .. } => Some(source),
            PathError::NotADirectory(_) => None,
        }
    }
}
