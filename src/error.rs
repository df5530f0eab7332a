use crate::domain::descriptor::DescriptorValidationError;
use crate::domain::path_error::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("出力先パスのエラー: {0}")]
    Path(#[from] PathError),

    #[error("画像定義の検証エラー: {0}")]
    DescriptorValidation(#[from] DescriptorValidationError),

    #[error("{total} 件中 {failed} 件の画像生成に失敗しました")]
    GenerationFailed { failed: usize, total: usize },
}
