//! 画像定義のリストを順に描画し、出力ディレクトリへ書き出すジェネレーター。
//!
//! 各画像の処理は独立しています。キャンバスとフォントは1枚ごとに用意し、
//! 画像どうしで共有する可変状態はありません。

use crate::domain::canvas::placeholder_image::PlaceholderImage;
use crate::domain::descriptor::{DescriptorList, ImageDescriptor};
use crate::domain::font::{FontSet, FontSource};
use crate::domain::output_directory::OutputDirectory;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 1枚の画像の書き出しに失敗した理由。
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("'{path}' への保存に失敗しました")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// 実行結果の集計。
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// 書き出しに成功したファイルのパス (処理順)
    pub written: Vec<PathBuf>,
    /// 失敗した画像定義のファイル名とその理由
    pub failures: Vec<(String, RenderError)>,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// 実行の最後に標準出力へ表示する1行の集計。失敗があった場合もその件数を含めます。
    pub fn summary_line(&self, output_dir: &Path) -> String {
        if self.is_success() {
            format!(
                "{} 枚のプレースホルダー画像を {} に生成しました。",
                self.written.len(),
                output_dir.display()
            )
        } else {
            format!(
                "{} 枚中 {} 枚のプレースホルダー画像を {} に生成しました ({} 枚失敗)。",
                self.total(),
                self.written.len(),
                output_dir.display(),
                self.failures.len()
            )
        }
    }
}

/// プレースホルダー画像ジェネレーター。
#[derive(Debug)]
pub struct PlaceholderImageGenerator {
    output_dir: OutputDirectory,
    font_source: FontSource,
}

impl PlaceholderImageGenerator {
    pub fn new(output_dir: OutputDirectory, font_source: FontSource) -> Self {
        Self {
            output_dir,
            font_source,
        }
    }

    pub fn output_dir(&self) -> &OutputDirectory {
        &self.output_dir
    }

    /// すべての画像定義を順に処理します。
    ///
    /// 1枚の失敗で全体を止めることはせず、標準エラーに警告を出して次へ進みます。
    /// 成功した画像ごとに、保存先のパスを標準出力に1行表示します。
    pub fn generate(&self, descriptors: &DescriptorList) -> GenerationReport {
        log::debug!(
            "{} 枚の画像を {} に生成します",
            descriptors.len(),
            self.output_dir.as_path().display()
        );
        let mut report = GenerationReport::default();

        for descriptor in descriptors {
            match self.generate_one(descriptor) {
                Ok(path) => {
                    println!("[完了] {}", path.display());
                    report.written.push(path);
                }
                Err(e) => {
                    eprintln!(
                        "[警告] '{}' の生成中にエラーが発生しました: {}",
                        descriptor.filename,
                        error_chain(&e)
                    );
                    report.failures.push((descriptor.filename.to_string(), e));
                }
            }
        }

        report
    }

    /// 1枚を描画して保存し、保存先のパスを返します。
    pub fn generate_one(&self, descriptor: &ImageDescriptor) -> Result<PathBuf, RenderError> {
        log::debug!("描画開始: {}", descriptor.filename);

        let fonts = FontSet::load(&self.font_source);
        let image = PlaceholderImage::render(descriptor, &fonts);

        let path = self.output_dir.file_path(&image.file_name);
        image.save_to_path(&path).map_err(|source| RenderError::Save {
            path: path.clone(),
            source,
        })?;

        log::debug!("保存しました: {}", path.display());
        Ok(path)
    }
}

// "外側: 原因: 原因の原因" の形に連結する
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
