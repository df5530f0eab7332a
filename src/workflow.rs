//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とライブラリ（`generator` と `domain`）を仲介し、
//! プレースホルダー画像一式の生成フローを実装します。

use crate::cli::Args;
use securevault_placeholders::domain::descriptor::DescriptorList;
use securevault_placeholders::domain::font::FontSource;
use securevault_placeholders::domain::output_directory::OutputDirectory;
use securevault_placeholders::error::AppError;
use securevault_placeholders::generator::PlaceholderImageGenerator;

/// アプリケーションのメインロジックを実行します。
///
/// # 戻り値
/// * `Ok(())`: すべての画像を書き出せた場合。
/// * `Err(AppError)`: 画像定義の検証や出力ディレクトリの作成に失敗した場合、
///   または1枚以上の画像の書き出しに失敗した場合。
pub fn run(args: Args) -> Result<(), AppError> {
    // 1. 画像定義の検証 (ファイル名の重複があれば描画前に中断する)
    let descriptors = DescriptorList::securevault()?;

    // 2. 出力ディレクトリの準備
    // これに失敗すると1枚も書き出せないので、ここでのエラーは致命的とする。
    let output_dir = OutputDirectory::ensure(&args.output_dir)?;

    // 3. フォントの決定 (見つからなくても組み込みフォントで続行する)
    let font_source = FontSource::resolve(args.font_path.as_deref());

    // 4. 生成
    let generator = PlaceholderImageGenerator::new(output_dir, font_source);
    let report = generator.generate(&descriptors);

    // 5. 集計の表示と最終結果の判定
    // 一部が失敗した場合も、書き出せた枚数は標準出力に残す。
    println!("{}", report.summary_line(generator.output_dir().as_path()));
    if report.is_success() {
        Ok(())
    } else {
        Err(AppError::GenerationFailed {
            failed: report.failures.len(),
            total: report.total(),
        })
    }
}
