use clap::Parser;
use std::path::PathBuf;

/// 生成する画像の一覧は組み込みなので、引数なしで実行すれば全画像を生成します。
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// PNGの出力先フォルダのパス (存在しなければ作成します)
    #[arg(short, long, default_value = "public/images/securevault")]
    pub output_dir: PathBuf,

    /// 描画に使うTTF/OTFフォントファイルのパス (オプション: デフォルトはシステムフォント、無ければ組み込みフォント)
    #[arg(short, long)]
    pub font_path: Option<PathBuf>,
}
