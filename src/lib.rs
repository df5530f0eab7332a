//! SecureVault のマーケティングページ用プレースホルダー画像を生成するライブラリ。
//!
//! 固定の画像定義リスト（ファイル名・タイトル・説明文・アクセントカラー）から、
//! 400x300 のモックUIスクリーンショット風 PNG を描画して書き出します。

pub mod domain;
pub mod error;
pub mod generator;
