// rusttype クレートは TrueType/OpenType フォントの解析とグリフのラスタライズに利用します。
use rusttype::{point, Font, PositionedGlyph, Scale};
// フォント読み込み失敗を表すエラー型の定義に thiserror を利用します。
use thiserror::Error;

use super::bitmap_font::BitmapFont;
use crate::domain::canvas::draw::blend_pixel;
use image::{Rgb, RgbImage};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// タイトル用の文字サイズ (px)。
pub const LARGE_FONT_SIZE: f32 = 24.0;
/// 説明文・ラベル用の文字サイズ (px)。
pub const SMALL_FONT_SIZE: f32 = 16.0;

/// `--font-path` が指定されなかった、または読めなかった場合に順に試すシステムフォント。
///
/// 先頭の `arial.ttf` はカレントディレクトリからの相対パスです。
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "arial.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// スケーラブルフォントの読み込みに失敗した理由。
///
/// このエラーはフォールバックの判断にのみ使い、呼び出し元へは伝播させません。
#[derive(Debug, Error)]
pub enum FontError {
    #[error("フォントファイル '{path}' を読み込めません")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' はTrueType/OpenTypeフォントとして解析できません")]
    Parse { path: PathBuf },
}

/// 実行全体で使うフォントの入手元。
///
/// 見つかったスケーラブルフォントを保持するか、組み込みのビットマップフォントを示します。
/// `rusttype::Font` は内部で共有されているため、クローンは安価です。
#[derive(Clone)]
pub enum FontSource {
    Scalable { path: PathBuf, font: Font<'static> },
    Builtin,
}

impl FontSource {
    /// 明示されたパス、続いてシステムフォントの候補を順に試し、最初に解析できたものを使います。
    /// どれも使えなければ組み込みフォントにフォールバックします（失敗にはしません）。
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let candidates = explicit
            .into_iter()
            .map(Path::to_path_buf)
            .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));
        Self::resolve_from(candidates)
    }

    /// 与えられた候補だけを順に試します。
    pub fn resolve_from<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for path in candidates {
            match Self::load_file(&path) {
                Ok(font) => {
                    log::debug!("フォントを使用します: {}", path.display());
                    return FontSource::Scalable { path, font };
                }
                Err(e) => log::debug!("フォント候補をスキップ: {}", e),
            }
        }
        log::warn!("スケーラブルフォントが見つからないため、組み込みのビットマップフォントを使用します");
        FontSource::Builtin
    }

    /// 組み込みのビットマップフォントを使う入手元。
    #[cfg(test)]
    pub(crate) fn builtin() -> Self {
        FontSource::Builtin
    }

    /// フォントファイルを読み込み、解析します。
    pub fn load_file(path: &Path) -> Result<Font<'static>, FontError> {
        let bytes = fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Font::try_from_vec(bytes).ok_or_else(|| FontError::Parse {
            path: path.to_path_buf(),
        })
    }

    #[cfg(test)]
    pub(crate) fn is_builtin(&self) -> bool {
        matches!(self, FontSource::Builtin)
    }

    /// 指定サイズのフォントを作ります。
    pub fn face(&self, size: f32) -> UiFont {
        match self {
            FontSource::Scalable { font, .. } => UiFont::Scalable {
                font: font.clone(),
                scale: Scale::uniform(size),
            },
            FontSource::Builtin => UiFont::Bitmap(BitmapFont::for_size(size)),
        }
    }
}

impl fmt::Debug for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Scalable { path, .. } => {
                f.debug_struct("Scalable").field("path", path).finish()
            }
            FontSource::Builtin => f.write_str("Builtin"),
        }
    }
}

/// 1つのサイズに固定された描画用フォント。
#[derive(Clone)]
pub enum UiFont {
    Scalable { font: Font<'static>, scale: Scale },
    Bitmap(BitmapFont),
}

impl UiFont {
    /// 描画した場合のインク部分の (幅, 高さ) を返します。
    pub fn text_size(&self, text: &str) -> (u32, u32) {
        match self {
            UiFont::Scalable { font, scale } => {
                let glyphs = layout(font, *scale, 0, 0, text);
                let boxes = glyphs.iter().filter_map(|g| g.pixel_bounding_box());
                let mut bounds: Option<(i32, i32, i32, i32)> = None;
                for bb in boxes {
                    bounds = Some(match bounds {
                        None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
                        Some((x0, y0, x1, y1)) => (
                            x0.min(bb.min.x),
                            y0.min(bb.min.y),
                            x1.max(bb.max.x),
                            y1.max(bb.max.y),
                        ),
                    });
                }
                match bounds {
                    Some((x0, y0, x1, y1)) => ((x1 - x0) as u32, (y1 - y0) as u32),
                    None => (0, 0),
                }
            }
            UiFont::Bitmap(bitmap) => bitmap.text_size(text),
        }
    }

    /// `(x, y)` を文字の上端として描画します。アンチエイリアスは背景とのアルファ合成で表現します。
    pub fn draw_text(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        match self {
            UiFont::Scalable { font, scale } => {
                for glyph in layout(font, *scale, x, y, text) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        glyph.draw(|gx, gy, coverage| {
                            blend_pixel(
                                canvas,
                                bb.min.x + gx as i32,
                                bb.min.y + gy as i32,
                                color,
                                coverage,
                            );
                        });
                    }
                }
            }
            UiFont::Bitmap(bitmap) => bitmap.draw_text(canvas, x, y, text, color),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_bitmap(&self) -> bool {
        matches!(self, UiFont::Bitmap(_))
    }
}

impl fmt::Debug for UiFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiFont::Scalable { scale, .. } => f
                .debug_struct("Scalable")
                .field("size", &scale.y)
                .finish(),
            UiFont::Bitmap(bitmap) => f.debug_tuple("Bitmap").field(bitmap).finish(),
        }
    }
}

// ベースラインは y + ascent
fn layout(
    font: &Font<'static>,
    scale: Scale,
    x: i32,
    y: i32,
    text: &str,
) -> Vec<PositionedGlyph<'static>> {
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(x as f32, y as f32 + ascent)).collect()
}

/// 1枚の画像で使うタイトル用・本文用フォントの組。
#[derive(Debug, Clone)]
pub struct FontSet {
    pub large: UiFont,
    pub small: UiFont,
}

impl FontSet {
    pub fn load(source: &FontSource) -> Self {
        Self {
            large: source.face(LARGE_FONT_SIZE),
            small: source.face(SMALL_FONT_SIZE),
        }
    }
}

/// テスト環境にインストールされているシステムフォントを探します。無ければ `None`。
#[cfg(test)]
pub(crate) fn installed_system_font() -> Option<FontSource> {
    let source = FontSource::resolve_from(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));
    if source.is_builtin() {
        None
    } else {
        Some(source)
    }
}
