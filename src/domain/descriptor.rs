// use宣言：必要なクレートやモジュールをスコープに取り込む

use image::Rgb; // アクセントカラーを描画用のピクセル型へ変換するために利用
use std::collections::HashMap;
use std::fmt;
use std::path::{Component, Path};

// --- 構造体定義 ---

/// ヘッダー帯の塗りつぶしに使う RGB カラー。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentColor(pub u8, pub u8, pub u8);

impl AccentColor {
    /// `image` クレートのピクセル型に変換します。
    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.0, self.1, self.2])
    }
}

/// 1枚のプレースホルダー画像を定義する静的なレコード。
///
/// 実行ごとに一度だけ読み取られ、そのまま消費されます。状態は持ちません。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// 出力ディレクトリからの相対ファイル名 (例: `client-file-drop.png`)。
    pub filename: &'static str,
    /// ヘッダー帯に白文字で描画されるタイトル。
    pub title: &'static str,
    /// ヘッダー帯の下に灰色で描画される説明文。
    pub description: &'static str,
    /// ヘッダー帯の背景色。
    pub accent_color: AccentColor,
}

/// SecureVault のランディングページで使う画像定義の一覧。
pub const SECUREVAULT_DESCRIPTORS: [ImageDescriptor; 6] = [
    ImageDescriptor {
        filename: "client-file-drop.png",
        title: "Client File Drop",
        description: "Secure file upload interface",
        accent_color: AccentColor(34, 197, 94),
    },
    ImageDescriptor {
        filename: "document-requests.png",
        title: "Document Requests",
        description: "Request files from any client",
        accent_color: AccentColor(59, 130, 246),
    },
    ImageDescriptor {
        filename: "client-portal.png",
        title: "Client Portal",
        description: "Branded self-service portal",
        accent_color: AccentColor(139, 92, 246),
    },
    ImageDescriptor {
        filename: "audit-trail.png",
        title: "Audit Trail",
        description: "Every access logged and tracked",
        accent_color: AccentColor(245, 158, 11),
    },
    ImageDescriptor {
        filename: "encrypted-vault.png",
        title: "Encrypted Vault",
        description: "Bank-grade document storage",
        accent_color: AccentColor(239, 68, 68),
    },
    ImageDescriptor {
        filename: "team-sharing.png",
        title: "Team Sharing",
        description: "Granular permission controls",
        accent_color: AccentColor(20, 184, 166),
    },
];

/// 検証済みの画像定義リスト。
///
/// `new` コンストラクタを通じてのみインスタンス化でき、その際に以下の点が保証されます。
/// - リストが空でないこと
/// - すべてのファイル名が単一の相対パス要素で、拡張子が `.png` であること
/// - ファイル名が互いに重複しないこと（重複すると後の画像が前の画像を上書きしてしまうため）
#[derive(Debug, PartialEq)]
pub struct DescriptorList {
    descriptors: Vec<ImageDescriptor>,
}

// --- エラー定義 ---

/// `DescriptorList` のインスタンス化時に発生する可能性のある検証エラー。
#[derive(Debug, PartialEq)]
pub enum DescriptorValidationError {
    /// 画像定義が1件も渡されなかった場合。
    EmptyList,
    /// ファイル名がディレクトリ区切りや `..` を含む、または空である場合。
    InvalidFilename { index: usize, filename: String },
    /// 出力形式 (PNG) と一致しない拡張子の場合。
    UnsupportedExtension { index: usize, filename: String },
    /// 同じファイル名が2回以上現れた場合。`first` は最初に現れた位置。
    DuplicateFilename {
        first: usize,
        duplicate: usize,
        filename: String,
    },
}

// --- 実装ブロック ---

impl DescriptorList {
    /// 新しい `DescriptorList` を作成します。
    ///
    /// # 戻り値
    /// * `Ok(DescriptorList)`: すべての検証に通った場合。
    /// * `Err(DescriptorValidationError)`: 最初に見つかった問題。
    pub fn new(descriptors: Vec<ImageDescriptor>) -> Result<Self, DescriptorValidationError> {
        if descriptors.is_empty() {
            return Err(DescriptorValidationError::EmptyList);
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (i, descriptor) in descriptors.iter().enumerate() {
            let filename = descriptor.filename;
            if !is_single_segment(filename) {
                return Err(DescriptorValidationError::InvalidFilename {
                    index: i,
                    filename: filename.to_string(),
                });
            }
            if !has_png_extension(filename) {
                return Err(DescriptorValidationError::UnsupportedExtension {
                    index: i,
                    filename: filename.to_string(),
                });
            }
            if let Some(&first) = seen.get(filename) {
                return Err(DescriptorValidationError::DuplicateFilename {
                    first,
                    duplicate: i,
                    filename: filename.to_string(),
                });
            }
            seen.insert(filename, i);
        }

        Ok(Self { descriptors })
    }

    /// 組み込みの SecureVault 用画像定義から作成します。
    pub fn securevault() -> Result<Self, DescriptorValidationError> {
        Self::new(SECUREVAULT_DESCRIPTORS.to_vec())
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageDescriptor> {
        self.descriptors.iter()
    }
}

impl<'a> IntoIterator for &'a DescriptorList {
    type Item = &'a ImageDescriptor;
    type IntoIter = std::slice::Iter<'a, ImageDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `a.png` のような単一の通常パス要素であるかを判定します。
fn is_single_segment(filename: &str) -> bool {
    let mut components = Path::new(filename).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn has_png_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

// --- トレイト実装 ---

impl fmt::Display for DescriptorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorValidationError::EmptyList => {
                write!(f, "画像定義が空です。1件以上定義してください。")
            }
            DescriptorValidationError::InvalidFilename { index, filename } => write!(
                f,
                "インデックス {} のファイル名 '{}' は単一のファイル名ではありません。",
                index, filename
            ),
            DescriptorValidationError::UnsupportedExtension { index, filename } => write!(
                f,
                "インデックス {} のファイル名 '{}' の拡張子は .png ではありません。",
                index, filename
            ),
            DescriptorValidationError::DuplicateFilename {
                first,
                duplicate,
                filename,
            } => write!(
                f,
                "ファイル名 '{}' がインデックス {} と {} で重複しています。",
                filename, first, duplicate
            ),
        }
    }
}

impl std::error::Error for DescriptorValidationError {}

// --- テストモジュール ---
