//! プレースホルダー画像の固定レイアウト。
//!
//! すべての座標はピクセル単位で、左上が原点です。

use super::draw::PixelRect;
use image::Rgb;

pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 300;

/// ヘッダー帯 (アクセントカラー) の高さ
pub const ACCENT_BAND_HEIGHT: u32 = 80;
pub const ACCENT_BAND: PixelRect = PixelRect::new(0, 0, CANVAS_WIDTH - 1, ACCENT_BAND_HEIGHT - 1);

/// タイトルの上端
pub const TITLE_Y: i32 = 20;
/// 説明文の上端 (ヘッダー帯の下)
pub const DESCRIPTION_Y: i32 = 100;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const TITLE_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
/// 説明文とウィジェットのラベル
pub const TEXT_GRAY: Rgb<u8> = Rgb([128, 128, 128]);
/// ウィジェットの枠線 (lightgray)
pub const BORDER_GRAY: Rgb<u8> = Rgb([211, 211, 211]);
pub const BORDER_WIDTH: u32 = 2;

/// 画面部品を模した枠線だけの矩形と、その中に置くラベル。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockWidget {
    pub rect: PixelRect,
    pub label: &'static str,
    /// 矩形の左上からラベルまでのずれ
    pub label_offset: (u32, u32),
}

impl MockWidget {
    pub fn label_position(&self) -> (i32, i32) {
        (
            (self.rect.left + self.label_offset.0) as i32,
            (self.rect.top + self.label_offset.1) as i32,
        )
    }
}

pub const UPLOAD_AREA: MockWidget = MockWidget {
    rect: PixelRect::new(50, 150, 350, 200),
    label: "Upload Area",
    label_offset: (10, 10),
};

pub const LEFT_BUTTON: MockWidget = MockWidget {
    rect: PixelRect::new(50, 220, 200, 250),
    label: "Button 1",
    label_offset: (10, 7),
};

pub const RIGHT_BUTTON: MockWidget = MockWidget {
    rect: PixelRect::new(220, 220, 350, 250),
    label: "Button 2",
    label_offset: (10, 7),
};

pub const MOCK_WIDGETS: [MockWidget; 3] = [UPLOAD_AREA, LEFT_BUTTON, RIGHT_BUTTON];

/// 幅 `text_width` の文字列をキャンバス中央に置くための左端 x。
///
/// 切り捨て除算です。キャンバスより広い文字列は負の値になり、両端がはみ出します。
pub fn centered_x(text_width: u32) -> i32 {
    (CANVAS_WIDTH as i32 - text_width as i32).div_euclid(2)
}
