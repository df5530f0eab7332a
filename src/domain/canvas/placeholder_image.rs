// --- 依存モジュール ---

use super::draw::{fill_rect, stroke_rect};
use super::layout::{
    centered_x, ACCENT_BAND, BACKGROUND, BORDER_GRAY, BORDER_WIDTH, CANVAS_HEIGHT, CANVAS_WIDTH,
    DESCRIPTION_Y, MOCK_WIDGETS, TEXT_GRAY, TITLE_COLOR, TITLE_Y,
};
use crate::domain::descriptor::ImageDescriptor;
use crate::domain::font::{FontSet, UiFont};

// image クレートでキャンバスを保持し、PNG へエンコードします。
use image::{ImageFormat, ImageResult, Rgb, RgbImage};
use std::path::Path;

/// 1つの画像定義から描画された、メモリ上のプレースホルダー画像。
pub struct PlaceholderImage {
    /// 書き出し時のファイル名。画像定義の `filename` と同じ。
    pub file_name: String,
    /// 400x300 の RGB キャンバス。
    pub canvas: RgbImage,
}

impl PlaceholderImage {
    /// 画像定義をもとにモックUIのスクリーンショット風画像を描画します。
    ///
    /// 描画順:
    /// 1. 白背景
    /// 2. 上端 80px のアクセントカラー帯
    /// 3. 帯の上に白いタイトル (中央揃え)
    /// 4. 帯の下に灰色の説明文 (中央揃え)
    /// 5. アップロード領域とボタン2つの枠線、およびそれぞれのラベル
    ///
    /// フォントは呼び出し元が用意したものを使うだけで、ここでは失敗しません。
    pub fn render(descriptor: &ImageDescriptor, fonts: &FontSet) -> Self {
        let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

        fill_rect(&mut canvas, ACCENT_BAND, descriptor.accent_color.to_rgb());

        draw_centered(&mut canvas, &fonts.large, descriptor.title, TITLE_Y, TITLE_COLOR);
        draw_centered(
            &mut canvas,
            &fonts.small,
            descriptor.description,
            DESCRIPTION_Y,
            TEXT_GRAY,
        );

        for widget in MOCK_WIDGETS {
            stroke_rect(&mut canvas, widget.rect, BORDER_GRAY, BORDER_WIDTH);
            let (x, y) = widget.label_position();
            fonts.small.draw_text(&mut canvas, x, y, widget.label, TEXT_GRAY);
        }

        Self {
            file_name: descriptor.filename.to_string(),
            canvas,
        }
    }

    /// 指定されたパスに PNG として保存します。既存のファイルは上書きされます。
    pub fn save_to_path(&self, path: &Path) -> ImageResult<()> {
        self.canvas.save_with_format(path, ImageFormat::Png)
    }
}

/// 文字列をキャンバスの横方向中央、上端 `y` に描画します。
fn draw_centered(canvas: &mut RgbImage, font: &UiFont, text: &str, y: i32, color: Rgb<u8>) {
    let (width, _) = font.text_size(text);
    font.draw_text(canvas, centered_x(width), y, text, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::canvas::layout::{ACCENT_BAND_HEIGHT, LEFT_BUTTON, RIGHT_BUTTON, UPLOAD_AREA};
    use crate::domain::descriptor::{AccentColor, SECUREVAULT_DESCRIPTORS};
    use crate::domain::font::ui_font::installed_system_font;
    use crate::domain::font::FontSource;
    use tempfile::tempdir;

    fn builtin_fonts() -> FontSet {
        FontSet::load(&FontSource::builtin())
    }

    fn client_file_drop() -> ImageDescriptor {
        SECUREVAULT_DESCRIPTORS[0]
    }

    #[test]
    fn render_produces_fixed_size_canvas() {
        let image = PlaceholderImage::render(&client_file_drop(), &builtin_fonts());
        assert_eq!(image.canvas.dimensions(), (400, 300));
        assert_eq!(image.file_name, "client-file-drop.png");
    }

    /// 帯の下半分はタイトルが届かないので、すべてアクセントカラーのはず
    #[test]
    fn accent_band_background_is_exact_accent_color() {
        for descriptor in SECUREVAULT_DESCRIPTORS {
            let image = PlaceholderImage::render(&descriptor, &builtin_fonts());
            let accent = descriptor.accent_color.to_rgb();

            for y in 50..ACCENT_BAND_HEIGHT {
                for x in 0..CANVAS_WIDTH {
                    assert_eq!(*image.canvas.get_pixel(x, y), accent, "({}, {})", x, y);
                }
            }
            // 左右の端はタイトルの横なので帯全体がアクセントカラー
            for y in 0..ACCENT_BAND_HEIGHT {
                for x in (0..10).chain(390..CANVAS_WIDTH) {
                    assert_eq!(*image.canvas.get_pixel(x, y), accent, "({}, {})", x, y);
                }
            }
            // 帯の直下は背景色
            assert_eq!(*image.canvas.get_pixel(0, ACCENT_BAND_HEIGHT), BACKGROUND);
        }
    }

    #[test]
    fn title_is_drawn_in_white_inside_the_band() {
        let image = PlaceholderImage::render(&client_file_drop(), &builtin_fonts());
        let white_in_band = (0..ACCENT_BAND_HEIGHT)
            .flat_map(|y| (0..CANVAS_WIDTH).map(move |x| (x, y)))
            .filter(|&(x, y)| *image.canvas.get_pixel(x, y) == TITLE_COLOR)
            .count();
        assert!(white_in_band > 0);
    }

    /// 組み込みフォントでのタイトルは幅が確定するので、中央揃えの位置を直接確認する
    #[test]
    fn title_is_horizontally_centered() {
        let fonts = builtin_fonts();
        let descriptor = client_file_drop();
        let (width, _) = fonts.large.text_size(descriptor.title);
        let image = PlaceholderImage::render(&descriptor, &fonts);

        let white_columns: Vec<u32> = (0..CANVAS_WIDTH)
            .filter(|&x| {
                (0..ACCENT_BAND_HEIGHT).any(|y| *image.canvas.get_pixel(x, y) == TITLE_COLOR)
            })
            .collect();
        let first = *white_columns.first().unwrap() as i32;
        let last = *white_columns.last().unwrap() as i32;

        assert_eq!(first, centered_x(width));
        assert_eq!(last, centered_x(width) + width as i32 - 1);
    }

    #[test]
    fn description_is_drawn_in_gray_below_the_band() {
        let image = PlaceholderImage::render(&client_file_drop(), &builtin_fonts());
        let gray_rows: Vec<u32> = (ACCENT_BAND_HEIGHT..UPLOAD_AREA.rect.top)
            .filter(|&y| (0..CANVAS_WIDTH).any(|x| *image.canvas.get_pixel(x, y) == TEXT_GRAY))
            .collect();
        assert_eq!(*gray_rows.first().unwrap(), DESCRIPTION_Y as u32);
    }

    #[test]
    fn widgets_have_gray_borders_and_unfilled_interiors() {
        let image = PlaceholderImage::render(&client_file_drop(), &builtin_fonts());
        let px = |x: u32, y: u32| *image.canvas.get_pixel(x, y);

        for widget in MOCK_WIDGETS {
            let r = widget.rect;
            let mid_x = (r.left + r.right) / 2;
            let mid_y = (r.top + r.bottom) / 2;
            for (x, y) in [
                (r.left, mid_y),
                (r.left + 1, mid_y),
                (r.right, mid_y),
                (r.right - 1, mid_y),
                (mid_x, r.top),
                (mid_x, r.top + 1),
                (mid_x, r.bottom),
                (mid_x, r.bottom - 1),
            ] {
                assert_eq!(px(x, y), BORDER_GRAY, "{} の枠 ({}, {})", widget.label, x, y);
            }
            // 枠のすぐ外側は背景のまま
            assert_eq!(px(r.left - 1, mid_y), BACKGROUND);
            assert_eq!(px(r.right + 1, mid_y), BACKGROUND);
            // 内部の右下寄り (ラベルから離れた位置) は背景色
            assert_eq!(px(r.right - 5, r.bottom - 4), BACKGROUND, "{}", widget.label);
            // 3px目からは枠ではない
            assert_eq!(px(r.left + 2, r.bottom - 4), BACKGROUND, "{}", widget.label);
        }
    }

    #[test]
    fn widget_labels_are_drawn_near_the_top_left_corner() {
        let image = PlaceholderImage::render(&client_file_drop(), &builtin_fonts());
        for widget in [UPLOAD_AREA, LEFT_BUTTON, RIGHT_BUTTON] {
            let (x, y) = widget.label_position();
            let inked = (y..y + 7)
                .flat_map(|py| (x..x + 40).map(move |px| (px as u32, py as u32)))
                .any(|(px, py)| *image.canvas.get_pixel(px, py) == TEXT_GRAY);
            assert!(inked, "{} のラベルが描画されていない", widget.label);
        }
    }

    /// キャンバスより広いタイトルでもパニックせず、はみ出した分は切り捨てられる
    #[test]
    fn overflowing_title_is_clipped() {
        let descriptor = ImageDescriptor {
            filename: "wide.png",
            title: "An extremely long placeholder title that cannot fit",
            description: "Caption",
            accent_color: AccentColor(0, 0, 0),
        };
        let image = PlaceholderImage::render(&descriptor, &builtin_fonts());
        assert_eq!(image.canvas.dimensions(), (400, 300));
    }

    #[test]
    fn saved_png_decodes_back_to_the_same_pixels() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("client-file-drop.png");
        let image = PlaceholderImage::render(&client_file_drop(), &builtin_fonts());

        image.save_to_path(&path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (400, 300));
        assert_eq!(decoded, image.canvas);
    }

    // --- システムフォント (rusttype) での描画 ---
    // フォントが見つからない環境では何も確認せずに終了する。

    /// タイトルのインクは中央揃えの位置から、先頭グリフのサイドベアリング分の範囲で始まる
    #[test]
    fn scalable_title_is_centered() {
        let Some(source) = installed_system_font() else {
            return;
        };
        let fonts = FontSet::load(&source);

        for descriptor in SECUREVAULT_DESCRIPTORS {
            let image = PlaceholderImage::render(&descriptor, &fonts);
            let accent = descriptor.accent_color.to_rgb();
            let (width, _) = fonts.large.text_size(descriptor.title);
            let x0 = centered_x(width);

            let ink_columns: Vec<i32> = (0..CANVAS_WIDTH)
                .filter(|&x| {
                    (0..ACCENT_BAND_HEIGHT).any(|y| *image.canvas.get_pixel(x, y) != accent)
                })
                .map(|x| x as i32)
                .collect();
            let first = *ink_columns.first().expect("タイトルが描画されていない");
            let last = *ink_columns.last().expect("タイトルが描画されていない");

            let bearing = first - x0;
            assert!((0..=4).contains(&bearing), "{}: bearing {}", descriptor.title, bearing);
            assert!(last < x0 + bearing + width as i32, "{}", descriptor.title);
            assert!(last + 3 >= x0 + bearing + width as i32, "{}", descriptor.title);
        }
    }

    /// タイトルの行ボックスの外側は、アンチエイリアスの影響も受けずアクセントカラーのまま
    #[test]
    fn scalable_band_outside_title_box_is_pure_accent() {
        let Some(source) = installed_system_font() else {
            return;
        };
        let fonts = FontSet::load(&source);
        let UiFont::Scalable { font, scale } = &fonts.large else {
            panic!("システムフォントはスケーラブルのはず");
        };
        let metrics = font.v_metrics(*scale);
        let line_bottom = TITLE_Y + (metrics.ascent - metrics.descent).ceil() as i32;

        for descriptor in SECUREVAULT_DESCRIPTORS {
            let image = PlaceholderImage::render(&descriptor, &fonts);
            let accent = descriptor.accent_color.to_rgb();
            let (width, _) = fonts.large.text_size(descriptor.title);
            let left = centered_x(width);
            // 先頭グリフのサイドベアリングの分だけ右に余裕を持たせる
            let right = left + width as i32 + 4;

            for y in 0..ACCENT_BAND_HEIGHT as i32 {
                for x in 0..CANVAS_WIDTH as i32 {
                    let in_title_box =
                        (left..=right).contains(&x) && (TITLE_Y..=line_bottom).contains(&y);
                    if !in_title_box {
                        assert_eq!(
                            *image.canvas.get_pixel(x as u32, y as u32),
                            accent,
                            "{} ({}, {})",
                            descriptor.filename,
                            x,
                            y
                        );
                    }
                }
            }
        }
    }

    /// ラベルは枠線に重ならず、ウィジェットの内側に収まる
    #[test]
    fn scalable_labels_stay_inside_widget_interiors() {
        let Some(source) = installed_system_font() else {
            return;
        };
        let fonts = FontSet::load(&source);
        let image = PlaceholderImage::render(&client_file_drop(), &fonts);

        // 説明文より下の領域では、背景以外のピクセルはすべていずれかのウィジェット内にある
        for y in UPLOAD_AREA.rect.top - 5..CANVAS_HEIGHT {
            for x in 0..CANVAS_WIDTH {
                let pixel = *image.canvas.get_pixel(x, y);
                if pixel == BACKGROUND {
                    continue;
                }
                let owner = MOCK_WIDGETS
                    .iter()
                    .find(|w| w.rect.contains(x, y))
                    .unwrap_or_else(|| panic!("ウィジェット外にインク ({}, {})", x, y));
                if owner.rect.on_border(x, y, BORDER_WIDTH) {
                    assert_eq!(pixel, BORDER_GRAY, "{} の枠 ({}, {})", owner.label, x, y);
                }
            }
        }

        for widget in MOCK_WIDGETS {
            let r = widget.rect;
            let columns = r.left + BORDER_WIDTH..=r.right - BORDER_WIDTH;
            let inked = (r.top + BORDER_WIDTH..=r.bottom - BORDER_WIDTH)
                .flat_map(|y| columns.clone().map(move |x| (x, y)))
                .any(|(x, y)| *image.canvas.get_pixel(x, y) != BACKGROUND);
            assert!(inked, "{} のラベルが描画されていない", widget.label);
        }
    }
}
