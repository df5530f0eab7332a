use image::{Rgb, RgbImage};

/// 両端を含むピクセル座標で表した矩形。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelRect {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.left..=self.right).contains(&x) && (self.top..=self.bottom).contains(&y)
    }

    /// 内側へ `width` px の枠に含まれるか
    pub fn on_border(&self, x: u32, y: u32, width: u32) -> bool {
        self.contains(x, y)
            && (x < self.left + width
                || x + width > self.right
                || y < self.top + width
                || y + width > self.bottom)
    }
}

/// 矩形を塗りつぶします。キャンバス外の部分は無視します。
pub fn fill_rect(canvas: &mut RgbImage, rect: PixelRect, color: Rgb<u8>) {
    let (w, h) = canvas.dimensions();
    for y in rect.top..=rect.bottom.min(h.saturating_sub(1)) {
        for x in rect.left..=rect.right.min(w.saturating_sub(1)) {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// 内部を塗らずに、内側へ `width` px の枠線だけを描きます。
pub fn stroke_rect(canvas: &mut RgbImage, rect: PixelRect, color: Rgb<u8>, width: u32) {
    let (w, h) = canvas.dimensions();
    for y in rect.top..=rect.bottom.min(h.saturating_sub(1)) {
        for x in rect.left..=rect.right.min(w.saturating_sub(1)) {
            if rect.on_border(x, y, width) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// `coverage` (0.0..=1.0) の割合で `color` を既存のピクセルに合成します。
pub fn blend_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage == 0.0 {
        return;
    }
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in pixel.0.iter_mut().zip(color.0) {
        let mixed = *dst as f32 * (1.0 - coverage) + src as f32 * coverage;
        *dst = mixed.round() as u8;
    }
}
