use {
    crate::basis::{BoundingBox, Color, BACKGROUND, CANVAS_SIZE, FOREGROUND, MARGIN},
    image::RgbaImage,
};

#[cfg(test)]
mod tests;

/// `Canvas` は書き出す前のアイコンを描くための RGBA 画像を表す.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// 一辺 `size` の正方形を `fill` で塗りつぶした `Canvas` を作る.
    pub fn new(size: u32, fill: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, fill.into()),
        }
    }

    /// 背景を塗り, 余白 `MARGIN` を残して中央に円を描いたアイコン.
    pub fn icon() -> Self {
        let mut canvas = Self::new(CANVAS_SIZE, BACKGROUND);
        canvas.fill_ellipse(BoundingBox::inset(CANVAS_SIZE, MARGIN), FOREGROUND);
        canvas
    }

    /// `bbox` に内接する楕円を `color` で塗りつぶす.
    ///
    /// ピクセル `(x, y)` はその中心 `(x + 0.5, y + 0.5)` が楕円の内側 (境界を含む) にあるときだけ塗る.
    /// アンチエイリアスはしないので, 塗られたピクセルは必ず `color` そのものになる.
    pub fn fill_ellipse(&mut self, bbox: BoundingBox, color: Color) {
        if bbox.is_empty() {
            return;
        }
        let (cx, cy) = bbox.center();
        let (rx, ry) = bbox.radii();

        let color = color.into();
        let right = bbox.right.min(self.image.width());
        let bottom = bbox.bottom.min(self.image.height());

        for y in bbox.top..bottom {
            let dy = (y as f64 + 0.5 - cy) / ry;
            for x in bbox.left..right {
                let dx = (x as f64 + 0.5 - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        (*self.image.get_pixel(x, y)).into()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}
