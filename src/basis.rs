use image::Rgba;

/// `Color` は 32 ビットの RGBA カラーを表す.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Color {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(Color { r, g, b, a }: Color) -> Self {
        Rgba([r, g, b, a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Self { r, g, b, a }
    }
}

/// アイコンの背景色.
pub const BACKGROUND: Color = Color::opaque(59, 130, 246);

/// アイコンの円の色.
pub const FOREGROUND: Color = Color::opaque(255, 255, 255);

/// 元画像の一辺のピクセル数.
pub const CANVAS_SIZE: u32 = 128;

/// 円の外接矩形と画像の縁の間隔.
pub const MARGIN: u32 = 16;

/// 縮小画像を書き出す一辺のサイズ. この順に書き出す.
pub const TARGET_SIZES: [u32; 2] = [32, 128];

pub const OUTPUT_DIR: &str = "icons";

pub const BASE_FILE: &str = "icon.png";

pub fn variant_file_name(size: u32) -> String {
    format!("{}x{}.png", size, size)
}

/// `BoundingBox` は楕円の外接矩形を表す. `right` と `bottom` は矩形の外側の座標になる.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        debug_assert!(left <= right, "left must not exceed right");
        debug_assert!(top <= bottom, "top must not exceed bottom");
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// 一辺 `size` の正方形の内側に `margin` だけ空けた矩形.
    pub fn inset(size: u32, margin: u32) -> Self {
        Self::new(margin, margin, size - margin, size - margin)
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.left + self.right) as f64 / 2.0,
            (self.top + self.bottom) as f64 / 2.0,
        )
    }

    /// 幅か高さが 0 以下の矩形は空とみなす.
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub fn radii(&self) -> (f64, f64) {
        (
            self.right.saturating_sub(self.left) as f64 / 2.0,
            self.bottom.saturating_sub(self.top) as f64 / 2.0,
        )
    }
}

#[test]
fn test_icon_bounding_box() {
    let bbox = BoundingBox::inset(CANVAS_SIZE, MARGIN);
    assert_eq!(bbox, BoundingBox::new(16, 16, 112, 112));
    assert_eq!(bbox.center(), (64.0, 64.0));
    assert_eq!(bbox.radii(), (48.0, 48.0));
}

#[test]
fn test_inverted_bounding_box() {
    // `new` would reject this in debug builds
    let bbox = BoundingBox {
        left: 10,
        top: 10,
        right: 4,
        bottom: 20,
    };
    assert!(bbox.is_empty());
    assert_eq!(bbox.radii(), (0.0, 5.0));
    assert!(!BoundingBox::inset(CANVAS_SIZE, MARGIN).is_empty());
}

#[test]
fn test_variant_file_name() {
    assert_eq!(variant_file_name(32), "32x32.png");
    assert_eq!(variant_file_name(128), "128x128.png");
}

#[test]
fn test_color_conversion() {
    let rgba: Rgba<u8> = BACKGROUND.into();
    assert_eq!(rgba, Rgba([59, 130, 246, 255]));
    assert_eq!(Color::from(rgba), BACKGROUND);
    assert_eq!(format!("{:?}", FOREGROUND), "#ffffffff");
}
