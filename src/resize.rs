use image::{
    imageops::{self, FilterType},
    RgbaImage,
};

/// `image` を一辺 `size` の正方形に Lanczos3 で再標本化した複製を返す.
///
/// 元と同じ大きさなら再標本化せずにそのまま複製する.
pub fn resize(image: &RgbaImage, size: u32) -> RgbaImage {
    if image.dimensions() == (size, size) {
        return image.clone();
    }
    imageops::resize(image, size, size, FilterType::Lanczos3)
}
