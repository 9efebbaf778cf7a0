use {
    crate::{
        basis::{variant_file_name, BASE_FILE, TARGET_SIZES},
        canvas::Canvas,
        resize::resize,
    },
    anyhow::{Context as _, Result},
    image::{ImageFormat, RgbaImage},
    std::path::{Path, PathBuf},
    tracing::{debug, info},
};

/// `image` を RGBA の PNG として `path` に書き出す.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to save icon to {}", path.display()))?;

    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "icon written"
    );
    Ok(())
}

/// アイコンを描いて `out_dir` に元画像と各サイズの縮小画像を書き出し, 書き出したパスを順に返す.
///
/// `out_dir` は作らない. 存在しなければ最初の書き出しで失敗し, そのエラーを返す.
pub fn generate(out_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    info!(out_dir = %out_dir.display(), "generating icons");

    let icon = Canvas::icon();
    let mut written = Vec::with_capacity(TARGET_SIZES.len() + 1);

    let base_path = out_dir.join(BASE_FILE);
    save_png(icon.as_image(), &base_path)?;
    written.push(base_path);

    for &size in TARGET_SIZES.iter() {
        let resized = resize(icon.as_image(), size);
        let path = out_dir.join(variant_file_name(size));
        save_png(&resized, &path)?;
        written.push(path);
    }

    info!(count = written.len(), "icons generated");
    Ok(written)
}

#[test]
fn test_save_png_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("icon.png");
    let err = save_png(Canvas::icon().as_image(), &path).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to save icon to"));
    assert!(!path.exists());
}
