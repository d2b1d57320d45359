use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
    sync::Arc,
};

use eframe::egui;
use tracing::{
    info,
    warn,
};

const CJK_FONT: &str = "cjk";

// egui ships without Japanese glyphs.
const SYSTEM_CJK_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansJP-Regular.ttf",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

fn candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_CJK_FONTS.iter().map(PathBuf::from))
        .collect()
}

/// Registers the first readable CJK font as the top-priority family font.
pub fn install_cjk_font(ctx: &egui::Context, configured: Option<&Path>) {
    let Some((path, bytes)) =
        candidates(configured).into_iter().find_map(|p| fs::read(&p).ok().map(|b| (p, b)))
    else {
        warn!("No CJK font found; kanji may render as boxes. Set font_path in settings.");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(CJK_FONT.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));

    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, CJK_FONT.to_owned());
    fonts.families.entry(egui::FontFamily::Monospace).or_default().push(CJK_FONT.to_owned());

    ctx.set_fonts(fonts);
    info!("Loaded CJK font from {}", path.display());
}
