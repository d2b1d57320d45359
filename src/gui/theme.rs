use eframe::egui::{
    self,
    Color32,
    RichText,
};

use crate::practice::Verdict;

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub correct: Color32,
    pub incorrect: Color32,
    pub muted: Color32,
}

impl Palette {
    pub fn for_ctx(ctx: &egui::Context) -> Self {
        if ctx.style().visuals.dark_mode {
            Self {
                correct: Color32::from_rgb(158, 206, 106),
                incorrect: Color32::from_rgb(247, 118, 142),
                muted: Color32::from_rgb(130, 137, 160),
            }
        } else {
            Self {
                correct: Color32::from_rgb(21, 128, 61),
                incorrect: Color32::from_rgb(185, 28, 28),
                muted: Color32::from_rgb(90, 96, 110),
            }
        }
    }

    pub fn verdict_mark(&self, verdict: Verdict) -> Option<RichText> {
        match verdict {
            Verdict::Unknown => None,
            Verdict::Correct => Some(RichText::new("✔").color(self.correct)),
            Verdict::Incorrect => Some(RichText::new("✘").color(self.incorrect)),
        }
    }
}

pub fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_theme(if dark_mode { egui::Theme::Dark } else { egui::Theme::Light });
}
