use eframe::egui::{
    self,
    RichText,
};

use super::theme::Palette;
use crate::core::{
    utils::strip_html,
    KanjiDetail,
    KanjiGlyph,
    KanjiListing,
};

/// What the home screen asks the app to run against the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    Search(String),
    TogglePractice { index: u32, practice: bool },
    OpenDetail(String),
    Refresh,
}

#[derive(Debug, Default)]
pub struct HomeView {
    pub listings: Vec<KanjiListing>,
    pub search_results: Option<Vec<KanjiListing>>,
    pub detail: Option<KanjiDetail>,
    pub error: Option<String>,
    pub loading: bool,
    query: String,
}

impl HomeView {
    pub fn practice_count(&self) -> usize {
        self.listings.iter().filter(|l| l.practice).count()
    }

    /// Replaces the list and carries the new practice flags over to any
    /// search results on screen.
    pub fn set_listings(&mut self, listings: Vec<KanjiListing>) {
        if let Some(results) = &mut self.search_results {
            for result in results.iter_mut() {
                if let Some(fresh) = listings.iter().find(|l| l.index == result.index) {
                    result.practice = fresh.practice;
                }
            }
        }
        self.listings = listings;
        self.error = None;
    }

    /// Ignores results for a query the user has already typed past.
    pub fn set_search_results(&mut self, query: &str, results: Vec<KanjiListing>) {
        if query == self.query.trim() {
            self.search_results = Some(results);
        }
    }

    fn visible(&self) -> &[KanjiListing] {
        self.search_results.as_deref().unwrap_or(&self.listings)
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Vec<HomeAction> {
        let mut actions = Vec::new();
        let palette = Palette::for_ctx(ctx);

        if self.detail.is_some() {
            let mut close = false;
            egui::SidePanel::right("kanji_detail").min_width(260.0).show(ctx, |ui| {
                if let Some(detail) = &self.detail {
                    close = show_detail(ui, detail, palette, &mut actions);
                }
            });
            if close {
                self.detail = None;
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Practice Items");
                ui.label(RichText::new(self.practice_count().to_string()).size(22.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Refresh data").clicked() {
                        actions.push(HomeAction::Refresh);
                    }
                    if self.loading {
                        ui.spinner();
                    }
                });
            });

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("Search by kanji, meaning or reading...")
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                let query = self.query.trim().to_string();
                if query.is_empty() {
                    self.search_results = None;
                } else {
                    actions.push(HomeAction::Search(query));
                }
            }

            if let Some(error) = &self.error {
                ui.colored_label(palette.incorrect, error);
            }
            ui.separator();

            let mut toggles = Vec::new();
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                for listing in self.visible() {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("{:>4}", listing.index)).color(palette.muted));
                        if listing.has_image {
                            ui.label("▣");
                        } else {
                            ui.label(RichText::new(&listing.kanji).size(22.0));
                        }
                        if listing.is_radical {
                            ui.label(RichText::new("radical").small().color(palette.muted));
                        }
                        if ui.link(&listing.meaning).clicked() {
                            toggles.push(HomeAction::OpenDetail(listing.link.clone()));
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let mut practice = listing.practice;
                            if ui.checkbox(&mut practice, "Practice").changed() {
                                toggles.push(HomeAction::TogglePractice {
                                    index: listing.index,
                                    practice,
                                });
                            }
                        });
                    });
                }

                if self.visible().is_empty() && !self.loading {
                    ui.label("No kanji to show.");
                }
            });
            actions.extend(toggles);
        });

        actions
    }
}

fn show_detail(
    ui: &mut egui::Ui,
    detail: &KanjiDetail,
    palette: Palette,
    actions: &mut Vec<HomeAction>,
) -> bool {
    let mut close = false;

    ui.horizontal(|ui| {
        match detail.glyph() {
            KanjiGlyph::Text(glyph) => {
                ui.label(RichText::new(glyph).size(48.0));
            }
            KanjiGlyph::Image(url) => {
                ui.hyperlink_to(RichText::new("Radical image").size(18.0), url);
            }
        }
        ui.vertical(|ui| {
            ui.heading(&detail.meaning);
            ui.label(RichText::new(format!("Usefulness: {}", detail.usefulness)).color(palette.muted));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button("✖").clicked() {
                close = true;
            }
        });
    });

    ui.horizontal(|ui| {
        if let Some(prev) = &detail.prev_link {
            if ui.button("◀ Previous").clicked() {
                actions.push(HomeAction::OpenDetail(prev.clone()));
            }
        }
        if let Some(next) = &detail.next_link {
            if ui.button("Next ▶").clicked() {
                actions.push(HomeAction::OpenDetail(next.clone()));
            }
        }
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        if let Some(description) = &detail.description {
            ui.label(strip_html(description));
        }

        let onyomi: Vec<&str> = detail
            .onyomi
            .iter()
            .map(|o| o.reading.as_str())
            .filter(|r| !r.trim().is_empty())
            .collect();
        if !onyomi.is_empty() {
            ui.strong("On'yomi");
            ui.label(onyomi.join("、"));
        }

        if !detail.kunyomi.is_empty() {
            ui.strong("Kun'yomi");
            for kunyomi in &detail.kunyomi {
                ui.label(format!("{}  {}", kunyomi.reading, kunyomi.meaning));
            }
        }

        if !detail.breakdown.trim().is_empty() {
            ui.strong("Components");
            ui.label(strip_html(&detail.breakdown));
        }

        if let Some(mnemonic) = &detail.mnemonic {
            ui.strong("Mnemonic");
            ui.label(strip_html(mnemonic));
        }

        if !detail.jukugo.is_empty() {
            ui.strong("Jukugo");
            for word in &detail.jukugo {
                ui.label(format!("{} ({}) {}", word.japanese, word.reading, word.english));
            }
        }

        if !detail.lookalikes.is_empty() {
            ui.strong("Lookalikes");
            for lookalike in &detail.lookalikes {
                ui.label(format!("{}  {}", lookalike.kanji, lookalike.meaning));
            }
        }
    });

    close
}
