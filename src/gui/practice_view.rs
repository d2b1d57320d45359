use eframe::egui::{
    self,
    RichText,
};

use super::theme::Palette;
use crate::{
    core::{
        utils::strip_html,
        KanjiGlyph,
        PracticeItem,
    },
    practice::{
        InfoSection,
        PoolLoad,
        PracticeSession,
        SessionState,
    },
};

pub fn show(ui: &mut egui::Ui, load: &mut PoolLoad) {
    let palette = Palette::for_ctx(ui.ctx());

    match load {
        PoolLoad::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading practice pool...");
            });
        }
        PoolLoad::Failed(e) => {
            ui.colored_label(palette.incorrect, format!("Failed to load practice pool: {}", e));
            ui.label("Leave the practice screen and come back to try again.");
        }
        PoolLoad::Ready(session) => show_session(ui, session, palette),
    }
}

fn show_session(ui: &mut egui::Ui, session: &mut PracticeSession, palette: Palette) {
    match session.state() {
        SessionState::EmptyPool => {
            ui.vertical_centered(|ui| ui.label("No kanji available for practice"));
            return;
        }
        SessionState::Complete => {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Practice complete!").color(palette.correct));
                ui.label(format!("You went through all {} kanji.", session.len()));
            });
            return;
        }
        _ => {}
    }

    let Some(item) = session.current_item().cloned() else {
        return;
    };

    ui.vertical_centered(|ui| match item.glyph() {
        KanjiGlyph::Text(glyph) => {
            ui.label(RichText::new(glyph).size(96.0).strong());
        }
        KanjiGlyph::Image(url) => {
            ui.hyperlink_to(RichText::new("Radical image").size(24.0), url);
        }
    });
    ui.add_space(12.0);

    let locked = session.aggregate() == Some(true);
    let mut submit = false;

    for field in session.prompted_fields() {
        ui.label(field.label());
        ui.horizontal(|ui| {
            let mut text = session.answers().get(field).to_string();
            let response = ui.add_enabled(
                !locked,
                egui::TextEdit::singleline(&mut text)
                    .hint_text(field.placeholder())
                    .desired_width(ui.available_width() - 24.0),
            );

            if response.changed() {
                session.set_answer(field, &text);
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            if let Some(mark) = palette.verdict_mark(session.validation().get(field)) {
                ui.label(mark);
            }
        });
        ui.add_space(4.0);
    }

    ui.add_space(8.0);
    if locked {
        if ui.button("Next Kanji").clicked() {
            session.advance();
        }
    } else if ui.button("Check Answers").clicked() {
        submit = true;
    }

    if submit && !locked {
        session.submit();
    }

    match session.aggregate() {
        Some(true) => {
            ui.colored_label(palette.correct, "All correct!");
        }
        Some(false) => {
            ui.colored_label(palette.incorrect, "Try again!");
            let label = if session.is_revealed() { "Hide solutions" } else { "Show solutions" };
            if ui.button(label).clicked() {
                session.toggle_reveal();
            }
            if session.is_revealed() {
                show_solutions(ui, session);
            }
        }
        None => {}
    }

    if session.aggregate().is_some() {
        ui.add_space(8.0);
        show_info_sections(ui, session, &item);
    }

    ui.add_space(12.0);
    let (current, total) = session.progress();
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(format!("Kanji {} of {}", current, total)).color(palette.muted));
    });
}

fn show_solutions(ui: &mut egui::Ui, session: &PracticeSession) {
    let Some(solutions) = session.solutions() else {
        return;
    };

    egui::Frame::group(ui.style()).show(ui, |ui| {
        if !solutions.meanings.is_empty() {
            ui.label(format!("Meaning: {}", solutions.meanings.join(", ")));
        }
        if !solutions.onyomi.is_empty() {
            ui.label(format!("On'yomi: {}", solutions.onyomi.join("、")));
        }
        if !solutions.kunyomi.is_empty() {
            ui.label(format!("Kun'yomi: {}", solutions.kunyomi.join("、")));
        }
    });
}

fn show_info_sections(ui: &mut egui::Ui, session: &mut PracticeSession, item: &PracticeItem) {
    for section in InfoSection::ALL {
        if !section.is_available(item) {
            continue;
        }

        let response = egui::CollapsingHeader::new(section.title())
            .open(Some(session.is_section_open(section)))
            .show(ui, |ui| section_body(ui, section, item));

        if response.header_response.clicked() {
            session.toggle_section(section);
        }
    }
}

fn section_body(ui: &mut egui::Ui, section: InfoSection, item: &PracticeItem) {
    match section {
        InfoSection::Mnemonic => {
            if let Some(mnemonic) = &item.mnemonic {
                ui.label(strip_html(mnemonic));
            }
        }
        InfoSection::Components => {
            if let Some(breakdown) = &item.breakdown {
                ui.label(strip_html(breakdown));
            }
        }
        InfoSection::SimilarKanji => {
            egui::Grid::new("similar_kanji").num_columns(2).show(ui, |ui| {
                for lookalike in &item.lookalikes {
                    ui.label(RichText::new(&lookalike.kanji).size(22.0));
                    ui.label(&lookalike.meaning);
                    ui.end_row();
                }
            });
        }
        InfoSection::Vocabulary => {
            for word in &item.jukugo {
                ui.label(RichText::new(&word.japanese).strong());
                ui.label(&word.reading);
                ui.label(&word.english);
                ui.separator();
            }
        }
    }
}
