use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Practice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    Navigate(Screen),
    ToggleDarkMode,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, current: Screen, dark_mode: bool) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                for (screen, label) in [(Screen::Home, "Home"), (Screen::Practice, "Practice")] {
                    let mut selected = current;
                    if ui.selectable_value(&mut selected, screen, label).clicked() {
                        action = Some(TopBarAction::Navigate(screen));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if dark_mode { "☀" } else { "🌙" };
                    if ui.button(icon).on_hover_text("Toggle dark mode").clicked() {
                        action = Some(TopBarAction::ToggleDarkMode);
                    }
                });
            });
        });

        action
    }
}
