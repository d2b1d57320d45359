use std::time::Duration;

use eframe::egui;
use tracing::{
    error,
    info,
    warn,
};

use super::{
    fonts::install_cjk_font,
    home_view::{
        HomeAction,
        HomeView,
    },
    practice_view,
    theme::apply_theme,
    top_bar::{
        Screen,
        TopBar,
        TopBarAction,
    },
};
use crate::{
    backend::SnapshotBackend,
    core::tasks::{
        TaskManager,
        TaskResult,
    },
    persistence::{
        save_json,
        Settings,
        SETTINGS_FILE,
    },
    practice::PoolLoad,
};

pub struct KanjirenApp {
    settings: Settings,
    screen: Screen,
    home: HomeView,
    /// Present only while the practice screen is shown.
    practice: Option<PoolLoad>,
    task_manager: TaskManager<SnapshotBackend>,
}

impl KanjirenApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        task_manager: TaskManager<SnapshotBackend>,
    ) -> Self {
        install_cjk_font(&cc.egui_ctx, settings.font_path.as_deref());
        apply_theme(&cc.egui_ctx, settings.dark_mode);

        let mut home = HomeView::default();
        home.loading = true;
        task_manager.load_kanji_list();

        Self { settings, screen: Screen::Home, home, practice: None, task_manager }
    }

    fn navigate(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        info!("Switching to {:?}", screen);
        self.screen = screen;

        match screen {
            Screen::Practice => {
                self.practice = Some(PoolLoad::Loading);
                self.task_manager.load_practice_pool();
            }
            Screen::Home => {
                // The session is dropped with the screen; coming back starts over.
                self.practice = None;
                self.home.loading = true;
                self.task_manager.load_kanji_list();
            }
        }
    }

    fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        self.settings.dark_mode = !self.settings.dark_mode;
        apply_theme(ctx, self.settings.dark_mode);

        if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
            error!("Failed to save settings: {}", e);
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::PracticePool(result) => {
                // A pool arriving after the user left the screen belongs to a dead session.
                if let Some(load @ PoolLoad::Loading) = &mut self.practice {
                    *load = PoolLoad::finish(result, &self.settings);
                }
            }
            TaskResult::KanjiList(result) => {
                self.home.loading = false;
                match result {
                    Ok(listings) => self.home.set_listings(listings),
                    Err(e) => {
                        error!("Failed to load kanji list: {}", e);
                        self.home.error = Some(format!("Failed to load kanji list: {}", e));
                    }
                }
            }
            TaskResult::KanjiDetail(result) => match result {
                Ok(detail) => self.home.detail = Some(detail),
                Err(e) => {
                    warn!("Failed to load kanji: {}", e);
                    self.home.error = Some(e);
                }
            },
            TaskResult::SearchResults { query, result } => match result {
                Ok(results) => self.home.set_search_results(&query, results),
                Err(e) => warn!("Search for {:?} failed: {}", query, e),
            },
            TaskResult::PracticeUpdated { index, result } => {
                if let Err(e) = result {
                    error!("Failed to toggle practice status of {}: {}", index, e);
                    self.home.error = Some(format!("Failed to toggle practice status: {}", e));
                }
            }
            TaskResult::DataRefreshed(result) => {
                if let Err(e) = result {
                    error!("Failed to refresh kanji data: {}", e);
                    self.home.error = Some(format!("Failed to refresh kanji data: {}", e));
                }
            }
        }
    }

    fn handle_home_action(&mut self, action: HomeAction) {
        match action {
            HomeAction::Search(query) => self.task_manager.search(query),
            HomeAction::TogglePractice { index, practice } => {
                self.home.loading = true;
                self.task_manager.update_practice(index, practice);
            }
            HomeAction::OpenDetail(link) => self.task_manager.load_kanji(link),
            HomeAction::Refresh => {
                self.home.loading = true;
                self.task_manager.refresh_data();
            }
        }
    }

    fn is_waiting(&self) -> bool {
        self.home.loading || matches!(self.practice, Some(PoolLoad::Loading))
    }
}

impl eframe::App for KanjirenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        match TopBar::show(ctx, self.screen, self.settings.dark_mode) {
            Some(TopBarAction::Navigate(screen)) => self.navigate(screen),
            Some(TopBarAction::ToggleDarkMode) => self.toggle_dark_mode(ctx),
            None => {}
        }

        match self.screen {
            Screen::Home => {
                for action in self.home.show(ctx) {
                    self.handle_home_action(action);
                }
            }
            Screen::Practice => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.set_max_width(640.0);
                        if let Some(load) = &mut self.practice {
                            practice_view::show(ui, load);
                        }
                    });
                });
            }
        }

        if self.is_waiting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
