mod app;
mod fonts;
mod home_view;
mod practice_view;
mod theme;
mod top_bar;

pub use app::KanjirenApp;
pub use top_bar::Screen;
