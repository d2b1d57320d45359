//! The command boundary the screens talk to.
//!
//! The real application answers these commands from a scraper with its own
//! cache. Screens only depend on [`KanjiBackend`], so any source of kanji
//! entries can stand behind it.

mod snapshot;

pub use snapshot::SnapshotBackend;

use crate::core::{
    KanjiDetail,
    KanjiError,
    KanjiListing,
    PracticeItem,
};

#[allow(async_fn_in_trait)]
pub trait KanjiBackend {
    async fn get_kanji_list(&self) -> Result<Vec<KanjiListing>, KanjiError>;

    /// `link` may be absolute or relative to the source site.
    async fn get_kanji(&self, link: &str) -> Result<KanjiDetail, KanjiError>;

    async fn search_kanji(&self, query: &str) -> Result<Vec<KanjiListing>, KanjiError>;

    /// The entries currently marked for practice, in list order.
    async fn initialize_practice_pool(&self) -> Result<Vec<PracticeItem>, KanjiError>;

    async fn update_kanji_practice(&self, index: u32, practice: bool) -> Result<(), KanjiError>;

    async fn refresh_kanji_data(&self) -> Result<(), KanjiError>;
}
