use crate::core::{
    KanjiDetail,
    KanjiListing,
    PracticeItem,
};

#[derive(Debug, Clone)]
pub enum TaskResult {
    PracticePool(Result<Vec<PracticeItem>, String>),
    KanjiList(Result<Vec<KanjiListing>, String>),
    KanjiDetail(Result<KanjiDetail, String>),
    SearchResults { query: String, result: Result<Vec<KanjiListing>, String> },
    PracticeUpdated { index: u32, result: Result<(), String> },
    DataRefreshed(Result<(), String>),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::PracticePool(_) => "practice_pool",
            TaskResult::KanjiList(_) => "kanji_list",
            TaskResult::KanjiDetail(_) => "kanji_detail",
            TaskResult::SearchResults { .. } => "search",
            TaskResult::PracticeUpdated { .. } => "practice_updated",
            TaskResult::DataRefreshed(_) => "data_refreshed",
        }
    }
}
