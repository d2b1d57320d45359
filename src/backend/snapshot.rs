use std::path::{
    Path,
    PathBuf,
};

use tokio::sync::RwLock;
use tracing::{
    info,
    warn,
};
use wana_kana::{
    ConvertJapanese,
    IsJapaneseStr,
};

use super::KanjiBackend;
use crate::core::{
    utils::resolve_link,
    KanjiDetail,
    KanjiError,
    KanjiListing,
    PracticeItem,
};

/// Serves the kanji commands from a JSON array of [`KanjiDetail`].
///
/// A file-backed snapshot writes practice changes back to disk and can be
/// reloaded with `refresh_kanji_data`.
#[derive(Debug)]
pub struct SnapshotBackend {
    path: Option<PathBuf>,
    entries: RwLock<Vec<KanjiDetail>>,
}

impl SnapshotBackend {
    pub fn from_entries(entries: Vec<KanjiDetail>) -> Self {
        Self { path: None, entries: RwLock::new(sorted(entries)) }
    }

    /// A missing file gives an empty snapshot; it is created on the first write.
    pub async fn open(path: PathBuf) -> Result<Self, KanjiError> {
        let entries = read_snapshot(&path).await?;
        Ok(Self { path: Some(path), entries: RwLock::new(entries) })
    }

    async fn save(&self, entries: &[KanjiDetail]) -> Result<(), KanjiError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(path, json).await?;
        info!("Kanji snapshot saved to: {}", path.display());
        Ok(())
    }
}

async fn read_snapshot(path: &Path) -> Result<Vec<KanjiDetail>, KanjiError> {
    if !tokio::fs::try_exists(path).await? {
        warn!("No kanji snapshot at {}, starting empty", path.display());
        return Ok(Vec::new());
    }

    let json = tokio::fs::read_to_string(path).await?;
    let entries: Vec<KanjiDetail> = serde_json::from_str(&json)?;
    info!("Loaded {} kanji from: {}", entries.len(), path.display());
    Ok(sorted(entries))
}

fn sorted(mut entries: Vec<KanjiDetail>) -> Vec<KanjiDetail> {
    entries.sort_by_key(|e| e.index);
    entries
}

fn matches_query(entry: &KanjiDetail, query: &str, kana: Option<&str>) -> bool {
    if entry.kanji == query || entry.meaning.to_lowercase().contains(query) {
        return true;
    }

    let Some(kana) = kana else {
        return false;
    };

    entry.kunyomi.iter().any(|k| k.reading.as_str().to_hiragana().contains(kana))
        || entry.onyomi.iter().any(|o| o.reading.as_str().to_hiragana().contains(kana))
}

impl KanjiBackend for SnapshotBackend {
    async fn get_kanji_list(&self) -> Result<Vec<KanjiListing>, KanjiError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().map(KanjiDetail::listing).collect())
    }

    async fn get_kanji(&self, link: &str) -> Result<KanjiDetail, KanjiError> {
        let wanted = resolve_link(link);
        let entries = self.entries.read().await;

        entries
            .iter()
            .find(|e| resolve_link(&e.link) == wanted)
            .cloned()
            .ok_or_else(|| KanjiError::NotFound(wanted))
    }

    async fn search_kanji(&self, query: &str) -> Result<Vec<KanjiListing>, KanjiError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let kana = query.as_str().to_hiragana();
        let kana = kana.as_str().is_kana().then_some(kana.as_str());

        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| matches_query(e, &query, kana))
            .map(KanjiDetail::listing)
            .collect())
    }

    async fn initialize_practice_pool(&self) -> Result<Vec<PracticeItem>, KanjiError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().filter(|e| e.practice).cloned().map(PracticeItem::from).collect())
    }

    async fn update_kanji_practice(&self, index: u32, practice: bool) -> Result<(), KanjiError> {
        let mut entries = self.entries.write().await;

        let mut updated = entries.clone();
        let entry = updated
            .iter_mut()
            .find(|e| e.index == index)
            .ok_or_else(|| KanjiError::NotFound(format!("index {}", index)))?;
        entry.practice = practice;

        // Memory only follows once the snapshot on disk does.
        self.save(&updated).await?;
        *entries = updated;
        Ok(())
    }

    async fn refresh_kanji_data(&self) -> Result<(), KanjiError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let fresh = read_snapshot(path).await?;
        *self.entries.write().await = fresh;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::practice::{
        validation::validate,
        Answers,
        ValidationRules,
        Verdict,
    };

    fn backend() -> SnapshotBackend {
        SnapshotBackend::from_entries(backend_entries())
    }

    fn backend_entries() -> Vec<KanjiDetail> {
        let entries: Vec<KanjiDetail> = serde_json::from_value(json!([
            {
                "index": 2,
                "kanji": "犬",
                "link": "/kanji/2-dog-犬",
                "meaning": "dog",
                "kunyomi": [{ "reading": "いぬ", "meaning": "dog", "tags": [], "usefulness": 5 }],
                "practice": true
            },
            {
                "index": 1,
                "kanji": "口",
                "link": "/kanji/1-mouth-口",
                "meaning": "mouth",
                "onyomi": [["コウ", "as in 人口"]],
                "kunyomi": [{ "reading": "くち", "meaning": "mouth", "tags": [], "usefulness": 5 }]
            }
        ]))
        .unwrap();

        sorted(entries)
    }

    #[tokio::test]
    async fn test_list_in_index_order() {
        let list = backend().get_kanji_list().await.unwrap();
        let kanji: Vec<_> = list.iter().map(|l| l.kanji.as_str()).collect();
        assert_eq!(kanji, vec!["口", "犬"]);
        assert_eq!(list[0].link, "https://www.kanjidamage.com/kanji/1-mouth-口");
    }

    #[tokio::test]
    async fn test_get_by_relative_or_absolute_link() {
        let backend = backend();
        let detail = backend.get_kanji("/kanji/2-dog-犬").await.unwrap();
        assert_eq!(detail.meaning, "dog");

        let detail = backend.get_kanji("https://www.kanjidamage.com/kanji/2-dog-犬").await.unwrap();
        assert_eq!(detail.index, 2);

        let missing = backend.get_kanji("/kanji/99-nothing").await;
        assert!(matches!(missing, Err(KanjiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search() {
        let backend = backend();

        let by_meaning = backend.search_kanji("  DOG ").await.unwrap();
        assert_eq!(by_meaning.len(), 1);
        assert_eq!(by_meaning[0].kanji, "犬");

        let by_glyph = backend.search_kanji("口").await.unwrap();
        assert_eq!(by_glyph[0].meaning, "mouth");

        let by_romaji = backend.search_kanji("kuchi").await.unwrap();
        assert_eq!(by_romaji[0].kanji, "口");

        let by_onyomi = backend.search_kanji("こう").await.unwrap();
        assert_eq!(by_onyomi[0].kanji, "口");

        assert!(backend.search_kanji("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_practice_pool_follows_updates() {
        let backend = backend();

        let pool = backend.initialize_practice_pool().await.unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].kanji, "犬");

        backend.update_kanji_practice(1, true).await.unwrap();
        let pool = backend.initialize_practice_pool().await.unwrap();
        let kanji: Vec<_> = pool.iter().map(|p| p.kanji.as_str()).collect();
        assert_eq!(kanji, vec!["口", "犬"]);

        assert!(backend.update_kanji_practice(42, true).await.is_err());
    }

    #[tokio::test]
    async fn test_open_keeps_entries_without_meaning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kanji.json");
        std::fs::write(
            &path,
            json!([
                { "index": 1, "kanji": "口", "link": "/kanji/1", "meaning": "mouth", "practice": true },
                { "index": 2, "kanji": "丶", "link": "/kanji/2", "practice": true }
            ])
            .to_string(),
        )
        .unwrap();

        let backend = SnapshotBackend::open(path).await.unwrap();
        let pool = backend.initialize_practice_pool().await.unwrap();
        assert_eq!(pool.len(), 2);
        assert!(!pool[1].has_meaning());

        let validation = validate(&pool[1], &Answers::default(), ValidationRules::default());
        assert_eq!(validation.meaning, Verdict::Correct);
    }

    #[tokio::test]
    async fn test_failed_save_leaves_practice_flag() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        let backend = SnapshotBackend::open(blocker.join("kanji.json")).await.unwrap();
        *backend.entries.write().await = backend_entries();

        std::fs::write(&blocker, "not a directory").unwrap();

        assert!(backend.update_kanji_practice(1, true).await.is_err());
        let pool = backend.initialize_practice_pool().await.unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].kanji, "犬");
        assert!(!backend.get_kanji_list().await.unwrap()[0].practice);
    }

    #[tokio::test]
    async fn test_in_memory_refresh_is_noop() {
        let backend = backend();
        backend.refresh_kanji_data().await.unwrap();
        assert_eq!(backend.get_kanji_list().await.unwrap().len(), 2);
    }
}
