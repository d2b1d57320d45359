use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;
use tracing::debug;

use super::TaskResult;
use crate::backend::KanjiBackend;

/// Runs backend commands off the UI thread.
///
/// Every command gets its own thread that blocks on the shared runtime and
/// reports through the channel drained by [`TaskManager::poll_results`].
pub struct TaskManager<B> {
    runtime: Arc<Runtime>,
    backend: Arc<B>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl<B> TaskManager<B>
where
    B: KanjiBackend + Send + Sync + 'static,
{
    pub fn new(runtime: Arc<Runtime>, backend: Arc<B>) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self { runtime, backend, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            debug!("Task finished: {}", result.task_type());
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>, Arc<B>) {
        (self.sender.clone(), self.runtime.clone(), self.backend.clone())
    }

    pub fn load_practice_pool(&self) {
        let (sender, runtime, backend) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(backend.initialize_practice_pool())
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::PracticePool(result));
        });
    }

    pub fn load_kanji_list(&self) {
        let (sender, runtime, backend) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(backend.get_kanji_list()).map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::KanjiList(result));
        });
    }

    pub fn load_kanji(&self, link: String) {
        let (sender, runtime, backend) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(backend.get_kanji(&link)).map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::KanjiDetail(result));
        });
    }

    pub fn search(&self, query: String) {
        let (sender, runtime, backend) = self.task_context();

        thread::spawn(move || {
            let result =
                runtime.block_on(backend.search_kanji(&query)).map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::SearchResults { query, result });
        });
    }

    /// Flags an entry for practice, then reports the refreshed list so the
    /// screen never shows the old flag after the update lands.
    pub fn update_practice(&self, index: u32, practice: bool) {
        let (sender, runtime, backend) = self.task_context();

        thread::spawn(move || {
            let (updated, list) = runtime.block_on(async {
                let updated = backend.update_kanji_practice(index, practice).await;
                let list = backend.get_kanji_list().await;
                (updated, list)
            });

            let _ = sender.send(TaskResult::PracticeUpdated {
                index,
                result: updated.map_err(|e| e.to_string()),
            });
            let _ = sender.send(TaskResult::KanjiList(list.map_err(|e| e.to_string())));
        });
    }

    pub fn refresh_data(&self) {
        let (sender, runtime, backend) = self.task_context();

        thread::spawn(move || {
            let (refreshed, list) = runtime.block_on(async {
                let refreshed = backend.refresh_kanji_data().await;
                let list = backend.get_kanji_list().await;
                (refreshed, list)
            });

            let _ = sender.send(TaskResult::DataRefreshed(refreshed.map_err(|e| e.to_string())));
            let _ = sender.send(TaskResult::KanjiList(list.map_err(|e| e.to_string())));
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use serde_json::json;

    use super::*;
    use crate::{
        backend::SnapshotBackend,
        core::KanjiDetail,
    };

    fn manager() -> TaskManager<SnapshotBackend> {
        let entries: Vec<KanjiDetail> = serde_json::from_value(json!([
            { "index": 1, "kanji": "一", "link": "/kanji/1-one", "meaning": "one", "practice": true },
            { "index": 2, "kanji": "二", "link": "/kanji/2-two", "meaning": "two" }
        ]))
        .unwrap();

        let runtime = Arc::new(Runtime::new().unwrap());
        TaskManager::new(runtime, Arc::new(SnapshotBackend::from_entries(entries)))
    }

    fn wait_for(manager: &mut TaskManager<SnapshotBackend>, count: usize) -> Vec<TaskResult> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut results = Vec::new();
        while results.len() < count && Instant::now() < deadline {
            results.extend(manager.poll_results());
            thread::sleep(Duration::from_millis(5));
        }
        results
    }

    #[test]
    fn test_practice_pool_task() {
        let mut manager = manager();
        manager.load_practice_pool();

        let results = wait_for(&mut manager, 1);
        match &results[..] {
            [TaskResult::PracticePool(Ok(pool))] => {
                assert_eq!(pool.len(), 1);
                assert_eq!(pool[0].kanji, "一");
            }
            other => panic!("Expected practice pool, got {:?}", other),
        }
    }

    #[test]
    fn test_update_reports_fresh_list() {
        let mut manager = manager();
        manager.update_practice(2, true);

        let results = wait_for(&mut manager, 2);
        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], TaskResult::PracticeUpdated { index: 2, result: Ok(()) }));
        if let TaskResult::KanjiList(Ok(list)) = &results[1] {
            assert!(list.iter().all(|l| l.practice));
        } else {
            panic!("Expected kanji list, got {:?}", results[1]);
        }
    }

    #[test]
    fn test_missing_kanji_reports_error() {
        let mut manager = manager();
        manager.load_kanji("/kanji/404".to_string());

        let results = wait_for(&mut manager, 1);
        assert!(matches!(&results[..], [TaskResult::KanjiDetail(Err(_))]));
    }
}
