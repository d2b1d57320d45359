pub mod session;
pub mod transliterate;
pub mod validation;

use rand::seq::SliceRandom;
pub use session::{
    Advance,
    InfoSection,
    PracticeSession,
    SessionState,
    Solutions,
};
use tracing::{
    error,
    info,
};
pub use transliterate::{
    Passthrough,
    Transliterator,
    WanaKanaTransliterator,
};
pub use validation::{
    AnswerField,
    Answers,
    Validation,
    ValidationRules,
    Verdict,
};

use crate::{
    core::PracticeItem,
    persistence::Settings,
};

/// The practice screen around its session: the pool is fetched once on
/// entry and either installed whole or replaced by an error.
#[derive(Debug)]
pub enum PoolLoad {
    Loading,
    Ready(PracticeSession),
    Failed(String),
}

impl PoolLoad {
    pub fn finish(result: Result<Vec<PracticeItem>, String>, settings: &Settings) -> Self {
        match result {
            Ok(mut pool) => {
                if settings.shuffle {
                    pool.shuffle(&mut rand::rng());
                }
                info!("Practice pool loaded: {} item(s)", pool.len());
                PoolLoad::Ready(new_session(pool, settings))
            }
            Err(e) => {
                error!("Failed to initialize practice pool: {}", e);
                PoolLoad::Failed(e)
            }
        }
    }

    pub fn session(&self) -> Option<&PracticeSession> {
        match self {
            PoolLoad::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut PracticeSession> {
        match self {
            PoolLoad::Ready(session) => Some(session),
            _ => None,
        }
    }
}

pub fn new_session(pool: Vec<PracticeItem>, settings: &Settings) -> PracticeSession {
    let transliterator: Box<dyn Transliterator> = if settings.transliterate_kunyomi {
        Box::new(WanaKanaTransliterator)
    } else {
        Box::new(Passthrough)
    };
    let rules = ValidationRules { strict_kunyomi: settings.strict_kunyomi };

    PracticeSession::with_rules(pool, transliterator, rules)
}
