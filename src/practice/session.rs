use tracing::{
    debug,
    info,
};

use super::{
    transliterate::Transliterator,
    validation::{
        validate,
        AnswerField,
        Answers,
        Validation,
        ValidationRules,
    },
};
use crate::core::PracticeItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    EmptyPool,
    AwaitingAnswer,
    SubmittedIncorrect { revealed: bool },
    SubmittedCorrect,
    Complete,
}

/// Outcome of [`PracticeSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next { position: usize },
    /// The current item has not been answered correctly yet.
    Blocked,
    Complete,
}

/// The collapsible panels under the solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoSection {
    Mnemonic,
    Components,
    SimilarKanji,
    Vocabulary,
}

impl InfoSection {
    pub const ALL: [InfoSection; 4] = [
        InfoSection::Mnemonic,
        InfoSection::Components,
        InfoSection::SimilarKanji,
        InfoSection::Vocabulary,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            InfoSection::Mnemonic => "Mnemonic",
            InfoSection::Components => "Components",
            InfoSection::SimilarKanji => "Similar Kanji",
            InfoSection::Vocabulary => "Vocabulary",
        }
    }

    pub fn is_available(&self, item: &PracticeItem) -> bool {
        match self {
            InfoSection::Mnemonic => item.mnemonic.is_some(),
            InfoSection::Components => item.breakdown.is_some(),
            InfoSection::SimilarKanji => !item.lookalikes.is_empty(),
            InfoSection::Vocabulary => !item.jukugo.is_empty(),
        }
    }

    fn slot(&self) -> usize {
        match self {
            InfoSection::Mnemonic => 0,
            InfoSection::Components => 1,
            InfoSection::SimilarKanji => 2,
            InfoSection::Vocabulary => 3,
        }
    }
}

/// Accepted answers of the current item, as listed in the solutions panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solutions<'a> {
    pub meanings: &'a [String],
    pub onyomi: Vec<&'a str>,
    pub kunyomi: Vec<&'a str>,
}

pub struct PracticeSession {
    pool: Vec<PracticeItem>,
    position: usize,
    answers: Answers,
    validation: Validation,
    revealed: bool,
    sections: [bool; 4],
    complete: bool,
    rules: ValidationRules,
    transliterator: Box<dyn Transliterator>,
}

impl std::fmt::Debug for PracticeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticeSession")
            .field("pool", &self.pool.len())
            .field("position", &self.position)
            .field("answers", &self.answers)
            .field("validation", &self.validation)
            .field("revealed", &self.revealed)
            .field("complete", &self.complete)
            .finish()
    }
}

impl PracticeSession {
    pub fn new(pool: Vec<PracticeItem>, transliterator: Box<dyn Transliterator>) -> Self {
        Self::with_rules(pool, transliterator, ValidationRules::default())
    }

    pub fn with_rules(
        pool: Vec<PracticeItem>,
        transliterator: Box<dyn Transliterator>,
        rules: ValidationRules,
    ) -> Self {
        info!("Practice session started with {} item(s)", pool.len());

        Self {
            pool,
            position: 0,
            answers: Answers::default(),
            validation: Validation::default(),
            revealed: false,
            sections: [false; 4],
            complete: false,
            rules,
            transliterator,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.pool.is_empty() {
            return SessionState::EmptyPool;
        }
        if self.complete {
            return SessionState::Complete;
        }

        match self.validation.aggregate() {
            None => SessionState::AwaitingAnswer,
            Some(true) => SessionState::SubmittedCorrect,
            Some(false) => SessionState::SubmittedIncorrect { revealed: self.revealed },
        }
    }

    pub fn current_item(&self) -> Option<&PracticeItem> {
        self.pool.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// One-based index of the current item and the pool size.
    pub fn progress(&self) -> (usize, usize) {
        if self.pool.is_empty() {
            return (0, 0);
        }
        (self.position + 1, self.pool.len())
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }

    pub fn aggregate(&self) -> Option<bool> {
        self.validation.aggregate()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_section_open(&self, section: InfoSection) -> bool {
        self.sections[section.slot()]
    }

    fn is_active(&self) -> bool {
        !self.pool.is_empty() && !self.complete
    }

    /// The inputs the current item asks for. Fields without accepted answers
    /// are not shown and always validate as correct.
    pub fn prompted_fields(&self) -> Vec<AnswerField> {
        let Some(item) = self.current_item() else {
            return Vec::new();
        };

        AnswerField::ALL
            .into_iter()
            .filter(|field| match field {
                AnswerField::Meaning => item.has_meaning(),
                AnswerField::Onyomi => !item.onyomi.is_empty(),
                AnswerField::Kunyomi => !item.kunyomi.is_empty(),
            })
            .collect()
    }

    pub fn solutions(&self) -> Option<Solutions<'_>> {
        let item = self.current_item()?;

        Some(Solutions {
            meanings: item.accepted_meanings.as_deref().unwrap_or(&[]),
            onyomi: item.onyomi.iter().map(|o| o.reading.as_str()).collect(),
            kunyomi: item.kunyomi.iter().map(|k| k.reading.as_str()).collect(),
        })
    }

    pub fn set_answer(&mut self, field: AnswerField, raw: &str) {
        if !self.is_active() {
            return;
        }

        let value = match field {
            AnswerField::Kunyomi => {
                self.transliterator.transliterate(raw).unwrap_or_else(|| raw.to_string())
            }
            AnswerField::Meaning | AnswerField::Onyomi => raw.to_string(),
        };

        self.answers.set(field, value);
    }

    pub fn submit(&mut self) -> Validation {
        if !self.is_active() {
            return self.validation;
        }
        let Some(item) = self.pool.get(self.position) else {
            return self.validation;
        };

        self.validation = validate(item, &self.answers, self.rules);
        self.revealed = false;

        debug!(
            "Submitted {} at {}: {:?} (aggregate {:?})",
            item.kanji,
            self.position,
            self.validation,
            self.validation.aggregate()
        );

        self.validation
    }

    /// Opens or closes the solutions panel. Only possible after a wrong answer.
    pub fn toggle_reveal(&mut self) -> bool {
        if self.is_active() && self.validation.aggregate() == Some(false) {
            self.revealed = !self.revealed;
        }
        self.revealed
    }

    pub fn toggle_section(&mut self, section: InfoSection) -> bool {
        let available = self
            .current_item()
            .map(|item| section.is_available(item))
            .unwrap_or(false);

        if self.is_active() && available {
            let open = &mut self.sections[section.slot()];
            *open = !*open;
        }
        self.sections[section.slot()]
    }

    pub fn advance(&mut self) -> Advance {
        if self.complete {
            return Advance::Complete;
        }
        if self.pool.is_empty() || self.validation.aggregate() != Some(true) {
            return Advance::Blocked;
        }

        if self.position + 1 >= self.pool.len() {
            info!("Practice session complete after {} item(s)", self.pool.len());
            self.complete = true;
            self.revealed = false;
            self.sections = [false; 4];
            return Advance::Complete;
        }

        self.position += 1;
        self.answers = Answers::default();
        self.validation = Validation::default();
        self.revealed = false;
        self.sections = [false; 4];

        Advance::Next { position: self.position }
    }
}
