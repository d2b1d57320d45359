use crate::core::PracticeItem;

/// The three inputs of the practice form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerField {
    Meaning,
    Onyomi,
    Kunyomi,
}

impl AnswerField {
    pub const ALL: [AnswerField; 3] = [AnswerField::Meaning, AnswerField::Onyomi, AnswerField::Kunyomi];

    pub fn label(&self) -> &'static str {
        match self {
            AnswerField::Meaning => "Meaning",
            AnswerField::Onyomi => "On'yomi",
            AnswerField::Kunyomi => "Kun'yomi",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            AnswerField::Meaning => "Enter the meaning...",
            AnswerField::Onyomi => "Enter the on'yomi reading...",
            AnswerField::Kunyomi => "Enter the kun'yomi reading...",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub meaning: String,
    pub onyomi: String,
    pub kunyomi: String,
}

impl Answers {
    pub fn get(&self, field: AnswerField) -> &str {
        match field {
            AnswerField::Meaning => &self.meaning,
            AnswerField::Onyomi => &self.onyomi,
            AnswerField::Kunyomi => &self.kunyomi,
        }
    }

    pub fn set(&mut self, field: AnswerField, value: String) {
        match field {
            AnswerField::Meaning => self.meaning = value,
            AnswerField::Onyomi => self.onyomi = value,
            AnswerField::Kunyomi => self.kunyomi = value,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verdict {
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

impl From<bool> for Verdict {
    fn from(correct: bool) -> Self {
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validation {
    pub meaning: Verdict,
    pub onyomi: Verdict,
    pub kunyomi: Verdict,
}

impl Validation {
    pub fn get(&self, field: AnswerField) -> Verdict {
        match field {
            AnswerField::Meaning => self.meaning,
            AnswerField::Onyomi => self.onyomi,
            AnswerField::Kunyomi => self.kunyomi,
        }
    }

    pub fn is_unknown(&self) -> bool {
        *self == Validation::default()
    }

    /// `None` until the current item has been submitted.
    pub fn aggregate(&self) -> Option<bool> {
        if AnswerField::ALL.iter().any(|f| self.get(*f) == Verdict::Unknown) {
            return None;
        }
        Some(AnswerField::ALL.iter().all(|f| self.get(*f) == Verdict::Correct))
    }
}

/// How kun'yomi answers are compared against the accepted readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Exact comparison, whitespace included. Kana have no case, so only
    /// trimming is affected when this is off.
    pub strict_kunyomi: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self { strict_kunyomi: true }
    }
}

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn check_meaning(item: &PracticeItem, answer: &str) -> bool {
    let Some(meanings) = &item.accepted_meanings else {
        return true;
    };

    let answer = normalize(answer);
    meanings.iter().any(|m| normalize(m) == answer)
}

pub fn check_onyomi(item: &PracticeItem, answer: &str) -> bool {
    if item.onyomi.is_empty() {
        return true;
    }

    let answer = normalize(answer);
    item.onyomi.iter().any(|o| normalize(&o.reading) == answer)
}

pub fn check_kunyomi(item: &PracticeItem, answer: &str, rules: ValidationRules) -> bool {
    if item.kunyomi.is_empty() {
        return true;
    }

    if rules.strict_kunyomi {
        item.kunyomi.iter().any(|k| k.reading == answer)
    } else {
        let answer = answer.trim();
        item.kunyomi.iter().any(|k| k.reading.trim() == answer)
    }
}

pub fn validate(item: &PracticeItem, answers: &Answers, rules: ValidationRules) -> Validation {
    Validation {
        meaning: check_meaning(item, &answers.meaning).into(),
        onyomi: check_onyomi(item, &answers.onyomi).into(),
        kunyomi: check_kunyomi(item, &answers.kunyomi, rules).into(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn item(value: serde_json::Value) -> PracticeItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_meaning_ignores_case_and_padding() {
        let dog = item(json!({ "kanji": "犬", "meaning": "dog" }));
        assert!(check_meaning(&dog, "dog"));
        assert!(check_meaning(&dog, "DOG"));
        assert!(check_meaning(&dog, " dog "));
        assert!(!check_meaning(&dog, "cat"));
        assert!(!check_meaning(&dog, ""));
    }

    #[test]
    fn test_any_accepted_meaning_matches() {
        let dog = item(json!({ "kanji": "犬", "meanings": ["dog", "Canine"] }));
        assert!(check_meaning(&dog, "canine"));
        assert!(check_meaning(&dog, "  DOG"));
        assert!(!check_meaning(&dog, "cat"));
    }

    #[test]
    fn test_missing_fields_are_vacuously_correct() {
        let bare = item(json!({ "kanji": "丶" }));
        assert!(check_meaning(&bare, "anything"));
        assert!(check_onyomi(&bare, "anything"));
        assert!(check_kunyomi(&bare, "anything", ValidationRules::default()));
    }

    #[test]
    fn test_onyomi_matches_reading_only() {
        let mouth = item(json!({
            "kanji": "口",
            "onyomi": [["コウ", "as in 人口"], ["ku", "rare"]]
        }));
        assert!(check_onyomi(&mouth, "コウ"));
        assert!(check_onyomi(&mouth, " KU "));
        assert!(!check_onyomi(&mouth, "as in 人口"));
    }

    #[test]
    fn test_kunyomi_comparison_modes() {
        let dog = item(json!({ "kanji": "犬", "kunyomi": [{ "reading": "いぬ" }] }));
        let strict = ValidationRules::default();
        let lenient = ValidationRules { strict_kunyomi: false };

        assert!(check_kunyomi(&dog, "いぬ", strict));
        assert!(!check_kunyomi(&dog, "いぬ ", strict));
        assert!(check_kunyomi(&dog, "いぬ ", lenient));
        assert!(!check_kunyomi(&dog, "イヌ", lenient));
    }

    #[test]
    fn test_aggregate() {
        assert_eq!(Validation::default().aggregate(), None);

        let dog = item(json!({
            "kanji": "犬",
            "meanings": ["dog"],
            "kunyomi": [{ "reading": "いぬ" }]
        }));
        let answers = Answers {
            meaning: "dog".to_string(),
            onyomi: String::new(),
            kunyomi: "いぬ".to_string(),
        };
        let validation = validate(&dog, &answers, ValidationRules::default());
        assert_eq!(validation.onyomi, Verdict::Correct);
        assert_eq!(validation.aggregate(), Some(true));

        let wrong = Answers { meaning: "cat".to_string(), ..answers };
        let validation = validate(&dog, &wrong, ValidationRules::default());
        assert_eq!(validation.meaning, Verdict::Incorrect);
        assert_eq!(validation.aggregate(), Some(false));
    }
}
