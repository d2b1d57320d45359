use serde::{
    Deserialize,
    Serialize,
};

use super::utils::resolve_link;

/// An on'yomi reading with its description, sent as a `[reading, description]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OnyomiWire", into = "(String, String)")]
pub struct Onyomi {
    pub reading: String,
    pub description: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OnyomiWire {
    Pair(String, String),
    Bare(String),
}

impl From<OnyomiWire> for Onyomi {
    fn from(wire: OnyomiWire) -> Self {
        match wire {
            OnyomiWire::Pair(reading, description) => Onyomi { reading, description },
            OnyomiWire::Bare(reading) => Onyomi { reading, description: String::new() },
        }
    }
}

impl From<Onyomi> for (String, String) {
    fn from(onyomi: Onyomi) -> Self {
        (onyomi.reading, onyomi.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KunyomiEntry {
    pub reading: String,
    #[serde(default, alias = "description")]
    pub meaning: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub usefulness: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub kanji: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub image_src: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jukugo {
    pub japanese: String,
    pub reading: String,
    pub english: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub usefulness: u8,
    #[serde(default)]
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookalike {
    pub kanji: String,
    #[serde(default)]
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub japanese: String,
    pub english: String,
}

/// One row of the master kanji list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiListing {
    pub index: u32,
    pub kanji: String,
    pub meaning: String,
    #[serde(default)]
    pub is_radical: bool,
    pub link: String,
    #[serde(default)]
    pub has_image: bool,
    #[serde(default)]
    pub practice: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanjiDetail {
    pub index: u32,
    pub kanji: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub is_radical: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub onyomi: Vec<Onyomi>,
    #[serde(default)]
    pub kunyomi: Vec<KunyomiEntry>,
    #[serde(default)]
    pub jukugo: Vec<Jukugo>,
    #[serde(default)]
    pub mnemonic: Option<String>,
    #[serde(default)]
    pub usefulness: u8,
    #[serde(default)]
    pub used_in: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<SynonymEntry>,
    #[serde(default)]
    pub prev_link: Option<String>,
    #[serde(default)]
    pub next_link: Option<String>,
    #[serde(default)]
    pub breakdown: String,
    #[serde(default)]
    pub lookalikes: Vec<Lookalike>,
    #[serde(default)]
    pub practice: bool,
}

impl KanjiDetail {
    pub fn listing(&self) -> KanjiListing {
        KanjiListing {
            index: self.index,
            kanji: self.kanji.clone(),
            meaning: self.meaning.clone(),
            is_radical: self.is_radical,
            link: resolve_link(&self.link),
            has_image: self.kanji.starts_with('/'),
            practice: self.practice,
        }
    }

    pub fn glyph(&self) -> KanjiGlyph<'_> {
        glyph_of(&self.kanji)
    }
}

fn glyph_of(kanji: &str) -> KanjiGlyph<'_> {
    if kanji.starts_with('/') {
        KanjiGlyph::Image(resolve_link(kanji))
    } else {
        KanjiGlyph::Text(kanji)
    }
}

/// How the kanji of an entry should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KanjiGlyph<'a> {
    Text(&'a str),
    /// Some radicals have no code point and are served as images by the source site.
    Image(String),
}

/// A quiz entry as handed out by the practice pool.
///
/// Both wire variants of the meaning field (`meaning: String` and
/// `meanings: [String]`) collapse into `accepted_meanings`, so validation
/// only ever sees one shape. `None` means the entry has nothing to ask for.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PracticeItemWire")]
pub struct PracticeItem {
    pub kanji: String,
    pub accepted_meanings: Option<Vec<String>>,
    pub onyomi: Vec<Onyomi>,
    pub kunyomi: Vec<KunyomiEntry>,
    pub mnemonic: Option<String>,
    pub breakdown: Option<String>,
    pub lookalikes: Vec<Lookalike>,
    pub jukugo: Vec<Jukugo>,
}

#[derive(Deserialize)]
struct PracticeItemWire {
    kanji: String,
    #[serde(default)]
    meaning: Option<String>,
    #[serde(default)]
    meanings: Option<Vec<String>>,
    #[serde(default)]
    onyomi: Vec<Onyomi>,
    #[serde(default)]
    kunyomi: Vec<KunyomiEntry>,
    #[serde(default)]
    mnemonic: Option<String>,
    #[serde(default)]
    breakdown: Option<String>,
    #[serde(default)]
    lookalikes: Vec<Lookalike>,
    #[serde(default)]
    jukugo: Vec<Jukugo>,
}

impl From<PracticeItemWire> for PracticeItem {
    fn from(wire: PracticeItemWire) -> Self {
        let candidates = wire.meaning.into_iter().chain(wire.meanings.into_iter().flatten());

        PracticeItem {
            kanji: wire.kanji,
            accepted_meanings: collect_meanings(candidates),
            onyomi: visible_onyomi(wire.onyomi),
            kunyomi: wire.kunyomi,
            mnemonic: non_blank(wire.mnemonic),
            breakdown: non_blank(wire.breakdown),
            lookalikes: wire.lookalikes,
            jukugo: wire.jukugo,
        }
    }
}

impl From<KanjiDetail> for PracticeItem {
    fn from(detail: KanjiDetail) -> Self {
        PracticeItem {
            kanji: detail.kanji,
            accepted_meanings: collect_meanings(std::iter::once(detail.meaning)),
            onyomi: visible_onyomi(detail.onyomi),
            kunyomi: detail.kunyomi,
            mnemonic: non_blank(detail.mnemonic),
            breakdown: non_blank(Some(detail.breakdown)),
            lookalikes: detail.lookalikes,
            jukugo: detail.jukugo,
        }
    }
}

impl PracticeItem {
    pub fn glyph(&self) -> KanjiGlyph<'_> {
        glyph_of(&self.kanji)
    }

    pub fn has_meaning(&self) -> bool {
        self.accepted_meanings.is_some()
    }
}

fn collect_meanings(candidates: impl Iterator<Item = String>) -> Option<Vec<String>> {
    let mut meanings: Vec<String> = Vec::new();
    for meaning in candidates {
        if meaning.trim().is_empty() || meanings.contains(&meaning) {
            continue;
        }
        meanings.push(meaning);
    }

    if meanings.is_empty() {
        None
    } else {
        Some(meanings)
    }
}

// Blank readings are scraping leftovers and must never be asked for.
fn visible_onyomi(onyomi: Vec<Onyomi>) -> Vec<Onyomi> {
    onyomi.into_iter().filter(|o| !o.reading.trim().is_empty()).collect()
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_single_meaning_schema() {
        let item: PracticeItem = serde_json::from_value(json!({
            "kanji": "犬",
            "meaning": "dog",
            "onyomi": [["ケン", "as in 狂犬"]],
            "kunyomi": [{ "reading": "いぬ", "description": "dog" }],
            "mnemonic": null,
            "breakdown": "",
            "lookalikes": [{ "kanji": "大", "meaning": "big" }],
            "jukugo": [{ "japanese": "子犬", "reading": "こいぬ", "english": "puppy" }]
        }))
        .unwrap();

        assert_eq!(item.accepted_meanings, Some(vec!["dog".to_string()]));
        assert_eq!(item.onyomi[0].reading, "ケン");
        assert_eq!(item.kunyomi[0].meaning, "dog");
        assert!(item.mnemonic.is_none());
        assert!(item.breakdown.is_none());
        assert_eq!(item.jukugo[0].usefulness, 0);
    }

    #[test]
    fn test_meaning_set_schema() {
        let item: PracticeItem = serde_json::from_value(json!({
            "kanji": "犬",
            "meanings": ["dog", "canine", "dog", "  "]
        }))
        .unwrap();

        assert_eq!(item.accepted_meanings, Some(vec!["dog".to_string(), "canine".to_string()]));
        assert!(item.onyomi.is_empty());
        assert!(item.kunyomi.is_empty());
    }

    #[test]
    fn test_missing_meaning_is_none() {
        let item: PracticeItem = serde_json::from_value(json!({ "kanji": "丶" })).unwrap();
        assert!(!item.has_meaning());

        let blank: PracticeItem =
            serde_json::from_value(json!({ "kanji": "丶", "meaning": "" })).unwrap();
        assert!(!blank.has_meaning());
    }

    #[test]
    fn test_blank_onyomi_removed() {
        let item: PracticeItem = serde_json::from_value(json!({
            "kanji": "込",
            "meaning": "crowded",
            "onyomi": [["  ", "no on'yomi"], "コミ"]
        }))
        .unwrap();

        assert_eq!(item.onyomi.len(), 1);
        assert_eq!(item.onyomi[0].reading, "コミ");
        assert_eq!(item.onyomi[0].description, "");
    }

    #[test]
    fn test_glyph_resolution() {
        let text: PracticeItem = serde_json::from_value(json!({ "kanji": "山" })).unwrap();
        assert_eq!(text.glyph(), KanjiGlyph::Text("山"));

        let image: PracticeItem =
            serde_json::from_value(json!({ "kanji": "/assets/radicals/hook.png" })).unwrap();
        assert_eq!(
            image.glyph(),
            KanjiGlyph::Image("https://www.kanjidamage.com/assets/radicals/hook.png".to_string())
        );
    }

    #[test]
    fn test_detail_into_practice_item() {
        let detail: KanjiDetail = serde_json::from_value(json!({
            "index": 12,
            "kanji": "口",
            "link": "/kanji/12-mouth-口",
            "meaning": "mouth",
            "onyomi": [["コウ", "as in 人口"], ["", ""]],
            "breakdown": "   ",
            "practice": true
        }))
        .unwrap();

        let listing = detail.listing();
        assert_eq!(listing.link, "https://www.kanjidamage.com/kanji/12-mouth-口");
        assert!(!listing.has_image);

        let item = PracticeItem::from(detail);
        assert_eq!(item.accepted_meanings, Some(vec!["mouth".to_string()]));
        assert_eq!(item.onyomi.len(), 1);
        assert!(item.breakdown.is_none());
    }

    #[test]
    fn test_detail_without_meaning() {
        let detail: KanjiDetail = serde_json::from_value(json!({
            "index": 3,
            "kanji": "/assets/radicals/hook.png",
            "link": "/kanji/3-hook",
            "is_radical": true
        }))
        .unwrap();

        assert_eq!(detail.meaning, "");
        assert_eq!(
            detail.glyph(),
            KanjiGlyph::Image("https://www.kanjidamage.com/assets/radicals/hook.png".to_string())
        );

        let listing = detail.listing();
        assert!(listing.is_radical);
        assert!(listing.has_image);

        assert!(!PracticeItem::from(detail).has_meaning());
    }

    #[test]
    fn test_onyomi_serializes_as_pair() {
        let onyomi = Onyomi { reading: "ケン".to_string(), description: "dog".to_string() };
        assert_eq!(serde_json::to_value(&onyomi).unwrap(), json!(["ケン", "dog"]));
    }
}
