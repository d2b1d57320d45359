pub mod errors;
pub mod models;
pub mod tasks;
pub mod utils;

pub use errors::KanjiError;
pub use models::{
    KanjiDetail,
    KanjiGlyph,
    KanjiListing,
    Lookalike,
    Onyomi,
    PracticeItem,
};
