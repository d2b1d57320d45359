pub mod backend;
pub mod core;
pub mod gui;
pub mod persistence;
pub mod practice;

pub use crate::core::{
    KanjiError,
    PracticeItem,
};
