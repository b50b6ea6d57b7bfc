pub mod narration;

pub use narration::{NarrationAnalyzer, NarrationReport};
