pub mod custom_list;
pub mod vocabulary;
pub mod word_stat;

pub use custom_list::CustomList;
pub use vocabulary::{Derivative, EnrichedVocabulary, Section, Vocabulary, VocabularyData};
pub use word_stat::{WordStat, WordStats};
