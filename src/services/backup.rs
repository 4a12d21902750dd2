//! Portable export/import of study progress.
//!
//! ## Export Format
//! ```text
//! vocab-progress-{date}.json
//! {
//!   "wordStats":    { "<word>": WordStat, ... },
//!   "customLists":  [ { "name": "...", "words": [...] }, ... ],
//!   "srsIntervals": { "1": 1, "2": 3, ... }
//! }
//! ```
//!
//! Import is all-or-nothing: the document is fully parsed and validated
//! before anything in the live state is touched.

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{CustomList, WordStats};
use crate::progress::StudyProgress;
use crate::srs::{IntervalError, IntervalTable};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid file: not valid JSON ({0})")]
    Json(#[from] serde_json::Error),
    #[error("Invalid file: expected a JSON object at the top level")]
    NotAnObject,
    #[error("Invalid file: 'wordStats' must be an object")]
    WordStatsNotAMap,
    #[error("Invalid file: 'customLists' must be an array")]
    CustomListsNotASequence,
    #[error("Invalid file: duplicate list name '{0}'")]
    DuplicateList(String),
    #[error("Invalid file: bad interval table ({0})")]
    Intervals(#[from] IntervalError),
    #[error("Invalid file: '{word}' is at level {level}, above the maximum level {max_level}")]
    LevelAboveMax { word: String, level: u32, max_level: u32 },
}

impl ImportError {
    /// Short message for the user, without parser internals
    pub fn user_message(&self) -> &'static str {
        match self {
            ImportError::Json(_) | ImportError::NotAnObject => "The selected file is not a valid progress export",
            ImportError::WordStatsNotAMap | ImportError::CustomListsNotASequence => {
                "The selected file has an unexpected structure"
            }
            ImportError::DuplicateList(_) => "The selected file contains duplicate list names",
            ImportError::Intervals(_) => "The selected file contains an invalid interval table",
            ImportError::LevelAboveMax { .. } => "The selected file contains levels beyond the interval table",
        }
    }
}

/// Validated import contents
#[derive(Debug)]
pub struct ImportedProgress {
    pub word_stats: WordStats,
    pub custom_lists: Vec<CustomList>,
    /// None when the file carried no interval table
    pub srs_intervals: Option<IntervalTable>,
}

/// Summary of an applied import
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub words_imported: usize,
    pub lists_imported: usize,
    pub intervals_replaced: bool,
}

/// Serialize the full persisted shape
pub fn export_progress(progress: &StudyProgress) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(progress)
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("vocab-progress-{}.json", today.format("%Y-%m-%d"))
}

/// Parse and validate an export document without touching any state.
pub fn parse_import(json: &str) -> Result<ImportedProgress, ImportError> {
    let mut root: Value = serde_json::from_str(json)?;
    let obj = root.as_object_mut().ok_or(ImportError::NotAnObject)?;

    let word_stats = match obj.remove("wordStats") {
        Some(v @ Value::Object(_)) => serde_json::from_value::<WordStats>(v)?,
        _ => return Err(ImportError::WordStatsNotAMap),
    };

    let custom_lists = match obj.remove("customLists") {
        Some(v @ Value::Array(_)) => serde_json::from_value::<Vec<CustomList>>(v)?,
        _ => return Err(ImportError::CustomListsNotASequence),
    };

    let mut seen = std::collections::HashSet::new();
    for list in &custom_lists {
        if !seen.insert(list.name.as_str()) {
            return Err(ImportError::DuplicateList(list.name.clone()));
        }
    }

    let srs_intervals = match obj.remove("srsIntervals") {
        None | Some(Value::Null) => None,
        Some(v) => {
            let table: IntervalTable = serde_json::from_value(v)?;
            table.validate()?;
            Some(table)
        }
    };

    Ok(ImportedProgress {
        word_stats,
        custom_lists,
        srs_intervals,
    })
}

/// Every imported level must be reachable under the table that will be active
fn check_levels(word_stats: &WordStats, intervals: &IntervalTable) -> Result<(), ImportError> {
    let max_level = intervals.max_level();
    match word_stats.iter().find(|(_, stat)| stat.srs_level > max_level) {
        Some((word, stat)) => Err(ImportError::LevelAboveMax {
            word: word.clone(),
            level: stat.srs_level,
            max_level,
        }),
        None => Ok(()),
    }
}

/// Validate `json` and, only if it is fully valid, replace `progress` with it.
/// Without an interval table in the file the current table is kept.
pub fn import_progress(progress: &mut StudyProgress, json: &str) -> Result<ImportResult, ImportError> {
    let imported = parse_import(json)?;

    let result = ImportResult {
        words_imported: imported.word_stats.len(),
        lists_imported: imported.custom_lists.len(),
        intervals_replaced: imported.srs_intervals.is_some(),
    };

    let srs_intervals = imported
        .srs_intervals
        .unwrap_or_else(|| progress.srs_intervals.clone());
    check_levels(&imported.word_stats, &srs_intervals)?;

    progress.replace_with(StudyProgress {
        word_stats: imported.word_stats,
        custom_lists: imported.custom_lists,
        srs_intervals,
    });

    tracing::info!(
        words = result.words_imported,
        lists = result.lists_imported,
        intervals_replaced = result.intervals_replaced,
        "Imported study progress"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 3).unwrap()
    }

    fn sample_progress() -> StudyProgress {
        let mut progress = StudyProgress::new();
        progress.record_answer("abate", true, today());
        progress.record_answer("dearth", false, today());
        progress.toggle_favorite("zeal");
        progress.create_list("Week 1").unwrap();
        progress.toggle_word_in_list("Week 1", "abate").unwrap();
        progress
            .set_intervals(IntervalTable::from_pairs([(1, 2), (2, 6), (3, 12)]).unwrap())
            .unwrap();
        progress
    }

    #[test]
    fn test_export_then_import_restores_state() {
        let original = sample_progress();
        let json = export_progress(&original).unwrap();

        let mut restored = StudyProgress::new();
        let result = import_progress(&mut restored, &json).unwrap();

        assert_eq!(restored, original);
        assert_eq!(
            result,
            ImportResult {
                words_imported: 3,
                lists_imported: 1,
                intervals_replaced: true,
            }
        );
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename(today()), "vocab-progress-2024-11-03.json");
    }

    #[test]
    fn test_import_without_intervals_keeps_current_table() {
        let mut progress = sample_progress();
        let table = progress.srs_intervals.clone();
        let json = r#"{"wordStats": {"new": {"correctCount": 2, "srsLevel": 2}}, "customLists": []}"#;

        let result = import_progress(&mut progress, json).unwrap();
        assert!(!result.intervals_replaced);
        assert_eq!(progress.srs_intervals, table);
        assert_eq!(progress.word_stats.len(), 1);
        assert_eq!(progress.stat("new").srs_level, 2);
        assert!(progress.custom_lists.is_empty());
    }

    #[test]
    fn test_import_rejects_non_map_word_stats() {
        let mut progress = sample_progress();
        let before = progress.clone();
        let err = import_progress(&mut progress, r#"{"wordStats": [], "customLists": []}"#).unwrap_err();
        assert!(matches!(err, ImportError::WordStatsNotAMap));
        assert_eq!(progress, before);
    }

    #[test]
    fn test_import_rejects_non_sequence_lists() {
        let mut progress = sample_progress();
        let before = progress.clone();
        let err = import_progress(&mut progress, r#"{"wordStats": {}, "customLists": {}}"#).unwrap_err();
        assert!(matches!(err, ImportError::CustomListsNotASequence));
        assert_eq!(progress, before);
    }

    #[test]
    fn test_import_rejects_missing_sections() {
        let mut progress = StudyProgress::new();
        assert!(matches!(
            import_progress(&mut progress, r#"{"customLists": []}"#),
            Err(ImportError::WordStatsNotAMap)
        ));
        assert!(matches!(
            import_progress(&mut progress, r#"{"wordStats": {}}"#),
            Err(ImportError::CustomListsNotASequence)
        ));
        assert!(matches!(
            import_progress(&mut progress, "[1, 2]"),
            Err(ImportError::NotAnObject)
        ));
        assert!(matches!(
            import_progress(&mut progress, "not json"),
            Err(ImportError::Json(_))
        ));
    }

    #[test]
    fn test_import_rejects_level_above_current_table() {
        let mut progress = StudyProgress::new();
        progress.toggle_favorite("abate");
        let before = progress.clone();
        let json = r#"{"wordStats": {"zeal": {"srsLevel": 50, "correctCount": 50}}, "customLists": []}"#;

        let err = import_progress(&mut progress, json).unwrap_err();
        assert!(matches!(
            err,
            ImportError::LevelAboveMax { ref word, level: 50, max_level: 8 } if word == "zeal"
        ));
        assert_eq!(progress, before);
    }

    #[test]
    fn test_import_checks_levels_against_imported_table() {
        let mut progress = StudyProgress::new();
        let json = r#"{
            "wordStats": {"zeal": {"srsLevel": 3}},
            "customLists": [],
            "srsIntervals": {"1": 1, "2": 2}
        }"#;
        assert!(matches!(
            import_progress(&mut progress, json),
            Err(ImportError::LevelAboveMax { level: 3, max_level: 2, .. })
        ));
        assert_eq!(progress, StudyProgress::new());

        // a larger imported table makes the same level valid
        let json = r#"{
            "wordStats": {"zeal": {"srsLevel": 10}},
            "customLists": [],
            "srsIntervals": {"1": 1, "2": 2, "3": 3, "4": 4, "5": 5, "6": 6, "7": 7, "8": 8, "9": 9, "10": 10}
        }"#;
        import_progress(&mut progress, json).unwrap();
        assert_eq!(progress.stat("zeal").srs_level, 10);
    }

    #[test]
    fn test_import_rejects_corrupt_entries_wholesale() {
        let mut progress = sample_progress();
        let before = progress.clone();
        let json = r#"{
            "wordStats": {"ok": {"correctCount": 1}, "bad": {"correctCount": -4}},
            "customLists": []
        }"#;
        assert!(matches!(import_progress(&mut progress, json), Err(ImportError::Json(_))));
        assert_eq!(progress, before);
    }

    #[test]
    fn test_import_rejects_invalid_intervals() {
        let mut progress = sample_progress();
        let before = progress.clone();
        let json = r#"{"wordStats": {}, "customLists": [], "srsIntervals": {"1": 0}}"#;
        assert!(matches!(
            import_progress(&mut progress, json),
            Err(ImportError::Intervals(IntervalError::ZeroDays(1)))
        ));
        assert_eq!(progress, before);
    }

    #[test]
    fn test_import_rejects_duplicate_list_names() {
        let mut progress = StudyProgress::new();
        let json = r#"{"wordStats": {}, "customLists": [{"name": "A", "words": []}, {"name": "A", "words": []}]}"#;
        assert!(matches!(
            import_progress(&mut progress, json),
            Err(ImportError::DuplicateList(name)) if name == "A"
        ));
    }

    #[test]
    fn test_user_messages_hide_details() {
        let err = parse_import("{").unwrap_err();
        assert_eq!(err.user_message(), "The selected file is not a valid progress export");
    }
}
