//! Language expansion: one variant per configured language.
//!
//! Given a single-language item and the configured language list, expansion
//! mutates the item into its "main language" copy and appends one duplicate
//! per remaining language. Duplicates carry a `main_language` back-reference
//! to the language of the originating item.
//!
//! ## Single-pass guarantee
//!
//! Expansion is strictly single-pass per item. Any item whose `multilingual`
//! field is already set is skipped — whether it was set by filename
//! detection during scan, by a previous expansion pass, or by pagination.
//! Running [`expand`] twice over a collection therefore never changes its
//! size.
//!
//! The pass iterates over a fixed snapshot of the pre-existing items
//! (`0..len` captured up front), so duplicates appended mid-pass are never
//! revisited.
//!
//! Posts and pages are expanded in separate passes; the pipeline runs
//! posts first.

use crate::types::ContentItem;

/// Record of one item's expansion, consumed by the CLI output stage.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// Slug of the expanded item
    pub slug: String,
    /// The item's resolved main language
    pub main_language: String,
    /// Languages a duplicate was created for, in configured order
    pub created: Vec<String>,
}

/// Expand every unprocessed item in `items` across `languages`.
///
/// For each item with `multilingual` unset (and not carrying the `"none"`
/// sentinel):
/// - resolve its main language: its own `language`, else the first
///   configured language
/// - mark it processed (`language` set, `multilingual = false`)
/// - append one deep copy per other configured language, in configured
///   order, tagged with that language and `main_language`
///
/// The owning collection grows by `languages.len() - 1` entries per
/// expanded item. Titles and all other metadata are retained on duplicates.
pub fn expand(items: &mut Vec<ContentItem>, languages: &[String]) -> Vec<Expansion> {
    let mut report = Vec::new();

    // Fixed snapshot: duplicates appended below must not be revisited.
    let len = items.len();
    for i in 0..len {
        if items[i].multilingual.is_some() {
            continue;
        }
        if items[i].language_is_none_sentinel() {
            continue;
        }

        let defined_language = items[i]
            .language
            .clone()
            .unwrap_or_else(|| languages[0].clone());
        items[i].language = Some(defined_language.clone());
        items[i].multilingual = Some(false);

        let mut duplicates = Vec::new();
        let mut created = Vec::new();
        for language in languages.iter().filter(|l| **l != defined_language) {
            let mut duplicate = items[i].clone();
            duplicate.language = Some(language.clone());
            duplicate.multilingual = Some(false);
            duplicate.main_language = Some(defined_language.clone());
            duplicates.push(duplicate);
            created.push(language.clone());
        }

        report.push(Expansion {
            slug: items[i].slug.clone(),
            main_language: defined_language,
            created,
        });
        items.append(&mut duplicates);
    }

    report
}
