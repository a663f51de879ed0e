use std::{fs, path::Path};

use crossfill_core::{SlotCatalog, Structure, Vocabulary};

use crate::AppError;

/// Reads a structure file and a words file and builds their slot catalog.
///
/// The structure file marks open cells with `_` and anything else as blocked,
/// one row per line. The words file holds one word per line; blank lines are
/// skipped and words are uppercased.
///
/// # Errors
///
/// Returns [`AppError::Read`] if either file cannot be read, and
/// [`AppError::Structure`] or [`AppError::Vocabulary`] if its contents are
/// malformed.
pub fn load_catalog(
    structure_path: impl AsRef<Path>,
    words_path: impl AsRef<Path>,
) -> Result<SlotCatalog, AppError> {
    let structure = read(structure_path.as_ref())?;
    let words = read(words_path.as_ref())?;
    parse_catalog(&structure, &words)
}

/// Builds a slot catalog from the contents of a structure file and a words file.
///
/// # Errors
///
/// Returns [`AppError::Structure`] or [`AppError::Vocabulary`] if either input
/// is malformed.
pub fn parse_catalog(structure: &str, words: &str) -> Result<SlotCatalog, AppError> {
    let structure: Structure = structure.parse()?;
    let vocabulary: Vocabulary = words.parse()?;
    log::debug!(
        "loaded a {}x{} structure with {} open cells",
        structure.width(),
        structure.height(),
        structure.open_count()
    );
    log::debug!(
        "loaded {} words, count by length: {:?}",
        vocabulary.len(),
        vocabulary.lengths()
    );
    let catalog = SlotCatalog::new(structure, vocabulary);
    for id in catalog.unfillable_slots() {
        log::warn!("no word has the length of slot {}", catalog.slot(id));
    }
    Ok(catalog)
}

fn read(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let catalog =
            parse_catalog("#___#\n#_##_\n#_##_\n#_##_\n#____\n", "one\ntwo\n\nthree\n").unwrap();
        assert_eq!(catalog.structure().width(), 5);
        assert_eq!(catalog.structure().height(), 5);
        assert_eq!(catalog.vocabulary().len(), 3);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_catalog("", "cat"), Err(AppError::Structure(_))));
        assert!(matches!(parse_catalog("___", "cat\nc4t"), Err(AppError::Vocabulary(_))));
    }

    #[test]
    fn test_missing_file() {
        let missing = Path::new("this/file/does/not/exist.txt");
        let err = load_catalog(missing, missing).unwrap_err();
        assert!(matches!(&err, AppError::Read { path, .. } if path == missing));
        assert!(err.to_string().starts_with("failed to read "));
    }
}
