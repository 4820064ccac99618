//! Vocabulary sources
//!
//! The solver core does not care where its word lists come from; this
//! module supplies the two sources the CLI knows: generated zero-padded
//! digit sequences and word lists loaded from a file.

use std::fs;
use std::io;
use std::path::Path;

/// All zero-padded digit strings of the given width, in numeric order
///
/// # Examples
/// ```
/// use entroguess::vocab::digit_vocabulary;
///
/// let two = digit_vocabulary(2);
/// assert_eq!(two.len(), 100);
/// assert_eq!(two.first().unwrap(), "00");
/// assert_eq!(two.last().unwrap(), "99");
/// ```
#[must_use]
pub fn digit_vocabulary(num_digits: u32) -> Vec<String> {
    let width = num_digits as usize;
    (0..10u64.pow(num_digits))
        .map(|value| format!("{value:0width$}"))
        .collect()
}

/// Load a vocabulary from a file, one word per line
///
/// Blank lines are skipped and words are lowercased. All words must be
/// ASCII and share one length; the solver's accounting assumes both.
///
/// # Errors
/// Returns an I/O error if the file cannot be read, and `InvalidData` if
/// the list is empty, contains non-ASCII symbols, or mixes word lengths.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect();

    let Some(first) = words.first() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "word list is empty",
        ));
    };

    let expected = first.len();
    for word in &words {
        if !word.is_ascii() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("word {word} contains non-ASCII symbols"),
            ));
        }
        if word.len() != expected {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("word {word} is not {expected} symbols long"),
            ));
        }
    }

    Ok(words)
}
