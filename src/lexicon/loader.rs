//! Dictionary loading
//!
//! Reads newline-delimited word lists from files or any buffered reader.

use super::Lexicon;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LexiconError {
    /// The kind of the underlying I/O failure
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
        }
    }
}

impl Lexicon {
    /// Build a lexicon from a buffered reader, one word per line
    ///
    /// # Errors
    ///
    /// Returns the I/O error if any line cannot be read (including invalid UTF-8).
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::lexicon::Lexicon;
    ///
    /// let text = "cat\n  dog  \n\nemu\n";
    /// let lexicon = Lexicon::from_reader(text.as_bytes()).unwrap();
    /// assert_eq!(lexicon.len(), 3);
    /// assert!(lexicon.contains("DOG"));
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut lexicon = Self::new();
        for line in reader.lines() {
            lexicon.insert(&line?);
        }
        Ok(lexicon)
    }
}

/// Load a lexicon from a word list file
///
/// # Errors
///
/// Returns `LexiconError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use boggle_solver::lexicon::load_from_file;
///
/// let lexicon = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, LexiconError> {
    let path = path.as_ref();
    let wrap = |source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(wrap)?;
    let lexicon = Lexicon::from_reader(BufReader::new(file)).map_err(wrap)?;

    tracing::info!(
        path = %path.display(),
        words = lexicon.len(),
        nodes = lexicon.node_count(),
        "loaded dictionary"
    );

    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "boggle_solver_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reader_trims_and_uppercases() {
        let lexicon = Lexicon::from_reader("  Apple\t\nbanana\r\n\n".as_bytes()).unwrap();

        assert_eq!(lexicon.words(), ["APPLE", "BANANA"]);
    }

    #[test]
    fn reader_surfaces_invalid_utf8() {
        let bytes: &[u8] = &[b'o', b'k', b'\n', 0xff, 0xfe, b'\n'];
        let err = Lexicon::from_reader(bytes).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_file("words", "cat\ncats\nat\n");
        let lexicon = load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("cats"));
    }

    #[test]
    fn missing_file_reports_not_found() {
        let path = std::env::temp_dir().join("boggle_solver_definitely_missing.txt");
        let err = load_from_file(&path).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("boggle_solver_definitely_missing"));
    }
}
