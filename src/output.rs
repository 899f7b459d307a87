//! Writing session files to disk.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

/// The directory, relative to the working directory, where sessions are
/// written.
pub const SESSIONS_DIR: &str = "igv-sessions";

/// The default file name for a multi-sample session.
pub const DEFAULT_COHORT_FILE_NAME: &str = "multi_sample_session.xml";

/// The file name for a single-individual session.
///
/// # Examples
///
/// ```
/// use igvsession::output::individual_file_name;
///
/// assert_eq!(
///     individual_file_name("200081", "chr14:100826000-100827000"),
///     "200081.chr14:100826000-100827000.xml"
/// );
/// ```
pub fn individual_file_name(individual: &str, locus: &str) -> String {
    format!("{individual}.{locus}.xml")
}

/// Writes a session document into `directory`, creating the directory (and
/// any missing parents) first.
///
/// Any existing file with the same name is overwritten. The path of the
/// written file is returned.
pub fn write(directory: &Path, file_name: &str, contents: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(directory)?;

    let path = directory.join(file_name);
    fs::write(&path, contents)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn it_creates_the_directory_and_writes_the_file() -> Result<(), Box<dyn std::error::Error>> {
        let scratch = TempDir::new("igvsession")?;
        let directory = scratch.path().join(SESSIONS_DIR);
        assert!(!directory.exists());

        let path = write(&directory, "a.xml", "<Session/>")?;

        assert_eq!(path, directory.join("a.xml"));
        assert_eq!(fs::read_to_string(&path)?, "<Session/>");

        Ok(())
    }

    #[test]
    fn it_overwrites_existing_files() -> Result<(), Box<dyn std::error::Error>> {
        let scratch = TempDir::new("igvsession")?;

        write(scratch.path(), DEFAULT_COHORT_FILE_NAME, "first")?;
        let path = write(scratch.path(), DEFAULT_COHORT_FILE_NAME, "second")?;

        assert_eq!(fs::read_to_string(path)?, "second");

        Ok(())
    }

    #[test]
    fn it_fails_when_the_directory_is_a_file() -> Result<(), Box<dyn std::error::Error>> {
        let scratch = TempDir::new("igvsession")?;
        let blocker = scratch.path().join("blocker");
        fs::write(&blocker, "")?;

        assert!(write(&blocker, "a.xml", "").is_err());

        Ok(())
    }
}
