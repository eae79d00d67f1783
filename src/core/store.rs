use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::watchlist::{Item, Watchlist};
use crate::utils::error::{Result, WlError};

impl Watchlist {
    /// Writes every item, in order, as headerless two-column CSV
    /// records. The data goes to a sibling temp file first and is
    /// renamed over the target, so readers never see a half-written
    /// list.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let tmp_path = tmp_sibling(path);

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp_path)?;

        for item in self.iter() {
            writer.serialize(item)?;
        }
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp_path, path)?;
        tracing::debug!("Wrote {} item(s) to {}", self.len(), path.display());
        Ok(())
    }

    /// Reads a headerless two-column CSV file into a new watchlist,
    /// preserving file order. A missing file is reported as the
    /// distinct `FileNotFoundError` so callers can start empty; every
    /// other error propagates.
    pub fn from_file(path: &Path) -> Result<Watchlist> {
        let file = fs::File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                WlError::FileNotFoundError {
                    path: path.to_path_buf(),
                }
            } else {
                WlError::IoError(e)
            }
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(file);

        let mut items = Vec::new();
        for record in reader.deserialize::<Item>() {
            items.push(record?);
        }

        tracing::debug!("Loaded {} item(s) from {}", items.len(), path.display());
        Ok(Watchlist::new(items))
    }
}

fn tmp_sibling(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::status::Status;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_the_distinct_not_found_variant() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-wl");

        let err = Watchlist::from_file(&path).unwrap_err();
        assert!(matches!(err, WlError::FileNotFoundError { .. }));
    }

    #[test]
    fn test_file_round_trip_preserves_order_names_and_statuses() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wl");

        let mut wl = Watchlist::default();
        let _ = wl.add("Foo".to_string(), Status::Watching);
        let _ = wl.add("Bar".to_string(), Status::Watched);
        let _ = wl.add("Baz".to_string(), Status::OnHold);

        wl.to_file(&path).unwrap();
        let loaded = Watchlist::from_file(&path).unwrap();

        let before: Vec<_> = wl.iter().cloned().collect();
        let after: Vec<_> = loaded.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_round_trip_quotes_awkward_names() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wl");

        let mut wl = Watchlist::default();
        let _ = wl.add("Comma, The Movie".to_string(), Status::Unwatched);
        let _ = wl.add("He said \"watch it\"".to_string(), Status::Watching);
        let _ = wl.add("Two\nLines".to_string(), Status::Dropped);

        wl.to_file(&path).unwrap();
        let loaded = Watchlist::from_file(&path).unwrap();

        let names: Vec<_> = loaded.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Comma, The Movie", "He said \"watch it\"", "Two\nLines"]);
        assert_eq!(loaded.iter().last().unwrap().status, Status::Dropped);
    }

    #[test]
    fn test_save_replaces_previous_contents_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wl");

        let mut wl = Watchlist::default();
        let _ = wl.add("Foo".to_string(), Status::Watching);
        let _ = wl.add("Bar".to_string(), Status::Watched);
        wl.to_file(&path).unwrap();

        wl.remove("Foo").unwrap();
        wl.to_file(&path).unwrap();

        let loaded = Watchlist::from_file(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.iter().next().unwrap().name, "Bar");
    }

    #[test]
    fn test_on_hold_is_stored_with_a_space() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wl");

        let mut wl = Watchlist::default();
        let _ = wl.add("Foo".to_string(), Status::OnHold);
        wl.to_file(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim(), "Foo,on hold");
    }
}
