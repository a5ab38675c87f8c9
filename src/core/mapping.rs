use crate::domain::model::MappingEntry;
use crate::domain::ports::MappingSink;
use crate::utils::error::Result;
use chrono::Local;
use std::fs::File;
use std::path::{Path, PathBuf};

pub const MAPPING_HEADER: [&str; 3] = ["customer id", "old email", "new email"];

/// Writes the mapping record for one normalization run. The file is created
/// up front and every entry is flushed as soon as it is recorded, so an
/// aborted run still leaves a usable record of the changes applied so far.
pub struct MappingWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
}

impl MappingWriter {
    /// Creates `email_mapping_<timestamp>.csv` in `dir` and writes the
    /// header row. Filenames collide only at sub-second invocation rates.
    pub fn create(dir: &Path) -> Result<Self> {
        let now = Local::now().format("%m-%d-%Y_%H-%M-%S");
        let path = dir.join(format!("email_mapping_{}.csv", now));

        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(MAPPING_HEADER)?;
        writer.flush()?;

        Ok(Self { writer, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MappingSink for MappingWriter {
    fn record(&mut self, entry: MappingEntry) -> Result<()> {
        self.writer
            .write_record([&entry.customer_id, &entry.old_email, &entry.new_email])?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Reads a previously saved mapping record, in file order, dropping rows
/// equal to the header. No shape validation beyond that: a foreign file
/// produces a garbage mapping, as documented.
pub fn import_mapping(path: &Path) -> Result<Vec<MappingEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut mapping = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.get(0) == Some(MAPPING_HEADER[0]) {
            continue;
        }
        mapping.push(MappingEntry::new(
            row.get(0).unwrap_or_default(),
            row.get(1).unwrap_or_default(),
            row.get(2).unwrap_or_default(),
        ));
    }
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_entries() -> Vec<MappingEntry> {
        vec![
            MappingEntry::new("cus_1", "Foo@Bar.com", "foo@bar.com"),
            MappingEntry::new("cus_2", "bar@baz.com", "bar@baz.com"),
            MappingEntry::new("cus_3", "QUX@example.com", "qux@example.com"),
        ]
    }

    #[test]
    fn test_mapping_round_trip_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let entries = sample_entries();

        let path = {
            let mut writer = MappingWriter::create(temp_dir.path()).unwrap();
            for entry in &entries {
                writer.record(entry.clone()).unwrap();
            }
            writer.path().to_path_buf()
        };

        let imported = import_mapping(&path).unwrap();
        assert_eq!(imported, entries);
    }

    #[test]
    fn test_filename_is_timestamped() {
        let temp_dir = TempDir::new().unwrap();
        let writer = MappingWriter::create(temp_dir.path()).unwrap();

        let name = writer.path().file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("email_mapping_"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_header_row_is_dropped_on_import() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mapping.csv");
        std::fs::write(
            &path,
            "customer id,old email,new email\n\
             cus_1,Foo@Bar.com,foo@bar.com\n\
             customer id,old email,new email\n\
             cus_2,bar@baz.com,bar@baz.com\n",
        )
        .unwrap();

        let imported = import_mapping(&path).unwrap();
        assert_eq!(
            imported,
            vec![
                MappingEntry::new("cus_1", "Foo@Bar.com", "foo@bar.com"),
                MappingEntry::new("cus_2", "bar@baz.com", "bar@baz.com"),
            ]
        );
    }

    #[test]
    fn test_file_is_readable_before_writer_is_dropped() {
        // mid-run crash recovery relies on entries being flushed eagerly
        let temp_dir = TempDir::new().unwrap();
        let mut writer = MappingWriter::create(temp_dir.path()).unwrap();
        writer
            .record(MappingEntry::new("cus_1", "Foo@Bar.com", "foo@bar.com"))
            .unwrap();

        let imported = import_mapping(writer.path()).unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].customer_id, "cus_1");
    }

    #[test]
    fn test_emails_with_commas_survive_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let entry = MappingEntry::new("cus_1", "\"odd,addr\"@Example.com", "\"odd,addr\"@example.com");

        let mut writer = MappingWriter::create(temp_dir.path()).unwrap();
        writer.record(entry.clone()).unwrap();
        let path = writer.path().to_path_buf();
        drop(writer);

        let imported = import_mapping(&path).unwrap();
        assert_eq!(imported, vec![entry]);
    }
}
