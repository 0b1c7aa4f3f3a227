use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// One purchase recorded in the transaction log file
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionRow {
    #[serde(rename = "Item Name")]
    pub item_name: String,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Cost")]
    pub cost: u32,
}

/// The purchase history, kept in a headered CSV file
///
/// The file is recreated on construction, appended to on every purchase
/// and rewritten in full when a purchase row is removed. Every operation
/// opens and closes the file; no handle is held in between.
#[derive(Debug)]
pub struct TransactionLog {
    path: PathBuf,
}

const HEADER: [&str; 3] = ["Item Name", "Quantity", "Cost"];

impl TransactionLog {
    /// Creates the log file at `path`, discarding any previous content
    ///
    /// The file is left holding just the header row.
    pub fn create(path: impl Into<PathBuf>) -> csv::Result<Self> {
        let log = Self { path: path.into() };
        log.write_all(&[])?;
        Ok(log)
    }

    /// The path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one purchase row
    pub fn append(&self, item_name: &str, quantity: u32, cost: u32) -> csv::Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(TransactionRow {
            item_name: item_name.to_owned(),
            quantity,
            cost,
        })?;
        writer.flush()?;

        Ok(())
    }

    /// Removes the most recent row recorded for the specified item
    ///
    /// The whole file is read, the last matching row is dropped and the
    /// header plus the remaining rows are written back. Without a matching
    /// row the file is rewritten unchanged.
    pub fn remove_last(&self, item_name: &str) -> csv::Result<()> {
        let mut rows = self.rows()?;
        if let Some(position) = rows.iter().rposition(|row| row.item_name == item_name) {
            rows.remove(position);
        }
        self.write_all(&rows)
    }

    /// All recorded purchase rows, oldest first
    pub fn rows(&self) -> csv::Result<Vec<TransactionRow>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;
        rdr.deserialize().collect()
    }

    fn write_all(&self, rows: &[TransactionRow]) -> csv::Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(HEADER)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log() -> (tempfile::TempDir, TransactionLog) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let log = TransactionLog::create(dir.path().join("transactions.csv"))
            .expect("failed to create log");
        (dir, log)
    }

    fn row(item_name: &str, quantity: u32, cost: u32) -> TransactionRow {
        TransactionRow {
            item_name: item_name.to_owned(),
            quantity,
            cost,
        }
    }

    #[test]
    fn create_leaves_only_the_header() {
        let (_dir, log) = temp_log();
        let content = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(content, "Item Name,Quantity,Cost\n");
        assert!(log.rows().unwrap().is_empty());
    }

    #[test]
    fn create_discards_a_previous_log() {
        let (_dir, log) = temp_log();
        log.append("Echo", 1, 25).unwrap();

        let log = TransactionLog::create(log.path()).unwrap();
        assert!(log.rows().unwrap().is_empty());
    }

    #[test]
    fn append_adds_rows_in_order() {
        let (_dir, log) = temp_log();
        log.append("Echo", 1, 25).unwrap();
        log.append("Kindle", 1, 90).unwrap();

        assert_eq!(log.rows().unwrap(), [row("Echo", 1, 25), row("Kindle", 1, 90)]);
        let content = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(content, "Item Name,Quantity,Cost\nEcho,1,25\nKindle,1,90\n");
    }

    #[test]
    fn remove_last_drops_the_most_recent_matching_row() {
        let (_dir, log) = temp_log();
        log.append("Echo", 1, 25).unwrap();
        log.append("Kindle", 1, 90).unwrap();
        log.append("Echo", 1, 25).unwrap();

        log.remove_last("Echo").unwrap();
        assert_eq!(log.rows().unwrap(), [row("Echo", 1, 25), row("Kindle", 1, 90)]);
    }

    #[test]
    fn remove_last_keeps_the_header_when_the_log_empties() {
        let (_dir, log) = temp_log();
        log.append("Echo", 1, 25).unwrap();

        log.remove_last("Echo").unwrap();
        let content = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(content, "Item Name,Quantity,Cost\n");
    }

    #[test]
    fn remove_last_without_a_match_changes_nothing() {
        let (_dir, log) = temp_log();
        log.append("Echo", 1, 25).unwrap();

        log.remove_last("Kindle").unwrap();
        assert_eq!(log.rows().unwrap(), [row("Echo", 1, 25)]);
    }

    #[test]
    fn append_to_a_missing_file_is_an_error() {
        let (dir, log) = temp_log();
        std::fs::remove_file(log.path()).unwrap();
        drop(dir);
        assert!(log.append("Echo", 1, 25).is_err());
    }
}
