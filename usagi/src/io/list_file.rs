//! Plain-text list files: one item per line, `\n` terminated.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::store::ItemStore;

/// Write every item of `store` to `path`, truncating existing content.
///
/// Returns the number of items written.
pub fn save(store: &ItemStore, path: &Path) -> Result<usize> {
    debug!(path = %path.display(), items = store.len(), "saving list");
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for item in store.items() {
        writeln!(writer, "{item}").with_context(|| format!("write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(store.len())
}

/// Append items read from `path` to `store`.
///
/// Trailing whitespace (including `\r`) is stripped from each line and blank
/// lines are skipped. Existing items are kept, so loading the same file twice
/// duplicates its entries. Returns the number of items appended.
///
/// Open and read failures are returned before or between appends; items
/// appended so far stay in the store. A [`StoreError`] from the store is
/// returned as-is inside the `anyhow::Error`.
///
/// [`StoreError`]: crate::core::store::StoreError
pub fn load(store: &mut ItemStore, path: &Path) -> Result<usize> {
    debug!(path = %path.display(), "loading list");
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    load_from_reader(store, BufReader::new(file))
        .with_context(|| format!("read {}", path.display()))
}

/// Append items from any buffered reader. See [`load`].
pub fn load_from_reader<R: BufRead>(store: &mut ItemStore, mut reader: R) -> Result<usize> {
    let mut appended = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if store.add(line.trim_end())? {
            appended += 1;
        }
    }
    debug!(appended, total = store.len(), "list loaded");
    Ok(appended)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::store_with;

    #[test]
    fn save_writes_one_item_per_line() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.txt");
        let store = store_with(&["apples", "bread"]);

        let written = save(&store, &path).expect("save");
        assert_eq!(written, 2);
        assert_eq!(fs::read_to_string(&path).expect("read"), "apples\nbread\n");
    }

    #[test]
    fn save_truncates_existing_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.txt");
        fs::write(&path, "old\nstuff\nhere\n").expect("seed");

        save(&store_with(&["new"]), &path).expect("save");
        assert_eq!(fs::read_to_string(&path).expect("read"), "new\n");
    }

    #[test]
    fn save_empty_list_writes_empty_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.txt");
        save(&ItemStore::new(), &path).expect("save");
        assert_eq!(fs::read_to_string(&path).expect("read"), "");
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("missing").join("out.txt");
        let err = save(&store_with(&["a"]), &path).expect_err("should fail");
        assert!(format!("{err:#}").contains("create"));
    }

    #[test]
    fn load_appends_and_skips_blank_lines() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("in.txt");
        fs::write(&path, "tea\n\nsugar\n").expect("seed");
        let mut store = store_with(&["milk"]);

        let appended = load(&mut store, &path).expect("load");
        assert_eq!(appended, 2);
        assert_eq!(store.items(), &["milk", "tea", "sugar"]);
    }

    #[test]
    fn load_strips_crlf_and_trailing_whitespace() {
        let mut store = ItemStore::new();
        let input = "eggs  \r\n \t\r\nflour\t\r\nbutter";
        load_from_reader(&mut store, input.as_bytes()).expect("load");
        assert_eq!(store.items(), &["eggs", "flour", "butter"]);
    }

    #[test]
    fn load_twice_duplicates_entries() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("in.txt");
        fs::write(&path, "a\nb\n").expect("seed");
        let mut store = ItemStore::new();

        load(&mut store, &path).expect("first load");
        load(&mut store, &path).expect("second load");
        assert_eq!(store.items(), &["a", "b", "a", "b"]);
    }

    #[test]
    fn load_missing_file_leaves_store_unchanged() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut store = store_with(&["milk"]);
        let err = load(&mut store, &temp.path().join("nope.txt")).expect_err("missing");
        let io_err = err.downcast_ref::<std::io::Error>().expect("io error");
        assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(store.items(), &["milk"]);
    }

    #[test]
    fn load_tolerates_invalid_utf8() {
        let mut store = ItemStore::new();
        let input: &[u8] = b"caf\xe9\nbread\n";
        load_from_reader(&mut store, input).expect("load");
        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[1], "bread");
    }

    #[test]
    fn save_then_load_round_trips_into_fresh_list() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("list.txt");
        let original = store_with(&["oat milk", "  rye bread", "eggs (12)"]);

        save(&original, &path).expect("save");
        let mut fresh = ItemStore::new();
        load(&mut fresh, &path).expect("load");
        assert_eq!(fresh, original);
    }
}
