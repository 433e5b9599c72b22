//! JSON file standing in for the dashboard's REST collaborator.

use bizdash_core::{DataSource, MemorySource, Page, QueryParams};
use bizdash_types::{Identified, Searchable, load_records};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub struct JsonFileSource<Row> {
    path: PathBuf,
    rows: MemorySource<Row>,
}

impl<Row> JsonFileSource<Row>
where
    Row: Identified + Searchable + Clone + Serialize + DeserializeOwned,
{
    /// Load the file. Row identities must be unique: deletes and edits
    /// address a single row.
    pub fn open(path: &Path) -> bizdash_core::Result<Self> {
        let rows: Vec<Row> = load_records(path)?;
        let mut seen = HashSet::with_capacity(rows.len());
        if let Some(dup) = rows.iter().find(|row| !seen.insert(row.id())) {
            return Err(bizdash_core::Error::DuplicateRowId(dup.id().to_string()));
        }
        tracing::debug!(path = %path.display(), "records loaded");
        Ok(Self {
            path: path.to_path_buf(),
            rows: MemorySource::new(rows),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> &[Row] {
        self.rows.rows()
    }

    /// File contents with `id` left out, for writing before the in-memory delete.
    pub fn encode_without(&self, id: &Row::Id) -> bizdash_core::Result<String> {
        if self.rows.get(id).is_none() {
            return Err(bizdash_core::Error::NotFound(id.to_string()));
        }
        let remaining: Vec<&Row> = self.rows().iter().filter(|row| row.id() != id).collect();
        encode(&remaining)
    }

    pub fn remove(&mut self, id: &Row::Id) -> bizdash_core::Result<Row> {
        self.rows.remove(id)
    }

    /// Apply `edit` to one row and write the file back.
    pub fn update<F, T>(&mut self, id: &Row::Id, edit: F) -> bizdash_core::Result<T>
    where
        F: FnOnce(&mut Row) -> T,
    {
        let out = self.rows.update(id, edit)?;
        self.save()?;
        Ok(out)
    }

    pub fn save(&self) -> bizdash_core::Result<()> {
        let body = encode(self.rows())?;
        std::fs::write(&self.path, body).map_err(bizdash_types::Error::from)?;
        Ok(())
    }
}

fn encode<T: Serialize + ?Sized>(rows: &T) -> bizdash_core::Result<String> {
    serde_json::to_string_pretty(rows)
        .map_err(|err| bizdash_core::Error::from(bizdash_types::Error::from(err)))
}

impl<Row> DataSource<Row> for JsonFileSource<Row>
where
    Row: Identified + Searchable + Clone,
{
    fn fetch(&self, params: &QueryParams) -> bizdash_core::Result<Page<Row>> {
        self.rows.fetch(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizdash_core::QueryState;
    use bizdash_types::StaffMember;
    use tempfile::TempDir;

    const STAFF: &str = r#"[
        {"id": 1, "name": "Ada", "role": "owner", "email": "ada@example.com"},
        {"id": 2, "name": "Grace", "role": "manager", "email": "grace@example.com"}
    ]"#;

    fn fixture() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("staff.json");
        std::fs::write(&path, STAFF).unwrap();
        (dir, path)
    }

    #[test]
    fn test_open_and_fetch() {
        let (_dir, path) = fixture();
        let source = JsonFileSource::<StaffMember>::open(&path).unwrap();

        let page = source.fetch(&QueryState::new(1).params()).unwrap();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.total, 2);
        assert!(page.has_more);
    }

    #[test]
    fn test_update_writes_back() {
        let (_dir, path) = fixture();
        let mut source = JsonFileSource::<StaffMember>::open(&path).unwrap();

        source.update(&2, |m| m.toggle_active()).unwrap();

        let reloaded = JsonFileSource::<StaffMember>::open(&path).unwrap();
        assert!(!reloaded.rows()[1].active);
    }

    #[test]
    fn test_encode_without() {
        let (_dir, path) = fixture();
        let source = JsonFileSource::<StaffMember>::open(&path).unwrap();

        let body = source.encode_without(&1).unwrap();
        let rows: Vec<StaffMember> = serde_json::from_str(&body).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);

        assert!(source.encode_without(&9).is_err());
    }

    #[test]
    fn test_open_rejects_repeated_id() {
        let (_dir, path) = fixture();
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "name": "Ada", "role": "owner", "email": "ada@example.com"},
                {"id": 1, "name": "Ada again", "role": "staff", "email": "ada2@example.com"}
            ]"#,
        )
        .unwrap();

        let result = JsonFileSource::<StaffMember>::open(&path);
        assert!(matches!(
            result,
            Err(bizdash_core::Error::DuplicateRowId(ref id)) if id == "1"
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = JsonFileSource::<StaffMember>::open(&dir.path().join("none.json"));
        assert!(matches!(
            result,
            Err(bizdash_core::Error::Types(bizdash_types::Error::Io(_)))
        ));
    }
}
