//! Ordered, date-keyed collection of saved days.
//!
//! The whole collection is persisted as one JSON blob; every save rewrites it.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::db::Database;
use crate::models::DailyRecord;

pub const RECORDS_KEY: &str = "records";
/// Where an unreadable blob is copied before the store starts over empty.
pub const CORRUPT_RECORDS_KEY: &str = "records.corrupt";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<DailyRecord>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from arbitrary records, enforcing one record per date (last wins).
    #[must_use]
    pub fn from_records(records: Vec<DailyRecord>) -> Self {
        let mut store = Self::new();
        for r in records {
            store.upsert(r);
        }
        store
    }

    /// Load the collection. A missing blob yields an empty store; so does a malformed one,
    /// after the raw text has been copied to [`CORRUPT_RECORDS_KEY`].
    pub fn load(db: &Database) -> Result<Self> {
        let Some(raw) = db.get_setting(RECORDS_KEY)? else {
            tracing::debug!("no saved records, starting empty");
            return Ok(Self::new());
        };

        match serde_json::from_str::<Vec<DailyRecord>>(&raw) {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded records");
                Ok(Self::from_records(records))
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    backup_key = CORRUPT_RECORDS_KEY,
                    "saved records are unreadable, starting empty"
                );
                db.set_setting(CORRUPT_RECORDS_KEY, &raw)?;
                Ok(Self::new())
            }
        }
    }

    pub fn save(&self, db: &Database) -> Result<()> {
        let blob = self.export_json()?;
        db.set_setting(RECORDS_KEY, &blob)
            .context("Failed to save records")?;
        tracing::debug!(count = self.records.len(), "saved records");
        Ok(())
    }

    /// Remove every record, in memory and on disk.
    pub fn clear(&mut self, db: &Database) -> Result<()> {
        db.delete_setting(RECORDS_KEY)?;
        self.records.clear();
        Ok(())
    }

    /// Replace the record for the same date or append, then re-sort by date.
    pub fn upsert(&mut self, record: DailyRecord) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.date == record.date) {
            *existing = record;
        } else {
            self.records.push(record);
        }
        self.records.sort_by_key(|r| r.date);
    }

    #[must_use]
    pub fn latest(&self) -> Option<&DailyRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    /// First record, in date order, within `tolerance_days` of `date` (inclusive).
    ///
    /// This is first-match rather than closest-match: with records on both sides of the
    /// target the earlier one wins even if the later one is nearer.
    #[must_use]
    pub fn find_near(&self, date: NaiveDate, tolerance_days: i64) -> Option<&DailyRecord> {
        self.records
            .iter()
            .find(|r| (r.date - date).num_days().abs() <= tolerance_days)
    }

    #[must_use]
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string(&self.records).context("Failed to serialize records")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn record(m: u32, d: u32, weight: f64) -> DailyRecord {
        DailyRecord {
            date: date(m, d),
            weight,
            food_in: 1800.0,
            exercise_out: 0.0,
            tdee: 2000.0,
            water: 0.0,
            drinks: String::new(),
            net_cals: -200.0,
        }
    }

    #[test]
    fn test_upsert_appends_and_sorts() {
        let mut store = RecordStore::new();
        store.upsert(record(2, 12, 175.0));
        store.upsert(record(2, 8, 177.0));
        store.upsert(record(2, 10, 176.0));

        let dates: Vec<NaiveDate> = store.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2, 8), date(2, 10), date(2, 12)]);
        assert!((store.latest().unwrap().weight - 175.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_upsert_replaces_same_date() {
        let mut store = RecordStore::new();
        store.upsert(record(2, 10, 176.0));
        store.upsert(record(2, 10, 174.5));
        assert_eq!(store.len(), 1);
        assert!((store.records()[0].weight - 174.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_upsert_idempotent() {
        let mut store = RecordStore::new();
        store.upsert(record(2, 9, 177.0));
        store.upsert(record(2, 10, 176.0));
        let before = store.clone();

        store.upsert(record(2, 10, 176.0));
        assert_eq!(store, before);
    }

    #[test]
    fn test_sorted_after_any_order() {
        let days = [17, 3, 25, 9, 3, 11, 28, 1, 17, 20];
        let mut store = RecordStore::new();
        for (i, d) in days.iter().enumerate() {
            store.upsert(record(3, *d, 170.0 + f64::from(i as u32)));
        }
        assert!(store.records().windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn test_latest_empty() {
        assert!(RecordStore::new().latest().is_none());
    }

    #[test]
    fn test_find_near_first_match() {
        let store = RecordStore::from_records(vec![record(2, 13, 175.0), record(2, 16, 174.0)]);
        // Target 2/15: 2/16 is nearer, but 2/13 is first within 3 days.
        let hit = store.find_near(date(2, 15), 3).unwrap();
        assert_eq!(hit.date, date(2, 13));
    }

    #[test]
    fn test_find_near_tolerance_inclusive() {
        let store = RecordStore::from_records(vec![record(2, 18, 175.0)]);
        assert!(store.find_near(date(2, 15), 3).is_some());
        assert!(store.find_near(date(2, 14), 3).is_none());
        assert!(store.find_near(date(2, 21), 3).is_some());
        assert!(store.find_near(date(2, 22), 3).is_none());
    }

    #[test]
    fn test_get_exact_date() {
        let store = RecordStore::from_records(vec![record(2, 18, 175.0)]);
        assert!(store.get(date(2, 18)).is_some());
        assert!(store.get(date(2, 17)).is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let db = Database::open_in_memory().unwrap();
        let mut store = RecordStore::new();
        store.upsert(record(2, 10, 176.0));
        store.upsert(record(2, 8, 177.0));
        store.save(&db).unwrap();

        let loaded = RecordStore::load(&db).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_load_missing_is_empty() {
        let db = Database::open_in_memory().unwrap();
        assert!(RecordStore::load(&db).unwrap().is_empty());
    }

    #[test]
    fn test_load_corrupt_is_empty_and_backed_up() {
        let db = Database::open_in_memory().unwrap();
        db.set_setting(RECORDS_KEY, "{not json").unwrap();

        let store = RecordStore::load(&db).unwrap();
        assert!(store.is_empty());
        assert_eq!(
            db.get_setting(CORRUPT_RECORDS_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_load_unsorted_blob_is_normalized() {
        let db = Database::open_in_memory().unwrap();
        let raw = serde_json::to_string(&vec![
            record(2, 12, 175.0),
            record(2, 8, 177.0),
            record(2, 12, 174.0),
        ])
        .unwrap();
        db.set_setting(RECORDS_KEY, &raw).unwrap();

        let store = RecordStore::load(&db).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].date, date(2, 8));
        assert!((store.records()[1].weight - 174.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear() {
        let db = Database::open_in_memory().unwrap();
        let mut store = RecordStore::from_records(vec![record(2, 10, 176.0)]);
        store.save(&db).unwrap();

        store.clear(&db).unwrap();
        assert!(store.is_empty());
        assert!(db.get_setting(RECORDS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_export_json() {
        let store = RecordStore::from_records(vec![record(2, 10, 176.0)]);
        let json = store.export_json().unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"date\":\"2026-02-10\""));
    }
}
