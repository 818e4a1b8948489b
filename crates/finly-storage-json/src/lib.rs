//! finly-storage-json
//!
//! Filesystem-backed JSON persistence for the finance collections: one
//! document per collection under a data directory, written atomically.

use std::{
    collections::HashSet,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use finly_core::{storage::FinanceStore, CoreError};
use finly_domain::{common::Identifiable, Card, Category, Debt, Income, Purchase};

const STORE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

const PURCHASES: &str = "purchases";
const CARDS: &str = "cards";
const INCOMES: &str = "incomes";
const CATEGORIES: &str = "categories";
const DEBTS: &str = "debts";

/// JSON key-value persistence rooted at a data directory.
///
/// A collection that has never been saved loads as an empty list, and
/// entries with a duplicated id are dropped on load, keeping the first.
#[derive(Debug, Clone)]
pub struct JsonFinanceStore {
    data_dir: PathBuf,
}

impl JsonFinanceStore {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", collection, STORE_EXTENSION))
    }

    fn load_collection<T>(&self, collection: &str) -> Result<Vec<T>, CoreError>
    where
        T: DeserializeOwned + Identifiable,
    {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        let items: Vec<T> =
            serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
        Ok(dedupe_by_id(items))
    }

    fn save_collection<T>(&self, collection: &str, items: &[T]) -> Result<(), CoreError>
    where
        T: Serialize,
    {
        let path = self.collection_path(collection);
        let json =
            serde_json::to_string_pretty(items).map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl FinanceStore for JsonFinanceStore {
    fn load_purchases(&self) -> Result<Vec<Purchase>, CoreError> {
        self.load_collection(PURCHASES)
    }

    fn save_purchases(&self, purchases: &[Purchase]) -> Result<(), CoreError> {
        self.save_collection(PURCHASES, purchases)
    }

    fn load_cards(&self) -> Result<Vec<Card>, CoreError> {
        self.load_collection(CARDS)
    }

    fn save_cards(&self, cards: &[Card]) -> Result<(), CoreError> {
        self.save_collection(CARDS, cards)
    }

    fn load_incomes(&self) -> Result<Vec<Income>, CoreError> {
        self.load_collection(INCOMES)
    }

    fn save_incomes(&self, incomes: &[Income]) -> Result<(), CoreError> {
        self.save_collection(INCOMES, incomes)
    }

    fn load_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.load_collection(CATEGORIES)
    }

    fn save_categories(&self, categories: &[Category]) -> Result<(), CoreError> {
        self.save_collection(CATEGORIES, categories)
    }

    fn load_debts(&self) -> Result<Vec<Debt>, CoreError> {
        self.load_collection(DEBTS)
    }

    fn save_debts(&self, debts: &[Debt]) -> Result<(), CoreError> {
        self.save_collection(DEBTS, debts)
    }
}

/// Drops entries whose id was already seen, keeping the first occurrence.
fn dedupe_by_id<T: Identifiable>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.id())).collect()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
