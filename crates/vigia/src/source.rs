//! Record sources for the dashboard utilities.
//!
//! A [`RecordSource`] supplies the personnel, inspection, and safety-talk
//! records the roster and scope utilities operate on. The production
//! implementation reads JSON dataset files exported from the hosted backend;
//! [`StaticSource`] serves fixed records for tests.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::error::{Error, Result};
use crate::records::{Employee, Inspection, SafetyTalk};

/// A JSON dataset document.
///
/// Every section tolerates being missing or explicitly `null`; both
/// normalize to an empty list, so downstream consumers never see an absent
/// collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    /// Personnel records.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub employees: Vec<Employee>,

    /// Inspection records.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub inspections: Vec<Inspection>,

    /// Scheduled safety talks.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub talks: Vec<SafetyTalk>,
}

fn null_to_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Trait for suppliers of dashboard records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable description of where the records come from.
    fn describe(&self) -> String;

    /// Load the personnel records.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read or parsed.
    async fn employees(&self) -> Result<Vec<Employee>>;

    /// Load the inspection records.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read or parsed.
    async fn inspections(&self) -> Result<Vec<Inspection>>;

    /// Load the scheduled safety talks.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read or parsed.
    async fn talks(&self) -> Result<Vec<SafetyTalk>>;
}

/// A record source backed by a JSON dataset file.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    /// Create a source for the dataset file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The dataset file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the dataset file.
    ///
    /// The file is re-read on every call; datasets are small ad-hoc exports
    /// and callers want current contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// dataset document.
    pub async fn load(&self) -> Result<Dataset> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| Error::DatasetOpen {
                path: self.path.clone(),
                source,
            })?;

        let dataset: Dataset =
            serde_json::from_str(&raw).map_err(|source| Error::DatasetParse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            employees = dataset.employees.len(),
            inspections = dataset.inspections.len(),
            talks = dataset.talks.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}

#[async_trait]
impl RecordSource for JsonSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn employees(&self) -> Result<Vec<Employee>> {
        Ok(self.load().await?.employees)
    }

    async fn inspections(&self) -> Result<Vec<Inspection>> {
        Ok(self.load().await?.inspections)
    }

    async fn talks(&self) -> Result<Vec<SafetyTalk>> {
        Ok(self.load().await?.talks)
    }
}

/// An in-memory record source with fixed contents.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    /// Personnel records served by this source.
    pub employees: Vec<Employee>,
    /// Inspection records served by this source.
    pub inspections: Vec<Inspection>,
    /// Safety talks served by this source.
    pub talks: Vec<SafetyTalk>,
}

#[async_trait]
impl RecordSource for StaticSource {
    fn describe(&self) -> String {
        "in-memory".to_string()
    }

    async fn employees(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    async fn inspections(&self) -> Result<Vec<Inspection>> {
        Ok(self.inspections.clone())
    }

    async fn talks(&self) -> Result<Vec<SafetyTalk>> {
        Ok(self.talks.clone())
    }
}
