//! Record persistence. The store owns the two collections; the reporting
//! engine only ever receives complete snapshots of them, and add/delete are
//! requests whose effect is observed through the next snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::config::DashboardConfig;
use crate::domain::{AdCost, Sale};
use crate::errors::DashboardError;

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Abstraction over backends that persist the per-user record collections.
pub trait RecordStore {
    fn add_sale(&self, sale: Sale) -> Result<Uuid>;
    fn delete_sale(&self, id: Uuid) -> Result<()>;
    fn snapshot_sales(&self) -> Result<Vec<Sale>>;

    fn add_ad_cost(&self, cost: AdCost) -> Result<Uuid>;
    fn delete_ad_cost(&self, id: Uuid) -> Result<()>;
    fn snapshot_ad_costs(&self) -> Result<Vec<AdCost>>;
}

const TMP_SUFFIX: &str = "tmp";
const SALES_FILE: &str = "sales.json";
const AD_COSTS_FILE: &str = "ad_costs.json";

/// JSON file backend scoped by the configured app and user identifiers:
/// `<data_dir>/<app_id>/users/<user_id>/{sales,ad_costs}.json`.
///
/// Writes stage to a temporary file and rename into place, so a snapshot
/// read never observes a partially written collection.
pub struct JsonStore {
    user_dir: PathBuf,
}

impl JsonStore {
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let user_dir = config
            .data_dir
            .join(&config.app_id)
            .join("users")
            .join(&config.user_id);
        fs::create_dir_all(&user_dir)?;
        Ok(Self { user_dir })
    }

    pub fn user_dir(&self) -> &Path {
        &self.user_dir
    }

    fn sales_path(&self) -> PathBuf {
        self.user_dir.join(SALES_FILE)
    }

    fn ad_costs_path(&self) -> PathBuf {
        self.user_dir.join(AD_COSTS_FILE)
    }

    fn read<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        let tmp = path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn add_sale(&self, mut sale: Sale) -> Result<Uuid> {
        if sale.client_name.trim().is_empty() {
            return Err(DashboardError::InvalidRecord(
                "client name must not be empty".into(),
            ));
        }
        let id = Uuid::new_v4();
        sale.id = Some(id);
        let path = self.sales_path();
        let mut sales: Vec<Sale> = Self::read(&path)?;
        sales.push(sale);
        Self::write(&path, &sales)?;
        tracing::info!(%id, "sale persisted");
        Ok(id)
    }

    fn delete_sale(&self, id: Uuid) -> Result<()> {
        let path = self.sales_path();
        let mut sales: Vec<Sale> = Self::read(&path)?;
        let before = sales.len();
        sales.retain(|sale| sale.id != Some(id));
        if sales.len() == before {
            return Err(DashboardError::NotFound(id));
        }
        Self::write(&path, &sales)?;
        tracing::info!(%id, "sale deleted");
        Ok(())
    }

    fn snapshot_sales(&self) -> Result<Vec<Sale>> {
        Self::read(&self.sales_path())
    }

    fn add_ad_cost(&self, mut cost: AdCost) -> Result<Uuid> {
        let id = Uuid::new_v4();
        cost.id = Some(id);
        let path = self.ad_costs_path();
        let mut costs: Vec<AdCost> = Self::read(&path)?;
        costs.push(cost);
        Self::write(&path, &costs)?;
        tracing::info!(%id, "ad cost persisted");
        Ok(id)
    }

    fn delete_ad_cost(&self, id: Uuid) -> Result<()> {
        let path = self.ad_costs_path();
        let mut costs: Vec<AdCost> = Self::read(&path)?;
        let before = costs.len();
        costs.retain(|cost| cost.id != Some(id));
        if costs.len() == before {
            return Err(DashboardError::NotFound(id));
        }
        Self::write(&path, &costs)?;
        tracing::info!(%id, "ad cost deleted");
        Ok(())
    }

    fn snapshot_ad_costs(&self) -> Result<Vec<AdCost>> {
        Self::read(&self.ad_costs_path())
    }
}
