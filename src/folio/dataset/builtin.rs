//! The catalog shipped inside the binary, used when no dataset path is configured.

use super::json;
use super::memory::StaticDataset;
use crate::error::Result;

const CATALOG: &str = include_str!("../../../data/catalog.json");

pub fn load() -> Result<StaticDataset> {
    json::from_str(CATALOG)
}
