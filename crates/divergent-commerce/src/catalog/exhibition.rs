//! Exhibitions: the limited drops products are released in.

use crate::ids::ExhibitionId;
use serde::{Deserialize, Serialize};

/// Release status of an exhibition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExhibitionStatus {
    Live,
    Archived,
    Locked,
}

impl ExhibitionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExhibitionStatus::Live => "LIVE",
            ExhibitionStatus::Archived => "ARCHIVED",
            ExhibitionStatus::Locked => "LOCKED",
        }
    }
}

/// A drop of limited products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exhibition {
    pub id: ExhibitionId,
    pub title: String,
    pub slug: String,
    /// One-line meaning of the exhibition name.
    pub meaning: String,
    /// Curatorial statement, one paragraph per entry.
    pub statement: Vec<String>,
    pub year: String,
    pub status: ExhibitionStatus,
    /// Edition note (e.g. "Limited run. No restock.").
    pub edition: String,
}

impl Exhibition {
    /// Check if products from this exhibition can be bought.
    pub fn is_live(&self) -> bool {
        self.status == ExhibitionStatus::Live
    }
}
