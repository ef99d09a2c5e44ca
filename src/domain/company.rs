// ============================================================
// COMPANY RECORDS
// ============================================================
// Raw spreadsheet rows and their normalized form

use serde::{Deserialize, Serialize};

/// Region label assigned to rows whose region cell was missing.
pub const UNKNOWN_REGION: &str = "Unknown";

/// One row of the source table, as read from the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// `Regiao-estado` cell; `None` when the cell was empty
    pub region_raw: Option<String>,

    /// `industry` cell
    pub industry: String,

    /// `size` cell: a bracket label such as `51-200`, or a numeric artifact
    pub size_raw: String,
}

impl CompanyRecord {
    pub fn new(
        region_raw: Option<impl Into<String>>,
        industry: impl Into<String>,
        size_raw: impl Into<String>,
    ) -> Self {
        Self {
            region_raw: region_raw.map(Into::into),
            industry: industry.into(),
            size_raw: size_raw.into(),
        }
    }
}

/// Ordinal employee-count bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeCategory {
    P,
    M,
    L,
    G,
    MG,
    Unknown,
}

impl SizeCategory {
    pub const ALL: [Self; 6] = [Self::P, Self::M, Self::L, Self::G, Self::MG, Self::Unknown];

    pub fn label(self) -> &'static str {
        match self {
            SizeCategory::P => "P",
            SizeCategory::M => "M",
            SizeCategory::L => "L",
            SizeCategory::G => "G",
            SizeCategory::MG => "MG",
            SizeCategory::Unknown => "Unknown",
        }
    }

    pub fn is_known(self) -> bool {
        self != SizeCategory::Unknown
    }
}

impl std::fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A row after region cleaning, renaming and size bucketing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub region: String,
    pub industry: String,
    pub size_category: SizeCategory,
}

impl NormalizedRecord {
    pub fn has_known_region(&self) -> bool {
        self.region != UNKNOWN_REGION
    }
}
