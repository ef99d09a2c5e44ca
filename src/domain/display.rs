use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_TITLE: &str = "Selecione uma Região";
pub const INDUSTRY_CHART_TITLE: &str = "Maiores Segmentos";
pub const SIZE_CHART_TITLE: &str =
    "Tamanhos das Empresas (P:11-50, M:51-200, L:201-500, G:501-1000, MG:1001+)";

/// Which region, if any, the user has clicked on the map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(String),
}

impl SelectionState {
    /// An absent or blank key means nothing has been clicked yet.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some(region) if !region.is_empty() => SelectionState::Selected(region.to_string()),
            _ => SelectionState::Unselected,
        }
    }

    pub fn region(&self) -> Option<&str> {
        match self {
            SelectionState::Unselected => None,
            SelectionState::Selected(region) => Some(region),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub count: usize,
}

/// Data for one bar chart. The empty dataset carries no title.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<ChartBar>,
}

impl ChartDataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Everything the side panel shows for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayModel {
    pub title: String,
    pub company_count_text: String,
    pub top_segment_text: String,
    pub company_count: Option<usize>,
    pub dominant_industry: Option<String>,
    pub industry_chart: ChartDataset,
    pub size_chart: ChartDataset,
}

impl DisplayModel {
    pub fn placeholder() -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            company_count_text: String::new(),
            top_segment_text: String::new(),
            company_count: None,
            dominant_industry: None,
            industry_chart: ChartDataset::empty(),
            size_chart: ChartDataset::empty(),
        }
    }
}
