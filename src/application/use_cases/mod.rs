pub mod aggregator;
pub mod choropleth;
pub mod normalizer;
pub mod selection;
