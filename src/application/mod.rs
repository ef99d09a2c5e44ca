pub mod use_cases;

pub use use_cases::aggregator::aggregate;
pub use use_cases::choropleth::{build_map_view, MapView};
pub use use_cases::normalizer::normalize;
pub use use_cases::selection::on_region_selected;
