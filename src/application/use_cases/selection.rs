use crate::domain::display::{
    ChartBar, ChartDataset, DisplayModel, SelectionState, INDUSTRY_CHART_TITLE, SIZE_CHART_TITLE,
};
use crate::domain::region::{Aggregates, RegionAggregate, NO_INDUSTRY};

/// Build the side panel for a map click. Pure: no I/O, aggregates untouched.
/// A region with no aggregate yields zero counts and empty charts.
pub fn on_region_selected(selected_region: Option<&str>, aggregates: &Aggregates) -> DisplayModel {
    let Some(region) = selected_region else {
        return DisplayModel::placeholder();
    };

    let aggregate = aggregates.get(region);
    let company_count = aggregate.map_or(0, |a| a.company_count);
    let dominant_industry = aggregate
        .map(|a| a.dominant_industry.clone())
        .unwrap_or_else(|| NO_INDUSTRY.to_string());

    DisplayModel {
        title: region.to_string(),
        company_count_text: format!("Quantidade de Empresas: {}", company_count),
        top_segment_text: format!("Maior Segmento: {}", dominant_industry),
        company_count: Some(company_count),
        dominant_industry: Some(dominant_industry),
        industry_chart: aggregate.map_or_else(ChartDataset::empty, industry_chart),
        size_chart: aggregate.map_or_else(ChartDataset::empty, size_chart),
    }
}

fn industry_chart(aggregate: &RegionAggregate) -> ChartDataset {
    bar_chart(
        INDUSTRY_CHART_TITLE,
        "industry",
        aggregate
            .industry_breakdown
            .iter()
            .map(|(industry, count)| (industry.clone(), *count)),
    )
}

fn size_chart(aggregate: &RegionAggregate) -> ChartDataset {
    bar_chart(
        SIZE_CHART_TITLE,
        "size_category",
        aggregate
            .size_breakdown
            .iter()
            .map(|(category, count)| (category.label().to_string(), *count)),
    )
}

fn bar_chart(
    title: &str,
    x_label: &str,
    bars: impl Iterator<Item = (String, usize)>,
) -> ChartDataset {
    let bars: Vec<ChartBar> = bars.map(|(label, count)| ChartBar { label, count }).collect();
    if bars.is_empty() {
        return ChartDataset::empty();
    }

    ChartDataset {
        title: Some(title.to_string()),
        x_label: x_label.to_string(),
        y_label: "count".to_string(),
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::aggregator::aggregate;
    use crate::application::use_cases::normalizer::normalize;
    use crate::domain::company::CompanyRecord;
    use crate::domain::display::PLACEHOLDER_TITLE;

    fn sample() -> Aggregates {
        let records = vec![
            CompanyRecord::new(Some("Lisbon"), "IT", "11-50"),
            CompanyRecord::new(Some("Lisbon"), "IT", "51-200"),
            CompanyRecord::new(Some("Lisbon"), "HR", "45931"),
            CompanyRecord::new(Some("Porto"), "Construction", "weird"),
        ];
        aggregate(&normalize(&records))
    }

    #[test]
    fn test_unselected_is_placeholder() {
        let model = on_region_selected(None, &sample());
        assert_eq!(model, DisplayModel::placeholder());
        assert_eq!(model.title, PLACEHOLDER_TITLE);
        assert!(model.industry_chart.is_empty());
        assert!(model.size_chart.is_empty());

        assert_eq!(on_region_selected(None, &Aggregates::default()), model);
    }

    #[test]
    fn test_selected_region() {
        let model = on_region_selected(Some("Lisboa"), &sample());

        assert_eq!(model.title, "Lisboa");
        assert_eq!(model.company_count, Some(3));
        assert_eq!(model.company_count_text, "Quantidade de Empresas: 3");
        assert_eq!(model.top_segment_text, "Maior Segmento: IT");
        assert_eq!(model.industry_chart.title.as_deref(), Some(INDUSTRY_CHART_TITLE));

        let industries: Vec<_> = model
            .industry_chart
            .bars
            .iter()
            .map(|b| (b.label.as_str(), b.count))
            .collect();
        assert_eq!(industries, vec![("HR", 1), ("IT", 2)]);

        let sizes: Vec<_> = model
            .size_chart
            .bars
            .iter()
            .map(|b| (b.label.as_str(), b.count))
            .collect();
        assert_eq!(sizes, vec![("P", 1), ("M", 1)]);
    }

    #[test]
    fn test_unknown_region_is_empty_result() {
        let model = on_region_selected(Some("Bragança"), &sample());

        assert_eq!(model.title, "Bragança");
        assert_eq!(model.company_count, Some(0));
        assert_eq!(model.dominant_industry.as_deref(), Some("N/A"));
        assert_eq!(model.top_segment_text, "Maior Segmento: N/A");
        assert!(model.industry_chart.is_empty());
        assert!(model.size_chart.is_empty());
    }

    #[test]
    fn test_region_without_known_sizes_has_empty_size_chart() {
        let model = on_region_selected(Some("Porto"), &sample());
        assert_eq!(model.company_count, Some(1));
        assert!(!model.industry_chart.is_empty());
        assert!(model.size_chart.is_empty());
        assert_eq!(model.size_chart.title, None);
    }

    #[test]
    fn test_selection_is_pure() {
        let aggregates = sample();
        let before = aggregates.clone();
        let first = on_region_selected(Some("Lisboa"), &aggregates);
        let second = on_region_selected(Some("Lisboa"), &aggregates);
        assert_eq!(first, second);
        assert_eq!(aggregates, before);
    }
}
