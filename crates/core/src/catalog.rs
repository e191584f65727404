//! Customer-facing catalog view over the preset list.
//!
//! The storefront shows an "all" tab plus one tab per category. Only active
//! presets are ever shown to customers.

use crate::preset::{Category, PresetRecord};

/// Which tab of the catalog is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogFilter {
    #[default]
    All,
    Category(Category),
}

impl CatalogFilter {
    /// Whether `record` belongs on this tab (ignoring visibility).
    pub fn matches(&self, record: &PresetRecord) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Category(category) => record.category == category.label(),
        }
    }
}

/// Active presets matching `filter`, ordered by `sort_order`.
///
/// The sort is stable, so records sharing a `sort_order` keep the order the
/// collection resource returned them in.
pub fn visible_presets(records: &[PresetRecord], filter: CatalogFilter) -> Vec<&PresetRecord> {
    let mut visible: Vec<&PresetRecord> = records
        .iter()
        .filter(|r| r.is_active && filter.matches(r))
        .collect();
    visible.sort_by_key(|r| r.sort_order);
    visible
}

/// Render a price in roubles, e.g. `₽990`.
pub fn format_price(price: i32) -> String {
    format!("₽{price}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, category: Category, is_active: bool, sort_order: i32) -> PresetRecord {
        PresetRecord {
            id: Some(id),
            name: format!("Preset {id}"),
            category: category.label().to_string(),
            preset_file_url: format!("https://cdn/{id}.cube"),
            is_active,
            sort_order,
            ..PresetRecord::default()
        }
    }

    #[test]
    fn all_tab_hides_inactive_presets() {
        let records = vec![
            record(1, Category::Warm, true, 0),
            record(2, Category::Retro, false, 0),
            record(3, Category::Professional, true, 0),
        ];
        let ids: Vec<_> = visible_presets(&records, CatalogFilter::All)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
    }

    #[test]
    fn category_tab_filters_by_label() {
        let records = vec![
            record(1, Category::Warm, true, 0),
            record(2, Category::Professional, true, 0),
            record(3, Category::Professional, true, 0),
        ];
        let visible = visible_presets(&records, CatalogFilter::Category(Category::Professional));
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|r| r.category() == Some(Category::Professional)));
    }

    #[test]
    fn ordering_follows_sort_order_and_is_stable() {
        let records = vec![
            record(1, Category::Warm, true, 5),
            record(2, Category::Warm, true, 1),
            record(3, Category::Warm, true, 5),
        ];
        let ids: Vec<_> = visible_presets(&records, CatalogFilter::All)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![Some(2), Some(1), Some(3)]);
    }

    #[test]
    fn format_price_prefixes_rouble_sign() {
        assert_eq!(format_price(990), "₽990");
    }
}
