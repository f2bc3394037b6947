use lazy_static::lazy_static;

lazy_static! {
    static ref DATASET: Vec<SalesRecord> = vec![
        SalesRecord::new("January", "Brand A", 120, 60, "Group 1", "Category 1", "Men"),
        SalesRecord::new("February", "Brand B", 80, 40, "Group 2", "Category 2", "Women"),
        SalesRecord::new("March", "Brand C", 150, 30, "Group 1", "Category 1", "Kids"),
        SalesRecord::new("April", "Brand D", 100, 20, "Group 2", "Category 2", "Men"),
    ];
}

/// The fixed sales dataset. Built on first access and shared for the rest of the process.
pub fn dataset() -> &'static [SalesRecord] {
    DATASET.as_slice()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SalesRecord {
    pub month: String,
    pub brand: String,
    pub quantity_sold: u32,
    pub quantity_in_stock: u32,
    pub marketing_group: String,
    pub classified_category: String,
    pub category: String,
}

impl SalesRecord {
    pub fn new(
        month: &str,
        brand: &str,
        quantity_sold: u32,
        quantity_in_stock: u32,
        marketing_group: &str,
        classified_category: &str,
        category: &str,
    ) -> Self {
        Self {
            month: month.into(),
            brand: brand.into(),
            quantity_sold,
            quantity_in_stock,
            marketing_group: marketing_group.into(),
            classified_category: classified_category.into(),
            category: category.into(),
        }
    }
}

/// Columns the sales page can filter on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    MarketingGroup,
    ClassifiedCategory,
}

impl FilterField {
    pub fn value<'a>(&self, record: &'a SalesRecord) -> &'a str {
        match self {
            FilterField::MarketingGroup => &record.marketing_group,
            FilterField::ClassifiedCategory => &record.classified_category,
        }
    }
}

/// Distinct values of `field`, in order of first appearance.
pub fn distinct(records: &[SalesRecord], field: FilterField) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for record in records {
        let value = field.value(record);
        if !values.iter().any(|v| v == value) {
            values.push(value.to_owned());
        }
    }
    values
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SalesFilter {
    pub marketing_group: String,
    pub classified_category: String,
}

impl SalesFilter {
    pub fn new(marketing_group: impl Into<String>, classified_category: impl Into<String>) -> Self {
        Self {
            marketing_group: marketing_group.into(),
            classified_category: classified_category.into(),
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        record.marketing_group == self.marketing_group
            && record.classified_category == self.classified_category
    }

    /// Records matching both fields exactly. The input is left untouched.
    pub fn apply(&self, records: &[SalesRecord]) -> Vec<SalesRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthlySales {
    pub month: String,
    pub brand: String,
    pub quantity_sold: u64,
}

/// Sums quantity sold per (month, brand). Groups keep the order in which
/// their key first appears.
pub fn monthly_sales(records: &[SalesRecord]) -> Vec<MonthlySales> {
    let mut totals: Vec<MonthlySales> = Vec::new();
    for record in records {
        match totals
            .iter_mut()
            .find(|t| t.month == record.month && t.brand == record.brand)
        {
            Some(total) => total.quantity_sold += u64::from(record.quantity_sold),
            None => totals.push(MonthlySales {
                month: record.month.clone(),
                brand: record.brand.clone(),
                quantity_sold: u64::from(record.quantity_sold),
            }),
        }
    }
    totals
}

/// Months as rows, brands as columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PivotTable {
    pub months: Vec<String>,
    pub brands: Vec<String>,
    values: Vec<Vec<u64>>,
}

impl PivotTable {
    /// Reshapes grouped totals into a matrix. Combinations with no total are 0.
    pub fn from_totals(totals: &[MonthlySales]) -> Self {
        let mut months: Vec<String> = Vec::new();
        let mut brands: Vec<String> = Vec::new();
        for total in totals {
            if !months.contains(&total.month) {
                months.push(total.month.clone());
            }
            if !brands.contains(&total.brand) {
                brands.push(total.brand.clone());
            }
        }

        let mut values = vec![vec![0; brands.len()]; months.len()];
        for total in totals {
            let row = months.iter().position(|m| *m == total.month);
            let col = brands.iter().position(|b| *b == total.brand);
            if let (Some(row), Some(col)) = (row, col) {
                values[row][col] += total.quantity_sold;
            }
        }

        Self {
            months,
            brands,
            values,
        }
    }

    pub fn get(&self, month: &str, brand: &str) -> Option<u64> {
        let row = self.months.iter().position(|m| m == month)?;
        let col = self.brands.iter().position(|b| b == brand)?;
        Some(self.values[row][col])
    }

    /// One value per month for `brand`, in row order.
    pub fn series(&self, brand: &str) -> Option<Vec<u64>> {
        let col = self.brands.iter().position(|b| b == brand)?;
        Some(self.values.iter().map(|row| row[col]).collect())
    }

    pub fn max(&self) -> u64 {
        self.values
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trend {
    Chart(PivotTable),
    Empty,
}

/// Everything the sales page shows for one filter selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SalesReport {
    pub rows: Vec<SalesRecord>,
    pub trend: Trend,
}

impl SalesReport {
    pub fn build(records: &[SalesRecord], filter: &SalesFilter) -> Self {
        let rows = filter.apply(records);
        let totals = monthly_sales(&rows);
        let trend = if totals.is_empty() {
            Trend::Empty
        } else {
            Trend::Chart(PivotTable::from_totals(&totals))
        };
        Self { rows, trend }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dataset_is_built_once() {
        let first = dataset();
        let second = dataset();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), 4);
        assert_eq!(
            first.iter().map(|r| r.month.as_str()).collect::<Vec<_>>(),
            ["January", "February", "March", "April"]
        );
    }

    #[test]
    fn distinct_keeps_first_appearance_order() {
        assert_eq!(
            distinct(dataset(), FilterField::MarketingGroup),
            ["Group 1", "Group 2"]
        );
        assert_eq!(
            distinct(dataset(), FilterField::ClassifiedCategory),
            ["Category 1", "Category 2"]
        );
    }

    #[test]
    fn filter_returns_exact_matches_for_every_pair() {
        let records = dataset();
        for group in distinct(records, FilterField::MarketingGroup) {
            for category in distinct(records, FilterField::ClassifiedCategory) {
                let filter = SalesFilter::new(group.as_str(), category.as_str());
                let rows = filter.apply(records);
                let expected = records
                    .iter()
                    .filter(|r| r.marketing_group == group && r.classified_category == category)
                    .count();
                assert_eq!(rows.len(), expected);
                assert!(rows.iter().all(|row| records.contains(row)));
                assert!(rows.iter().all(|row| filter.matches(row)));
            }
        }
    }

    #[test]
    fn filter_is_case_sensitive() {
        let rows = SalesFilter::new("group 1", "Category 1").apply(dataset());
        assert!(rows.is_empty());
    }

    #[test]
    fn group_one_category_one() {
        let report = SalesReport::build(dataset(), &SalesFilter::new("Group 1", "Category 1"));

        let picked = report
            .rows
            .iter()
            .map(|r| (r.month.as_str(), r.brand.as_str(), r.quantity_sold))
            .collect::<Vec<_>>();
        assert_eq!(
            picked,
            [("January", "Brand A", 120), ("March", "Brand C", 150)]
        );

        let Trend::Chart(pivot) = report.trend else {
            panic!("expected a chart");
        };
        assert_eq!(pivot.months, ["January", "March"]);
        assert_eq!(pivot.brands, ["Brand A", "Brand C"]);
        assert_eq!(pivot.get("January", "Brand A"), Some(120));
        assert_eq!(pivot.get("January", "Brand C"), Some(0));
        assert_eq!(pivot.get("March", "Brand A"), Some(0));
        assert_eq!(pivot.get("March", "Brand C"), Some(150));
        assert_eq!(pivot.series("Brand C"), Some(vec![0, 150]));
        assert_eq!(pivot.max(), 150);
    }

    #[test]
    fn unmatched_pair_is_empty_state() {
        let report = SalesReport::build(dataset(), &SalesFilter::new("Group 2", "Category 1"));
        assert!(report.rows.is_empty());
        assert_eq!(report.trend, Trend::Empty);
    }

    #[test]
    fn aggregation_ignores_row_order() {
        let mut rows = dataset().to_vec();
        rows.push(SalesRecord::new(
            "January", "Brand A", 30, 5, "Group 1", "Category 1", "Men",
        ));
        let forward = PivotTable::from_totals(&monthly_sales(&rows));
        rows.reverse();
        let reversed = PivotTable::from_totals(&monthly_sales(&rows));

        for month in &forward.months {
            for brand in &forward.brands {
                assert_eq!(forward.get(month, brand), reversed.get(month, brand));
            }
        }
        assert_eq!(forward.get("January", "Brand A"), Some(150));
    }

    #[test]
    fn building_a_report_leaves_dataset_untouched() {
        let before = dataset().to_vec();
        let _ = SalesReport::build(dataset(), &SalesFilter::new("Group 2", "Category 2"));
        assert_eq!(dataset(), before.as_slice());
    }
}
