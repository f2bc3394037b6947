use lazy_static::lazy_static;

pub const STOCK_OUT_STATUS: &str = "No stock-outs detected.";

lazy_static! {
    static ref OVERVIEW: Vec<InventoryRecord> = vec![
        InventoryRecord::new("Brand A", 100, 1.2),
        InventoryRecord::new("Brand B", 50, 0.8),
        InventoryRecord::new("Brand C", 75, 1.5),
        InventoryRecord::new("Brand D", 20, 0.7),
    ];
}

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryRecord {
    pub brand: String,
    pub stock_level: u32,
    pub turnover_rate: f32,
}

impl InventoryRecord {
    pub fn new(brand: &str, stock_level: u32, turnover_rate: f32) -> Self {
        Self {
            brand: brand.into(),
            stock_level,
            turnover_rate,
        }
    }
}

/// Stock levels per brand. Unrelated to the sales dataset.
pub fn overview() -> &'static [InventoryRecord] {
    OVERVIEW.as_slice()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn overview_is_fixed() {
        for _ in 0..3 {
            let records = overview();
            assert_eq!(
                records.iter().map(|r| r.brand.as_str()).collect::<Vec<_>>(),
                ["Brand A", "Brand B", "Brand C", "Brand D"]
            );
            assert_eq!(
                records.iter().map(|r| r.stock_level).collect::<Vec<_>>(),
                [100, 50, 75, 20]
            );
            assert_eq!(
                records.iter().map(|r| r.turnover_rate).collect::<Vec<_>>(),
                [1.2, 0.8, 1.5, 0.7]
            );
        }
    }
}
