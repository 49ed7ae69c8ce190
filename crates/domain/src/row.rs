//! Render-ready table row with placeholder rules for missing fields.

use crate::service_record::ServiceRecord;

/// Glyph prefixed to every price.
pub const CURRENCY_SYMBOL: &str = "\u{20B9}";

/// Placeholder shown when a record has no service time.
pub const MISSING_DURATION: &str = "N/A";

/// Column headers, in display order.
pub const COLUMNS: [&str; 6] = [
    "ID",
    "Service Name",
    "Service Time",
    "Price",
    "Discount",
    "Area",
];

/// The six display cells of one [`ServiceRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRow {
    pub id: String,
    pub service_name: String,
    pub service_time: String,
    pub price: String,
    pub discount: String,
    pub area: String,
}

impl ServiceRow {
    /// Cells in [`COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> [&str; 6] {
        [
            self.id.as_str(),
            self.service_name.as_str(),
            self.service_time.as_str(),
            self.price.as_str(),
            self.discount.as_str(),
            self.area.as_str(),
        ]
    }
}

impl From<&ServiceRecord> for ServiceRow {
    fn from(record: &ServiceRecord) -> Self {
        Self {
            id: record
                .id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            service_name: record.service_name.clone().unwrap_or_default(),
            service_time: record
                .service_time
                .map_or_else(|| MISSING_DURATION.to_string(), |t| t.to_string()),
            price: record
                .price
                .as_ref()
                .map(|price| format!("{CURRENCY_SYMBOL}{price}"))
                .unwrap_or_default(),
            discount: record
                .discount
                .as_ref()
                .map(|discount| format!("{discount}%"))
                .unwrap_or_default(),
            area: record.area.clone().unwrap_or_default(),
        }
    }
}
