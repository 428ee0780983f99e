//! Validation report
//!
//! Result of validating one purchase order against the catalog.

use serde::Serialize;

use crate::validator::OrderItem;

/// An order line with no matching catalog row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingItem {
    pub code: String,
    pub description: String,
    pub quantity: u32,
    /// Human-readable reason the line cannot be sold
    pub reason: String,
}

impl MissingItem {
    pub fn new(item: &OrderItem, reason: impl Into<String>) -> Self {
        Self {
            code: item.code.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            reason: reason.into(),
        }
    }
}

/// Counts of a validation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationSummary {
    pub total_items: usize,
    pub found_items: usize,
    pub missing_items: usize,
    /// Share of found items, in percent rounded to two decimals
    pub success_percentage: f64,
}

impl ValidationSummary {
    pub fn new(total_items: usize, found_items: usize) -> Self {
        Self {
            total_items,
            found_items,
            missing_items: total_items.saturating_sub(found_items),
            success_percentage: success_percentage(found_items, total_items),
        }
    }
}

/// Outcome of validating one order.
///
/// `ready_to_process` lists the order lines only when every line exists in
/// the catalog. A single missing line empties it, even though the other
/// lines matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub order_id: String,
    /// Normalized customer code the order was validated for
    pub customer_id: String,
    /// Local time of validation, `YYYY-MM-DD HH:MM:SS`
    pub validated_at: String,
    pub all_items_exist: bool,
    /// Whether the order may be sent downstream; always equals `all_items_exist`
    pub can_proceed: bool,
    pub summary: ValidationSummary,
    pub ready_to_process: Vec<OrderItem>,
    pub missing: Vec<MissingItem>,
    pub message: String,
}

impl ValidationReport {
    /// Assembles the report from the per-line partition.
    pub fn new(
        order_id: impl Into<String>,
        customer_id: impl Into<String>,
        found: Vec<OrderItem>,
        missing: Vec<MissingItem>,
    ) -> Self {
        let total = found.len() + missing.len();
        let summary = ValidationSummary::new(total, found.len());
        let all_items_exist = missing.is_empty();

        let message = if all_items_exist {
            format!(
                "VALIDATION PASSED: all {} items exist in the catalog. The order can be processed.",
                total
            )
        } else {
            format!(
                "VALIDATION FAILED: {} of {} items do not exist in the catalog. Review the missing items before processing.",
                missing.len(),
                total
            )
        };

        Self {
            order_id: order_id.into(),
            customer_id: customer_id.into(),
            validated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            all_items_exist,
            can_proceed: all_items_exist,
            summary,
            ready_to_process: if all_items_exist { found } else { Vec::new() },
            missing,
            message,
        }
    }
}

/// `found / total * 100`, rounded to two decimals; zero when `total` is zero.
///
/// Exact half-hundredths round to the even neighbour, so `1/32` gives `3.12`.
pub fn success_percentage(found: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = found as f64 / total as f64 * 100.0;
    (pct * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(code: &str) -> OrderItem {
        OrderItem {
            code: code.to_string(),
            description: format!("desc {}", code),
            quantity: 2,
            unit_price: 10.0,
            total_price: 20.0,
            delivery_date: "2024-05-01".to_string(),
        }
    }

    #[test]
    fn test_success_percentage_rounding() {
        assert_eq!(success_percentage(1, 3), 33.33);
        assert_eq!(success_percentage(2, 3), 66.67);
        assert_eq!(success_percentage(1, 2), 50.0);
        assert_eq!(success_percentage(4, 4), 100.0);
        assert_eq!(success_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_success_percentage_half_ties_round_to_even() {
        assert_eq!(success_percentage(1, 32), 3.12);
        assert_eq!(success_percentage(2, 64), 3.12);
        assert_eq!(success_percentage(5, 32), 15.62);
        assert_eq!(success_percentage(9, 32), 28.12);
        assert_eq!(success_percentage(3, 32), 9.38);
        assert_eq!(success_percentage(7, 32), 21.88);
    }

    #[test]
    fn test_report_all_found() {
        let report = ValidationReport::new("OC-1", "CN1", vec![item("A"), item("B")], Vec::new());

        assert!(report.all_items_exist);
        assert!(report.can_proceed);
        assert_eq!(report.ready_to_process.len(), 2);
        assert_eq!(report.summary.success_percentage, 100.0);
        assert!(report.message.starts_with("VALIDATION PASSED"));
    }

    #[test]
    fn test_report_gate_empties_ready_list() {
        let missing = MissingItem::new(&item("B"), "not in catalog");
        let report = ValidationReport::new("OC-1", "CN1", vec![item("A")], vec![missing]);

        assert!(!report.all_items_exist);
        assert!(!report.can_proceed);
        assert!(report.ready_to_process.is_empty());
        assert_eq!(report.summary.found_items, 1);
        assert_eq!(report.summary.missing_items, 1);
        assert_eq!(report.summary.success_percentage, 50.0);
        assert!(report.message.contains("1 of 2"));
    }

    #[test]
    fn test_missing_item_keeps_line_fields() {
        let missing = MissingItem::new(&item("B"), "reason");
        assert_eq!(missing.code, "B");
        assert_eq!(missing.description, "desc B");
        assert_eq!(missing.quantity, 2);
        assert_eq!(missing.reason, "reason");
    }

    #[test]
    fn test_report_serializes_flags() {
        let report = ValidationReport::new("OC-1", "CN1", vec![item("A")], Vec::new());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["all_items_exist"], true);
        assert_eq!(json["can_proceed"], true);
        assert_eq!(json["summary"]["total_items"], 1);
        assert_eq!(json["ready_to_process"][0]["code"], "A");
    }
}
