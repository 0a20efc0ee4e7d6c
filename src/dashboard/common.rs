use chrono::NaiveDate;

/// Monetary records expose a base amount and an optional authoritative
/// total (base plus accrued interest).
pub trait Monetary {
    fn base_amount(&self) -> Option<f64>;

    fn total_amount(&self) -> Option<f64> {
        None
    }

    /// Resolves the payable/receivable amount: the total when present and
    /// positive, else the base amount, else zero. Every summation in the
    /// crate goes through this so interest is never double counted.
    fn resolved_amount(&self) -> f64 {
        match self.total_amount() {
            Some(total) if total > 0.0 => total,
            _ => self.base_amount().unwrap_or(0.0),
        }
    }
}

/// Dated records expose the calendar date used for period filtering.
/// Records without one are excluded from every period window.
pub trait Dated {
    fn filter_date(&self) -> Option<NaiveDate>;
}
