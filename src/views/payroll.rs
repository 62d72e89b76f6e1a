//! Payroll table view models.

use serde::{Deserialize, Serialize};

use crate::calculation::{filter_payrolls, format_amount, payroll_period_label};
use crate::config::DisplayConfig;
use crate::models::{PaymentStatus, PayrollRecord, Tone};

/// One row of the salary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRow {
    /// 1-based position in the filtered table.
    pub serial: usize,
    /// Period label, e.g. `"January 2024"`.
    pub period: String,
    /// Basic salary.
    pub basic: String,
    /// Allowances.
    pub allowance: String,
    /// Deductions.
    pub deduction: String,
    /// Net salary as issued.
    pub net: String,
    /// Payment status.
    pub status: PaymentStatus,
    /// Label for the status badge.
    pub status_label: String,
    /// Tone for the status badge.
    pub tone: Tone,
}

/// Filters payrolls and formats the matching rows.
///
/// See [`filter_payrolls`] for the matching rules.
pub fn payroll_rows(
    records: &[PayrollRecord],
    month_query: &str,
    paid_only: bool,
    config: &DisplayConfig,
) -> Vec<PayrollRow> {
    let symbol = config.currency.symbol.as_str();
    filter_payrolls(records, month_query, paid_only)
        .into_iter()
        .enumerate()
        .map(|(index, record)| PayrollRow {
            serial: index + 1,
            period: payroll_period_label(record),
            basic: format_amount(record.basic_salary, symbol),
            allowance: format_amount(record.total_allowances, symbol),
            deduction: format_amount(record.total_deductions, symbol),
            net: format_amount(record.net_salary, symbol),
            status: record.payment_status,
            status_label: record.payment_status.label().to_string(),
            tone: record.payment_status.tone(),
        })
        .collect()
}
