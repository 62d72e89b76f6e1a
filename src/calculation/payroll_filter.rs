//! Payroll month naming, filtering and amount formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollRecord;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the full English name of a 1-based month number.
///
/// # Examples
///
/// ```
/// use ess_engine::calculation::month_name;
///
/// assert_eq!(month_name(1).unwrap(), "January");
/// assert!(month_name(13).is_err());
/// ```
pub fn month_name(month: u32) -> EngineResult<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .ok_or(EngineError::UnknownMonth { month })
}

/// The period label for a payroll, e.g. `"January 2024"`.
///
/// An out-of-range month degrades to the year alone.
pub fn payroll_period_label(record: &PayrollRecord) -> String {
    match month_name(record.month) {
        Ok(name) => format!("{} {}", name, record.year),
        Err(_) => record.year.to_string(),
    }
}

/// Filters payrolls by month name and payment partition.
///
/// A record is kept when its month name contains `month_query`
/// case-insensitively and it falls in the requested partition: paid when
/// `paid_only` is set, anything other than paid otherwise. Input order is
/// preserved. Records with an out-of-range month only match an empty query.
///
/// # Examples
///
/// ```
/// use ess_engine::calculation::filter_payrolls;
/// use ess_engine::models::{PaymentStatus, PayrollRecord};
/// use rust_decimal::Decimal;
///
/// let payroll = |month, status| PayrollRecord {
///     id: None,
///     month,
///     year: 2024,
///     basic_salary: Decimal::ZERO,
///     total_allowances: Decimal::ZERO,
///     total_deductions: Decimal::ZERO,
///     net_salary: Decimal::ZERO,
///     payment_status: status,
/// };
/// let records = vec![
///     payroll(1, PaymentStatus::Paid),
///     payroll(6, PaymentStatus::Paid),
///     payroll(1, PaymentStatus::Pending),
/// ];
///
/// let matched = filter_payrolls(&records, "jan", true);
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].month, 1);
/// ```
pub fn filter_payrolls<'a>(
    records: &'a [PayrollRecord],
    month_query: &str,
    paid_only: bool,
) -> Vec<&'a PayrollRecord> {
    let query = month_query.to_lowercase();
    records
        .iter()
        .filter(|record| record.payment_status.is_paid() == paid_only)
        .filter(|record| {
            month_name(record.month)
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
        })
        .collect()
}

/// Formats a monetary amount with thousands separators.
///
/// The amount is rounded half away from zero to at most two decimal places
/// and trailing fractional zeros are dropped.
///
/// # Examples
///
/// ```
/// use ess_engine::calculation::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(Decimal::new(52500, 0), "₹"), "₹52,500");
/// assert_eq!(format_amount(Decimal::from_str("1234567.505").unwrap(), "$"), "$1,234,567.51");
/// ```
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut formatted = format!("{}{}{}", sign, symbol, group_thousands(whole));
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentStatus;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn payroll(month: u32, year: i32, status: PaymentStatus) -> PayrollRecord {
        PayrollRecord {
            id: Some(format!("pr_{}_{}", year, month)),
            month,
            year,
            basic_salary: dec("50000"),
            total_allowances: dec("5000"),
            total_deductions: dec("2500"),
            net_salary: dec("52500"),
            payment_status: status,
        }
    }

    #[test]
    fn test_month_names_cover_the_year() {
        assert_eq!(month_name(1).unwrap(), "January");
        assert_eq!(month_name(9).unwrap(), "September");
        assert_eq!(month_name(12).unwrap(), "December");
    }

    #[test]
    fn test_month_name_rejects_out_of_range() {
        assert_eq!(month_name(0), Err(EngineError::UnknownMonth { month: 0 }));
        assert_eq!(month_name(13), Err(EngineError::UnknownMonth { month: 13 }));
    }

    #[test]
    fn test_period_label() {
        assert_eq!(
            payroll_period_label(&payroll(3, 2024, PaymentStatus::Paid)),
            "March 2024"
        );
        assert_eq!(
            payroll_period_label(&payroll(14, 2024, PaymentStatus::Paid)),
            "2024"
        );
    }

    #[test]
    fn test_query_jan_matches_only_january() {
        let records = vec![
            payroll(1, 2024, PaymentStatus::Paid),
            payroll(6, 2024, PaymentStatus::Paid),
            payroll(7, 2024, PaymentStatus::Paid),
            payroll(1, 2023, PaymentStatus::Paid),
        ];

        let matched = filter_payrolls(&records, "Jan", true);
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|r| r.month == 1));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let records = vec![payroll(1, 2024, PaymentStatus::Paid)];
        assert_eq!(filter_payrolls(&records, "JANUARY", true).len(), 1);
        assert_eq!(filter_payrolls(&records, "uar", true).len(), 1);
    }

    #[test]
    fn test_substring_can_match_several_months() {
        let records = vec![
            payroll(1, 2024, PaymentStatus::Paid),
            payroll(2, 2024, PaymentStatus::Paid),
            payroll(3, 2024, PaymentStatus::Paid),
        ];
        // "ary" is in January and February
        let months: Vec<u32> = filter_payrolls(&records, "ary", true)
            .iter()
            .map(|r| r.month)
            .collect();
        assert_eq!(months, vec![1, 2]);
    }

    #[test]
    fn test_partitions_by_payment_status() {
        let records = vec![
            payroll(1, 2024, PaymentStatus::Paid),
            payroll(2, 2024, PaymentStatus::Pending),
            payroll(3, 2024, PaymentStatus::Unpaid),
            payroll(4, 2024, PaymentStatus::Unrecognized),
        ];

        let paid: Vec<u32> = filter_payrolls(&records, "", true)
            .iter()
            .map(|r| r.month)
            .collect();
        let unpaid: Vec<u32> = filter_payrolls(&records, "", false)
            .iter()
            .map(|r| r.month)
            .collect();

        assert_eq!(paid, vec![1]);
        assert_eq!(unpaid, vec![2, 3, 4]);
    }

    #[test]
    fn test_preserves_input_order() {
        let records = vec![
            payroll(12, 2023, PaymentStatus::Paid),
            payroll(1, 2024, PaymentStatus::Paid),
            payroll(11, 2023, PaymentStatus::Paid),
        ];
        let months: Vec<u32> = filter_payrolls(&records, "", true)
            .iter()
            .map(|r| r.month)
            .collect();
        assert_eq!(months, vec![12, 1, 11]);
    }

    #[test]
    fn test_out_of_range_month_only_matches_empty_query() {
        let records = vec![payroll(13, 2024, PaymentStatus::Paid)];
        assert_eq!(filter_payrolls(&records, "", true).len(), 1);
        assert!(filter_payrolls(&records, "j", true).is_empty());
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(dec("0"), "₹"), "₹0");
        assert_eq!(format_amount(dec("999"), "₹"), "₹999");
        assert_eq!(format_amount(dec("1000"), "₹"), "₹1,000");
        assert_eq!(format_amount(dec("52500.00"), "₹"), "₹52,500");
        assert_eq!(format_amount(dec("1234567.5"), "₹"), "₹1,234,567.5");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec("10.005"), ""), "10.01");
        assert_eq!(format_amount(dec("10.004"), ""), "10");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(dec("-1500"), "₹"), "-₹1,500");
        assert_eq!(format_amount(dec("-0.001"), "₹"), "₹0");
    }
}
