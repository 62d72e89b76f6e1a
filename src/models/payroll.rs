//! Payroll record model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Tone;
use super::calendar::null_as_default;

/// Whether a payroll has been paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Paid out.
    Paid,
    /// Issued but not yet paid.
    Pending,
    /// Explicitly unpaid.
    Unpaid,
    /// A label the engine does not recognize, or no label at all.
    #[default]
    #[serde(other)]
    Unrecognized,
}

impl PaymentStatus {
    /// Returns true only for [`PaymentStatus::Paid`].
    ///
    /// Everything else, including unknown labels, falls in the unpaid
    /// partition.
    pub fn is_paid(self) -> bool {
        self == Self::Paid
    }

    /// The capitalized label shown to the employee.
    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Unpaid => "Unpaid",
            Self::Unrecognized => "Unknown",
        }
    }

    /// The badge tone for this status.
    pub fn tone(self) -> Tone {
        if self.is_paid() {
            Tone::Success
        } else {
            Tone::Warning
        }
    }
}

/// One month's compensation breakdown for an employee.
///
/// `net_salary` is taken as issued; the engine never recomputes it from the
/// other three amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    /// Backend identifier.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Month number, 1-based.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Basic salary for the month.
    #[serde(default, deserialize_with = "null_as_default")]
    pub basic_salary: Decimal,
    /// Sum of allowances.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_allowances: Decimal,
    /// Sum of deductions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_deductions: Decimal,
    /// Net pay as issued.
    #[serde(default, deserialize_with = "null_as_default")]
    pub net_salary: Decimal,
    /// Payment status; unrecognized when absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_payroll_with_numeric_amounts() {
        let json = r#"{
            "_id": "pr_2024_01",
            "month": 1,
            "year": 2024,
            "basicSalary": 50000,
            "totalAllowances": 5000,
            "totalDeductions": 2500,
            "netSalary": 52500,
            "paymentStatus": "paid"
        }"#;

        let payroll: PayrollRecord = serde_json::from_str(json).unwrap();
        assert_eq!(payroll.month, 1);
        assert_eq!(payroll.basic_salary, Decimal::new(50000, 0));
        assert_eq!(payroll.net_salary, Decimal::new(52500, 0));
        assert!(payroll.payment_status.is_paid());
    }

    #[test]
    fn test_deserialize_payroll_with_string_amounts() {
        let json = r#"{
            "month": 2,
            "year": 2024,
            "basicSalary": "48250.50",
            "netSalary": "48250.50",
            "paymentStatus": "pending"
        }"#;

        let payroll: PayrollRecord = serde_json::from_str(json).unwrap();
        assert_eq!(payroll.basic_salary, Decimal::from_str("48250.50").unwrap());
        assert_eq!(payroll.total_allowances, Decimal::ZERO);
        assert_eq!(payroll.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_deserialize_null_amounts() {
        let json = r#"{
            "month": 3,
            "year": 2024,
            "basicSalary": null,
            "totalAllowances": null,
            "totalDeductions": null,
            "netSalary": null,
            "paymentStatus": null
        }"#;

        let payroll: PayrollRecord = serde_json::from_str(json).unwrap();
        assert_eq!(payroll.basic_salary, Decimal::ZERO);
        assert_eq!(payroll.net_salary, Decimal::ZERO);
        assert_eq!(payroll.payment_status, PaymentStatus::Unrecognized);
    }

    #[test]
    fn test_missing_payment_status_is_unpaid() {
        let payroll: PayrollRecord =
            serde_json::from_str(r#"{ "month": 3, "year": 2024, "netSalary": 100 }"#).unwrap();
        assert_eq!(payroll.payment_status, PaymentStatus::Unrecognized);
        assert!(!payroll.payment_status.is_paid());
    }

    #[test]
    fn test_unknown_payment_status_is_unpaid() {
        let status: PaymentStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(status, PaymentStatus::Unrecognized);
        assert!(!status.is_paid());
        assert_eq!(status.tone(), Tone::Warning);
    }

    #[test]
    fn test_payment_status_labels() {
        assert_eq!(PaymentStatus::Paid.label(), "Paid");
        assert_eq!(PaymentStatus::Unpaid.label(), "Unpaid");
        assert_eq!(PaymentStatus::Paid.tone(), Tone::Success);
    }
}
