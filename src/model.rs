//! Core domain types for the code reference.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::UpiCodeError;

/// Canonical outcome bucket every code maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    Success,
    Pending,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Success, Status::Pending, Status::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::Pending => "Pending",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment flow variant. Only used to label simulated outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransactionType {
    #[default]
    Pay,
    Collect,
    Intent,
    Autopay,
    Lite,
    Asba,
}

impl TransactionType {
    pub const ALL: [TransactionType; 6] = [
        TransactionType::Pay,
        TransactionType::Collect,
        TransactionType::Intent,
        TransactionType::Autopay,
        TransactionType::Lite,
        TransactionType::Asba,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Pay => "Pay",
            TransactionType::Collect => "Collect",
            TransactionType::Intent => "Intent",
            TransactionType::Autopay => "Autopay",
            TransactionType::Lite => "Lite",
            TransactionType::Asba => "ASBA",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = UpiCodeError;

    /// Exact match against the canonical names; `pay` is not `Pay`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tx_type| tx_type.as_str() == s)
            .ok_or_else(|| UpiCodeError::InvalidArgument(format!("unknown transaction type '{s}'")))
    }
}

impl TryFrom<&str> for TransactionType {
    type Error = UpiCodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for TransactionType {
    type Error = UpiCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An entry of the general or mandate code tables.
///
/// `category` is one of `Success`, `Business`, `Technical` or the compound
/// `Business/Technical`. It is matched by substring, so the compound value
/// counts as both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeRecord {
    pub code: Cow<'static, str>,
    pub description: &'static str,
    pub category: &'static str,
    pub status: Status,
    pub handling: &'static str,
}

impl CodeRecord {
    /// Build a table entry. `code` must already be uppercase.
    pub const fn new(
        code: &'static str,
        description: &'static str,
        category: &'static str,
        status: Status,
        handling: &'static str,
    ) -> Self {
        Self {
            code: Cow::Borrowed(code),
            description,
            category,
            status,
            handling,
        }
    }

    /// Fallback for codes found in neither error table.
    pub fn unknown(code: String) -> Self {
        Self {
            code: Cow::Owned(code),
            description: "Unknown",
            category: "Technical",
            status: Status::Rejected,
            handling: "Contact support",
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn is_technical(&self) -> bool {
        self.category.contains("Technical")
    }

    pub fn is_business(&self) -> bool {
        self.category.contains("Business")
    }
}

/// An entry of the dispute reason table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisputeRecord {
    pub code: Cow<'static, str>,
    pub description: &'static str,
    pub dispute_type: &'static str,
    /// Turnaround time, `T+<days>` after the dispute is filed.
    pub tat: &'static str,
    pub flag: &'static str,
}

impl DisputeRecord {
    /// Build a chargeback entry; the flag echoes the code.
    pub const fn chargeback(code: &'static str, description: &'static str, tat: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            description,
            dispute_type: "Chargeback",
            tat,
            flag: code,
        }
    }

    pub fn unknown(code: String) -> Self {
        Self {
            code: Cow::Owned(code),
            description: "Unknown Dispute",
            dispute_type: "Chargeback",
            tat: "T+5",
            flag: "Unknown",
        }
    }

    /// Number of days in the turnaround time, if `tat` is well formed.
    pub fn tat_days(&self) -> Option<u32> {
        self.tat.strip_prefix("T+")?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_default() {
        assert_eq!(TransactionType::default(), TransactionType::Pay);
    }

    #[test]
    fn transaction_type_parses_canonical_names() {
        assert_eq!("Pay".parse::<TransactionType>().unwrap(), TransactionType::Pay);
        assert_eq!("ASBA".parse::<TransactionType>().unwrap(), TransactionType::Asba);
        assert_eq!("Autopay".parse::<TransactionType>().unwrap(), TransactionType::Autopay);
    }

    #[test]
    fn transaction_type_is_case_sensitive() {
        for name in ["pay", "PAY", "asba", "Asba", "autoPAY", "collect"] {
            let err = name.parse::<TransactionType>().unwrap_err();
            assert!(matches!(err, UpiCodeError::InvalidArgument(_)), "{name}");
        }
        assert!(TransactionType::try_from(String::from("lite")).is_err());
    }

    #[test]
    fn transaction_type_rejects_unknown_names() {
        let err = "Refund".parse::<TransactionType>().unwrap_err();
        assert!(matches!(err, UpiCodeError::InvalidArgument(_)));
        assert!(err.to_string().contains("Refund"));

        assert!("".parse::<TransactionType>().is_err());
        assert!(" Pay".parse::<TransactionType>().is_err());
    }

    #[test]
    fn transaction_type_display_round_trips() {
        for tx_type in TransactionType::ALL {
            assert_eq!(tx_type.to_string().parse::<TransactionType>().unwrap(), tx_type);
        }
    }

    #[test]
    fn unknown_code_record() {
        let record = CodeRecord::unknown("ZZZ".to_string());
        assert_eq!(record.code, "ZZZ");
        assert_eq!(record.description, "Unknown");
        assert_eq!(record.category, "Technical");
        assert_eq!(record.status, Status::Rejected);
        assert_eq!(record.handling, "Contact support");
    }

    #[test]
    fn compound_category_is_both_business_and_technical() {
        let record = CodeRecord::new("X", "x", "Business/Technical", Status::Rejected, "h");
        assert!(record.is_business());
        assert!(record.is_technical());
        assert!(!record.is_success());
    }

    #[test]
    fn chargeback_flag_echoes_code() {
        let record = DisputeRecord::chargeback("U99", "test", "T+30");
        assert_eq!(record.flag, "U99");
        assert_eq!(record.dispute_type, "Chargeback");
    }

    #[test]
    fn tat_days_parses_well_formed_values() {
        assert_eq!(DisputeRecord::chargeback("U99", "test", "T+30").tat_days(), Some(30));
        assert_eq!(DisputeRecord::unknown("X".to_string()).tat_days(), Some(5));
    }

    #[test]
    fn tat_days_rejects_malformed_values() {
        assert_eq!(DisputeRecord::chargeback("U99", "test", "30").tat_days(), None);
        assert_eq!(DisputeRecord::chargeback("U99", "test", "T+").tat_days(), None);
        assert_eq!(DisputeRecord::chargeback("U99", "test", "T-3").tat_days(), None);
    }
}
