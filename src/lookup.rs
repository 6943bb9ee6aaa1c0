//! Case-insensitive code resolution.
//!
//! Lookups are total: a code missing from every table resolves to a default
//! record rather than an error.

use serde::Serialize;
use tracing::debug;

use crate::model::{CodeRecord, DisputeRecord, Status};
use crate::tables::{DISPUTE_REASON_CODES, GENERAL_ERROR_CODES, MANDATE_ERROR_CODES};

const MONITOR: &str = "Monitor for resolution.";
const RETRY: &str = "Retry after a short delay.";
const USER_INTERVENTION: &str = "User intervention required; do not retry automatically.";

/// Handling guidance for a single code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeCaseAdvice {
    pub code: String,
    pub suggested_action: String,
}

fn normalize(code: &str) -> String {
    code.to_uppercase()
}

/// Resolve a general or mandate code.
///
/// The general table wins when a code exists in both.
pub fn get_code_info(code: &str) -> CodeRecord {
    let code = normalize(code);
    match GENERAL_ERROR_CODES
        .get(&code)
        .or_else(|| MANDATE_ERROR_CODES.get(&code))
    {
        Some(record) => record.clone(),
        None => {
            debug!(code = %code, "unknown response code");
            CodeRecord::unknown(code)
        }
    }
}

/// Resolve a chargeback reason code.
pub fn get_dispute_info(code: &str) -> DisputeRecord {
    let code = normalize(code);
    match DISPUTE_REASON_CODES.get(&code) {
        Some(record) => record.clone(),
        None => {
            debug!(code = %code, "unknown dispute code");
            DisputeRecord::unknown(code)
        }
    }
}

/// Resolve `code` and extend its handling text with retry guidance.
///
/// Rules, first match wins:
/// - pending: monitor
/// - technical (substring) and rejected: retry later
/// - business (substring): needs the user
///
/// `Business/Technical` rejections therefore get the retry text.
pub fn handle_edge_case(code: &str) -> EdgeCaseAdvice {
    let record = get_code_info(code);
    let suffix = if record.status == Status::Pending {
        Some(MONITOR)
    } else if record.is_technical() && record.status == Status::Rejected {
        Some(RETRY)
    } else if record.is_business() {
        Some(USER_INTERVENTION)
    } else {
        None
    };

    let suggested_action = match suffix {
        Some(suffix) => format!("{} {suffix}", record.handling),
        None => record.handling.to_string(),
    };

    EdgeCaseAdvice {
        code: record.code.into_owned(),
        suggested_action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // get_code_info

    #[test]
    fn success_codes() {
        assert_eq!(get_code_info("00").status, Status::Success);
        assert_eq!(get_code_info("000").status, Status::Success);
        assert_eq!(get_code_info("000").category, "Success");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(get_code_info("zm"), get_code_info("ZM"));
        assert_eq!(get_code_info("Zm").code, "ZM");
        assert_eq!(get_code_info("ap21"), get_code_info("AP21"));
    }

    #[test]
    fn falls_back_to_mandate_table() {
        let record = get_code_info("AP29");
        assert_eq!(record.description, "Technical error at the bank");
        assert_eq!(record.category, "Technical");
        assert_eq!(record.status, Status::Rejected);
    }

    #[test]
    fn general_table_takes_precedence() {
        for record in MANDATE_ERROR_CODES.iter() {
            if let Some(general) = GENERAL_ERROR_CODES.get(&record.code) {
                assert_eq!(&get_code_info(&record.code), general);
            }
        }
        assert_eq!(&get_code_info("ZM"), GENERAL_ERROR_CODES.get("ZM").unwrap());
    }

    #[test]
    fn unknown_code_defaults_to_rejected() {
        let record = get_code_info("not-a-code");
        assert_eq!(record.code, "NOT-A-CODE");
        assert_eq!(record.description, "Unknown");
        assert_eq!(record.category, "Technical");
        assert_eq!(record.status, Status::Rejected);
        assert_eq!(record.handling, "Contact support");
    }

    #[test]
    fn empty_code_is_accepted() {
        let record = get_code_info("");
        assert_eq!(record.code, "");
        assert_eq!(record.description, "Unknown");
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(get_code_info(" 00").description, "Unknown");
    }

    // get_dispute_info

    #[test]
    fn dispute_lookup() {
        let record = get_dispute_info("u04");
        assert_eq!(record.code, "U04");
        assert_eq!(record.dispute_type, "Chargeback");
        assert_eq!(record.flag, "U04");
        assert_eq!(record.tat_days(), Some(45));
    }

    #[test]
    fn unknown_dispute_defaults() {
        let record = get_dispute_info("x1");
        assert_eq!(record.code, "X1");
        assert_eq!(record.description, "Unknown Dispute");
        assert_eq!(record.dispute_type, "Chargeback");
        assert_eq!(record.tat, "T+5");
        assert_eq!(record.flag, "Unknown");
    }

    #[test]
    fn dispute_lookup_ignores_error_tables() {
        assert_eq!(get_dispute_info("00").description, "Unknown Dispute");
    }

    // handle_edge_case

    #[test]
    fn pending_code_is_monitored() {
        let advice = handle_edge_case("091");
        assert_eq!(advice.code, "091");
        assert!(advice.suggested_action.ends_with(MONITOR));
        assert_eq!(
            advice.suggested_action,
            format!("{} {MONITOR}", get_code_info("091").handling)
        );
    }

    #[test]
    fn compound_category_prefers_retry() {
        let record = get_code_info("U30");
        assert_eq!(record.category, "Business/Technical");
        assert_eq!(record.status, Status::Rejected);

        let advice = handle_edge_case("u30");
        assert!(advice.suggested_action.ends_with(RETRY));
        assert!(!advice.suggested_action.contains(USER_INTERVENTION));
    }

    #[test]
    fn technical_rejection_retries() {
        assert!(handle_edge_case("XY").suggested_action.ends_with(RETRY));
    }

    #[test]
    fn business_rejection_needs_user() {
        assert!(handle_edge_case("ZM").suggested_action.ends_with(USER_INTERVENTION));
        assert!(handle_edge_case("AP01").suggested_action.ends_with(USER_INTERVENTION));
    }

    #[test]
    fn success_has_no_suffix() {
        let advice = handle_edge_case("00");
        assert_eq!(advice.suggested_action, get_code_info("00").handling);
    }

    #[test]
    fn unknown_code_retries() {
        let advice = handle_edge_case("nope");
        assert_eq!(advice.code, "NOPE");
        assert_eq!(advice.suggested_action, format!("Contact support {RETRY}"));
    }
}
