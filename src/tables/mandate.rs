//! Recurring payment (mandate) registration failure codes.

use super::{CodeTable, Index, index_code_records};
use crate::model::CodeRecord;
use crate::model::Status::{Pending, Rejected};

const CONTACT_BRANCH: &str = "Ask the customer to contact their home branch.";
const OTHER_ACCOUNT: &str = "Ask the customer to register the mandate on another account.";
const RESTART: &str = "Ask the customer to restart the registration.";

const RECORDS: &[CodeRecord] = &[
    // account eligibility
    CodeRecord::new("AP01", "Account blocked", "Business", Rejected, CONTACT_BRANCH),
    CodeRecord::new("AP02", "Account closed", "Business", Rejected, OTHER_ACCOUNT),
    CodeRecord::new("AP03", "Account frozen", "Business", Rejected, CONTACT_BRANCH),
    CodeRecord::new("AP04", "Account inoperative", "Business", Rejected, CONTACT_BRANCH),
    CodeRecord::new("AP05", "No such account", "Business", Rejected, "Verify the account number and retry."),
    CodeRecord::new("AP06", "Not a CBS account number", "Business", Rejected, "Verify the account number and retry."),
    CodeRecord::new("AP07", "KYC not completed, refer to branch", "Business", Rejected, "Ask the customer to complete KYC with their bank."),
    CodeRecord::new("AP08", "Account holder name mismatch with CBS", "Business", Rejected, "Verify the account holder name."),
    CodeRecord::new("AP09", "Account type in mandate differs from CBS", "Business", Rejected, "Correct the account type and retry."),
    CodeRecord::new("AP10", "Mandate amount exceeds the e-mandate limit", "Business", Rejected, "Lower the mandate amount."),
    CodeRecord::new("AP11", "Authentication failed", "Business", Rejected, RESTART),
    CodeRecord::new("AP12", "Instalment amount exceeds the limit allowed for the account", "Business", Rejected, "Lower the mandate amount."),
    CodeRecord::new("AP13", "Invalid user credentials", "Business", Rejected, RESTART),
    CodeRecord::new("AP14", "Invalid card", "Business", Rejected, "Ask the customer to use another card."),
    CodeRecord::new("AP15", "Mandate not allowed for joint account", "Business", Rejected, OTHER_ACCOUNT),
    CodeRecord::new("AP16", "Mandate not allowed for PPF account", "Business", Rejected, OTHER_ACCOUNT),
    CodeRecord::new("AP17", "Mandate not allowed for loan account", "Business", Rejected, OTHER_ACCOUNT),
    CodeRecord::new("AP18", "Mandate not allowed for NRE account", "Business", Rejected, OTHER_ACCOUNT),
    CodeRecord::new("AP19", "Mandate not allowed for minor account", "Business", Rejected, OTHER_ACCOUNT),
    CodeRecord::new("AP20", "Mandate not allowed for cash credit account", "Business", Rejected, OTHER_ACCOUNT),
    CodeRecord::new("AP21", "Registration rejected or cancelled by the customer", "Business", Rejected, RESTART),
    CodeRecord::new("AP22", "Required minimum balance not maintained", "Business", Rejected, "Ask the customer to fund the account."),
    CodeRecord::new("AP23", "Registration blocked by account restrictions", "Business", Rejected, CONTACT_BRANCH),
    CodeRecord::new("AP24", "Registration failed at the bank", "Business/Technical", Rejected, CONTACT_BRANCH),
    // card validation
    CodeRecord::new("AP25", "Debit card validation failed: invalid card number", "Business", Rejected, "Ask the customer to re-enter the card number."),
    CodeRecord::new("AP26", "Debit card validation failed: invalid PIN", "Business", Rejected, "Ask the customer to re-enter the card PIN."),
    CodeRecord::new("AP27", "Debit card validation failed: invalid expiry date", "Business", Rejected, "Ask the customer to re-enter the expiry date."),
    CodeRecord::new("AP28", "Debit card validation failed: card blocked", "Business", Rejected, "Ask the customer to use another card."),
    CodeRecord::new("AP29", "Technical error at the bank", "Technical", Rejected, "Retry the registration later."),
    CodeRecord::new("AP30", "Browser closed by the customer during registration", "Business", Rejected, RESTART),
    CodeRecord::new("AP31", "Debit card not linked to the account", "Business", Rejected, "Ask the customer to use the card linked to the account."),
    CodeRecord::new("AP32", "Customer rejected the request on the pre-login page", "Business", Rejected, RESTART),
    CodeRecord::new("AP33", "Network error during registration", "Technical", Rejected, "Retry the registration later."),
    // OTP
    CodeRecord::new("AP34", "Invalid OTP", "Business", Rejected, "Ask the customer to re-enter the OTP."),
    CodeRecord::new("AP35", "OTP expired", "Business", Rejected, "Ask the customer to request a new OTP."),
    CodeRecord::new("AP36", "Number of OTP tries exceeded", "Business", Rejected, "Ask the customer to retry after some time."),
    // authentication / KYC
    CodeRecord::new("AP37", "Aadhaar number not linked to the account", "Business", Rejected, "Ask the customer to seed Aadhaar with their bank."),
    CodeRecord::new("AP38", "Aadhaar authentication failed", "Business", Rejected, RESTART),
    CodeRecord::new("AP39", "Net banking not enabled for the account", "Business", Rejected, "Ask the customer to use debit card authentication."),
    CodeRecord::new("AP40", "Net banking user locked", "Business", Rejected, "Ask the customer to unlock net banking with their bank."),
    CodeRecord::new("AP41", "Mandate frequency not supported by the bank", "Business", Rejected, "Choose a supported debit frequency."),
    CodeRecord::new("AP42", "Invalid mandate start date", "Business", Rejected, "Correct the start date."),
    CodeRecord::new("AP43", "Invalid or past mandate end date", "Business", Rejected, "Correct the end date."),
    CodeRecord::new("AP44", "Duplicate mandate registration request", "Technical", Rejected, "Check the status of the original registration."),
    CodeRecord::new("AP45", "Mandate already registered for this account", "Business", Rejected, "Use the existing mandate."),
    CodeRecord::new("AP46", "Mobile number not registered with the bank", "Business", Rejected, "Ask the customer to update the mobile number with their bank."),
    CodeRecord::new("AP47", "PAN not updated in bank records", "Business", Rejected, "Ask the customer to update PAN with their bank."),
    CodeRecord::new("AP48", "Customer session timed out", "Business", Rejected, RESTART),
    CodeRecord::new("AP49", "Bank response timed out", "Technical", Pending, "Check the registration status before retrying."),
    CodeRecord::new("AP50", "Registration pending authorization at the bank", "Technical", Pending, "Check the registration status after T+1."),
    CodeRecord::new("AP51", "Invalid IFSC", "Business", Rejected, "Verify the IFSC and retry."),
    CodeRecord::new("AP52", "Sponsor bank not live for e-mandate", "Technical", Rejected, "Contact the sponsor bank."),
    CodeRecord::new("AP53", "Destination bank not live for this authentication mode", "Technical", Rejected, "Offer another authentication mode."),
    CodeRecord::new("AP54", "Mandate amount below the minimum", "Business", Rejected, "Raise the mandate amount."),
    CodeRecord::new("AP55", "Debit card expired", "Business", Rejected, "Ask the customer to use another card."),
    CodeRecord::new("AP56", "Card not enabled for online transactions", "Business", Rejected, "Ask the customer to enable online usage for the card."),
    CodeRecord::new("AP57", "Authorization rejected by the account holder's bank", "Business/Technical", Rejected, CONTACT_BRANCH),
    CodeRecord::new("AP58", "Account under lien or debit freeze", "Business", Rejected, OTHER_ACCOUNT),
    CodeRecord::new("AP59", "Account holder deceased", "Business", Rejected, "Do not retry."),
    // abandonment
    CodeRecord::new("AP60", "Customer dropped off before authentication", "Business", Rejected, RESTART),
];

fn build_index() -> Index {
    index_code_records(RECORDS)
}

/// Mandate registration codes, consulted after the general table.
pub static MANDATE_ERROR_CODES: CodeTable = CodeTable::new(RECORDS, build_index);
