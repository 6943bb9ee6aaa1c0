//! General UPI response codes issued by banks, PSPs and the switch.

use super::{CodeTable, Index, index_code_records};
use crate::model::CodeRecord;
use crate::model::Status::{Pending, Rejected, Success};

/// Code resolved when a simulated transaction succeeds.
pub const SUCCESS_CODE: &str = "00";

const CHECK_STATUS: &str = "Check transaction status before retrying.";
const NO_ACTION: &str = "No action required.";

const RECORDS: &[CodeRecord] = &[
    // success
    CodeRecord::new("00", "Transaction approved", "Success", Success, NO_ACTION),
    CodeRecord::new("000", "Transaction successful", "Success", Success, NO_ACTION),
    // deemed / timeout
    CodeRecord::new("091", "Transaction timed out, final status awaited from the bank", "Technical", Pending, CHECK_STATUS),
    CodeRecord::new("BT", "Acquirer or beneficiary bank unavailable (timeout)", "Technical", Pending, CHECK_STATUS),
    CodeRecord::new("UT", "Remitter or issuer bank unavailable (timeout)", "Technical", Pending, CHECK_STATUS),
    CodeRecord::new("RB", "Credit reversal timed out", "Technical", Pending, "Await automatic reversal and reconcile on the next settlement cycle."),
    CodeRecord::new("U67", "Debit timed out at the remitter bank", "Technical", Pending, CHECK_STATUS),
    CodeRecord::new("U68", "Credit timed out at the beneficiary bank", "Technical", Pending, "Await final status; the debit is reversed automatically if the credit fails."),
    CodeRecord::new("U70", "Late response received from the bank", "Technical", Pending, "Reconcile against the bank statement before acting."),
    CodeRecord::new("U88", "Connection timed out while crediting the beneficiary", "Technical", Pending, CHECK_STATUS),
    // customer / account declines
    CodeRecord::new("ZA", "Transaction declined by the customer", "Business", Rejected, "Ask the customer to initiate the payment again."),
    CodeRecord::new("ZM", "Invalid UPI PIN", "Business", Rejected, "Ask the customer to retry with the correct UPI PIN."),
    CodeRecord::new("Z9", "Insufficient funds in the remitter account", "Business", Rejected, "Ask the customer to add funds or pay from another account."),
    CodeRecord::new("Z8", "Per transaction limit exceeded", "Business", Rejected, "Ask the customer to retry with a lower amount."),
    CodeRecord::new("Z7", "Transaction frequency limit exceeded", "Business", Rejected, "Ask the customer to retry after the daily limit resets."),
    CodeRecord::new("Z6", "Number of UPI PIN tries exceeded", "Business", Rejected, "Ask the customer to reset the UPI PIN or retry after 24 hours."),
    CodeRecord::new("Z5", "Invalid beneficiary credentials", "Business", Rejected, "Verify the beneficiary details with the payee."),
    CodeRecord::new("ZH", "Invalid virtual payment address", "Business", Rejected, "Verify the VPA and retry."),
    CodeRecord::new("ZE", "Transaction not permitted to this VPA by the PSP", "Business", Rejected, "Ask the customer to pay a different VPA."),
    CodeRecord::new("ZG", "VPA restricted by the customer", "Business", Rejected, "Ask the payee to lift the restriction or share another VPA."),
    CodeRecord::new("ZX", "Inactive or dormant remitter account", "Business", Rejected, "Ask the customer to reactivate the account with their bank."),
    CodeRecord::new("ZY", "Inactive or dormant beneficiary account", "Business", Rejected, "Ask the payee to reactivate the account with their bank."),
    CodeRecord::new("ZI", "Suspected fraud, transaction declined", "Business", Rejected, "Do not retry; ask the customer to contact their bank."),
    CodeRecord::new("K1", "Suspected fraud, declined on the remitter bank risk score", "Business", Rejected, "Do not retry; ask the customer to contact their bank."),
    CodeRecord::new("AM", "UPI PIN not set by the customer", "Business", Rejected, "Ask the customer to set a UPI PIN in their app."),
    CodeRecord::new("B1", "Registered mobile number linked to the account has changed or been removed", "Business", Rejected, "Ask the customer to re-link the account in their app."),
    CodeRecord::new("B3", "Transaction not permitted to the account", "Business", Rejected, "Ask the customer to use a different account."),
    CodeRecord::new("YE", "Remitting account blocked or frozen", "Business", Rejected, "Ask the customer to contact their bank."),
    CodeRecord::new("YF", "Beneficiary account blocked or frozen", "Business", Rejected, "Ask the payee to contact their bank."),
    CodeRecord::new("XH", "Remitter account does not exist", "Business", Rejected, "Ask the customer to re-link the account."),
    CodeRecord::new("XI", "Beneficiary account does not exist", "Business", Rejected, "Verify the beneficiary account details."),
    CodeRecord::new("XB", "Invalid transaction or not permitted (remitter)", "Business", Rejected, "Ask the customer to contact their bank."),
    CodeRecord::new("XC", "Invalid transaction or not permitted (beneficiary)", "Business", Rejected, "Ask the payee to contact their bank."),
    CodeRecord::new("XD", "Invalid amount (remitter)", "Business", Rejected, "Correct the amount and retry."),
    CodeRecord::new("XE", "Invalid amount (beneficiary)", "Business", Rejected, "Correct the amount and retry."),
    CodeRecord::new("XP", "Transaction not permitted to the cardholder (remitter)", "Business", Rejected, "Ask the customer to contact their bank."),
    CodeRecord::new("XQ", "Transaction not permitted to the cardholder (beneficiary)", "Business", Rejected, "Ask the payee to contact their bank."),
    CodeRecord::new("U69", "Collect request expired", "Business", Rejected, "Raise a new collect request."),
    // card data
    CodeRecord::new("XL", "Expired card (remitter)", "Business", Rejected, "Ask the customer to update the linked card."),
    CodeRecord::new("XM", "Expired card (beneficiary)", "Business", Rejected, "Ask the payee to update the linked card."),
    CodeRecord::new("XN", "No card record (remitter)", "Business", Rejected, "Ask the customer to verify the card details."),
    CodeRecord::new("XO", "No card record (beneficiary)", "Business", Rejected, "Ask the payee to verify the card details."),
    CodeRecord::new("XR", "Restricted card (remitter)", "Business", Rejected, "Ask the customer to contact the card issuer."),
    CodeRecord::new("XS", "Restricted card (beneficiary)", "Business", Rejected, "Ask the payee to contact the card issuer."),
    CodeRecord::new("YA", "Lost or stolen card (remitter)", "Business", Rejected, "Do not retry; the card is hot-listed."),
    CodeRecord::new("YB", "Lost or stolen card (beneficiary)", "Business", Rejected, "Do not retry; the card is hot-listed."),
    CodeRecord::new("YC", "Do not honour (remitter)", "Business", Rejected, "Ask the customer to contact their bank."),
    CodeRecord::new("YD", "Do not honour (beneficiary)", "Business", Rejected, "Ask the payee to contact their bank."),
    CodeRecord::new("ZR", "Invalid or incorrect OTP", "Business", Rejected, "Ask the customer to re-enter the OTP."),
    CodeRecord::new("ZS", "OTP expired", "Business", Rejected, "Ask the customer to request a new OTP."),
    CodeRecord::new("ZT", "Number of OTP tries exceeded", "Business", Rejected, "Ask the customer to retry after some time."),
    // biometric authentication (Aadhaar-linked flows)
    CodeRecord::new("300", "Biometric data did not match", "Business", Rejected, "Ask the customer to re-capture the biometric."),
    CodeRecord::new("310", "Duplicate fingers used", "Business", Rejected, "Ask the customer to use distinct fingers."),
    CodeRecord::new("330", "Biometrics locked by the Aadhaar number holder", "Business", Rejected, "Ask the customer to unlock biometrics with UIDAI."),
    CodeRecord::new("996", "Aadhaar number cancelled", "Business", Rejected, "Ask the customer to use another authentication method."),
    CodeRecord::new("997", "Aadhaar number suspended", "Business", Rejected, "Ask the customer to contact UIDAI."),
    CodeRecord::new("998", "Invalid Aadhaar number or Aadhaar not linked to the account", "Business", Rejected, "Ask the customer to seed Aadhaar with their bank."),
    CodeRecord::new("561", "Aadhaar authentication request expired", "Technical", Rejected, "Regenerate the authentication request."),
    CodeRecord::new("940", "Unauthorized Aadhaar authentication channel", "Technical", Rejected, "Check the authentication channel configuration."),
    // compliance / regulatory
    CodeRecord::new("XV", "Compliance violation (remitter)", "Business", Rejected, "Do not retry; escalate to compliance."),
    CodeRecord::new("XW", "Compliance violation (beneficiary)", "Business", Rejected, "Do not retry; escalate to compliance."),
    CodeRecord::new("X6", "Invalid merchant (acquirer)", "Business", Rejected, "Verify the merchant onboarding details."),
    CodeRecord::new("YG", "Merchant error (payee PSP)", "Business/Technical", Rejected, "Contact the payee PSP."),
    CodeRecord::new("U16", "Risk threshold exceeded", "Business/Technical", Rejected, "Ask the customer to retry with a lower amount later."),
    CodeRecord::new("U29", "Address resolution failed", "Business/Technical", Rejected, "Verify the VPA and retry."),
    CodeRecord::new("U30", "Debit failed at the remitter bank", "Business/Technical", Rejected, "Ask the customer to check the account and retry."),
    CodeRecord::new("U31", "Credit failed at the beneficiary bank", "Business/Technical", Rejected, "Confirm the debit was reversed before retrying."),
    CodeRecord::new("96", "Reversal failure", "Business/Technical", Rejected, "Raise a dispute if the amount is not reversed."),
    // switch / connectivity
    CodeRecord::new("U01", "Duplicate request", "Technical", Rejected, "Check the status of the original request."),
    CodeRecord::new("U09", "Authorization request timed out for PAY", "Technical", Rejected, "Retry the payment."),
    CodeRecord::new("U14", "Encryption error", "Technical", Rejected, "Verify the PSP key configuration."),
    CodeRecord::new("U15", "Checksum failed", "Technical", Rejected, "Verify the message signing configuration."),
    CodeRecord::new("U17", "PSP not registered", "Technical", Rejected, "Contact the PSP."),
    CodeRecord::new("U28", "PSP not available", "Technical", Rejected, "Retry later."),
    CodeRecord::new("U66", "Device fingerprint mismatch", "Technical", Rejected, "Ask the customer to re-register the device."),
    CodeRecord::new("U78", "Beneficiary bank offline", "Technical", Rejected, "Retry later."),
    CodeRecord::new("U86", "Remitter bank throttling decline", "Technical", Rejected, "Retry later."),
    CodeRecord::new("XY", "Remitter CBS offline", "Technical", Rejected, "Retry later."),
    CodeRecord::new("Y1", "Beneficiary CBS offline", "Technical", Rejected, "Retry later."),
    CodeRecord::new("XT", "Cut-off in process (remitter)", "Technical", Rejected, "Retry after the bank cut-off window."),
    CodeRecord::new("XU", "Cut-off in process (beneficiary)", "Technical", Rejected, "Retry after the bank cut-off window."),
    CodeRecord::new("XF", "Format error (remitter)", "Technical", Rejected, "Check the request payload."),
    CodeRecord::new("XG", "Format error (beneficiary)", "Technical", Rejected, "Check the request payload."),
    CodeRecord::new("X7", "Merchant not reachable", "Technical", Rejected, "Retry later."),
    CodeRecord::new("DT", "Duplicate RRN found at the bank", "Technical", Rejected, "Generate a new RRN and retry."),
];

fn build_index() -> Index {
    index_code_records(RECORDS)
}

/// General response codes, checked before the mandate table.
pub static GENERAL_ERROR_CODES: CodeTable = CodeTable::new(RECORDS, build_index);
