//! Chargeback reason codes and their turnaround times.

use super::{DisputeTable, Index, index_dispute_records};
use crate::model::DisputeRecord;

const RECORDS: &[DisputeRecord] = &[
    DisputeRecord::chargeback("U01", "Credit not processed for cancelled or returned goods and services", "T+30"),
    DisputeRecord::chargeback("U02", "Duplicate processing", "T+15"),
    DisputeRecord::chargeback("U03", "Paid by alternate means", "T+30"),
    DisputeRecord::chargeback("U04", "Fraudulent transaction, not authorized by the customer", "T+45"),
    DisputeRecord::chargeback("U05", "Incorrect transaction amount", "T+30"),
    DisputeRecord::chargeback("U06", "Goods or services not received", "T+30"),
    DisputeRecord::chargeback("U07", "Goods or services defective or not as described", "T+45"),
    DisputeRecord::chargeback("U08", "Account debited but beneficiary not credited", "T+5"),
    DisputeRecord::chargeback("U09", "Account debited but merchant did not confirm the transaction", "T+5"),
    DisputeRecord::chargeback("U10", "Refund not received", "T+15"),
];

fn build_index() -> Index {
    index_dispute_records(RECORDS)
}

/// Chargeback reason codes with their resolution turnaround.
pub static DISPUTE_REASON_CODES: DisputeTable = DisputeTable::new(RECORDS, build_index);
