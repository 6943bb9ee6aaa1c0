//! Reference tables for UPI transaction, mandate and dispute outcome codes.

pub mod csv;
pub mod error;
pub mod lookup;
pub mod model;
pub mod simulate;
pub mod tables;

pub use error::UpiCodeError;
pub use lookup::{EdgeCaseAdvice, get_code_info, get_dispute_info, handle_edge_case};
pub use model::{CodeRecord, DisputeRecord, Status, TransactionType};
pub use simulate::{
    DEFAULT_SUCCESS_RATE, SimulatedFlow, SimulatedOutcome, Simulator, simulate_mandate_registration,
    simulate_transaction,
};
pub use tables::{DISPUTE_REASON_CODES, GENERAL_ERROR_CODES, MANDATE_ERROR_CODES};
