//! Random but plausible outcomes for demos and tests.
//!
//! The random source is owned by a [`Simulator`], so tests can pass a seeded
//! generator and get a reproducible sequence.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::UpiCodeError;
use crate::lookup::get_code_info;
use crate::model::{CodeRecord, TransactionType};
use crate::tables::{CodeTable, GENERAL_ERROR_CODES, MANDATE_ERROR_CODES, SUCCESS_CODE};

pub const DEFAULT_SUCCESS_RATE: f64 = 0.8;

/// The flow a simulated outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatedFlow {
    Transaction(TransactionType),
    MandateRegistration,
}

impl fmt::Display for SimulatedFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatedFlow::Transaction(tx_type) => fmt::Display::fmt(tx_type, f),
            SimulatedFlow::MandateRegistration => f.write_str("Mandate Registration"),
        }
    }
}

impl Serialize for SimulatedFlow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A resolved record together with the flow it was simulated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedOutcome {
    pub record: CodeRecord,
    pub flow: SimulatedFlow,
}

/// Draws outcomes from an injected random source.
pub struct Simulator<R = StdRng> {
    rng: R,
}

impl Simulator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Simulate a payment of the given type.
    ///
    /// `transaction_type` may be a [`TransactionType`] or its name; a name
    /// outside the enumeration is an `InvalidArgument`. `success_rate` is not
    /// range checked: anything `>= 1.0` always succeeds, anything `<= 0.0`
    /// never does.
    pub fn simulate_transaction<T>(
        &mut self,
        transaction_type: T,
        success_rate: f64,
    ) -> Result<SimulatedOutcome, UpiCodeError>
    where
        T: TryInto<TransactionType>,
        UpiCodeError: From<T::Error>,
    {
        let transaction_type = transaction_type.try_into()?;
        let record = self.draw(&GENERAL_ERROR_CODES, success_rate);
        Ok(Self::outcome(record, SimulatedFlow::Transaction(transaction_type)))
    }

    /// Simulate a mandate registration; failures come from the mandate table.
    pub fn simulate_mandate_registration(&mut self, success_rate: f64) -> SimulatedOutcome {
        let record = self.draw(&MANDATE_ERROR_CODES, success_rate);
        Self::outcome(record, SimulatedFlow::MandateRegistration)
    }

    fn draw(&mut self, failures_from: &CodeTable, success_rate: f64) -> CodeRecord {
        if self.rng.gen_range(0.0..1.0) < success_rate {
            return get_code_info(SUCCESS_CODE);
        }

        let failures: Vec<_> = failures_from.failures().collect();
        match failures.choose(&mut self.rng) {
            Some(record) => get_code_info(&record.code),
            // a table without failures can only succeed
            None => get_code_info(SUCCESS_CODE),
        }
    }

    fn outcome(record: CodeRecord, flow: SimulatedFlow) -> SimulatedOutcome {
        debug!(
            code = %record.code,
            status = %record.status,
            flow = %flow,
            "simulated outcome"
        );
        SimulatedOutcome { record, flow }
    }
}

/// [`Simulator::simulate_transaction`] on a fresh entropy-seeded simulator.
pub fn simulate_transaction<T>(
    transaction_type: T,
    success_rate: f64,
) -> Result<SimulatedOutcome, UpiCodeError>
where
    T: TryInto<TransactionType>,
    UpiCodeError: From<T::Error>,
{
    Simulator::from_entropy().simulate_transaction(transaction_type, success_rate)
}

/// [`Simulator::simulate_mandate_registration`] on a fresh entropy-seeded simulator.
pub fn simulate_mandate_registration(success_rate: f64) -> SimulatedOutcome {
    Simulator::from_entropy().simulate_mandate_registration(success_rate)
}
