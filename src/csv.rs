//! CSV rendering of records, outcomes and advice.

use serde::Serialize;
use std::io;
use thiserror::Error;

use crate::lookup::EdgeCaseAdvice;
use crate::model::{CodeRecord, DisputeRecord, Status};
use crate::simulate::{SimulatedFlow, SimulatedOutcome};

/// Errors that can occur when writing csv rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to write csv row: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush csv writer: {0}")]
    Flush(#[from] io::Error),
}

#[derive(Debug, Serialize)]
struct OutcomeRow<'a> {
    flow: SimulatedFlow,
    code: &'a str,
    description: &'a str,
    category: &'a str,
    status: Status,
    handling: &'a str,
}

impl<'a> From<&'a SimulatedOutcome> for OutcomeRow<'a> {
    fn from(outcome: &'a SimulatedOutcome) -> Self {
        let record = &outcome.record;
        Self {
            flow: outcome.flow,
            code: &record.code,
            description: record.description,
            category: record.category,
            status: record.status,
            handling: record.handling,
        }
    }
}

fn write_rows<W, T>(writer: W, rows: impl IntoIterator<Item = T>) -> Result<(), CsvError>
where
    W: io::Write,
    T: Serialize,
{
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write code records with a `code,description,category,status,handling` header.
pub fn write_code_records<'a>(
    writer: impl io::Write,
    records: impl IntoIterator<Item = &'a CodeRecord>,
) -> Result<(), CsvError> {
    write_rows(writer, records)
}

/// Write dispute records with a `code,description,dispute_type,tat,flag` header.
pub fn write_dispute_records<'a>(
    writer: impl io::Write,
    records: impl IntoIterator<Item = &'a DisputeRecord>,
) -> Result<(), CsvError> {
    write_rows(writer, records)
}

/// Write simulated outcomes, prefixed with a `flow` column.
pub fn write_outcomes<'a>(
    writer: impl io::Write,
    outcomes: impl IntoIterator<Item = &'a SimulatedOutcome>,
) -> Result<(), CsvError> {
    write_rows(writer, outcomes.into_iter().map(OutcomeRow::from))
}

/// Write `code,suggested_action` rows.
pub fn write_advice<'a>(
    writer: impl io::Write,
    advice: impl IntoIterator<Item = &'a EdgeCaseAdvice>,
) -> Result<(), CsvError> {
    write_rows(writer, advice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{get_code_info, get_dispute_info, handle_edge_case};
    use crate::model::TransactionType;

    fn render(write: impl FnOnce(&mut Vec<u8>) -> Result<(), CsvError>) -> String {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn write_code_record() {
        let record = get_code_info("091");
        let out = render(|buf| write_code_records(buf, [&record]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "code,description,category,status,handling");
        assert_eq!(
            lines[1],
            "091,\"Transaction timed out, final status awaited from the bank\",Technical,Pending,Check transaction status before retrying."
        );
    }

    #[test]
    fn write_unknown_record() {
        let record = get_code_info("q1");
        let out = render(|buf| write_code_records(buf, [&record]));
        assert_eq!(out.lines().nth(1), Some("Q1,Unknown,Technical,Rejected,Contact support"));
    }

    #[test]
    fn write_dispute_record() {
        let record = get_dispute_info("U02");
        let out = render(|buf| write_dispute_records(buf, [&record]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "code,description,dispute_type,tat,flag");
        assert_eq!(lines[1], "U02,Duplicate processing,Chargeback,T+15,U02");
    }

    #[test]
    fn write_outcome_includes_flow() {
        let outcome = SimulatedOutcome {
            record: get_code_info("00"),
            flow: SimulatedFlow::Transaction(TransactionType::Asba),
        };
        let mandate = SimulatedOutcome {
            record: get_code_info("AP30"),
            flow: SimulatedFlow::MandateRegistration,
        };
        let out = render(|buf| write_outcomes(buf, [&outcome, &mandate]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "flow,code,description,category,status,handling");
        assert!(lines[1].starts_with("ASBA,00,Transaction approved,Success,Success,"));
        assert!(lines[2].starts_with("Mandate Registration,AP30,"));
    }

    #[test]
    fn write_advice_rows() {
        let advice = handle_edge_case("XY");
        let out = render(|buf| write_advice(buf, [&advice]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "code,suggested_action");
        assert_eq!(lines[1], "XY,Retry later. Retry after a short delay.");
    }

    #[test]
    fn write_no_rows_writes_nothing() {
        let out = render(|buf| write_code_records(buf, std::iter::empty()));
        assert!(out.is_empty());
    }
}
