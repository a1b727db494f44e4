//! The interactive flow: three prompted reads, then either the report or
//! the diagnostic for the first field that failed to parse.

use crate::error::SessionError;
use crate::input::{parse_interest_rate, parse_loan_amount, parse_loan_term, Field};
use crate::loan::{FlatRateLoan, LoanSummary};
use log::{debug, trace};
use std::io::{self, BufRead, Write};

/// Writes the field's prompt and blocks for one line of input.
/// End of input reads as an empty line; bytes that are not UTF-8 are
/// replaced so they fail the field's parse instead of the read.
pub fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: Field,
) -> io::Result<String> {
    write!(output, "{}", field.prompt())?;
    output.flush()?;

    let mut buf = Vec::new();
    let read = input.read_until(b'\n', &mut buf)?;
    trace!("{}: read {} bytes", field, read);
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Reads and parses all three fields, stopping at the first failure.
pub fn collect<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<FlatRateLoan, SessionError> {
    let principal = parse_loan_amount(&read_field(input, output, Field::LoanAmount)?)?;
    let annual_rate = parse_interest_rate(&read_field(input, output, Field::InterestRate)?)?;
    let term_years = parse_loan_term(&read_field(input, output, Field::LoanTerm)?)?;

    Ok(FlatRateLoan::new(principal, annual_rate, term_years))
}

/// Runs one calculation. An input error is reported on `output` and
/// yields `Ok(None)`; only stream failures come back as `Err`.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<LoanSummary>> {
    match collect(input, output) {
        Ok(loan) => {
            let summary = loan.summary();
            writeln!(output, "{}", summary)?;
            Ok(Some(summary))
        }
        Err(SessionError::Input(e)) => {
            debug!("aborting: {:?}", e);
            writeln!(output, "{}", e)?;
            Ok(None)
        }
        Err(SessionError::Io(e)) => Err(e),
    }
}
