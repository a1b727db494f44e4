use crate::error::InputError;
use log::debug;
use std::fmt;

/// Currency marker users tend to type in front of the loan amount.
pub const CURRENCY_MARKER: &str = "PHP";
/// Unit word users tend to type after the loan term.
pub const TERM_UNIT: &str = "years";

/// A single literal clean-up step applied to a raw input line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rule {
    /// remove every occurrence of the token
    RemoveAll(&'static str),
    /// strip leading and trailing whitespace
    Trim,
    /// remove the token once if the text ends with it
    TrimSuffix(&'static str),
}

impl Rule {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Rule::RemoveAll(token) => text.replace(*token, ""),
            Rule::Trim => text.trim().to_string(),
            Rule::TrimSuffix(token) => text.strip_suffix(*token).unwrap_or(text).to_string(),
        }
    }
}

const LOAN_AMOUNT_RULES: &[Rule] = &[
    Rule::RemoveAll(CURRENCY_MARKER),
    Rule::RemoveAll(","),
    Rule::Trim,
];

// the second trim lets "5.5 %" through
const INTEREST_RATE_RULES: &[Rule] = &[Rule::Trim, Rule::TrimSuffix("%"), Rule::Trim];

const LOAN_TERM_RULES: &[Rule] = &[Rule::RemoveAll(TERM_UNIT), Rule::Trim];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    LoanAmount,
    InterestRate,
    LoanTerm,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::LoanAmount => "Loan Amount",
            Field::InterestRate => "Annual Interest Rate",
            Field::LoanTerm => "Loan Term",
        };
        write!(f, "{}", name)
    }
}

impl Field {
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::LoanAmount => "Enter Loan Amount (PHP): ",
            Field::InterestRate => "Enter Annual Interest Rate (%): ",
            Field::LoanTerm => "Enter Loan Term (years): ",
        }
    }

    pub fn rules(&self) -> &'static [Rule] {
        match self {
            Field::LoanAmount => LOAN_AMOUNT_RULES,
            Field::InterestRate => INTEREST_RATE_RULES,
            Field::LoanTerm => LOAN_TERM_RULES,
        }
    }

    pub fn error(&self) -> InputError {
        match self {
            Field::LoanAmount => InputError::InvalidLoanAmount,
            Field::InterestRate => InputError::InvalidInterestRate,
            Field::LoanTerm => InputError::InvalidLoanTerm,
        }
    }

    /// Applies this field's rules in order. No parsing happens here.
    pub fn normalize(&self, raw: &str) -> String {
        let cleaned = self
            .rules()
            .iter()
            .fold(raw.to_string(), |text, rule| rule.apply(&text));
        debug!("{} normalized {:?} -> {:?}", self, raw, cleaned);
        cleaned
    }
}

// Spelled-out infinities and NaN parse as typed; anything else that
// overflows f64 (e.g. "1e400") is out of range.
fn parse_float(field: Field, raw: &str) -> Result<f64, InputError> {
    let text = field.normalize(raw);
    let value: f64 = text.parse().map_err(|_| field.error())?;
    if value.is_finite() {
        return Ok(value);
    }

    let spelled = text
        .trim_start_matches(['+', '-'])
        .to_ascii_lowercase();
    match spelled.as_str() {
        "inf" | "infinity" | "nan" => Ok(value),
        _ => {
            debug!("{} out of range: {:?}", field, text);
            Err(field.error())
        }
    }
}

pub fn parse_loan_amount(raw: &str) -> Result<f64, InputError> {
    parse_float(Field::LoanAmount, raw)
}

pub fn parse_interest_rate(raw: &str) -> Result<f64, InputError> {
    parse_float(Field::InterestRate, raw)
}

/// The term must be a whole number of years; "10.5" is rejected.
pub fn parse_loan_term(raw: &str) -> Result<i64, InputError> {
    let field = Field::LoanTerm;
    field.normalize(raw).parse().map_err(|_| field.error())
}
