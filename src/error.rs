use thiserror::Error;

/// A field whose normalized text did not parse as the expected number.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputError {
    #[error("Invalid input for Loan Amount.")]
    InvalidLoanAmount,
    #[error("Invalid input for Annual Interest Rate.")]
    InvalidInterestRate,
    #[error("Invalid input for Loan Term.")]
    InvalidLoanTerm,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
