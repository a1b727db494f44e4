use crate::input::CURRENCY_MARKER;
use log::{info, trace, warn};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flat (simple) interest loan: interest is charged on the original
/// principal for the whole term and spread evenly across the months.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlatRateLoan {
    principal: f64,
    annual_rate: f64,
    term_years: i64,
}

impl FlatRateLoan {
    pub fn new(principal: f64, annual_rate: f64, term_years: i64) -> Self {
        Self {
            principal,
            annual_rate,
            term_years,
        }
    }

    pub fn get_principal(&self) -> f64 {
        self.principal
    }

    pub fn set_principal(&mut self, principal: f64) {
        self.principal = principal;
    }

    /// Annual rate as a percentage (5.0 means 5%).
    pub fn get_annual_rate(&self) -> f64 {
        self.annual_rate
    }

    pub fn set_annual_rate(&mut self, annual_rate: f64) {
        self.annual_rate = annual_rate;
    }

    pub fn monthly_rate(&self) -> f64 {
        get_monthly_rate(&self.annual_rate)
    }

    pub fn term_months(&self) -> i64 {
        get_term_months(&self.term_years)
    }

    pub fn total_interest(&self) -> f64 {
        get_total_interest(&self.principal, &self.monthly_rate(), &self.term_months())
    }

    /// Not guarded against a zero-month term: the division then yields
    /// infinity (or NaN for a zero principal).
    pub fn monthly_repayment(&self) -> f64 {
        get_monthly_repayment(&self.principal, &self.total_interest(), &self.term_months())
    }

    pub fn summary(&self) -> LoanSummary {
        let term_months = self.term_months();
        if term_months == 0 {
            warn!("loan term of zero months, monthly repayment is undefined");
        }

        let summary = LoanSummary {
            loan_amount: self.principal,
            annual_rate: self.annual_rate,
            monthly_rate: self.monthly_rate(),
            term_months,
            total_interest: self.total_interest(),
            monthly_repayment: self.monthly_repayment(),
        };
        info!(
            "computed summary: total interest {}, monthly repayment {}",
            summary.total_interest, summary.monthly_repayment
        );
        summary
    }
}

/// Everything derived from the three inputs. Built once by
/// [`FlatRateLoan::summary`] and never changed afterwards.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanSummary {
    pub loan_amount: f64,
    pub annual_rate: f64,
    pub monthly_rate: f64,
    pub term_months: i64,
    pub total_interest: f64,
    pub monthly_repayment: f64,
}

// Non-finite values print as Rust spells them: `inf`, `-inf`, `NaN`.
impl fmt::Display for LoanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Loan Amount: {} {:.2}", CURRENCY_MARKER, self.loan_amount)?;
        writeln!(f, "Annual Interest Rate: {:.2}%", self.annual_rate)?;
        writeln!(f, "Loan Term: {} months", self.term_months)?;
        writeln!(
            f,
            "Monthly Repayment: {} {:.2}",
            CURRENCY_MARKER, self.monthly_repayment
        )?;
        write!(
            f,
            "Total Interest: {} {:.2}",
            CURRENCY_MARKER, self.total_interest
        )
    }
}

fn get_monthly_rate(&annual_rate: &f64) -> f64 {
    let monthly_rate = (annual_rate / 100.) / 12.;
    trace!("annual rate {}%, monthly rate {}", annual_rate, monthly_rate);
    monthly_rate
}

// i64 multiply wraps rather than panicking on absurd terms
fn get_term_months(&term_years: &i64) -> i64 {
    term_years.wrapping_mul(12)
}

fn get_total_interest(&principal: &f64, &monthly_rate: &f64, &term_months: &i64) -> f64 {
    principal * monthly_rate * term_months as f64
}

fn get_monthly_repayment(&principal: &f64, &total_interest: &f64, &term_months: &i64) -> f64 {
    (principal + total_interest) / term_months as f64
}

#[cfg(test)]
mod tests {
    use super::{FlatRateLoan, LoanSummary};
    use test_log::test;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_formula_matches_closed_form() {
        for &(principal, rate, years) in &[
            (50000., 5., 10),
            (1250000.75, 6.25, 30),
            (0., 12., 1),
            (999.99, 0., 3),
            (200000., 7., 15),
        ] {
            let loan = FlatRateLoan::new(principal, rate, years);
            let monthly_rate = (rate / 100.) / 12.;
            let months = (years * 12) as f64;
            let total_interest = principal * monthly_rate * months;

            assert_eq!(loan.monthly_rate(), monthly_rate);
            assert_eq!(loan.term_months(), years * 12);
            assert_eq!(loan.total_interest(), total_interest);
            assert_eq!(
                loan.monthly_repayment(),
                (principal + total_interest) / months
            );
        }
    }

    #[test]
    fn test_reference_scenario() {
        let summary = FlatRateLoan::new(50000., 5., 10).summary();

        assert!(close(summary.monthly_rate, 0.05 / 12.));
        assert_eq!(summary.term_months, 120);
        assert!(close(summary.total_interest, 25000.));
        assert!(close(summary.monthly_repayment, 625.));
    }

    #[test]
    fn test_report_format() {
        let summary = FlatRateLoan::new(50000., 5., 10).summary();
        assert_eq!(
            summary.to_string(),
            "\nLoan Amount: PHP 50000.00\n\
             Annual Interest Rate: 5.00%\n\
             Loan Term: 120 months\n\
             Monthly Repayment: PHP 625.00\n\
             Total Interest: PHP 25000.00"
        );
    }

    #[test]
    fn test_report_rounds_to_two_places() {
        let summary = FlatRateLoan::new(12345.678, 3.333, 2).summary();
        let report = summary.to_string();
        assert!(report.contains("Loan Amount: PHP 12345.68\n"));
        assert!(report.contains("Annual Interest Rate: 3.33%\n"));
        assert!(report.contains("Loan Term: 24 months\n"));
    }

    #[test]
    fn test_zero_term_is_not_rejected() {
        let loan = FlatRateLoan::new(50000., 5., 0);
        assert_eq!(loan.term_months(), 0);
        assert_eq!(loan.total_interest(), 0.);
        assert!(loan.monthly_repayment().is_infinite());

        let empty = FlatRateLoan::new(0., 5., 0);
        assert!(empty.monthly_repayment().is_nan());

        let report = loan.summary().to_string();
        assert!(report.contains("Loan Term: 0 months\n"));
        // printed as `inf`, not `+Inf`
        assert!(report.contains("Monthly Repayment: PHP inf\n"));
    }

    #[test]
    fn test_negative_inputs_flow_through() {
        let loan = FlatRateLoan::new(1000., -12., 1);
        assert!(close(loan.total_interest(), -120.));
        assert!(close(loan.monthly_repayment(), 880. / 12.));
    }

    #[test]
    fn test_setters() {
        let mut loan = FlatRateLoan::new(1000., 10., 1);
        loan.set_principal(2000.);
        loan.set_annual_rate(12.);
        assert_eq!(loan.get_principal(), 2000.);
        assert_eq!(loan.get_annual_rate(), 12.);
        assert!(close(loan.total_interest(), 240.));
        assert!(close(loan.monthly_repayment(), 2240. / 12.));
    }

    #[test]
    fn test_summary_is_snapshot() {
        let mut loan = FlatRateLoan::new(1000., 10., 1);
        let before: LoanSummary = loan.summary();
        loan.set_principal(5000.);
        assert_eq!(before.loan_amount, 1000.);
        assert_ne!(before, loan.summary());
    }
}
