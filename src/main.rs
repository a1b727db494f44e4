use loancalc::session;
use simple_logger::SimpleLogger;
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .init()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    // a rejected field has already been reported; the run still ends normally
    session::run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use loancalc::loan::{FlatRateLoan, LoanSummary};

    // verifies that types can implement the gated traits below
    fn is_normal<T: Sized + Send + Sync + Unpin>() {}

    #[test]
    fn normal_types() {
        is_normal::<FlatRateLoan>();
        is_normal::<LoanSummary>();
    }
}
