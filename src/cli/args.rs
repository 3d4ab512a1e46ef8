//! Record flags shared by the one-shot commands
//!
//! Each flag is split into its raw parts here; amounts, tax rates and months
//! are validated by the services when the session is built, exactly as they
//! would be in the terminal UI.

use clap::Args;

use crate::config::Settings;
use crate::error::{PlannerError, PlannerResult};
use crate::models::Month;
use crate::session::BudgetSession;

/// A `--income GROSS[:TAX]` flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeFlag {
    pub gross: String,
    pub tax: String,
}

/// A `--expense` or `--savings` `CATEGORY=AMOUNT` flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFlag {
    pub category: String,
    pub amount: String,
}

/// A `--one-time CATEGORY=AMOUNT@MONTH` flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimeFlag {
    pub category: String,
    pub amount: String,
    pub month: String,
}

/// Records for a single invocation
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// Salary as gross annual amount with optional tax rate, e.g. 120000:20
    #[arg(long = "income", value_name = "GROSS[:TAX]", value_parser = parse_income_flag)]
    pub incomes: Vec<IncomeFlag>,

    /// Monthly recurring expense, e.g. Housing=2000
    #[arg(long = "expense", value_name = "CATEGORY=AMOUNT", value_parser = parse_category_flag)]
    pub expenses: Vec<CategoryFlag>,

    /// Annual one-time expense in a calendar month, e.g. Gifts=300@Dec
    #[arg(
        long = "one-time",
        value_name = "CATEGORY=AMOUNT@MONTH",
        value_parser = parse_one_time_flag
    )]
    pub one_time: Vec<OneTimeFlag>,

    /// Monthly savings allocation, e.g. Investment=500
    #[arg(long = "savings", value_name = "CATEGORY=AMOUNT", value_parser = parse_category_flag)]
    pub savings: Vec<CategoryFlag>,

    /// First month of the projection window (defaults to the configured or current month)
    #[arg(long, value_name = "MONTH", value_parser = parse_month)]
    pub start_month: Option<Month>,
}

impl RecordArgs {
    /// Whether no records were given
    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty()
            && self.expenses.is_empty()
            && self.one_time.is_empty()
            && self.savings.is_empty()
    }

    /// Build an unjournaled session holding these records
    ///
    /// The first invalid flag aborts with a validation error.
    pub fn build_session(&self, settings: &Settings) -> PlannerResult<BudgetSession> {
        let mut session = BudgetSession::without_journal(settings.clone());
        self.populate(&mut session)?;
        Ok(session)
    }

    /// Add these records to an existing session
    pub fn populate(&self, session: &mut BudgetSession) -> PlannerResult<()> {
        if let Some(month) = self.start_month {
            session.set_start_month(month)?;
        }

        for income in &self.incomes {
            session.add_income_from_input(&income.gross, &income.tax)?;
        }
        for expense in &self.expenses {
            session.add_expense_from_input(&expense.category, &expense.amount)?;
        }
        for expense in &self.one_time {
            let month = expense
                .month
                .parse::<Month>()
                .map_err(|e| PlannerError::Validation(e.to_string()))?;
            session.add_one_time_from_input(&expense.category, &expense.amount, Some(month))?;
        }
        for saving in &self.savings {
            session.add_savings_from_input(&saving.category, &saving.amount)?;
        }

        Ok(())
    }
}

/// Parse `GROSS[:TAX]`; a missing tax rate means 0%
pub fn parse_income_flag(s: &str) -> Result<IncomeFlag, String> {
    match s.rsplit_once(':') {
        Some((gross, tax)) => Ok(IncomeFlag {
            gross: gross.to_string(),
            tax: tax.to_string(),
        }),
        None => Ok(IncomeFlag {
            gross: s.to_string(),
            tax: "0".to_string(),
        }),
    }
}

/// Parse `CATEGORY=AMOUNT`
pub fn parse_category_flag(s: &str) -> Result<CategoryFlag, String> {
    let (category, amount) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected CATEGORY=AMOUNT, got '{}'", s))?;
    Ok(CategoryFlag {
        category: category.to_string(),
        amount: amount.to_string(),
    })
}

/// Parse `CATEGORY=AMOUNT@MONTH`
pub fn parse_one_time_flag(s: &str) -> Result<OneTimeFlag, String> {
    let (rest, month) = s
        .rsplit_once('@')
        .ok_or_else(|| format!("expected CATEGORY=AMOUNT@MONTH, got '{}'", s))?;
    let flag = parse_category_flag(rest)
        .map_err(|_| format!("expected CATEGORY=AMOUNT@MONTH, got '{}'", s))?;
    Ok(OneTimeFlag {
        category: flag.category,
        amount: flag.amount,
        month: month.to_string(),
    })
}

/// Parse a month name, label or number
pub fn parse_month(s: &str) -> Result<Month, String> {
    s.parse::<Month>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_parse_income_flag() {
        assert_eq!(
            parse_income_flag("120000:20").unwrap(),
            IncomeFlag {
                gross: "120000".into(),
                tax: "20".into()
            }
        );
        assert_eq!(parse_income_flag("50000").unwrap().tax, "0");
    }

    #[test]
    fn test_parse_category_flag() {
        let flag = parse_category_flag("Debt Repayment=250.50").unwrap();
        assert_eq!(flag.category, "Debt Repayment");
        assert_eq!(flag.amount, "250.50");
        assert!(parse_category_flag("Housing").is_err());
    }

    #[test]
    fn test_parse_one_time_flag() {
        let flag = parse_one_time_flag("Gifts=300@Dec").unwrap();
        assert_eq!(flag.category, "Gifts");
        assert_eq!(flag.amount, "300");
        assert_eq!(flag.month, "Dec");
        assert!(parse_one_time_flag("Gifts=300").is_err());
        assert!(parse_one_time_flag("Gifts@Dec").is_err());
    }

    #[test]
    fn test_build_session() {
        let args = RecordArgs {
            incomes: vec![parse_income_flag("120000:20").unwrap()],
            expenses: vec![
                parse_category_flag("Housing=2000").unwrap(),
                parse_category_flag("Car=500").unwrap(),
            ],
            one_time: vec![parse_one_time_flag("Gifts=300@Dec").unwrap()],
            savings: vec![],
            start_month: Some(Month::Nov),
        };

        let session = args.build_session(&Settings::default()).unwrap();
        assert_eq!(session.start_month(), Month::Nov);
        assert_eq!(session.totals().remaining_monthly_budget, Money::from_dollars(5500));
        assert_eq!(session.totals().total_annual_expenses, Money::from_dollars(30_300));
        assert!(session.storage().audit_logger().is_none());
    }

    #[test]
    fn test_build_session_rejects_invalid() {
        let args = RecordArgs {
            one_time: vec![parse_one_time_flag("Gifts=300@Smarch").unwrap()],
            ..RecordArgs::default()
        };
        assert!(args
            .build_session(&Settings::default())
            .unwrap_err()
            .is_validation());

        let args = RecordArgs {
            expenses: vec![parse_category_flag("Car=-5").unwrap()],
            ..RecordArgs::default()
        };
        assert!(args
            .build_session(&Settings::default())
            .unwrap_err()
            .is_validation());
    }
}
