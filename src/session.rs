//! Budget session
//!
//! Owns the record sets for one run of the application and keeps a derived
//! [`BudgetSnapshot`] in step with them. Every successful add or remove
//! re-derives totals and the twelve-month projection before returning, so
//! readers never see a snapshot that lags behind the records.

use crate::audit::AuditLogger;
use crate::config::{PlannerPaths, Settings};
use crate::engine::{BudgetSnapshot, BudgetTotals, MonthProjection};
use crate::error::PlannerResult;
use crate::models::{
    ExpenseId, IncomeId, IncomeRecord, Money, Month, OneTimeExpense, OneTimeExpenseId,
    RecurringExpense, SavingsAllocation, SavingsId, TaxRate,
};
use crate::services::{ExpenseService, IncomeService, OneTimeExpenseService, SavingsService};
use crate::storage::Storage;

/// In-memory budget with an always-current snapshot
#[derive(Debug)]
pub struct BudgetSession {
    storage: Storage,
    settings: Settings,
    start_month: Month,
    snapshot: BudgetSnapshot,
}

impl BudgetSession {
    /// Create an empty session with default settings and no journal
    pub fn new(start_month: Month) -> Self {
        Self::with_storage(Storage::new(), Settings::default(), start_month)
    }

    /// Create an empty session from saved preferences
    ///
    /// The audit journal is attached when the settings enable it.
    pub fn from_settings(settings: Settings, paths: &PlannerPaths) -> Self {
        let storage = if settings.audit_enabled {
            Storage::with_audit(AuditLogger::new(paths.audit_log()))
        } else {
            Storage::new()
        };
        let start_month = settings.effective_start_month();
        Self::with_storage(storage, settings, start_month)
    }

    /// Create an empty session from preferences without journaling
    ///
    /// Used for one-shot commands whose records only live for one invocation.
    pub fn without_journal(settings: Settings) -> Self {
        let start_month = settings.effective_start_month();
        Self::with_storage(Storage::new(), settings, start_month)
    }

    fn with_storage(storage: Storage, settings: Settings, start_month: Month) -> Self {
        Self {
            storage,
            settings,
            start_month,
            snapshot: BudgetSnapshot::empty(start_month),
        }
    }

    /// Recompute totals and projection from the current records
    pub fn refresh(&mut self) -> PlannerResult<()> {
        self.snapshot = BudgetSnapshot::derive(
            self.start_month,
            &self.storage.incomes.get_all()?,
            &self.storage.expenses.get_all()?,
            &self.storage.one_time.get_all()?,
            &self.storage.savings.get_all()?,
        );
        Ok(())
    }

    pub fn snapshot(&self) -> &BudgetSnapshot {
        &self.snapshot
    }

    pub fn totals(&self) -> &BudgetTotals {
        &self.snapshot.totals
    }

    pub fn projection(&self) -> &[MonthProjection] {
        &self.snapshot.months
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn start_month(&self) -> Month {
        self.start_month
    }

    /// Re-derive after a mutation attempt, then hand back its outcome
    fn refreshed<T>(&mut self, result: PlannerResult<T>) -> PlannerResult<T> {
        self.refresh()?;
        result
    }

    /// Move the projection window and re-derive
    pub fn set_start_month(&mut self, month: Month) -> PlannerResult<()> {
        self.start_month = month;
        self.refresh()
    }

    // Income

    pub fn add_income(
        &mut self,
        gross_annual: Money,
        tax_rate: TaxRate,
    ) -> PlannerResult<IncomeRecord> {
        let result = IncomeService::new(&self.storage).add(gross_annual, tax_rate);
        self.refreshed(result)
    }

    pub fn add_income_from_input(&mut self, gross: &str, tax: &str) -> PlannerResult<IncomeRecord> {
        let result = IncomeService::new(&self.storage).add_from_input(gross, tax);
        self.refreshed(result)
    }

    pub fn remove_income(&mut self, id: IncomeId) -> PlannerResult<bool> {
        let result = IncomeService::new(&self.storage).remove(id);
        self.refreshed(result)
    }

    pub fn incomes(&self) -> PlannerResult<Vec<IncomeRecord>> {
        IncomeService::new(&self.storage).list()
    }

    // Recurring expenses

    pub fn add_expense(
        &mut self,
        category: &str,
        monthly_amount: Money,
    ) -> PlannerResult<RecurringExpense> {
        let result = ExpenseService::new(&self.storage).add(category, monthly_amount);
        self.refreshed(result)
    }

    pub fn add_expense_from_input(
        &mut self,
        category: &str,
        amount: &str,
    ) -> PlannerResult<RecurringExpense> {
        let result = ExpenseService::new(&self.storage).add_from_input(category, amount);
        self.refreshed(result)
    }

    pub fn remove_expense(&mut self, id: ExpenseId) -> PlannerResult<bool> {
        let result = ExpenseService::new(&self.storage).remove(id);
        self.refreshed(result)
    }

    pub fn expenses(&self) -> PlannerResult<Vec<RecurringExpense>> {
        ExpenseService::new(&self.storage).list()
    }

    // One-time expenses

    pub fn add_one_time(
        &mut self,
        category: &str,
        amount: Money,
        month: Month,
    ) -> PlannerResult<OneTimeExpense> {
        let result = OneTimeExpenseService::new(&self.storage).add(category, amount, month);
        self.refreshed(result)
    }

    pub fn add_one_time_from_input(
        &mut self,
        category: &str,
        amount: &str,
        month: Option<Month>,
    ) -> PlannerResult<OneTimeExpense> {
        let result =
            OneTimeExpenseService::new(&self.storage).add_from_input(category, amount, month);
        self.refreshed(result)
    }

    pub fn remove_one_time(&mut self, id: OneTimeExpenseId) -> PlannerResult<bool> {
        let result = OneTimeExpenseService::new(&self.storage).remove(id);
        self.refreshed(result)
    }

    pub fn one_time_expenses(&self) -> PlannerResult<Vec<OneTimeExpense>> {
        OneTimeExpenseService::new(&self.storage).list()
    }

    // Savings

    pub fn add_savings(
        &mut self,
        category: &str,
        monthly_amount: Money,
    ) -> PlannerResult<SavingsAllocation> {
        let result = SavingsService::new(&self.storage).add(category, monthly_amount);
        self.refreshed(result)
    }

    pub fn add_savings_from_input(
        &mut self,
        category: &str,
        amount: &str,
    ) -> PlannerResult<SavingsAllocation> {
        let result = SavingsService::new(&self.storage).add_from_input(category, amount);
        self.refreshed(result)
    }

    pub fn remove_savings(&mut self, id: SavingsId) -> PlannerResult<bool> {
        let result = SavingsService::new(&self.storage).remove(id);
        self.refreshed(result)
    }

    pub fn savings(&self) -> PlannerResult<Vec<SavingsAllocation>> {
        SavingsService::new(&self.storage).list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reference_scenario() {
        let mut session = BudgetSession::new(Month::Jan);
        session
            .add_income(Money::from_dollars(120_000), TaxRate::from_percent(20).unwrap())
            .unwrap();
        assert_eq!(session.totals().total_monthly_income, Money::from_dollars(8000));

        session.add_expense("Housing", Money::from_dollars(2000)).unwrap();
        session.add_expense("Car", Money::from_dollars(500)).unwrap();
        assert_eq!(session.totals().total_monthly_expenses, Money::from_dollars(2500));
        assert_eq!(session.totals().remaining_monthly_budget, Money::from_dollars(5500));

        session
            .add_one_time("Gifts", Money::from_dollars(300), Month::Dec)
            .unwrap();
        assert_eq!(session.totals().total_annual_expenses, Money::from_dollars(30_300));
        assert_eq!(
            session.projection()[11].expenses_by_category.get("Gifts"),
            Money::from_dollars(300)
        );
    }

    #[test]
    fn test_snapshot_follows_removal() {
        let mut session = BudgetSession::new(Month::Jan);
        let housing = session.add_expense("Housing", Money::from_dollars(2000)).unwrap();
        session.add_savings("Crypto", Money::from_dollars(50)).unwrap();

        assert!(session.remove_expense(housing.id).unwrap());
        assert!(session.totals().total_monthly_expenses.is_zero());
        assert_eq!(session.totals().remaining_monthly_budget, Money::from_dollars(-50));
    }

    #[test]
    fn test_rejected_add_leaves_snapshot_unchanged() {
        let mut session = BudgetSession::new(Month::Jan);
        session.add_expense("Housing", Money::from_dollars(2000)).unwrap();
        let before = session.snapshot().clone();

        assert!(session.add_expense_from_input("", "100").is_err());
        assert!(session.add_one_time_from_input("Gifts", "300", None).is_err());
        assert!(session.add_income_from_input("lots", "20").is_err());
        assert_eq!(session.snapshot(), &before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut session = BudgetSession::new(Month::Jan);
        session.add_savings("Crypto", Money::from_dollars(50)).unwrap();
        let before = session.snapshot().clone();

        assert!(!session.remove_savings(SavingsId::new()).unwrap());
        assert!(!session.remove_income(IncomeId::new()).unwrap());
        assert_eq!(session.snapshot(), &before);
    }

    #[test]
    fn test_start_month_moves_window() {
        let mut session = BudgetSession::new(Month::Jan);
        session
            .add_one_time("School", Money::from_dollars(400), Month::Jan)
            .unwrap();
        session.set_start_month(Month::Nov).unwrap();

        assert_eq!(session.projection()[0].month, Month::Nov);
        assert_eq!(
            session.projection()[2].expenses_by_category.get("School"),
            Money::from_dollars(400)
        );
    }

    #[test]
    fn test_from_settings_attaches_journal() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            start_month: Some(Month::Mar),
            ..Settings::default()
        };

        let mut session = BudgetSession::from_settings(settings, &paths);
        assert_eq!(session.start_month(), Month::Mar);
        session.add_expense("Car", Money::from_dollars(500)).unwrap();

        let logger = session.storage().audit_logger().unwrap();
        assert_eq!(logger.entry_count().unwrap(), 1);
    }

    #[test]
    fn test_unwritable_journal_rejects_add() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::create_dir_all(paths.audit_log()).unwrap();

        let mut session = BudgetSession::from_settings(Settings::default(), &paths);
        let before = session.snapshot().clone();

        assert!(session.add_expense("Car", Money::from_dollars(500)).is_err());
        assert!(session.expenses().unwrap().is_empty());
        assert!(session.totals().total_monthly_expenses.is_zero());
        assert_eq!(session.snapshot(), &before);
    }

    #[test]
    fn test_unwritable_journal_rejects_remove() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut session = BudgetSession::from_settings(Settings::default(), &paths);
        let car = session.add_expense("Car", Money::from_dollars(500)).unwrap();

        std::fs::remove_file(paths.audit_log()).unwrap();
        std::fs::create_dir(paths.audit_log()).unwrap();

        assert!(session.remove_expense(car.id).is_err());
        assert_eq!(session.expenses().unwrap(), vec![car]);
        assert_eq!(
            session.totals().total_monthly_expenses,
            Money::from_dollars(500)
        );
    }

    #[test]
    fn test_from_settings_without_journal() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };

        let mut session = BudgetSession::from_settings(settings, &paths);
        session.add_expense("Car", Money::from_dollars(500)).unwrap();
        assert!(!paths.audit_log().exists());
    }
}
