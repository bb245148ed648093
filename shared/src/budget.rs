use crate::{DraftExpense, Expense};

/// Everything the budget planner knows: the budget itself, recorded
/// expenses, and the UI selections that depend on them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BudgetState {
    pub budget: f64,
    /// Whether the expense modal is open
    pub modal: bool,
    pub expenses: Vec<Expense>,
    /// Expense currently loaded into the form for editing
    pub editing_id: Option<String>,
    /// Category filter, empty string means all categories
    pub current_category: String,
}

/// State transitions requested by the views
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetAction {
    AddBudget { budget: f64 },
    ShowModal,
    CloseModal,
    AddExpense { expense: DraftExpense },
    RemoveExpense { id: String },
    GetExpenseById { id: String },
    UpdateExpense { expense: Expense },
    ResetApp,
    AddFilterCategory { id: String },
}

impl BudgetAction {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            BudgetAction::AddBudget { .. } => "add-budget",
            BudgetAction::ShowModal => "show-modal",
            BudgetAction::CloseModal => "close-modal",
            BudgetAction::AddExpense { .. } => "add-expense",
            BudgetAction::RemoveExpense { .. } => "remove-expense",
            BudgetAction::GetExpenseById { .. } => "get-expense-by-id",
            BudgetAction::UpdateExpense { .. } => "update-expense",
            BudgetAction::ResetApp => "reset-app",
            BudgetAction::AddFilterCategory { .. } => "add-filter-category",
        }
    }
}

impl BudgetState {
    /// Initial state built from persisted values
    pub fn restored(budget: f64, expenses: Vec<Expense>) -> Self {
        Self {
            budget,
            expenses,
            ..Self::default()
        }
    }

    /// Apply an action and return the next state
    pub fn apply(&self, action: BudgetAction) -> BudgetState {
        let mut next = self.clone();
        match action {
            BudgetAction::AddBudget { budget } => {
                next.budget = budget;
            }
            BudgetAction::ShowModal => {
                next.modal = true;
            }
            BudgetAction::CloseModal => {
                next.modal = false;
                next.editing_id = None;
            }
            BudgetAction::AddExpense { expense } => {
                if let Some(expense) = Expense::from_draft(expense) {
                    next.expenses.push(expense);
                    next.modal = false;
                }
            }
            BudgetAction::RemoveExpense { id } => {
                next.expenses.retain(|expense| expense.id != id);
                if next.editing_id.as_deref() == Some(id.as_str()) {
                    next.editing_id = None;
                }
            }
            BudgetAction::GetExpenseById { id } => {
                next.editing_id = Some(id);
                next.modal = true;
            }
            BudgetAction::UpdateExpense { expense } => {
                if let Some(existing) = next.expenses.iter_mut().find(|e| e.id == expense.id) {
                    *existing = expense;
                }
                next.modal = false;
                next.editing_id = None;
            }
            BudgetAction::ResetApp => {
                next.budget = 0.0;
                next.expenses.clear();
                next.editing_id = None;
                next.current_category.clear();
            }
            BudgetAction::AddFilterCategory { id } => {
                next.current_category = id;
            }
        }
        next
    }

    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn remaining_budget(&self) -> f64 {
        self.budget - self.total_expenses()
    }

    /// Share of the budget already spent, as a percentage with two decimals
    pub fn spent_percentage(&self) -> f64 {
        if self.budget <= 0.0 {
            return 0.0;
        }
        let percentage = self.total_expenses() / self.budget * 100.0;
        (percentage * 100.0).round() / 100.0
    }

    pub fn is_valid_budget(&self) -> bool {
        self.budget > 0.0
    }

    /// Expenses matching the current category filter
    pub fn filtered_expenses(&self) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|expense| {
                self.current_category.is_empty() || expense.category == self.current_category
            })
            .collect()
    }

    pub fn find_expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }
}
