use thiserror::Error;

use crate::{BudgetAction, BudgetState, DraftExpense, Expense};

/// Reasons the expense form refuses to submit
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpenseFormError {
    #[error("Todos los campos son obligatorios")]
    MissingFields,
    #[error("El gasto supera el presupuesto disponible")]
    OverBudget,
}

/// Local state of the expense form: the draft being edited, the last
/// validation error, and the amount the record had before editing started.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseFormState {
    pub draft: DraftExpense,
    /// Raw text of the amount input, kept so partial input like `"12."` survives re-renders
    pub amount_input: String,
    pub error: Option<ExpenseFormError>,
    pub previous_amount: f64,
}

impl ExpenseFormState {
    /// Load the expense named by `editing_id` into the draft.
    ///
    /// Leaves the form untouched when the id is unknown.
    pub fn begin_edit(&mut self, state: &BudgetState, editing_id: &str) {
        if let Some(expense) = state.find_expense(editing_id) {
            self.draft = expense.to_draft();
            self.amount_input = expense.amount.to_string();
            self.previous_amount = expense.amount;
        }
    }

    pub fn set_expense_name(&mut self, value: String) {
        self.draft.expense_name = value;
    }

    /// Amount input handler; blank, unparsable or non-finite input becomes 0
    pub fn set_amount(&mut self, raw: &str) {
        self.draft.amount = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .unwrap_or(0.0);
        self.amount_input = raw.to_string();
    }

    pub fn set_category(&mut self, value: String) {
        self.draft.category = value;
    }

    pub fn set_date(&mut self, value: Option<chrono::NaiveDate>) {
        self.draft.date = value;
    }

    /// Check the draft against the required fields and the remaining budget
    pub fn validate(&self, remaining_budget: f64) -> Result<(), ExpenseFormError> {
        if self.draft.has_empty_field() {
            return Err(ExpenseFormError::MissingFields);
        }
        if self.draft.amount - self.previous_amount > remaining_budget {
            return Err(ExpenseFormError::OverBudget);
        }
        Ok(())
    }

    /// Validate and build the action to dispatch.
    ///
    /// On success the form is reset to its empty defaults; on failure the
    /// draft is kept and the error recorded.
    pub fn submit(&mut self, editing_id: Option<&str>, remaining_budget: f64) -> Option<BudgetAction> {
        if let Err(error) = self.validate(remaining_budget) {
            self.error = Some(error);
            return None;
        }

        let draft = std::mem::take(&mut self.draft);
        let action = match editing_id {
            Some(id) => match Expense::with_id(id.to_string(), draft) {
                Some(expense) => BudgetAction::UpdateExpense { expense },
                None => {
                    self.error = Some(ExpenseFormError::MissingFields);
                    return None;
                }
            },
            None => BudgetAction::AddExpense { expense: draft },
        };

        self.amount_input.clear();
        self.previous_amount = 0.0;
        self.error = None;
        Some(action)
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Action for the category filter dropdown; an empty id clears the filter
pub fn filter_category_action(selected: &str) -> BudgetAction {
    BudgetAction::AddFilterCategory {
        id: selected.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled_draft() -> DraftExpense {
        DraftExpense {
            amount: 50.0,
            expense_name: "Gimnasio".to_string(),
            category: "6".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 4, 10),
        }
    }

    fn stored(id: &str, amount: f64) -> Expense {
        Expense::with_id(id.to_string(), DraftExpense { amount, ..filled_draft() }).unwrap()
    }

    #[test]
    fn test_empty_field_rejects_without_dispatch() {
        let drafts = [
            DraftExpense { amount: 0.0, ..filled_draft() },
            DraftExpense { expense_name: String::new(), ..filled_draft() },
            DraftExpense { category: String::new(), ..filled_draft() },
            DraftExpense { date: None, ..filled_draft() },
        ];

        for draft in drafts {
            let mut form = ExpenseFormState { draft: draft.clone(), ..Default::default() };
            assert_eq!(form.submit(None, 1000.0), None);
            assert_eq!(form.error, Some(ExpenseFormError::MissingFields));
            assert_eq!(form.error_message().as_deref(), Some("Todos los campos son obligatorios"));
            assert_eq!(form.draft, draft);
        }
    }

    #[test]
    fn test_missing_fields_checked_before_budget() {
        let mut form = ExpenseFormState {
            draft: DraftExpense { expense_name: String::new(), amount: 9999.0, ..filled_draft() },
            ..Default::default()
        };
        assert_eq!(form.submit(None, 10.0), None);
        assert_eq!(form.error, Some(ExpenseFormError::MissingFields));
    }

    #[test]
    fn test_create_over_budget_rejects() {
        let mut form = ExpenseFormState { draft: filled_draft(), ..Default::default() };
        assert_eq!(form.submit(None, 49.99), None);
        assert_eq!(form.error_message().as_deref(), Some("El gasto supera el presupuesto disponible"));
        assert_eq!(form.draft, filled_draft());
    }

    #[test]
    fn test_create_within_budget_dispatches_and_resets() {
        let mut form = ExpenseFormState {
            draft: filled_draft(),
            error: Some(ExpenseFormError::OverBudget),
            ..Default::default()
        };

        let action = form.submit(None, 50.0);
        assert_eq!(action, Some(BudgetAction::AddExpense { expense: filled_draft() }));

        assert!(form.draft.amount == 0.0);
        assert!(form.draft.expense_name.is_empty());
        assert!(form.draft.category.is_empty());
        assert!(form.draft.date.is_some());
        assert!(form.amount_input.is_empty());
        assert_eq!(form.previous_amount, 0.0);
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_begin_edit_loads_record() {
        let state = BudgetState::restored(500.0, vec![stored("a", 20.0), stored("b", 75.0)]);
        let mut form = ExpenseFormState::default();

        form.begin_edit(&state, "b");
        assert_eq!(form.draft, state.expenses[1].to_draft());
        assert_eq!(form.amount_input, "75");
        assert_eq!(form.previous_amount, 75.0);

        let before = form.clone();
        form.begin_edit(&state, "missing");
        assert_eq!(form, before);
    }

    #[test]
    fn test_edit_uses_delta_against_remaining() {
        let state = BudgetState::restored(500.0, vec![stored("a", 100.0)]);
        let mut form = ExpenseFormState::default();
        form.begin_edit(&state, "a");

        // Raising 100 -> 130 needs 30 of headroom
        form.set_amount("130");
        assert_eq!(form.submit(Some("a"), 29.0), None);
        assert_eq!(form.error, Some(ExpenseFormError::OverBudget));

        let action = form.submit(Some("a"), 30.0);
        let expected = Expense::with_id(
            "a".to_string(),
            DraftExpense { amount: 130.0, ..filled_draft() },
        )
        .unwrap();
        assert_eq!(action, Some(BudgetAction::UpdateExpense { expense: expected }));
        assert_eq!(form.previous_amount, 0.0);
    }

    #[test]
    fn test_edit_lowering_amount_with_no_remaining_budget() {
        let state = BudgetState::restored(500.0, vec![stored("a", 100.0)]);
        let mut form = ExpenseFormState::default();
        form.begin_edit(&state, "a");
        form.set_amount("60");

        assert!(matches!(form.submit(Some("a"), 0.0), Some(BudgetAction::UpdateExpense { .. })));
    }

    #[test]
    fn test_field_setters() {
        let mut form = ExpenseFormState::default();
        form.set_expense_name("Cena".to_string());
        form.set_category("2".to_string());
        form.set_amount(" 12.75 ");
        form.set_date(None);

        assert_eq!(form.draft.expense_name, "Cena");
        assert_eq!(form.draft.category, "2");
        assert_eq!(form.draft.amount, 12.75);
        assert_eq!(form.amount_input, " 12.75 ");
        assert_eq!(form.draft.date, None);

        form.set_amount("");
        assert_eq!(form.draft.amount, 0.0);
        form.set_amount("abc");
        assert_eq!(form.draft.amount, 0.0);
    }

    #[test]
    fn test_non_finite_amount_never_dispatches() {
        let mut state = BudgetState::default().apply(BudgetAction::AddBudget { budget: 100.0 });

        for raw in ["NaN", "inf", "-inf", "infinity"] {
            let mut form = ExpenseFormState { draft: filled_draft(), ..Default::default() };
            form.set_amount(raw);
            assert_eq!(form.draft.amount, 0.0);
            assert_eq!(form.amount_input, raw);
            assert_eq!(form.submit(None, state.remaining_budget()), None);
            assert_eq!(form.error, Some(ExpenseFormError::MissingFields));
        }

        // A NaN that slips past the input handler is still rejected
        let mut form = ExpenseFormState {
            draft: DraftExpense { amount: f64::NAN, ..filled_draft() },
            ..Default::default()
        };
        assert_eq!(form.submit(None, state.remaining_budget()), None);
        assert_eq!(state.remaining_budget(), 100.0);

        // The budget check keeps working after rejected input
        let mut form = ExpenseFormState { draft: filled_draft(), ..Default::default() };
        form.set_amount("1000000");
        assert_eq!(form.submit(None, state.remaining_budget()), None);
        assert_eq!(form.error, Some(ExpenseFormError::OverBudget));

        form.set_amount("60");
        let action = form.submit(None, state.remaining_budget());
        assert!(matches!(action, Some(BudgetAction::AddExpense { .. })));
        if let Some(action) = action {
            state = state.apply(action);
        }
        assert_eq!(state.remaining_budget(), 40.0);
    }

    #[test]
    fn test_filter_category_action() {
        assert_eq!(
            filter_category_action("3"),
            BudgetAction::AddFilterCategory { id: "3".to_string() }
        );
        assert_eq!(
            filter_category_action(""),
            BudgetAction::AddFilterCategory { id: String::new() }
        );
    }
}
