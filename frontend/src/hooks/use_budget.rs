use std::rc::Rc;

use yew::prelude::*;
use shared::{BudgetAction, BudgetState, Expense};

use crate::config::{BUDGET_STORAGE_KEY, EXPENSES_STORAGE_KEY};
use crate::services::logging::Logger;
use crate::services::storage;

/// Reducer wrapper so the shared state can drive `use_reducer`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BudgetStore(pub BudgetState);

impl Reducible for BudgetStore {
    type Action = BudgetAction;

    fn reduce(self: Rc<Self>, action: BudgetAction) -> Rc<Self> {
        Rc::new(BudgetStore(self.0.apply(action)))
    }
}

impl BudgetStore {
    /// Restore budget and expenses from localStorage, falling back to empty values
    pub fn load() -> Self {
        let budget = storage::load::<f64>(BUDGET_STORAGE_KEY)
            .unwrap_or_else(|e| {
                Logger::warn_with_component("BudgetStore", &format!("{:#}", e));
                None
            })
            .unwrap_or(0.0);

        let expenses = storage::load::<Vec<Expense>>(EXPENSES_STORAGE_KEY)
            .unwrap_or_else(|e| {
                Logger::warn_with_component("BudgetStore", &format!("{:#}", e));
                None
            })
            .unwrap_or_default();

        BudgetStore(BudgetState::restored(budget, expenses))
    }

    fn persist(budget: f64, expenses: &[Expense]) {
        let result = storage::save(BUDGET_STORAGE_KEY, &budget)
            .and_then(|_| storage::save(EXPENSES_STORAGE_KEY, &expenses));
        if let Err(e) = result {
            Logger::error_with_component("BudgetStore", &format!("{:#}", e));
        }
    }
}

pub type BudgetContext = UseReducerHandle<BudgetStore>;

#[derive(Properties, PartialEq)]
pub struct BudgetProviderProps {
    pub children: Children,
}

/// Owns the budget store and shares it with every descendant
#[function_component(BudgetProvider)]
pub fn budget_provider(props: &BudgetProviderProps) -> Html {
    let store = use_reducer(BudgetStore::load);

    // Save whenever the persisted part of the state changes
    {
        let persisted = (store.0.budget, store.0.expenses.clone());
        use_effect_with(persisted, move |(budget, expenses)| {
            BudgetStore::persist(*budget, expenses);
            || ()
        });
    }

    html! {
        <ContextProvider<BudgetContext> context={store}>
            {props.children.clone()}
        </ContextProvider<BudgetContext>>
    }
}

#[derive(Clone, PartialEq)]
pub struct UseBudgetResult {
    pub state: BudgetState,
    pub dispatch: Callback<BudgetAction>,
    pub total_expenses: f64,
    pub remaining_budget: f64,
}

impl UseBudgetResult {
    fn from_state(state: BudgetState, dispatch: Callback<BudgetAction>) -> Self {
        Self {
            total_expenses: state.total_expenses(),
            remaining_budget: state.remaining_budget(),
            state,
            dispatch,
        }
    }
}

/// Access the budget store provided by [`BudgetProvider`]
#[hook]
pub fn use_budget() -> UseBudgetResult {
    match use_context::<BudgetContext>() {
        Some(store) => {
            let dispatcher = store.dispatcher();
            let dispatch = Callback::from(move |action: BudgetAction| {
                Logger::debug_with_component("BudgetStore", &format!("dispatch {}", action.name()));
                dispatcher.dispatch(action);
            });
            UseBudgetResult::from_state(store.0.clone(), dispatch)
        }
        None => {
            Logger::error_with_component("use_budget", "called outside of BudgetProvider");
            let dispatch = Callback::from(|action: BudgetAction| {
                Logger::error_with_component(
                    "use_budget",
                    &format!("dropped {} without a BudgetProvider", action.name()),
                );
            });
            UseBudgetResult::from_state(BudgetState::default(), dispatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DraftExpense;

    #[test]
    fn test_reduce_applies_shared_transition() {
        let store = Rc::new(BudgetStore::default());
        let store = store.reduce(BudgetAction::AddBudget { budget: 300.0 });
        let store = store.reduce(BudgetAction::AddExpense {
            expense: DraftExpense {
                amount: 45.0,
                expense_name: "Farmacia".to_string(),
                category: "6".to_string(),
                date: chrono::NaiveDate::from_ymd_opt(2024, 7, 2),
            },
        });

        assert_eq!(store.0.expenses.len(), 1);
        assert_eq!(store.0.remaining_budget(), 255.0);
    }

    #[test]
    fn test_result_derives_totals() {
        let state = BudgetState::default().apply(BudgetAction::AddBudget { budget: 80.0 });
        let result = UseBudgetResult::from_state(state, Callback::noop());
        assert_eq!(result.total_expenses, 0.0);
        assert_eq!(result.remaining_budget, 80.0);
    }
}
