//! App-wide constants.

pub const APP_TITLE: &str = "Planificador de Gastos";

/// localStorage key holding the total budget
pub const BUDGET_STORAGE_KEY: &str = "budget";

/// localStorage key holding the JSON list of expenses
pub const EXPENSES_STORAGE_KEY: &str = "expenses";
