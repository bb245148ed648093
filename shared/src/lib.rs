use serde::{Deserialize, Serialize};
use chrono::{Datelike, NaiveDate, Weekday};

pub mod budget;
pub mod expense_form;

pub use budget::{BudgetAction, BudgetState};
pub use expense_form::{filter_category_action, ExpenseFormError, ExpenseFormState};

/// An expense that has been recorded against the budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// UUID v4 assigned when the draft was added
    pub id: String,
    pub amount: f64,
    pub expense_name: String,
    /// Category id, see [`categories`]
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    /// Promote a draft into a stored expense with a fresh id.
    ///
    /// Returns `None` when the draft has no date selected.
    pub fn from_draft(draft: DraftExpense) -> Option<Self> {
        Self::with_id(uuid::Uuid::new_v4().to_string(), draft)
    }

    /// Merge an existing id into an edited draft
    pub fn with_id(id: String, draft: DraftExpense) -> Option<Self> {
        let date = draft.date?;
        Some(Self {
            id,
            amount: draft.amount,
            expense_name: draft.expense_name,
            category: draft.category,
            date,
        })
    }

    /// Lossless conversion back into an editable draft
    pub fn to_draft(&self) -> DraftExpense {
        DraftExpense {
            amount: self.amount,
            expense_name: self.expense_name.clone(),
            category: self.category.clone(),
            date: Some(self.date),
        }
    }
}

/// In-progress, unsaved expense held by the expense form
#[derive(Debug, Clone, PartialEq)]
pub struct DraftExpense {
    pub amount: f64,
    pub expense_name: String,
    pub category: String,
    /// `None` when the date picker has been cleared
    pub date: Option<NaiveDate>,
}

impl Default for DraftExpense {
    fn default() -> Self {
        Self {
            amount: 0.0,
            expense_name: String::new(),
            category: String::new(),
            date: Some(chrono::Local::now().date_naive()),
        }
    }
}

impl DraftExpense {
    /// True when any of the four fields is empty.
    ///
    /// A blank number input coerces to 0, so a zero amount counts as empty.
    /// NaN and infinities are not amounts either.
    pub fn has_empty_field(&self) -> bool {
        self.amount == 0.0
            || !self.amount.is_finite()
            || self.expense_name.is_empty()
            || self.category.is_empty()
            || self.date.is_none()
    }
}

/// Expense category shown in the form and the filter dropdown
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

const CATEGORY_DATA: [(&str, &str); 7] = [
    ("1", "Ahorro"),
    ("2", "Comida"),
    ("3", "Casa"),
    ("4", "Gastos Varios"),
    ("5", "Ocio"),
    ("6", "Salud"),
    ("7", "Suscripciones"),
];

/// The fixed list of expense categories
pub fn categories() -> Vec<Category> {
    CATEGORY_DATA
        .iter()
        .map(|(id, name)| Category {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}

/// Look up a category by id
pub fn find_category(id: &str) -> Option<Category> {
    categories().into_iter().find(|category| category.id == id)
}

/// Format an amount as US dollars, e.g. `1234.5` -> `"$1,234.50"`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Spanish month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "enero", 2 => "febrero", 3 => "marzo", 4 => "abril",
        5 => "mayo", 6 => "junio", 7 => "julio", 8 => "agosto",
        9 => "septiembre", 10 => "octubre", 11 => "noviembre", 12 => "diciembre",
        _ => "enero",
    }
}

/// Long Spanish date, e.g. `"lunes, 15 de enero de 2024"`
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-5.0), "-$5.00");
        assert_eq!(format_currency(12.3), "$12.30");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 1, 15)), "lunes, 15 de enero de 2024");
        assert_eq!(format_date(date(2023, 12, 31)), "domingo, 31 de diciembre de 2023");
    }

    #[test]
    fn test_categories() {
        let all = categories();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0].name, "Ahorro");
        assert_eq!(find_category("2").map(|c| c.name), Some("Comida".to_string()));
        assert!(find_category("").is_none());
    }

    #[test]
    fn test_draft_empty_fields() {
        let filled = DraftExpense {
            amount: 10.0,
            expense_name: "Cine".to_string(),
            category: "5".to_string(),
            date: Some(date(2024, 3, 1)),
        };
        assert!(!filled.has_empty_field());

        assert!(DraftExpense { amount: 0.0, ..filled.clone() }.has_empty_field());
        assert!(DraftExpense { expense_name: String::new(), ..filled.clone() }.has_empty_field());
        assert!(DraftExpense { category: String::new(), ..filled.clone() }.has_empty_field());
        assert!(DraftExpense { amount: f64::NAN, ..filled.clone() }.has_empty_field());
        assert!(DraftExpense { amount: f64::INFINITY, ..filled.clone() }.has_empty_field());
        assert!(DraftExpense { date: None, ..filled }.has_empty_field());
        assert!(DraftExpense::default().has_empty_field());
    }

    #[test]
    fn test_expense_draft_conversion() {
        let draft = DraftExpense {
            amount: 42.0,
            expense_name: "Luz".to_string(),
            category: "3".to_string(),
            date: Some(date(2024, 2, 29)),
        };

        let expense = Expense::with_id("abc".to_string(), draft.clone()).unwrap();
        assert_eq!(expense.id, "abc");
        assert_eq!(expense.to_draft(), draft);

        let fresh = Expense::from_draft(draft.clone()).unwrap();
        assert!(uuid::Uuid::parse_str(&fresh.id).is_ok());

        assert!(Expense::from_draft(DraftExpense { date: None, ..draft }).is_none());
    }

    #[test]
    fn test_expense_json_uses_camel_case() {
        let expense = Expense::with_id(
            "id-1".to_string(),
            DraftExpense {
                amount: 5.0,
                expense_name: "Pan".to_string(),
                category: "2".to_string(),
                date: Some(date(2024, 5, 4)),
            },
        )
        .unwrap();

        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"expenseName\":\"Pan\""));
        assert!(json.contains("\"date\":\"2024-05-04\""));

        let parsed: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, expense);
    }
}
