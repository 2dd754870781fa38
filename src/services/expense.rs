//! Expense service
//!
//! Validates and records expenses and goal contributions. Amount
//! validation is a tagged result (`InvalidAmount`), never a panic or an
//! exception-style control flow.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::{SmartSpendError, SmartSpendResult};
use crate::models::{Expense, ExpenseId, Money, SAVING_CATEGORY};
use crate::storage::Storage;

/// Keyword hints for auto-picking a category from a description.
/// First match wins.
const KEYWORD_CATEGORIES: &[(&str, &str)] = &[
    ("bus", "Transport"),
    ("uber", "Transport"),
    ("fuel", "Transport"),
    ("petrol", "Transport"),
    ("train", "Transport"),
    ("metro", "Transport"),
    ("taxi", "Transport"),
    ("bike", "Transport"),
    ("grocery", "Groceries"),
    ("aldi", "Groceries"),
    ("coles", "Groceries"),
    ("woolworths", "Groceries"),
    ("supermarket", "Groceries"),
    ("market", "Groceries"),
    ("movie", "Entertainment"),
    ("cinema", "Entertainment"),
    ("netflix", "Entertainment"),
    ("spotify", "Entertainment"),
    ("concert", "Entertainment"),
    ("theater", "Entertainment"),
    ("electricity", "Utilities"),
    ("water", "Utilities"),
    ("internet", "Utilities"),
    ("phone", "Utilities"),
    ("bill", "Utilities"),
    ("gas", "Utilities"),
    ("clothes", "Shopping"),
    ("shopping", "Shopping"),
    ("amazon", "Shopping"),
    ("ebay", "Shopping"),
    ("apparel", "Shopping"),
    ("doctor", "Health"),
    ("pharmacy", "Health"),
    ("hospital", "Health"),
    ("medicine", "Health"),
    ("clinic", "Health"),
    ("restaurant", "Dining"),
    ("cafe", "Dining"),
    ("coffee", "Dining"),
    ("food", "Dining"),
    ("dining", "Dining"),
    ("meal", "Dining"),
    ("school", "Education"),
    ("university", "Education"),
    ("books", "Education"),
    ("education", "Education"),
    ("course", "Education"),
    ("flight", "Travel"),
    ("hotel", "Travel"),
    ("airbnb", "Travel"),
    ("travel", "Travel"),
    ("tour", "Travel"),
    ("vacation", "Travel"),
    ("haircut", "Personal Care"),
    ("spa", "Personal Care"),
    ("beauty", "Personal Care"),
    ("insurance", "Insurance"),
    ("tax", "Taxes"),
    ("gift", "Gifts"),
    ("present", "Gifts"),
    ("birthday", "Gifts"),
    ("anniversary", "Gifts"),
    ("charity", "Charity"),
    ("donation", "Charity"),
    ("subscription", "Subscriptions"),
    ("repair", "Home Improvement"),
    ("maintenance", "Home Improvement"),
    ("car", "Automotive"),
    ("auto", "Automotive"),
    ("childcare", "Childcare"),
    ("baby", "Childcare"),
    ("kids", "Childcare"),
    ("pet", "Pet Care"),
    ("vet", "Pet Care"),
    ("mortgage", "Mortgage"),
    ("home loan", "Mortgage"),
    ("misc", "Miscellaneous"),
];

/// Parse and validate an amount from user input.
///
/// Rejects non-numeric input, amounts that are not strictly positive,
/// and amounts over `max`.
pub fn parse_amount(input: &str, max: Money) -> SmartSpendResult<Money> {
    let amount =
        Money::parse(input).map_err(|e| SmartSpendError::InvalidAmount(e.to_string()))?;

    if !amount.is_positive() {
        return Err(SmartSpendError::InvalidAmount(format!(
            "amount must be positive, got {}",
            amount
        )));
    }
    if amount > max {
        return Err(SmartSpendError::InvalidAmount(format!(
            "amount exceeds the maximum of {}",
            max
        )));
    }

    Ok(amount)
}

/// Suggest a category from keywords in the description
pub fn suggest_category(description: &str) -> Option<&'static str> {
    let description = description.to_lowercase();
    KEYWORD_CATEGORIES
        .iter()
        .find(|(keyword, _)| description.contains(keyword))
        .map(|(_, category)| *category)
}

/// Service for recording and maintaining expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Record a new expense
    pub fn add_expense(
        &self,
        amount: &str,
        date: NaiveDate,
        description: &str,
        category: &str,
    ) -> SmartSpendResult<Expense> {
        let amount = parse_amount(amount, self.settings.max_expense_amount)?;

        if category.trim().is_empty() {
            return Err(SmartSpendError::Validation(
                "category must not be empty".into(),
            ));
        }

        let expense = Expense::new(amount, date, description, category.trim());
        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Record a contribution toward the active savings goal.
    ///
    /// An empty description defaults to the active goal's name — that is
    /// the link that makes the contribution count toward the goal. With
    /// no active goal a description is required.
    pub fn add_saving_contribution(
        &self,
        amount: &str,
        date: NaiveDate,
        description: Option<&str>,
    ) -> SmartSpendResult<Expense> {
        let amount = parse_amount(amount, self.settings.max_expense_amount)?;

        let description = match description.map(str::trim).filter(|d| !d.is_empty()) {
            Some(explicit) => explicit.to_string(),
            None => match self.storage.goals.active()? {
                Some(goal) => goal.name,
                None => {
                    return Err(SmartSpendError::Validation(
                        "no active goal; give the contribution a description".into(),
                    ))
                }
            },
        };

        let expense = Expense::new(amount, date, description, SAVING_CATEGORY);
        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Update an existing expense
    pub fn edit_expense(
        &self,
        id: ExpenseId,
        amount: &str,
        date: NaiveDate,
        description: &str,
        category: &str,
    ) -> SmartSpendResult<Expense> {
        let mut expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| SmartSpendError::expense_not_found(id.to_string()))?;

        expense.amount = parse_amount(amount, self.settings.max_expense_amount)?;
        expense.date = date;
        expense.description = description.to_string();
        expense.category = category.trim().to_string();

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Delete an expense
    pub fn delete_expense(&self, id: ExpenseId) -> SmartSpendResult<Expense> {
        let removed = self
            .storage
            .expenses
            .delete(id)?
            .ok_or_else(|| SmartSpendError::expense_not_found(id.to_string()))?;

        self.storage.expenses.save()?;
        Ok(removed)
    }
}
