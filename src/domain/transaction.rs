use std::fmt;

use chrono::{NaiveDateTime, Timelike};

use crate::common::money::Money;

/// Display format of a record timestamp.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    // expense
    Food,
    Transport,
    Credit,
    Snacks,
    Savings,
    Other,
    // income
    Cash,
    Cashless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Cash,
    Cashless,
}

impl Kind {
    pub fn label(self) -> &'static str {
        match self {
            Kind::Income => "Income",
            Kind::Expense => "Expense",
        }
    }

    /// Categories offered for this kind, in the order a form lists them.
    pub fn categories(self) -> &'static [Category] {
        match self {
            Kind::Income => &[Category::Cash, Category::Cashless],
            Kind::Expense => &[
                Category::Food,
                Category::Transport,
                Category::Credit,
                Category::Snacks,
                Category::Savings,
                Category::Other,
            ],
        }
    }

    /// Whether the form asks for a payment method separately. Income records
    /// take their method from the category instead.
    pub fn asks_for_method(self) -> bool {
        matches!(self, Kind::Expense)
    }
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Credit,
        Category::Snacks,
        Category::Savings,
        Category::Other,
        Category::Cash,
        Category::Cashless,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Credit => "Credit",
            Category::Snacks => "Snacks",
            Category::Savings => "Savings",
            Category::Other => "Other",
            Category::Cash => "Cash",
            Category::Cashless => "Cashless",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }

    pub fn belongs_to(self, kind: Kind) -> bool {
        kind.categories().contains(&self)
    }
}

impl Method {
    pub fn label(self) -> &'static str {
        match self {
            Method::Cash => "Cash",
            Method::Cashless => "Cashless",
        }
    }

    pub fn from_label(label: &str) -> Option<Method> {
        let label = label.trim();
        [Method::Cash, Method::Cashless]
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(label))
    }

    /// The method an income record carries: the same as its category.
    /// `None` for expense categories.
    pub fn for_income(category: Category) -> Option<Method> {
        match category {
            Category::Cash => Some(Method::Cash),
            Category::Cashless => Some(Method::Cashless),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One logged transaction. Fields are read-only: a record never changes
/// after the ledger stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    name: String,
    kind: Kind,
    category: Category,
    amount: Money,
    method: Method,
    timestamp: NaiveDateTime,
}

impl TransactionRecord {
    pub(crate) fn new(
        name: &str,
        kind: Kind,
        category: Category,
        amount: Money,
        method: Method,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            name: normalize_name(name),
            kind,
            category,
            amount,
            method,
            timestamp: truncate_to_minute(timestamp),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn view(&self) -> RecordView {
        RecordView {
            time: self.timestamp.format(TIME_FORMAT).to_string(),
            name: self.name.clone(),
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            method: self.method,
        }
    }
}

/// Flat projection of a record for tables and reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    pub time: String,
    pub name: String,
    pub kind: Kind,
    pub category: Category,
    pub amount: Money,
    pub method: Method,
}

/// Trims the label and title-cases every run of letters.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for ch in raw.trim().chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

fn truncate_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(h, m, s, 250)
            .unwrap()
    }

    #[test]
    fn normalize_name_trims_and_title_cases() {
        assert_eq!(normalize_name("  john DOE "), "John Doe");
        assert_eq!(normalize_name("beli nasi padang"), "Beli Nasi Padang");
        assert_eq!(normalize_name("o'neil"), "O'Neil");
        assert_eq!(normalize_name("bonus2024q1"), "Bonus2024Q1");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn normalize_name_keeps_inner_spacing() {
        assert_eq!(normalize_name("gaji  bulanan"), "Gaji  Bulanan");
    }

    #[test]
    fn category_sets_per_kind() {
        assert_eq!(Kind::Income.categories(), &[Category::Cash, Category::Cashless]);
        assert_eq!(Kind::Expense.categories().len(), 6);
        assert!(Category::Food.belongs_to(Kind::Expense));
        assert!(!Category::Food.belongs_to(Kind::Income));
        assert!(Category::Cashless.belongs_to(Kind::Income));
        assert!(!Category::Cash.belongs_to(Kind::Expense));
    }

    #[test]
    fn only_expenses_ask_for_method() {
        assert!(Kind::Expense.asks_for_method());
        assert!(!Kind::Income.asks_for_method());
    }

    #[test]
    fn income_method_mirrors_category() {
        assert_eq!(Method::for_income(Category::Cash), Some(Method::Cash));
        assert_eq!(Method::for_income(Category::Cashless), Some(Method::Cashless));
        assert_eq!(Method::for_income(Category::Snacks), None);
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(Category::from_label(" transport "), Some(Category::Transport));
        assert_eq!(Category::from_label("CASHLESS"), Some(Category::Cashless));
        assert_eq!(Category::from_label("rent"), None);
        assert_eq!(Method::from_label("cash"), Some(Method::Cash));
        assert_eq!(Method::from_label(""), None);
    }

    #[test]
    fn record_normalizes_and_truncates_on_creation() {
        let rec = TransactionRecord::new(
            " kopi susu ",
            Kind::Expense,
            Category::Snacks,
            Money::new(18_000),
            Method::Cashless,
            at(8, 41, 37),
        );
        assert_eq!(rec.name(), "Kopi Susu");
        assert_eq!(rec.timestamp(), at(8, 41, 0).with_nanosecond(0).unwrap());
    }

    #[test]
    fn view_flattens_fields() {
        let rec = TransactionRecord::new(
            "gaji",
            Kind::Income,
            Category::Cashless,
            Money::new(5_000_000),
            Method::Cashless,
            at(17, 5, 0),
        );
        let view = rec.view();
        assert_eq!(view.time, "2024-03-09 17:05");
        assert_eq!(view.name, "Gaji");
        assert_eq!(view.kind, Kind::Income);
        assert_eq!(view.category, Category::Cashless);
        assert_eq!(view.amount, Money::new(5_000_000));
        assert_eq!(view.method, Method::Cashless);
    }
}
