use chrono::{Local, NaiveDateTime};

use crate::{
    common::money::Money,
    domain::transaction::{Category, Kind, Method, RecordView, TransactionRecord},
};

/// Totals over every record in the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
}

/// The session's transactions, oldest first.
///
/// `append` trusts its caller: name and amount checks happen before a
/// submission reaches the ledger.
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<TransactionRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn append(
        &mut self,
        name: &str,
        kind: Kind,
        category: Category,
        amount: Money,
        method: Method,
    ) {
        let now = Local::now().naive_local();
        self.append_at(name, kind, category, amount, method, now);
    }

    pub fn append_at(
        &mut self,
        name: &str,
        kind: Kind,
        category: Category,
        amount: Money,
        method: Method,
        timestamp: NaiveDateTime,
    ) {
        let record = TransactionRecord::new(name, kind, category, amount, method, timestamp);
        tracing::debug!(
            name = record.name(),
            %kind,
            %category,
            %method,
            amount = amount.as_i64(),
            "appending record"
        );
        self.records.push(record);
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn all_records(&self) -> Vec<RecordView> {
        self.records.iter().map(TransactionRecord::view).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let total_for = |kind: Kind| -> Money {
            self.records
                .iter()
                .filter(|r| r.kind() == kind)
                .map(TransactionRecord::amount)
                .sum()
        };
        let total_income = total_for(Kind::Income);
        let total_expense = total_for(Kind::Expense);
        Summary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    pub fn clear_all(&mut self) {
        tracing::debug!(dropped = self.records.len(), "clearing ledger");
        self.records.clear();
    }
}
