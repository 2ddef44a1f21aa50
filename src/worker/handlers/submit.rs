use crate::{
    common::{amount::parse_amount, error::SubmitError, event::Submission, money::Money},
    domain::{
        ledger::Ledger,
        transaction::{Category, Kind, Method},
    },
};

/// What the user sees after a saved entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub category: Category,
    pub method: Method,
    pub amount: Money,
}

impl Receipt {
    pub fn message(&self) -> String {
        format!(
            "Saved: {} ({}) - {}",
            self.category,
            self.method,
            self.amount.to_rupiah()
        )
    }
}

pub fn handle(ledger: &mut Ledger, submission: &Submission) -> Result<Receipt, SubmitError> {
    let amount = parse_amount(&submission.amount);
    if submission.name.trim().is_empty() || !amount.is_positive() {
        return Err(SubmitError::Invalid);
    }

    let method = resolve_method(submission);
    ledger.append(
        &submission.name,
        submission.kind,
        submission.category,
        amount,
        method,
    );

    Ok(Receipt {
        category: submission.category,
        method,
        amount,
    })
}

fn resolve_method(submission: &Submission) -> Method {
    let chosen = submission.method.unwrap_or(Method::Cash);
    if submission.kind.asks_for_method() {
        chosen
    } else {
        Method::for_income(submission.category).unwrap_or(chosen)
    }
}
