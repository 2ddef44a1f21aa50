use crate::domain::transaction::{Category, Kind, Method};

/// A filled-in entry form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub kind: Kind,
    pub category: Category,
    /// Only expense forms ask for this; income takes it from the category.
    pub method: Option<Method>,
    pub amount: String,
}

/// One user action in a session, sent from the reader to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Submit(Submission),
    Clear,
}
