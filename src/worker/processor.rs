use crate::{
    common::{error::SubmitError, event::SessionEvent},
    domain::ledger::Ledger,
    worker::handlers::{clear, submit},
};

/// Result of one session event, for the user-facing layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Saved(submit::Receipt),
    Rejected(SubmitError),
    Cleared,
}

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(&mut self, ledger: &mut Ledger, event: SessionEvent) -> Feedback {
        match event {
            SessionEvent::Submit(submission) => match submit::handle(ledger, &submission) {
                Ok(receipt) => {
                    tracing::info!("{}", receipt.message());
                    Feedback::Saved(receipt)
                }
                Err(err) => {
                    tracing::warn!(name = %submission.name, amount = %submission.amount, "{err}");
                    Feedback::Rejected(err)
                }
            },
            SessionEvent::Clear => {
                clear::handle(ledger);
                tracing::info!("all records cleared");
                Feedback::Cleared
            }
        }
    }
}
