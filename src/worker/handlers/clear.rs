use crate::domain::ledger::Ledger;

pub fn handle(ledger: &mut Ledger) {
    ledger.clear_all();
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::{
        common::money::Money,
        domain::{
            ledger::Ledger,
            transaction::{Category, Kind, Method},
        },
    };

    #[test]
    fn clear_empties_a_filled_ledger() {
        let mut ledger = Ledger::new();
        ledger.append("gaji", Kind::Income, Category::Cash, Money::new(100), Method::Cash);

        handle(&mut ledger);

        assert!(ledger.is_empty());
    }

    #[test]
    fn clear_on_empty_ledger_is_a_no_op() {
        let mut ledger = Ledger::new();
        handle(&mut ledger);
        assert!(ledger.is_empty());
    }
}
