use std::io::Write;

use crate::domain::{ledger::Summary, transaction::RecordView};

#[derive(serde::Serialize)]
/// Internal CSV output row for the record table.
///
/// Headers written (in this order): `time,name,kind,category,method,amount`.
struct RecordRow<'a> {
    time: &'a str,
    name: &'a str,
    kind: &'static str,
    category: &'static str,
    method: &'static str,
    amount: String,
}

#[derive(serde::Serialize)]
struct SummaryRow {
    income: String,
    expense: String,
    balance: String,
}

/// Writes the record table to a CSV writer, one row per record in the given
/// order. Amounts are rendered as `Rp 15.000`.
///
/// An empty slice still produces the header row.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use dompet::common::money::Money;
/// use dompet::domain::ledger::Ledger;
/// use dompet::domain::transaction::{Category, Kind, Method};
/// use dompet::io::writer::write_records;
///
/// let mut ledger = Ledger::new();
/// ledger.append("bakso", Kind::Expense, Category::Food, Money::new(15_000), Method::Cash);
///
/// let mut out = Vec::new();
/// write_records(&mut out, &ledger.all_records()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("time,name,kind,category,method,amount\n"));
/// assert!(s.ends_with(",Bakso,Expense,Food,Cash,Rp 15.000\n"));
/// ```
pub fn write_records<W: Write>(writer: W, records: &[RecordView]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written by hand so an empty table still gets its header.
    wtr.write_record(["time", "name", "kind", "category", "method", "amount"])?;
    for rec in records {
        wtr.serialize(RecordRow {
            time: &rec.time,
            name: &rec.name,
            kind: rec.kind.label(),
            category: rec.category.label(),
            method: rec.method.label(),
            amount: rec.amount.to_rupiah(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the totals as a single-row CSV with headers
/// `income,expense,balance`.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing fails.
pub fn write_summary<W: Write>(writer: W, summary: &Summary) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    wtr.serialize(SummaryRow {
        income: summary.total_income.to_rupiah(),
        expense: summary.total_expense.to_rupiah(),
        balance: summary.balance.to_rupiah(),
    })?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::money::Money,
        domain::{
            ledger::Ledger,
            transaction::{Category, Kind, Method},
        },
    };
    use chrono::NaiveDate;

    fn records_to_string(records: &[RecordView]) -> String {
        let mut out = Vec::new();
        write_records(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_header_and_rows_in_ledger_order() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap();
        let mut ledger = Ledger::new();
        ledger.append_at(
            "gaji",
            Kind::Income,
            Category::Cashless,
            Money::new(5_000_000),
            Method::Cashless,
            at,
        );
        ledger.append_at(
            "es teh",
            Kind::Expense,
            Category::Snacks,
            Money::new(5_000),
            Method::Cash,
            at,
        );

        let s = records_to_string(&ledger.all_records());
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(
            lines,
            [
                "time,name,kind,category,method,amount",
                "2024-05-01 12:30,Gaji,Income,Cashless,Cashless,Rp 5.000.000",
                "2024-05-01 12:30,Es Teh,Expense,Snacks,Cash,Rp 5.000",
            ]
        );
    }

    #[test]
    fn empty_table_has_only_header() {
        let s = records_to_string(&[]);
        assert_eq!(s, "time,name,kind,category,method,amount\n");
    }

    #[test]
    fn writes_summary_with_negative_balance() {
        let summary = Summary {
            total_income: Money::new(500_000),
            total_expense: Money::new(750_000),
            balance: Money::new(-250_000),
        };

        let mut out = Vec::new();
        write_summary(&mut out, &summary).unwrap();
        let s = String::from_utf8(out).unwrap();

        assert_eq!(
            s,
            "income,expense,balance\nRp 500.000,Rp 750.000,Rp -250.000\n"
        );
    }
}
