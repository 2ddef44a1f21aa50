use crate::{
    common::event::{SessionEvent, Submission},
    domain::transaction::{Category, Kind, Method},
};
use std::io::Read;

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the session script headers.
/// Only `type` is needed for `clear` rows.
struct CsvRow {
    #[serde(rename = "type")]
    action: String,
    name: Option<String>,
    category: Option<String>,
    method: Option<String>,
    amount: Option<String>,
}

/// Reads a session script: one form submission or clear action per row.
///
/// Supported headers: `type,name,category,method,amount`.
/// `type` is `income`, `expense` or `clear`, case-insensitive. Categories
/// must belong to the row's kind; `method` may be blank. Name and amount are
/// passed through as typed, since judging them is the submission's job.
/// Errors name the 1-based data row.
///
/// # Examples
///
/// ```
/// use dompet::io::reader::read_session;
/// use dompet::common::event::SessionEvent;
/// use csv::ReaderBuilder;
///
/// let data = "type,name,category,method,amount\n\
/// expense,nasi padang,food,cash,25rb\n\
/// clear,,,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_session(&mut rdr).collect();
///
/// assert!(matches!(events[0], Ok(SessionEvent::Submit(_))));
/// assert!(matches!(events[1], Ok(SessionEvent::Clear)));
/// ```
pub fn read_session<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<SessionEvent, String>> + '_ {
    rdr.deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, res)| {
            let row_no = idx + 1;
            let row = res.map_err(|e| e.to_string())?;
            let action = row.action.trim().to_ascii_lowercase();

            let kind = match action.as_str() {
                "income" => Kind::Income,
                "expense" => Kind::Expense,
                "clear" => return Ok(SessionEvent::Clear),
                other => return Err(format!("unknown row type: {other} at row {row_no}")),
            };

            let category_label = row.category.unwrap_or_default();
            let category = Category::from_label(&category_label)
                .filter(|c| c.belongs_to(kind))
                .ok_or_else(|| {
                    format!("invalid {kind} category: {category_label:?} at row {row_no}")
                })?;

            let method = match row.method.as_deref().map(str::trim) {
                None | Some("") => None,
                Some(label) => Some(Method::from_label(label).ok_or_else(|| {
                    format!("unknown payment method: {label:?} at row {row_no}")
                })?),
            };

            Ok(SessionEvent::Submit(Submission {
                name: row.name.unwrap_or_default(),
                kind,
                category,
                method,
                amount: row.amount.unwrap_or_default(),
            }))
        })
}
