//! Transaction display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Recipient")]
    recipient: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl TransactionRow {
    fn from_transaction(tx: &Transaction) -> Self {
        Self {
            date: tx.date.clone(),
            recipient: tx.recipient.clone(),
            description: tx.description.clone(),
            amount: format!(
                "{}{} {}",
                tx.direction.sign(),
                tx.amount.format_grouped(),
                tx.currency
            ),
            status: tx.status.to_string(),
        }
    }
}

/// Format the activity feed as a table, newest first
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions.".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(TransactionRow::from_transaction)
        .collect();
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_format_transaction_list() {
        let output = format_transaction_list(&seed::transactions());
        assert!(output.contains("Shwe Sin Win"));
        assert!(output.contains("-12,086.34 THB"));
        assert!(output.contains("+34.30 EUR"));
        assert!(output.contains("Pending"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_transaction_list(&[]);
        assert!(output.contains("No transactions"));
    }
}
