//! Account display formatting
//!
//! Formats accounts for plain terminal output, used by the non-interactive
//! subcommands.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Account;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Account No.")]
    number: String,
}

impl AccountRow {
    fn from_account(account: &Account) -> Self {
        Self {
            currency: format!("{} {}", account.flag, account.currency),
            balance: account.balance.format_grouped(),
            number: account.account_number.clone(),
        }
    }
}

/// Format the account list as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts.".to_string();
    }

    let rows: Vec<AccountRow> = accounts.iter().map(AccountRow::from_account).collect();
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string()
}

/// Format a single account's details
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();
    output.push_str(&format!("Account: {} {}\n", account.flag, account.currency));
    output.push_str(&format!("  ID:       {}\n", account.id));
    output.push_str(&format!("  Number:   {}\n", account.account_number));
    output.push_str(&format!("  Balance:  {}\n", account.balance.format_grouped()));
    output
}
