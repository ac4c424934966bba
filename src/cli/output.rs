//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::registry::Registry;
use crate::vault::Record;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of records (Site, Login, extra-field count).
///
/// Metadata only — no ciphertext is touched.
pub fn print_records_table(records: &[Record]) {
    if records.is_empty() {
        info("No records in this vault yet.");
        tip("Run `passvault add <site> <login>` to add your first record.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Site", "Login", "Password", "Extra fields"]);

    for record in records {
        table.add_row(vec![
            record.site.clone(),
            record.login.clone(),
            if record.password.is_some() {
                "yes".to_string()
            } else {
                String::new()
            },
            if record.extra.is_empty() {
                String::new()
            } else {
                record.extra.len().to_string()
            },
        ]);
    }

    println!("{table}");
}

/// Print the registry as a table (Vault, Aliases, Path, default marker).
pub fn print_vaults_table(registry: &Registry) {
    let entries = registry.entries();
    if entries.is_empty() {
        info("No vaults registered yet.");
        tip("Run `passvault vault new <name>` to create one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Vault", "Aliases", "Path", "Default"]);

    for entry in entries {
        let canonical = entry.names.first().cloned().unwrap_or_default();
        let aliases = entry
            .names
            .iter()
            .skip(1)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        // The default pointer may name an alias, not the canonical name.
        let is_default = registry
            .default_vault()
            .is_some_and(|default| entry.names.iter().any(|n| n == default));
        let default = if is_default {
            style("*").green().bold().to_string()
        } else {
            String::new()
        };

        table.add_row(vec![canonical, aliases, entry.path.clone(), default]);
    }

    println!("{table}");
}
