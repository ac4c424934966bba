//! One module per subcommand; each exposes an `execute` function.

pub mod add;
pub mod completions;
pub mod delete;
pub mod generate;
pub mod list;
pub mod rename_site;
pub mod rotate;
pub mod show;
pub mod update;
pub mod vault_alias;
pub mod vault_default;
pub mod vault_delete;
pub mod vault_list;
pub mod vault_new;
pub mod vault_rename;
