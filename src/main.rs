use clap::Parser;
use passvault::cli::{Cli, Commands, VaultAction};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Vault { ref action } => match action {
            VaultAction::New { ref name, ref path } => {
                passvault::cli::commands::vault_new::execute(&cli, name, path.as_deref())
            }
            VaultAction::Alias {
                ref name,
                ref alias,
            } => passvault::cli::commands::vault_alias::execute(&cli, name, alias),
            VaultAction::Rename {
                ref old_name,
                ref new_name,
            } => passvault::cli::commands::vault_rename::execute(&cli, old_name, new_name),
            VaultAction::Delete { ref name, force } => {
                passvault::cli::commands::vault_delete::execute(&cli, name, *force)
            }
            VaultAction::List => passvault::cli::commands::vault_list::execute(&cli),
            VaultAction::Default { ref name } => {
                passvault::cli::commands::vault_default::execute(&cli, name.as_deref())
            }
        },
        Commands::Add {
            ref site,
            ref login,
            ref password,
            generate,
            ref fields,
        } => passvault::cli::commands::add::execute(
            &cli,
            site,
            login,
            password.as_ref().map(|p| p.as_deref()),
            generate,
            fields,
        ),
        Commands::Show {
            ref site,
            ref login,
        } => passvault::cli::commands::show::execute(&cli, site, login),
        Commands::List => passvault::cli::commands::list::execute(&cli),
        Commands::Update {
            ref site,
            ref login,
            ref fields,
        } => passvault::cli::commands::update::execute(&cli, site, login, fields),
        Commands::RenameSite {
            ref site,
            ref new_site,
        } => passvault::cli::commands::rename_site::execute(&cli, site, new_site),
        Commands::Delete {
            ref site,
            ref login,
            force,
        } => passvault::cli::commands::delete::execute(&cli, site, login.as_deref(), force),
        Commands::RotateKey => passvault::cli::commands::rotate::execute(&cli),
        Commands::Generate { length } => passvault::cli::commands::generate::execute(length),
        Commands::Completions { ref shell } => {
            passvault::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
