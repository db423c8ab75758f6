mod check_date;
mod modifiers;
mod query;

use crate::argparse::Commands;
pub use check_date::handle_check_date_command;
pub use modifiers::handle_modifiers_command;
pub use query::handle_query_command;

pub fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Query(args) => handle_query_command(args),
        Commands::Modifiers => {
            handle_modifiers_command();
            Ok(())
        }
        Commands::CheckDate(args) => handle_check_date_command(args),
    }
}
