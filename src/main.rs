use std::process::ExitCode;

use bulk_rename::BulkRenameError;
use bulk_rename::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = bulk_rename::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e
                .downcast_ref::<BulkRenameError>()
                .map(BulkRenameError::exit_code)
                .unwrap_or(1);
            out::print_error(&format!("{e:#}"));
            ExitCode::from(code)
        }
    }
}
