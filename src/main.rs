use std::process::ExitCode;

fn main() -> ExitCode {
    match menu_storefront_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
