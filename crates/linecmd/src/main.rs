//! linecmd CLI - evaluate one command line or run an interactive console
//!
//! Binary name: `linecmd`

use std::process;

use linecmd::cli::{build_cli, handlers::run_cli};

fn main() {
    let matches = build_cli().get_matches();

    if let Err(err) = run_cli(&matches) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {err:#}");
        }

        let code = err
            .downcast_ref::<linecmd_core::Error>()
            .map_or(1, linecmd_core::Error::exit_code);

        #[allow(clippy::exit)]
        process::exit(code);
    }
}
