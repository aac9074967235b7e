pub mod handlers;
pub mod repl;
pub mod setup;

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("linecmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluate a command line such as `enable thing 4`")
        .arg(
            Arg::new("words")
                .help("Command and arguments, joined with spaces into one line")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .conflicts_with("interactive"),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .action(ArgAction::SetTrue)
                .help("Read lines from stdin until EOF"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Additional TOML config file"),
        )
}
