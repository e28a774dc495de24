use clap::{Arg, ArgAction, Command};
use util::notify_and_exit;

mod notice;
mod util;

pub fn cli() -> Command {
    Command::new("update_enable_mocks_headers")
        .about(format!(
            "Retired; use {} instead",
            notice::REPLACEMENT_SCRIPT
        ))
        .version(env!("CARGO_PKG_VERSION"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("ignored")
                .help("accepted and ignored")
                .required(false)
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .action(ArgAction::Append),
        )
}

pub fn main() {
    // Arguments never change the outcome; parse errors are dropped as well.
    let _ = cli().try_get_matches();
    notify_and_exit();
}
