// SPDX-License-Identifier: MPL-2.0
use medsync::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
MedSync - medical supply coordination

USAGE:
  medsync [OPTIONS]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --activity-log <FILE>
                       Keep a JSON report of recent activity in FILE
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = optional_value(&mut args, "--lang");
    let config_dir = optional_value(&mut args, "--config-dir");
    let activity_log = optional_value(&mut args, "--activity-log").map(PathBuf::from);

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_overrides(config_dir);

    app::run(Flags {
        lang,
        config_dir: None,
        activity_log,
    })
}

/// Reads an optional `--key value` pair, reporting malformed input on stderr.
fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Invalid {key}: {err}");
            None
        }
    }
}
