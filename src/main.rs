// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};

const HELP: &str = "\
Usage: iced_gallery [OPTIONS]

Options:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help

Environment:
  ICED_GALLERY_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG                  Log filter (default: info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!("ignoring --lang: {err}");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!("ignoring --config-dir: {err}");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
