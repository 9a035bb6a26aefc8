// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};

const HELP: &str = "\
Image search gallery

USAGE:
  iced_gallery [OPTIONS] [QUERY]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <PATH>    Directory holding settings.toml
  --api-key <KEY>        API key for the search endpoint
  -h, --help             Print this help

ARGS:
  <QUERY>                Search to run at startup

ENVIRONMENT:
  PIXABAY_API_KEY           API key when neither --api-key nor the config sets one
  ICED_GALLERY_CONFIG_DIR   Config directory when --config-dir is not given
  RUST_LOG                  Log filter (default: iced_gallery=info)
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let api_key = args.opt_value_from_str("--api-key")?;
    let words: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();
    let query = (!words.is_empty()).then(|| words.join(" "));

    Ok(Some(Flags {
        lang,
        query,
        config_dir,
        api_key,
    }))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("iced_gallery=info"))
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    log::info!("starting iced_gallery {}", env!("CARGO_PKG_VERSION"));
    app::run(flags)
}
