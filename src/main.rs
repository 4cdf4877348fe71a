use {
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  configuration::Configuration,
  invalid::Invalid,
  log::{LevelFilter, SetLoggerError, debug, error},
  rand::Rng,
  simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode},
  std::{
    env,
    ffi::{OsStr, OsString},
    fmt::{self, Display, Formatter},
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    process,
  },
};

mod arguments;
mod configuration;
mod invalid;
mod logger;
mod writer;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = logger::initialize() {
    eprintln!("error: {error}");
    process::exit(1);
  }

  let configuration = match Arguments::from_args(env::args_os()).and_then(Configuration::try_from)
  {
    Ok(configuration) => configuration,
    Err(invalid) => {
      println!("{invalid}");
      process::exit(1);
    }
  };

  if let Err(error) = writer::write(&configuration) {
    error!("{error:#}");
    process::exit(1);
  }
}
