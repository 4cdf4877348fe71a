use super::*;

pub(crate) fn initialize() -> Result<(), SetLoggerError> {
  TermLogger::init(
    level(),
    ConfigBuilder::new()
      .set_location_level(LevelFilter::Debug)
      .build(),
    TerminalMode::Stderr,
    ColorChoice::Auto,
  )
}

fn level() -> LevelFilter {
  if cfg!(debug_assertions) {
    LevelFilter::Debug
  } else {
    LevelFilter::Warn
  }
}
