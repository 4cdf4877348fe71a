use super::*;

#[derive(Debug, Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub(crate) struct Arguments {
  #[arg(allow_hyphen_values = true)]
  pub(crate) filename: PathBuf,
  #[arg(allow_hyphen_values = true)]
  pub(crate) min: OsString,
  #[arg(allow_hyphen_values = true)]
  pub(crate) max: OsString,
  #[arg(allow_hyphen_values = true)]
  pub(crate) amount: OsString,
}

impl Arguments {
  pub(crate) fn from_args<I, T>(args: I) -> Result<Self, Invalid>
  where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
  {
    Self::try_parse_from(args).map_err(|_| Invalid::Usage)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(args: &[&str]) -> Result<Arguments, Invalid> {
    Arguments::from_args(["randomizer"].iter().chain(args))
  }

  #[test]
  fn four_positionals() {
    let arguments = parse(&["out.txt", "1", "10", "5"]).unwrap();

    assert_eq!(arguments.filename, PathBuf::from("out.txt"));
    assert_eq!(arguments.min, "1");
    assert_eq!(arguments.max, "10");
    assert_eq!(arguments.amount, "5");
  }

  #[test]
  fn negative_values_are_not_flags() {
    let arguments = parse(&["out.txt", "-10", "-1", "-3"]).unwrap();

    assert_eq!(arguments.min, "-10");
    assert_eq!(arguments.max, "-1");
    assert_eq!(arguments.amount, "-3");
  }

  #[test]
  fn filename_with_leading_hyphen() {
    let arguments = parse(&["-out.txt", "1", "1", "2"]).unwrap();

    assert_eq!(arguments.filename, PathBuf::from("-out.txt"));
  }

  #[test]
  fn flag_like_filenames() {
    for filename in ["-h", "--help", "-V", "--version"] {
      let arguments = parse(&[filename, "1", "2", "3"]).unwrap();

      assert_eq!(arguments.filename, PathBuf::from(filename));
    }
  }

  #[test]
  fn help_and_version_are_usage_errors() {
    for flag in ["-h", "--help", "-V", "--version"] {
      assert_eq!(parse(&[flag]).unwrap_err(), Invalid::Usage, "{flag}");
    }
  }

  #[test]
  fn too_few() {
    assert_eq!(parse(&[]).unwrap_err(), Invalid::Usage);
    assert_eq!(parse(&["out.txt"]).unwrap_err(), Invalid::Usage);
    assert_eq!(parse(&["out.txt", "1", "10"]).unwrap_err(), Invalid::Usage);
  }

  #[test]
  fn too_many() {
    assert_eq!(
      parse(&["out.txt", "1", "10", "5", "extra"]).unwrap_err(),
      Invalid::Usage
    );
  }

  #[cfg(unix)]
  #[test]
  fn non_utf8_values_reach_validation() {
    use std::os::unix::ffi::OsStringExt;

    let arguments = Arguments::from_args([
      OsString::from("randomizer"),
      OsString::from("out.txt"),
      OsString::from_vec(vec![0xff]),
      OsString::from("10"),
      OsString::from("5"),
    ])
    .unwrap();

    assert_eq!(arguments.min, OsString::from_vec(vec![0xff]));
  }
}
