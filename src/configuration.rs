use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Configuration {
  pub(crate) amount: usize,
  pub(crate) filename: PathBuf,
  pub(crate) max: i64,
  pub(crate) min: i64,
}

impl TryFrom<Arguments> for Configuration {
  type Error = Invalid;

  fn try_from(arguments: Arguments) -> Result<Self, Invalid> {
    let min = integer(&arguments.min)?;
    let max = integer(&arguments.max)?;
    let amount = integer(&arguments.amount)?;

    if min > max {
      return Err(Invalid::Range);
    }

    if amount <= 0 {
      return Err(Invalid::Amount);
    }

    let configuration = Self {
      amount: usize::try_from(amount).map_err(|_| Invalid::Amount)?,
      filename: arguments.filename,
      max,
      min,
    };

    debug!("validated {configuration:?}");

    Ok(configuration)
  }
}

fn integer(value: &OsStr) -> Result<i64, Invalid> {
  value
    .to_str()
    .ok_or(Invalid::NotAnInteger)?
    .trim()
    .parse()
    .map_err(|_| Invalid::NotAnInteger)
}
