use super::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Invalid {
  Amount,
  NotAnInteger,
  Range,
  Usage,
}

impl Display for Invalid {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Amount => write!(f, "Error: amount must be positive"),
      Self::NotAnInteger => write!(f, "Error: min, max, and amount must be integers"),
      Self::Range => write!(f, "Error: min cannot be greater than max"),
      Self::Usage => write!(
        f,
        "Usage: {} <filename> <min> <max> <amount>",
        env!("CARGO_PKG_NAME")
      ),
    }
  }
}
