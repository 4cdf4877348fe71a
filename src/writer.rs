use super::*;

pub(crate) fn render<R: Rng>(configuration: &Configuration, generator: &mut R) -> String {
  let mut tokens = Vec::with_capacity(configuration.amount + 1);

  tokens.push(configuration.amount.to_string());

  tokens.extend(
    (0..configuration.amount)
      .map(|_| generator.gen_range(configuration.min..=configuration.max).to_string()),
  );

  tokens.join(" ")
}

pub(crate) fn write(configuration: &Configuration) -> Result {
  write_with(configuration, &mut rand::thread_rng())
}

fn write_with<R: Rng>(configuration: &Configuration, generator: &mut R) -> Result {
  let path = configuration.filename.as_path();

  let content = render(configuration, generator);

  create(path)?
    .write_all(content.as_bytes())
    .with_context(|| format!("failed to write {}", path.display()))?;

  debug!(
    "wrote {} values to {}",
    configuration.amount,
    path.display()
  );

  Ok(())
}

fn create(path: &Path) -> Result<File> {
  File::create(path).with_context(|| format!("failed to create {}", path.display()))
}
