use super::*;

pub(crate) fn write_csv(path: &Path, comments: &[Comment]) -> Result {
  let parent = path
    .parent()
    .filter(|parent| !parent.as_os_str().is_empty());

  if let Some(parent) = parent {
    fs::create_dir_all(parent)
      .with_context(|| format!("could not create {}", parent.display()))?;
  }

  let mut writer = csv::Writer::from_path(path)
    .with_context(|| format!("could not open {}", path.display()))?;

  for comment in comments {
    writer.serialize(comment)?;
  }

  writer.flush()?;

  Ok(())
}
