//! Fixture file loading.

use crate::{parse_fixture, SpecError, TranslationFixture};
use form_trans::Form;
use std::fs;
use std::path::Path;

fn read(path: &Path) -> Result<String, SpecError> {
    fs::read_to_string(path).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn load_form(path: &Path) -> Result<Form, SpecError> {
    Form::from_json(&read(path)?).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load a single fixture file and the two forms it names.
pub fn load_fixture(path: &Path) -> Result<TranslationFixture, SpecError> {
    let spec = parse_fixture(&read(path)?).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let source = load_form(&base.join(&spec.source))?;
    let destination = load_form(&base.join(&spec.destination))?;

    Ok(TranslationFixture::from_spec(spec, source, destination))
}

/// Load all fixtures from a directory (glob: **/*.toml), sorted by relative path.
pub fn load_all_fixtures(dir: &Path) -> Result<Vec<(String, TranslationFixture)>, SpecError> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, TranslationFixture)>,
) -> Result<(), SpecError> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| SpecError::Load {
        path: dir.display().to_string(),
        message: e.to_string(),
    })? {
        let entry = entry.map_err(|e| SpecError::Load {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
        } else if path.extension().map_or(false, |e| e == "toml") {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let fixture = load_fixture(&path)?;
            fixtures.push((relative.display().to_string(), fixture));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fixtures_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    #[test]
    fn test_load_fixture() {
        let fixture = load_fixture(&fixtures_dir().join("hindi-to-english-by-shape.toml")).unwrap();
        assert!(fixture.title.is_some());
        assert_eq!(fixture.source.fields.len(), 3);
        assert_eq!(fixture.destination.thank_you_screens.len(), 1);
    }

    #[test]
    fn test_load_all_fixtures() {
        let fixtures = load_all_fixtures(&fixtures_dir()).unwrap();
        assert!(fixtures.len() >= 7);
        // Form exports live next to the fixtures but are not fixtures themselves.
        assert!(fixtures.iter().all(|(name, _)| name.ends_with(".toml")));
    }

    #[test]
    fn test_missing_form_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "source = \"nowhere.json\"\ndestination = \"nowhere.json\"").unwrap();

        match load_fixture(&path) {
            Err(SpecError::Load { path, .. }) => assert!(path.ends_with("nowhere.json")),
            other => panic!("expected load error, got {:?}", other.map(|f| f.title)),
        }
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let fixtures = load_all_fixtures(Path::new("/nonexistent/fixtures")).unwrap();
        assert!(fixtures.is_empty());
    }
}
