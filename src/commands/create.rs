use std::path::Path;

use anyhow::Result;
use pyinit::files;
use pyinit::templates::Template;

pub fn run(dir: &Path, templates: &[Template]) -> Result<()> {
    for template in templates {
        let name = template.filename();
        files::write(dir, name, template.contents().as_bytes())?;
        println!("Created {name}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_writes_only_requested_templates() {
        let dir = tempfile::tempdir().unwrap();

        run(dir.path(), &[Template::Pyproject, Template::Dockerignore]).unwrap();

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, [".dockerignore", "pyproject.toml"]);
        assert_eq!(
            fs::read_to_string(dir.path().join("pyproject.toml")).unwrap(),
            Template::Pyproject.contents()
        );
    }

    #[test]
    fn test_empty_selection_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), &[]).unwrap();
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }
}
