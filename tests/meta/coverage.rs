//! Keeps `tests/unit/` in lockstep with `src/`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    // Entry points and module organization files need no counterpart
    fn is_organizational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn relative_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_stripped| io::Error::other("path outside base"))?
                    .to_string_lossy()
                    .replace('\\', "/");

                if path.is_dir() {
                    paths.insert(relative);
                    pending.push(path);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    paths.insert(relative);
                }
            }
        }

        Ok(paths)
    }

    fn rust_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            for entry in fs::read_dir(&current)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn report(title: &str, items: &[String]) -> String {
        format!("{title}:\n{}", items.join("\n"))
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = relative_paths(Path::new("src")).unwrap_or_default();
        let test_paths = relative_paths(Path::new("tests/unit")).unwrap_or_default();
        assert!(!src_paths.is_empty(), "src directory could not be scanned");

        let missing: Vec<String> = src_paths
            .iter()
            .filter(|path| !is_organizational(path) && !test_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit test counterparts", &missing)
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = relative_paths(Path::new("src")).unwrap_or_default();
        let test_paths = relative_paths(Path::new("tests/unit")).unwrap_or_default();

        let orphaned: Vec<String> = test_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit test files without source counterparts", &orphaned)
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let files = rust_files(Path::new("tests")).unwrap_or_default();
        assert!(!files.is_empty(), "tests directory could not be scanned");

        let empty: Vec<String> = files
            .iter()
            .filter(|path| {
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
                name != "main.rs" && name != "mod.rs"
            })
            .filter(|path| {
                fs::read_to_string(path)
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without #[test] functions", &empty)
        );
    }

    // A unit test file that no parent module declares is silently skipped
    #[test]
    fn test_all_unit_test_files_are_declared() {
        let files = rust_files(Path::new("tests/unit")).unwrap_or_default();

        let undeclared: Vec<String> = files
            .iter()
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?;
                if stem == "main" || stem == "mod" {
                    return None;
                }
                let parent = path.parent()?;
                let declaring = if parent == Path::new("tests/unit") {
                    parent.join("main.rs")
                } else {
                    parent.join("mod.rs")
                };
                let content = fs::read_to_string(&declaring).unwrap_or_default();
                let declared = content
                    .lines()
                    .map(str::trim)
                    .any(|line| line == format!("pub mod {stem};") || line == format!("mod {stem};"));
                (!declared).then(|| format!("  - {} (not declared in {})", path.display(), declaring.display()))
            })
            .collect();

        assert!(
            undeclared.is_empty(),
            "{}",
            report("Unit test files missing a module declaration", &undeclared)
        );
    }

    #[test]
    fn test_unit_directories_are_declared() {
        let dirs: Vec<String> = relative_paths(Path::new("tests/unit"))
            .unwrap_or_default()
            .into_iter()
            .filter(|path| !path.contains('/') && !path.ends_with(".rs"))
            .collect();
        let root = fs::read_to_string("tests/unit/main.rs").unwrap_or_default();

        let undeclared: Vec<String> = dirs
            .iter()
            .filter(|dir| !root.contains(&format!("mod {dir};")))
            .map(|dir| format!("  - tests/unit/{dir}"))
            .collect();

        assert!(
            undeclared.is_empty(),
            "{}",
            report("Unit test directories missing from tests/unit/main.rs", &undeclared)
        );
    }
}
