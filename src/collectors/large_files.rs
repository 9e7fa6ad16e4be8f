//! Large-file collector: walks the configured source directories and counts
//! files whose line count exceeds the file-length threshold.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

pub fn count_large_files(
    root: &Path,
    source_dirs: &[String],
    extensions: &[String],
    max_lines: usize,
) -> Option<u32> {
    let mut found_any_dir = false;
    let mut count = 0u32;

    for dir in source_dirs {
        let base = root.join(dir);
        if !base.is_dir() {
            continue;
        }
        found_any_dir = true;

        for entry in WalkDir::new(&base)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if !has_source_extension(entry.path(), extensions) {
                continue;
            }
            match fs::read_to_string(entry.path()) {
                Ok(contents) => {
                    if contents.lines().count() > max_lines {
                        count += 1;
                    }
                }
                Err(e) => log::debug!("Skipping unreadable file {}: {}", entry.path().display(), e),
            }
        }
    }

    // No source directory at all means the metric cannot be measured
    found_any_dir.then_some(count)
}

fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_lines(path: &Path, lines: usize) {
        let contents = "line\n".repeat(lines);
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_counts_files_over_limit() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        write_lines(&src.join("big.ts"), 40);
        write_lines(&src.join("nested/bigger.tsx"), 50);
        write_lines(&src.join("small.ts"), 5);
        write_lines(&src.join("ignored.css"), 100);

        let count = count_large_files(
            temp.path(),
            &["src".to_string()],
            &["ts".to_string(), "tsx".to_string()],
            30,
        );
        assert_eq!(count, Some(2));
    }

    #[test]
    fn test_missing_source_dir_is_none() {
        let temp = TempDir::new().unwrap();
        let count = count_large_files(temp.path(), &["src".to_string()], &["ts".to_string()], 30);
        assert_eq!(count, None);
    }
}
