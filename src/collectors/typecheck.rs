//! Type-check collector: counts compiler diagnostics in captured `tsc`
//! output. A non-zero exit from the type checker is expected when errors
//! exist, so the count comes from the output text, never from the exit code.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

static TS_ERROR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)error TS\d+:").expect("valid regex"));

/// Count type errors in tsc-style output.
pub fn count_type_errors(output: &str) -> u32 {
    TS_ERROR.find_iter(output).count() as u32
}

/// Read a captured type-check log; missing log means the metric is absent.
pub fn collect(path: &Path) -> Option<u32> {
    super::read_artifact(path).map(|contents| count_type_errors(&contents))
}

/// Run the type checker directly and count errors from its output, tolerating
/// a non-zero exit.
pub fn collect_via_command(program: &str, args: &[&str], cwd: &Path) -> Option<u32> {
    super::process::run_tool(program, args, cwd).map(|output| count_type_errors(&output.stdout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::path::PathBuf;

    #[test]
    fn test_count_type_errors() {
        let output = indoc! {"
            src/app.ts(10,5): error TS2322: Type 'string' is not assignable to type 'number'.
            src/app.ts(14,1): error TS2304: Cannot find name 'foo'.
            src/lib.ts(3,9): warning: unused variable
        "};
        assert_eq!(count_type_errors(output), 2);
    }

    #[test]
    fn test_clean_output_counts_zero() {
        assert_eq!(count_type_errors(""), 0);
        assert_eq!(count_type_errors("Compilation complete.\n"), 0);
    }

    #[test]
    fn test_collect_missing_log_is_none() {
        assert_eq!(collect(&PathBuf::from("/nonexistent/typecheck.log")), None);
    }
}
