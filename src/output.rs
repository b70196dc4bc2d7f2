//! Parsing of git's textual output.

/// Prefix that git prints before remote-tracking branches of `origin`.
const ORIGIN_PREFIX: &str = "origin/";

/// Marker of a symbolic ref such as `remotes/origin/HEAD -> origin/main`.
const SYMBOLIC_REF_MARKER: &str = "HEAD ->";

/// Split command output into lines.
///
/// Empty output yields no lines. The terminal newline that git prints after
/// the last line is dropped instead of producing an empty trailing entry;
/// every other line is returned untouched and in order.
pub fn split_lines(output: &str) -> Vec<String> {
    let body = output.strip_suffix('\n').unwrap_or(output);
    if body.is_empty() {
        return Vec::new();
    }

    body.split('\n').map(str::to_string).collect()
}

/// Normalize one line of `git branch -a --contains` output.
///
/// - short lines ending in `main` (`"* main"`, `"  main"`) collapse to `"main"`
/// - symbolic refs (`HEAD ->`) are dropped
/// - remote-tracking names lose everything up to the first `origin/`
/// - anything else is kept as printed
pub fn normalize_contains_line(line: &str) -> Option<String> {
    if line.ends_with("main") && line.trim().len() < 8 {
        return Some("main".to_string());
    }

    if line.contains(SYMBOLIC_REF_MARKER) {
        return None;
    }

    match line.split_once(ORIGIN_PREFIX) {
        Some((_, short_name)) => Some(short_name.to_string()),
        None => Some(line.to_string()),
    }
}

/// Turn `git branch -a --contains` output into branch names.
pub fn parse_contains_output(output: &str) -> Vec<String> {
    split_lines(output)
        .iter()
        .filter_map(|line| normalize_contains_line(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_terminal_newline() {
        assert_eq!(split_lines("v1.0\nv1.1\nv2.0\n"), vec!["v1.0", "v1.1", "v2.0"]);
    }

    #[test]
    fn test_split_lines_empty() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n").is_empty());
    }

    #[test]
    fn test_split_lines_without_terminal_newline_keeps_last_line() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_keeps_inner_blank_lines() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_origin_prefix_only_first_occurrence_is_stripped() {
        assert_eq!(
            normalize_contains_line("  remotes/origin/team/origin/fix").as_deref(),
            Some("team/origin/fix")
        );
    }

    #[test]
    fn test_parse_contains_output_does_not_skip_after_head() {
        let output = "* main\n  remotes/origin/HEAD -> origin/main\n  remotes/origin/feature/x\n";
        assert_eq!(parse_contains_output(output), vec!["main", "feature/x"]);
    }
}
