use std::fs;
use std::path::Path;

use anyhow::Result;
use subfilter::{run, run_named, FilterError, SimpleFilter, FilterStrategy, ToolKind};
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path)
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    Ok(fs::read_to_string(path)?.lines().map(String::from).collect())
}

#[test]
fn test_subfinder_end_to_end() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_input(&dir, "subfinder.txt", "http://x.com/a?x=1\nhttp://x.com/a?x=1\nhttp://x.com/b\n")?;
    let output = dir.path().join("filtered.txt");

    let summary = run(&input, ToolKind::Subfinder, &output)?;

    assert_eq!(read_lines(&output)?, vec!["http://x.com/a?x=1", "http://x.com/b"]);
    assert_eq!(summary.loaded, 3);
    assert_eq!(summary.kept, 2);
    assert_eq!(summary.dropped(), 1);
    Ok(())
}

#[test]
fn test_hash_prefixed_lines_are_entries() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_input(&dir, "subfinder.txt", "#anchor\nhttp://x.com/a\n\n")?;
    let output = dir.path().join("filtered.txt");

    let summary = run(&input, ToolKind::Subfinder, &output)?;

    assert_eq!(summary.loaded, 2);
    assert_eq!(read_lines(&output)?, vec!["#anchor", "http://x.com/a"]);
    Ok(())
}

#[test]
fn test_knockpy_and_sublist3r_use_canonical_dedup() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_input(
        &dir,
        "results.txt",
        "https://h.com/p?a=1&b=2\nhttps://h.com/p?b=2&a=1\nhttps://h.com/p?a=1&a=2\nhttps://h.com/p?a=2&a=1\n",
    )?;

    for tool in [ToolKind::Knockpy, ToolKind::Sublist3r] {
        let output = dir.path().join(format!("{tool}.out"));
        run(&input, tool, &output)?;
        assert_eq!(
            read_lines(&output)?,
            vec!["https://h.com/p?a=1&b=2", "https://h.com/p?a=1&a=2", "https://h.com/p?a=2&a=1"]
        );
    }
    Ok(())
}

#[test]
fn test_amass_end_to_end() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_input(
        &dir,
        "amass.json",
        r#"{"hostnames": [{"name": "a.example.com"}, {"name": "b.example.com"}, {"name": "a.example.com"}]}"#,
    )?;
    let output = dir.path().join("filtered.txt");

    let summary = run(&input, ToolKind::Amass, &output)?;

    let mut lines = read_lines(&output)?;
    lines.sort();
    assert_eq!(lines, vec!["a.example.com", "b.example.com"]);
    assert_eq!(summary.kept, 2);
    Ok(())
}

#[test]
fn test_unsupported_tool_writes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_input(&dir, "input.txt", "http://x.com/a\n")?;
    let output = dir.path().join("filtered.txt");

    let err = run_named(&input, "nmap", &output).unwrap_err();

    assert!(matches!(err, FilterError::UnsupportedTool { ref name } if name == "nmap"));
    assert!(err.to_string().contains("nmap"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_aquatone_reports_unavailable_loader() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_input(&dir, "aquatone.html", "<html></html>")?;
    let output = dir.path().join("filtered.txt");

    let err = run(&input, ToolKind::Aquatone, &output).unwrap_err();

    assert!(matches!(err, FilterError::LoaderUnavailable { tool: ToolKind::Aquatone }));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_missing_input_and_malformed_amass_abort() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("filtered.txt");

    let err = run(&dir.path().join("missing.txt"), ToolKind::Subfinder, &output).unwrap_err();
    assert!(matches!(err, FilterError::InputRead { .. }));
    assert!(err.to_string().contains("missing.txt"));

    let bad = write_input(&dir, "amass.json", "{\"hostnames\": \"oops\"}")?;
    let err = run(&bad, ToolKind::Amass, &output).unwrap_err();
    assert!(matches!(err, FilterError::MalformedInput { .. }));

    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_output_is_stable_subset_with_unique_keys() {
    let input: Vec<String> = [
        "http://h/p", "http://h/p/", "h.com", "http://h/p?a=1", "h.com",
        "http://h/p", "http://h/p?a=1#x", "HTTP://h/p", "http://h/p?a=1&a=1",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let kept = SimpleFilter.filter(input.clone()).into_vec();

    // Subset, in input order of first occurrence
    let mut cursor = input.iter();
    for entry in &kept {
        assert!(cursor.any(|candidate| candidate == entry), "{entry} out of order");
    }

    let keys: std::collections::HashSet<_> =
        kept.iter().map(|e| subfilter::CanonicalKey::from_raw(e)).collect();
    assert_eq!(keys.len(), kept.len());

    assert_eq!(
        kept,
        vec!["http://h/p", "http://h/p/", "h.com", "http://h/p?a=1", "HTTP://h/p", "http://h/p?a=1&a=1"]
    );
}
