use std::fs;
use std::io;
use std::path::Path;

/// Keep only the element lines ("1 " / "2 ") of a catalog, trimmed, one per
/// line. Name lines and anything else are dropped.
pub fn clean_catalog(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("1 ") || l.starts_with("2 "))
        .fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
}

/// Clean `input` into `output`, returning the number of lines kept.
pub fn clean_catalog_file(input: &Path, output: &Path) -> io::Result<usize> {
    let content = fs::read_to_string(input)?;
    let cleaned = clean_catalog(&content);
    fs::write(output, &cleaned)?;

    let kept = cleaned.lines().count();
    log::info!(
        "Cleaned {} -> {} ({} element lines)",
        input.display(),
        output.display(),
        kept
    );
    Ok(kept)
}
