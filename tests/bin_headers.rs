use std::{fs, path::Path};

/// The `cargo run` usage block at the top of every binary must stay a single,
/// non-nested block comment, so glob examples may not contain a slash-star.
#[test]
fn usage_headers_are_closed_block_comments() {
    let bin_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/bin");
    let mut checked = 0;
    for entry in fs::read_dir(&bin_dir).expect("read src/bin") {
        let path = entry.expect("dir entry").path();
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let source = fs::read_to_string(&path).expect("read source");
        let body = source
            .strip_prefix("/*")
            .unwrap_or_else(|| panic!("{} has no usage header", path.display()));
        let end = body
            .find("*/")
            .unwrap_or_else(|| panic!("{} header is never closed", path.display()));
        assert!(
            !body[..end].contains("/*"),
            "{} header opens a nested comment",
            path.display()
        );
        checked += 1;
    }
    assert_eq!(checked, 4);
}
