// tests/integration_tests/frontmatter_test.rs
use docs_list::{FailureReason, FrontMatterResult, extract};

#[test]
fn test_frontmatter_parsing() {
    let content = "\
---
summary: 'Handles OAuth flows'
read_when:
  - \"auth changes\"
  - tests
---
# Content
Some content here.";

    assert_eq!(
        extract(content),
        FrontMatterResult::Success {
            summary: "Handles OAuth flows".to_owned(),
            hints: vec!["auth changes".to_owned(), "tests".to_owned()],
        }
    );
}

#[test]
fn test_inline_and_malformed_lists() {
    let inline = extract("---\nsummary: x\nread_when: ['a', 'b']\n---\n");
    assert_eq!(inline.hints(), ["a", "b"]);

    for malformed in ["['a', 'b'", "['a', 'b]", "[\"a\" \"b\"]", "[a, b]"] {
        let content = format!("---\nsummary: Kept\nread_when: {malformed}\n---\n");
        let result = extract(&content);
        assert_eq!(result.summary(), Some("Kept"), "input {malformed:?}");
        assert!(result.hints().is_empty(), "input {malformed:?}");
    }
}

#[test]
fn test_failure_reasons() {
    let cases = [
        ("# No metadata", FailureReason::MissingFrontMatter),
        ("---\nsummary: open\n", FailureReason::UnterminatedFrontMatter),
        ("---\ntitle: x\n---\n", FailureReason::SummaryKeyMissing),
        ("---\nsummary: \"\"\n---\n", FailureReason::SummaryEmpty),
    ];

    for (content, reason) in cases {
        assert_eq!(extract(content).reason(), Some(reason), "input {content:?}");
    }
}
