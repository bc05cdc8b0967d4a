// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n  - Nested item\n- Another item\n\n| A | B |\n|:--|--:|\n| 1 | 2 |\n\n> A quote\n> over two lines\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// Paragraphs citing footnotes and reference links defined at the end.
#[allow(dead_code)]
pub fn generate_reference_heavy(paragraphs: usize) -> String {
    let mut content = String::new();
    for i in 0..paragraphs {
        content.push_str(&format!(
            "Paragraph {i} cites a note[^n{i}] and [the docs][d{i}] with ~~old~~ text.\n\n"
        ));
    }
    for i in 0..paragraphs {
        content.push_str(&format!("[^n{i}]: Footnote number {i}.\n"));
        content.push_str(&format!("[d{i}]: https://example.org/{i} \"Docs {i}\"\n"));
    }
    content
}

/// Long lines of unmatched and nested emphasis markers.
#[allow(dead_code)]
pub fn generate_emphasis_stress(lines: usize) -> String {
    let line = "*a **b ***c*** d** e* _f_ ~~g ~h~~~ x^2^ * unmatched ** markers `*code*`\n";
    line.repeat(lines)
}
