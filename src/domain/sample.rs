/// Starter deck offered by "Insert sample" in the editor.
pub const SAMPLE_MARKDOWN: &str = r#"# Presentation Title

## First Slide

- Bullet point 1
- Bullet point 2
- Bullet point 3

## Second Slide

### Subsection

Content for subsection

## Third Slide

> Blockquote example

---

## Images and Links

![Image description](image_url)

[Link text](http://example.com)

## Table Example

| Header 1 | Header 2 |
|----------|----------|
| Cell 1   | Cell 2   |
| Cell 3   | Cell 4   |
"#;
