// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_message(size: usize) -> String {
    let base = "Hey @alice, check **this** out in #rust-help: `cargo test` then https://docs.rs/regex *now*.\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_code_message(lines: usize) -> String {
    let mut content = String::from("Here's the problem:\n\n```rust\n");
    for i in 0..lines {
        content.push_str(&format!("let v{i} = vec![1, 2, 3]; // *not* @markup\n"));
    }
    content.push_str("```\nAny ideas?");
    content
}

#[allow(dead_code)]
pub fn generate_asterisk_storm(size: usize) -> String {
    "*a **b *c".repeat(size)
}
