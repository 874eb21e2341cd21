// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_summary_content(size: usize) -> String {
    let base = "# Patient Summary\n\n## Assessment\n1. **Dx**: stable, *improving*\n2. Follow `CBC` weekly\n\n### Plan\n- Continue **metformin**\n- Recheck _renal function_\nCounselled on diet.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_unclosed_delimiters(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!("Line {i} with *open _marks `and ** stray stars\n"));
    }
    content
}
