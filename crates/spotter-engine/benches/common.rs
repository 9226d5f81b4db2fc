// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_caption(blocks: usize) -> String {
    let base = "Block {n}: EMOM 12 min\n1\u{fe0f}\u{20e3} 10 KB Swings @ 24kg\n2\u{fe0f}\u{20e3} 400m Row\n3\u{fe0f}\u{20e3} 2x 50lb DB Thrusters\nRest 60s\nEvery 3 rounds: 200m Run\n---\n";
    (1..=blocks)
        .map(|n| base.replace("{n}", &n.to_string()))
        .collect()
}

#[allow(dead_code)]
pub fn generate_noisy_caption(lines: usize) -> String {
    let mut caption = String::from("\u{1f525} Monday Grind: \u{1f525}\n21-15-9 for time\n");
    for i in 0..lines {
        match i % 5 {
            0 => caption.push_str("\u{2022} 20 Wall Balls 20/14 lb\n"),
            1 => caption.push_str("Who is ready to sweat today? Tag a friend!\n"),
            2 => caption.push_str("15 cal Echo Bike\n"),
            3 => caption.push_str("#fitness #wod @coach\n"),
            _ => caption.push_str("Box jumps 24/20\"\n"),
        }
    }
    caption.push_str("Time cap: 20 min\n(M) RX: 95lb (F) RX: 65lb\n");
    caption
}
