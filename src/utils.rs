// Move cursor to top-left and clear screen
pub const CLEAR_SCREEN: &str = "\x1B[H\x1B[0J";


// Terminal hyperlink (OSC 8); plain mode prints the target instead
pub fn hyperlink(url: &str, label: &str, ansi: bool) -> String {
    if ansi {
        format!("\x1B]8;;{url}\x1B\\{label}\x1B]8;;\x1B\\")
    } else {
        format!("{label}: {url}")
    }
}


pub fn bold(text: &str, ansi: bool) -> String {
    if ansi {
        format!("\x1B[1m{text}\x1B[0m")
    } else {
        text.to_string()
    }
}


// Frame a multi-line message in a box
pub fn boxed(text: &str) -> String {
    let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let rule = "-".repeat(width + 2);
    let mut out = format!("+{rule}+\n");
    for line in text.lines() {
        let pad = width - line.chars().count();
        out.push_str(&format!("| {line}{} |\n", " ".repeat(pad)));
    }
    out.push_str(&format!("+{rule}+\n"));
    out
}
