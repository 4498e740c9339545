use std::io::{self, BufRead, Write};

/// Block until the operator presses Enter.
pub fn pause() {
    print!("Press Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
