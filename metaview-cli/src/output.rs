// metaview-cli/src/output.rs
//
// Terminal output helpers. Colors are used only when stdout supports them,
// so piped output stays plain.

use owo_colors::OwoColorize;
use std::path::Path;

fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
        && supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Prints the `[<path>]` line that introduces a file's output.
pub fn print_file_header(path: &Path) {
    let header = format!("[{}]", path.display());
    if use_color() {
        println!("{}", header.bold().cyan());
    } else {
        println!("{header}");
    }
}

/// Prints an `id  description` row of the parser listing.
pub fn print_parser_row(id: &str, description: &str) {
    let id = format!("{id:<10}");
    if use_color() {
        println!("{} {}", id.green(), description);
    } else {
        println!("{id} {description}");
    }
}
