// metaview-cli/src/commands/parsers.rs
//
// Implements the `parsers` command: lists the built-in parsers in the order
// they are tried.

use crate::output::print_parser_row;

pub fn run_parsers() {
    for (id, description) in metaview_core::default_registry().describe() {
        print_parser_row(id, description);
    }
}
