//! Usage-line and help-text rendering.
//!
//! Rendering is a pure function of the registered specification plus an
//! explicit display name, so the same registry can be shown under its
//! invocation path (diagnostics) or its declared command name (help). The
//! two-column layout and wrapping rules are kept bit-for-bit stable; captured
//! output of earlier releases depends on them.

use crate::types::{ArgSpec, OptionSpec};

const ARGUMENT_LEGEND: &str = "Argument with '...' is package, 'N' means number, 'V' means string: ";
const OPTION_LEGEND: &str = "Option value with 'N' means number, 'V' means string: ";

/// Renders the one-line usage summary.
///
/// Arguments appear in declaration order as `<name>` (`<name...>` for the
/// pack, `: NUM` appended when numeric-only), then options in registration
/// order as `[short|long]` with one ` N{i}`/` V{i}` placeholder per value.
pub(crate) fn usage_line(display: &str, arguments: &[ArgSpec], options: &[&OptionSpec]) -> String {
    let mut out = format!("Usage: {display}");
    for argument in arguments {
        out.push_str(" <");
        out.push_str(&argument.name);
        if argument.is_pack {
            out.push_str("...");
        }
        if argument.numeric_only {
            out.push_str(": NUM");
        }
        out.push('>');
    }
    for option in options {
        out.push_str(" [");
        push_option_names(&mut out, option);
        for i in 0..option.arity {
            out.push_str(if option.numeric_only { " N" } else { " V" });
            out.push_str(&(i + 1).to_string());
        }
        out.push(']');
    }
    out
}

/// Renders the multi-section help text: usage line, command note, then one
/// legend-plus-table section each for arguments and options.
pub(crate) fn help_text(
    display: &str,
    note: &str,
    arguments: &[ArgSpec],
    options: &[&OptionSpec],
) -> String {
    let mut out = usage_line(display, arguments, options);
    out.push('\n');
    if !note.is_empty() {
        out.push_str(note);
        out.push('\n');
    }

    if !arguments.is_empty() {
        out.push('\n');
        out.push_str(ARGUMENT_LEGEND);
        out.push('\n');
        let lefts: Vec<String> = arguments.iter().map(argument_left).collect();
        let width = column_width(&lefts);
        for (argument, left) in arguments.iter().zip(&lefts) {
            push_row(&mut out, left, &argument.note, width);
        }
    }

    if !options.is_empty() {
        out.push('\n');
        out.push_str(OPTION_LEGEND);
        out.push('\n');
        let lefts: Vec<String> = options.iter().map(|option| option_left(option)).collect();
        let width = column_width(&lefts);
        for (option, left) in options.iter().zip(&lefts) {
            push_row(&mut out, left, &option.note, width);
        }
    }

    out
}

fn push_option_names(out: &mut String, option: &OptionSpec) {
    if let Some(short) = &option.short {
        out.push_str(short);
        out.push('|');
    }
    out.push_str(&option.long);
}

fn argument_left(argument: &ArgSpec) -> String {
    format!(
        " <{}{}{}",
        argument.name,
        if argument.is_pack { "...>" } else { ">" },
        if argument.numeric_only { ": N" } else { ": V" },
    )
}

fn option_left(option: &OptionSpec) -> String {
    let mut left = String::from(" [");
    push_option_names(&mut left, option);
    if option.arity > 0 {
        left.push(' ');
    }
    for i in 0..option.arity {
        left.push_str(if option.numeric_only { "N" } else { "V" });
        left.push_str(&(i + 1).to_string());
        if i + 1 < option.arity {
            left.push(' ');
        }
    }
    left.push(']');
    left
}

/// Note column starts at the longest left token plus ten, capped at 50.
fn column_width(lefts: &[String]) -> usize {
    let longest = lefts.iter().map(String::len).max().unwrap_or(0);
    (longest + 10).min(50)
}

fn push_row(out: &mut String, left: &str, note: &str, width: usize) {
    out.push_str(left);
    for _ in left.len()..width {
        out.push(' ');
    }
    push_note(out, note, width);
    out.push('\n');
}

/// Appends a note after the padded left column. Embedded line breaks start a
/// continuation line padded to the column width, preserving alignment.
fn push_note(out: &mut String, note: &str, width: usize) {
    if note.is_empty() {
        return;
    }
    let mut rest = note;
    while let Some(pos) = rest.find('\n') {
        out.push(' ');
        out.push_str(&rest[..pos]);
        out.push('\n');
        for _ in 0..width {
            out.push(' ');
        }
        rest = &rest[pos + 1..];
    }
    if !rest.is_empty() {
        out.push(' ');
        out.push_str(rest);
    }
}
