//! Interactive selection prompt.
//!
//! Replaces the checkbox/radio screen of the original installer with a
//! plain line-oriented prompt: a checklist over the model identifiers in
//! the versions file, then a choice between the unprivileged and
//! privileged install locations. The result is handed to the executor as
//! an immutable [`Selection`](crate::models::Selection); no state is
//! shared with it.

use crate::error::Result;
use crate::models::locations::{privileged_dir, unprivileged_dir, InstallMode};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};

/// What one line of checklist input asks for
#[derive(Debug, PartialEq, Eq)]
enum LineOutcome {
    Continue,
    Accept,
    Cancel,
    Invalid,
}

/// Apply one input line to the checked set. `count` is the number of
/// listed models; indices are 0-based internally, 1-based in the UI.
fn apply_line(line: &str, checked: &mut BTreeSet<usize>, count: usize) -> LineOutcome {
    match line.trim() {
        "" | "d" => LineOutcome::Accept,
        "q" => LineOutcome::Cancel,
        "a" => {
            checked.extend(0..count);
            LineOutcome::Continue
        }
        "n" => {
            checked.clear();
            LineOutcome::Continue
        }
        other => match other.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => {
                let idx = n - 1;
                if !checked.remove(&idx) {
                    checked.insert(idx);
                }
                LineOutcome::Continue
            }
            _ => LineOutcome::Invalid,
        },
    }
}

fn render_checklist<W: Write>(
    output: &mut W,
    model_ids: &[&str],
    checked: &BTreeSet<usize>,
) -> Result<()> {
    writeln!(output, "Choose the model(s) to install:")?;
    for (i, id) in model_ids.iter().enumerate() {
        let mark = if checked.contains(&i) { "x" } else { " " };
        writeln!(output, "  {:>2}) [{mark}] {id}", i + 1)?;
    }
    writeln!(
        output,
        "Toggle with a number, 'a' = all, 'n' = none, Enter = continue, 'q' = cancel"
    )?;
    Ok(())
}

/// Run the model checklist. Returns `None` if the user cancelled.
pub fn choose_models<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    model_ids: &[&str],
) -> Result<Option<BTreeSet<String>>> {
    let mut checked: BTreeSet<usize> = BTreeSet::new();

    loop {
        render_checklist(output, model_ids, &checked)?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF counts as cancel
            return Ok(None);
        }

        match apply_line(&line, &mut checked, model_ids.len()) {
            LineOutcome::Continue => {}
            LineOutcome::Accept => {
                let selected = checked
                    .iter()
                    .map(|&i| model_ids[i].to_string())
                    .collect();
                return Ok(Some(selected));
            }
            LineOutcome::Cancel => return Ok(None),
            LineOutcome::Invalid => {
                writeln!(output, "Unrecognized input '{}'", line.trim())?;
            }
        }
    }
}

/// Run the install-location choice. Returns `None` if the user cancelled.
pub fn choose_mode<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    version: &str,
) -> Result<Option<InstallMode>> {
    let unprivileged = unprivileged_dir(version)?;
    let privileged = privileged_dir(version);

    writeln!(output, "Choose CoreNLP models installation mode:")?;
    writeln!(
        output,
        "  1) unprivileged location ({}) [default]",
        unprivileged.display()
    )?;
    writeln!(output, "  2) privileged location ({})", privileged.display())?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim() {
            "" | "1" => return Ok(Some(InstallMode::Unprivileged)),
            "2" => return Ok(Some(InstallMode::Privileged)),
            "q" => return Ok(None),
            other => writeln!(output, "Unrecognized input '{other}'")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const MODELS: &[&str] = &["arabic", "chinese", "english"];

    fn run_checklist(script: &str) -> Option<BTreeSet<String>> {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        choose_models(&mut input, &mut output, MODELS).unwrap()
    }

    #[test]
    fn test_toggle_and_accept() {
        let selected = run_checklist("1\n3\n\n").unwrap();
        assert_eq!(
            selected.into_iter().collect::<Vec<_>>(),
            vec!["arabic", "english"]
        );
    }

    #[test]
    fn test_toggle_twice_removes() {
        let selected = run_checklist("2\n2\n\n").unwrap();
        assert!(selected.is_empty());
    }

    #[test]
    fn test_select_all_then_none() {
        let selected = run_checklist("a\nn\n1\nd\n").unwrap();
        assert_eq!(selected.into_iter().collect::<Vec<_>>(), vec!["arabic"]);
    }

    #[test]
    fn test_cancel() {
        assert!(run_checklist("1\nq\n").is_none());
    }

    #[test]
    fn test_eof_is_cancel() {
        assert!(run_checklist("1\n").is_none());
    }

    #[test]
    fn test_invalid_input_keeps_prompting() {
        let selected = run_checklist("99\nbogus\na\n\n").unwrap();
        assert_eq!(selected.len(), MODELS.len());
    }

    #[test]
    fn test_apply_line_bounds() {
        let mut checked = BTreeSet::new();
        assert_eq!(apply_line("0", &mut checked, 3), LineOutcome::Invalid);
        assert_eq!(apply_line("4", &mut checked, 3), LineOutcome::Invalid);
        assert_eq!(apply_line("3", &mut checked, 3), LineOutcome::Continue);
        assert!(checked.contains(&2));
    }

    #[test]
    fn test_choose_mode_default() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        let mode = choose_mode(&mut input, &mut output, "3.7.0").unwrap();
        assert_eq!(mode, Some(InstallMode::Unprivileged));
    }

    #[test]
    fn test_choose_mode_privileged() {
        let mut input = Cursor::new(b"2\n".to_vec());
        let mut output = Vec::new();
        let mode = choose_mode(&mut input, &mut output, "3.7.0").unwrap();
        assert_eq!(mode, Some(InstallMode::Privileged));
    }

    #[test]
    fn test_choose_mode_cancel() {
        let mut input = Cursor::new(b"q\n".to_vec());
        let mut output = Vec::new();
        let mode = choose_mode(&mut input, &mut output, "3.7.0").unwrap();
        assert!(mode.is_none());
    }
}
