use crate::diag::Diagnostics;
use crate::error::Error;
use crate::ir::SourceLine;

pub const HEADER: &str = ".IPPcode23";

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Splits the source into comment-free instruction lines and removes the
/// header. Fails with [`Error::Header`] when the first meaningful line is not
/// `.IPPcode23` (case-insensitive, trailing comment allowed).
pub fn stage0(text: &str, diag: &dyn Diagnostics) -> Result<Vec<SourceLine>, Error> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = text.split('\n').enumerate().map(|(i, l)| (i + 1, l));

    let header = lines.find(|(_, l)| {
        let t = l.trim();
        !t.is_empty() && !t.starts_with('#')
    });

    match header {
        None => {
            diag.report("normalize", "source contains no header line");
            return Err(Error::Header {
                line_no: text.split('\n').count(),
                found: None,
            });
        }
        Some((line_no, line)) => {
            if !strip_comment(line).trim().eq_ignore_ascii_case(HEADER) {
                diag.report(
                    "normalize",
                    &format!("line {}: header mismatch: '{}'", line_no, line.trim()),
                );
                return Err(Error::Header {
                    line_no,
                    found: Some(line.trim().to_string()),
                });
            }
        }
    }

    let out = lines
        .filter_map(|(line_no, l)| {
            let t = strip_comment(l.trim()).trim();
            if t.is_empty() {
                None
            } else {
                Some((line_no, t.to_string()))
            }
        })
        .enumerate()
        .map(|(index, (line_no, text))| SourceLine {
            index,
            line_no,
            text,
        })
        .collect();
    Ok(out)
}
