use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum TleParseError {
    #[error("sgp4 parse error: {0}")]
    Sgp4(#[from] sgp4::Error),
    #[error("satellite {name:?} not found in TLE set")]
    NotFound { name: String },
}

fn is_line1(line: &str) -> bool {
    line.starts_with("1 ")
}

fn is_line2(line: &str) -> bool {
    line.starts_with("2 ")
}

/// Parses TLE text into a vector of `sgp4::Elements`, in source order.
/// Supports both 2-line and 3-line (with name) formats.
pub fn parse_tle_text(content: &str) -> Result<Vec<sgp4::Elements>, TleParseError> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect();

    let mut elements = Vec::new();
    let mut name: Option<String> = None;
    let mut i = 0usize;
    while i < lines.len() {
        let line = lines[i];
        if !is_line1(line) {
            // Anything that isn't a line 1 is a candidate name for the next pair
            if is_line2(line) {
                warn!(line = i + 1, "Skipping orphan TLE line 2");
                name = None;
            } else {
                name = Some(line.trim().to_string());
            }
            i += 1;
            continue;
        }

        if i + 1 >= lines.len() || !is_line2(lines[i + 1]) {
            warn!(line = i + 1, "Skipping invalid TLE pair: missing line 2");
            name = None;
            i += 1;
            continue;
        }

        debug!("Parsing TLE at lines {}, {}", i + 1, i + 2);
        let elems = sgp4::Elements::from_tle(
            name.take(),
            lines[i].as_bytes(),
            lines[i + 1].as_bytes(),
        )?;
        elements.push(elems);
        i += 2;
    }

    info!(count = elements.len(), "Parsed TLE elements");
    Ok(elements)
}

/// Indexes elements by object name. A later record with the same name
/// replaces the earlier one; unnamed records are dropped.
pub fn index_by_name(elements: Vec<sgp4::Elements>) -> HashMap<String, sgp4::Elements> {
    let mut by_name = HashMap::with_capacity(elements.len());
    for el in elements {
        let Some(name) = el.object_name.clone() else {
            debug!(norad = el.norad_id, "Skipping unnamed element set");
            continue;
        };
        if by_name.insert(name.clone(), el).is_some() {
            debug!(name = %name, "Duplicate satellite name, keeping later record");
        }
    }
    by_name
}

pub fn select_by_name<'a>(
    by_name: &'a HashMap<String, sgp4::Elements>,
    name: &str,
) -> Result<&'a sgp4::Elements, TleParseError> {
    by_name.get(name).ok_or_else(|| TleParseError::NotFound {
        name: name.to_string(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const ISS_LINE1: &str =
        "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    pub(crate) const ISS_LINE2: &str =
        "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";
    // Same orbit, epoch one day later
    const ISS_LATER_LINE1: &str =
        "1 25544U 98067A   08265.51782528 -.00002182  00000-0 -11606-4 0  2928";

    pub(crate) fn iss_tle_text() -> String {
        format!("ISS (ZARYA)\n{ISS_LINE1}\n{ISS_LINE2}\n")
    }

    #[test]
    fn parse_simple_tle() {
        let elems = parse_tle_text(&iss_tle_text()).unwrap();
        assert_eq!(elems.len(), 1);
        assert_eq!(elems[0].norad_id, 25544);
        assert_eq!(elems[0].object_name.as_deref(), Some("ISS (ZARYA)"));
    }

    #[test]
    fn parse_two_line_format_has_no_name() {
        let text = format!("{ISS_LINE1}\n{ISS_LINE2}\n");
        let elems = parse_tle_text(&text).unwrap();
        assert_eq!(elems.len(), 1);
        assert!(elems[0].object_name.is_none());
    }

    #[test]
    fn parse_skips_blank_lines_and_trailing_whitespace() {
        let text = format!("\nISS (ZARYA)    \r\n\n{ISS_LINE1}  \r\n{ISS_LINE2}\r\n\n");
        let elems = parse_tle_text(&text).unwrap();
        assert_eq!(elems.len(), 1);
        assert_eq!(elems[0].object_name.as_deref(), Some("ISS (ZARYA)"));
    }

    #[test]
    fn parse_skips_line1_without_line2() {
        let text = format!("BROKEN\n{ISS_LINE1}\nISS (ZARYA)\n{ISS_LINE1}\n{ISS_LINE2}\n");
        let elems = parse_tle_text(&text).unwrap();
        assert_eq!(elems.len(), 1);
        assert_eq!(elems[0].object_name.as_deref(), Some("ISS (ZARYA)"));
    }

    #[test]
    fn parse_rejects_malformed_record() {
        let bad = ISS_LINE1.replace("08264.51782528", "0826X.51782528");
        let text = format!("ISS (ZARYA)\n{bad}\n{ISS_LINE2}\n");
        assert!(matches!(
            parse_tle_text(&text),
            Err(TleParseError::Sgp4(_))
        ));
    }

    #[test]
    fn index_keeps_last_duplicate() {
        let text = format!(
            "ISS (ZARYA)\n{ISS_LINE1}\n{ISS_LINE2}\nISS (ZARYA)\n{ISS_LATER_LINE1}\n{ISS_LINE2}\n"
        );
        let elems = parse_tle_text(&text).unwrap();
        assert_eq!(elems.len(), 2);
        let earlier = elems[0].datetime;

        let by_name = index_by_name(elems);
        assert_eq!(by_name.len(), 1);
        let selected = select_by_name(&by_name, "ISS (ZARYA)").unwrap();
        assert!(selected.datetime > earlier);
    }

    #[test]
    fn index_drops_unnamed_records() {
        let text = format!("{ISS_LINE1}\n{ISS_LINE2}\n");
        let by_name = index_by_name(parse_tle_text(&text).unwrap());
        assert!(by_name.is_empty());
    }

    #[test]
    fn select_missing_name_is_not_found() {
        let by_name = index_by_name(parse_tle_text(&iss_tle_text()).unwrap());
        match select_by_name(&by_name, "CSS (TIANHE)") {
            Err(TleParseError::NotFound { name }) => assert_eq!(name, "CSS (TIANHE)"),
            Err(e) => panic!("expected NotFound, got {e:?}"),
            Ok(_) => panic!("expected NotFound, got a match"),
        }
    }
}
