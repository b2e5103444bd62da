use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{bail, Context, Result};
use cupcake_touch::ContactPoint;

const TRACE_HEADER: &str = "contact,ms,action,x,y";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Start,
    Move,
    End,
    Cancel,
    Poll,
}

impl ContactAction {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "start" => Some(Self::Start),
            "move" => Some(Self::Move),
            "end" => Some(Self::End),
            "cancel" => Some(Self::Cancel),
            "poll" => Some(Self::Poll),
            _ => None,
        }
    }
}

/// One `contact,<ms>,<action>,<x>,<y>` record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceLine {
    pub ms: u64,
    pub action: ContactAction,
    pub x: f32,
    pub y: f32,
}

impl TraceLine {
    pub fn point(&self) -> ContactPoint {
        ContactPoint::new(self.x, self.y, self.ms)
    }
}

pub fn parse_trace(path: &Path) -> Result<Vec<TraceLine>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut out = Vec::new();
    for (line_no, line_result) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line =
            line_result.with_context(|| format!("failed to read {}:{}", path.display(), line_no))?;
        let location = format!("{}:{}", path.display(), line_no);
        if let Some(parsed) = parse_line(&line).with_context(|| location)? {
            out.push(parsed);
        }
    }

    Ok(out)
}

/// `Ok(None)` for blank, comment and header lines.
fn parse_line(line: &str) -> Result<Option<TraceLine>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed == TRACE_HEADER {
        return Ok(None);
    }

    let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if parts.len() != 5 {
        bail!("invalid trace line, expected 5 columns, got {}", parts.len());
    }
    if parts[0] != "contact" {
        bail!("invalid record type '{}'", parts[0]);
    }

    let ms = parts[1]
        .parse::<u64>()
        .with_context(|| format!("invalid ms '{}'", parts[1]))?;
    let Some(action) = ContactAction::parse(parts[2]) else {
        bail!("invalid action '{}'", parts[2]);
    };
    let x = parts[3]
        .parse::<f32>()
        .with_context(|| format!("invalid x '{}'", parts[3]))?;
    let y = parts[4]
        .parse::<f32>()
        .with_context(|| format!("invalid y '{}'", parts[4]))?;

    Ok(Some(TraceLine { ms, action, x, y }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header_comments_and_blanks() {
        assert_eq!(parse_line("contact,ms,action,x,y").unwrap(), None);
        assert_eq!(parse_line("  # finger lifted").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn parses_contact_record() {
        assert_eq!(
            parse_line("contact, 120, Move, 14.5, -3").unwrap(),
            Some(TraceLine {
                ms: 120,
                action: ContactAction::Move,
                x: 14.5,
                y: -3.0,
            })
        );
    }

    #[test]
    fn rejects_malformed_records() {
        assert!(parse_line("contact,10,start,1").is_err());
        assert!(parse_line("touch,10,start,1,2").is_err());
        assert!(parse_line("contact,-1,start,1,2").is_err());
        assert!(parse_line("contact,10,hover,1,2").is_err());
        assert!(parse_line("contact,10,start,x,2").is_err());
    }
}
