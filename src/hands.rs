//! QWERTY hand classification of identifiers.
//!
//! Reads path names, strips them down to a bare identifier (the file stem),
//! and reports the ones that can be typed entirely with one hand.

use std::io::{BufRead, Write};

use crate::error::{Result, TallyError};

/// Letters under the left hand on a QWERTY layout.
const LEFT_HAND: &str = "qwertasdfgzxcvb";
/// Letters under the right hand.
const RIGHT_HAND: &str = "yuiophjklnm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    LeftOnly,
    RightOnly,
    Both,
}

/// Classify an identifier by which hand types it.
///
/// Counts left- and right-hand letters case-insensitively. Any character
/// outside both sets (digits, underscores, punctuation) is an error.
pub fn classify(name: &str) -> Result<Handedness> {
    let mut left = 0usize;
    let mut right = 0usize;

    for c in name.to_lowercase().chars() {
        if LEFT_HAND.contains(c) {
            left += 1;
        } else if RIGHT_HAND.contains(c) {
            right += 1;
        } else {
            return Err(TallyError::UntypeableCharacter {
                name: name.to_string(),
                ch: c,
            });
        }
    }

    Ok(if right == 0 {
        Handedness::LeftOnly
    } else if left == 0 {
        Handedness::RightOnly
    } else {
        Handedness::Both
    })
}

/// Reduce a path line to its identifier: basename with the extension cut off.
pub fn identifier(path: &str) -> &str {
    let basename = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match basename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => basename,
    }
}

/// Classify every path on `input`, one per line, writing a line to `output`
/// for each identifier typeable with a single hand. Mixed identifiers are
/// silently skipped; blank lines are ignored.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let name = identifier(trimmed);
        match classify(name)? {
            Handedness::LeftOnly => writeln!(output, "Left hand only: {}", name)?,
            Handedness::RightOnly => writeln!(output, "Right hand only: {}", name)?,
            Handedness::Both => {}
        }
    }
    Ok(())
}
