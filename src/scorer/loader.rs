use crate::error::{PfResult, PhraseForgeError};
use crate::geometry::{KeyPositions, Point};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Splits text into lines after dropping every `\r`. A trailing newline
/// leaves a final empty entry.
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace('\r', "")
        .split('\n')
        .map(str::to_string)
        .collect()
}

pub fn read_word_list<R: Read>(mut reader: R) -> PfResult<Vec<String>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| PhraseForgeError::io("<word list>", e))?;
    Ok(split_lines(&text))
}

pub fn load_word_list<P: AsRef<Path>>(path: P) -> PfResult<Vec<String>> {
    let path = path.as_ref();
    info!("📚 Loading words from: {}", path.display());
    let file = File::open(path).map_err(|e| PhraseForgeError::io(path, e))?;
    let words = read_word_list(file).map_err(|e| match e {
        PhraseForgeError::Io { source, .. } => PhraseForgeError::io(path, source),
        other => other,
    })?;
    debug!("   -> {} lines", words.len());
    Ok(words)
}

fn parse_key(s: &str) -> Option<char> {
    match s {
        "space" | "\\s" => Some(' '),
        _ => s.chars().next(),
    }
}

fn parse_coord(field: &str, name: &str, row: u64) -> PfResult<f64> {
    field.trim().parse::<f64>().map_err(|e| {
        PhraseForgeError::Config(format!(
            "key coordinates row {}: {} value {:?} is not a number ({})",
            row, name, field, e
        ))
    })
}

/// Reads `<key>,<x>,<y>` rows after a header line. Quotes carry no
/// meaning, so `"` is an ordinary key.
pub fn read_key_positions<R: Read>(reader: R) -> PfResult<KeyPositions> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .quoting(false)
        .from_reader(reader);

    let mut positions = KeyPositions::new();
    let mut skipped = 0;

    for (idx, result) in rdr.records().enumerate() {
        let rec = result?;
        // Blank lines are skipped by the reader, so count from its position.
        let row = rec
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);

        let key = match rec.get(0).and_then(parse_key) {
            Some(k) => k,
            None => {
                skipped += 1;
                continue;
            }
        };

        if rec.len() < 3 {
            return Err(PhraseForgeError::Config(format!(
                "key coordinates row {}: expected <key>,<x>,<y>, got {} field(s)",
                row,
                rec.len()
            )));
        }

        let x = parse_coord(&rec[1], "x", row)?;
        let y = parse_coord(&rec[2], "y", row)?;
        positions.insert(key, Point::new(x, y));
    }

    if skipped > 0 {
        debug!("   ⚠️  Skipped {} rows with an empty key field.", skipped);
    }
    Ok(positions)
}

pub fn load_key_positions<P: AsRef<Path>>(path: P) -> PfResult<KeyPositions> {
    let path = path.as_ref();
    info!("⌨️  Loading key coordinates from: {}", path.display());
    let file = File::open(path).map_err(|e| PhraseForgeError::io(path, e))?;
    let positions = read_key_positions(file)?;
    debug!("   -> {} keys", positions.len());
    Ok(positions)
}
