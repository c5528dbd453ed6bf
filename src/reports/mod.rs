use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use phraseforge::error::PfResult;
use phraseforge::layouts::Finger;
use phraseforge::scorer::ScoreDetails;
use phraseforge::search::{ScoredCandidate, SearchOutcome};
use serde::Serialize;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    /// `<phrase> <cost>` per line
    #[default]
    Plain,
    Table,
    Json,
}

#[derive(Serialize)]
struct JsonSearch<'a> {
    evaluated: usize,
    elapsed_ms: u128,
    results: &'a [ScoredCandidate],
}

#[derive(Serialize)]
struct JsonScore<'a> {
    phrase: &'a str,
    #[serde(flatten)]
    details: &'a ScoreDetails,
}

pub fn print_search_results(outcome: &SearchOutcome, format: OutputFormat) -> PfResult<()> {
    match format {
        OutputFormat::Plain => {
            for r in &outcome.best {
                println!("{} {}", r.phrase, r.cost);
            }
        }
        OutputFormat::Json => {
            let doc = JsonSearch {
                evaluated: outcome.evaluated,
                elapsed_ms: outcome.elapsed.as_millis(),
                results: &outcome.best,
            };
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(ASCII_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![
                Cell::new("#").add_attribute(Attribute::Bold),
                Cell::new("Passphrase").add_attribute(Attribute::Bold),
                Cell::new("Cost").fg(Color::Cyan),
                Cell::new("Draw"),
            ]);
            for i in [0, 2, 3] {
                if let Some(col) = table.column_mut(i) {
                    col.set_cell_alignment(CellAlignment::Right);
                }
            }
            for (rank, r) in outcome.best.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(rank + 1),
                    Cell::new(&r.phrase),
                    Cell::new(format!("{:.4}", r.cost)).fg(Color::Cyan),
                    Cell::new(r.index),
                ]);
            }
            println!("{}", table);
            println!(
                "Evaluated {} candidates in {:.2?}",
                outcome.evaluated, outcome.elapsed
            );
        }
    }
    Ok(())
}

pub fn print_score_report(results: &[(String, ScoreDetails)], format: OutputFormat) -> PfResult<()> {
    match format {
        OutputFormat::Plain => {
            for (phrase, d) in results {
                println!("{} {}", phrase, d.total);
            }
        }
        OutputFormat::Json => {
            let docs: Vec<JsonScore> = results
                .iter()
                .map(|(phrase, details)| JsonScore {
                    phrase: phrase.as_str(),
                    details,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&docs)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(ASCII_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![
                Cell::new("Phrase").add_attribute(Attribute::Bold),
                Cell::new("Total").fg(Color::Cyan),
                Cell::new("Travel"),
                Cell::new("Alt"),
                Cell::new("AltCost").fg(Color::Red),
                Cell::new("Keys"),
                Cell::new("Skip"),
                Cell::new("Busiest"),
            ]);
            for i in 1..=6 {
                if let Some(col) = table.column_mut(i) {
                    col.set_cell_alignment(CellAlignment::Right);
                }
            }
            for (phrase, d) in results {
                table.add_row(vec![
                    Cell::new(phrase).add_attribute(Attribute::Bold),
                    Cell::new(format!("{:.3}", d.total)).fg(Color::Cyan),
                    Cell::new(format!("{:.3}", d.travel)),
                    Cell::new(d.alternations),
                    Cell::new(format!("{:.2}", d.alternation_cost)).fg(Color::Red),
                    Cell::new(d.keystrokes),
                    Cell::new(d.skipped),
                    Cell::new(busiest_finger(d)),
                ]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn busiest_finger(d: &ScoreDetails) -> String {
    Finger::ALL
        .iter()
        .map(|f| (f, d.per_finger_travel[f.slot()]))
        .filter(|(_, t)| *t > 0.0)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(f, t)| format!("{} ({:.2})", f, t))
        .unwrap_or_else(|| "-".to_string())
}
