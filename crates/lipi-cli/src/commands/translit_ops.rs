use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use lipi_core::unicode::{format_codepoints, script_of};
use lipi_core::{Mode, Transliterator};

use super::parse_mode;

/// Code points of `output` followed by the script blocks they fall in.
pub fn describe(output: &str) -> String {
    let blocks: BTreeSet<&str> = output.chars().filter_map(script_of).collect();
    let codepoints = format_codepoints(output);
    if blocks.is_empty() {
        codepoints
    } else {
        let blocks: Vec<&str> = blocks.into_iter().collect();
        format!("{codepoints} ({})", blocks.join(", "))
    }
}

pub fn translit_cmd(mode: &str, text: &str, composing: bool, codepoints: bool) {
    let mode = parse_mode(mode);
    let t = Transliterator::new(mode);
    let output = t.transliterate(text, composing);
    debug!(%mode, composing, input = text, "translit");
    println!("{output}");
    if codepoints {
        println!("{}", describe(&output));
    }
}

#[derive(Debug, Serialize)]
struct VariantsReport<'a> {
    mode: &'a str,
    base_key: &'a str,
    variants: Vec<String>,
}

pub fn variants_cmd(mode: &str, base_key: &str, json: bool) {
    let mode = parse_mode(mode);
    let variants = Transliterator::new(mode).variants(base_key);
    if json {
        let report = VariantsReport {
            mode: mode.name(),
            base_key,
            variants,
        };
        let line = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{line}");
    } else {
        for (i, v) in variants.iter().enumerate() {
            println!("{:>2}: {v}  [{}]", i + 1, format_codepoints(v));
        }
    }
}

pub fn modes_cmd() {
    for mode in Mode::ALL {
        let input = if mode.is_devanagari_source() {
            "Devanagari"
        } else {
            "Latin"
        };
        println!("{:<20} {input} -> {}", mode.name(), mode.target().name);
    }
}
