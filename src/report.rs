//! Impact report assembly and plain-text layout.
//!
//! The report is built once per run as a list of titled sections. The UI
//! renders the sections directly; `to_text` lays them out as fixed-width
//! text for logs and the typewriter reveal.

use crate::hazard::HazardAssessment;
use crate::historical::HistoricalEvent;
use crate::physics::hiroshima_equivalents;
use crate::types::{ImpactParameters, SimulationResult};

/// Default text width for plain-text reports.
pub const DEFAULT_REPORT_WIDTH: usize = 60;

/// One titled block of the report.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<String>,
}

impl ReportSection {
    fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

/// Formatted report for a single impact run.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactReport {
    pub sections: Vec<ReportSection>,
}

impl ImpactReport {
    pub const TITLE: &'static str = "IMPACT REPORT";

    /// Assemble the report sections.
    ///
    /// The seismic section is omitted when the magnitude is not positive.
    pub fn build(
        designation: &str,
        params: &ImpactParameters,
        result: &SimulationResult,
        assessment: &HazardAssessment,
        analogue: &HistoricalEvent,
    ) -> Self {
        let mut sections = vec![
            ReportSection::new("OBJECT", vec![designation.to_string()]),
            ReportSection::new(
                "PHYSICAL",
                vec![
                    format!("Diameter: {:.0} m", params.diameter_m),
                    format!("Type: {}", params.material.name()),
                    format!("Mass: {} kg", format_scientific(result.mass_kg, 2)),
                    format!("Velocity: {:.1} km/s", params.velocity_km_s()),
                ],
            ),
            ReportSection::new(
                "ENERGY",
                vec![
                    format!("{} megatons", format_thousands(result.megatons, 1)),
                    format!(
                        "~{} Hiroshima bombs",
                        format_thousands(hiroshima_equivalents(result.megatons), 0)
                    ),
                ],
            ),
            ReportSection::new(
                "HISTORICAL SIMILAR",
                vec![format!("{} ({})", analogue.name, analogue.when())],
            ),
            ReportSection::new(
                "CRATER",
                vec![format!(
                    "Estimated diameter: {:.2} km",
                    result.crater_diameter_km()
                )],
            ),
        ];

        if result.seismic_magnitude > 0.0 {
            sections.push(ReportSection::new(
                "SEISMIC",
                vec![format!("Magnitude: {:.1}", result.seismic_magnitude)],
            ));
        }

        let mut threat_lines = vec![assessment.description.to_string()];
        threat_lines.extend(assessment.effects.iter().cloned());
        sections.push(ReportSection::new(
            format!(
                "THREAT: {} {}",
                assessment.severity.tag(),
                assessment.tier.label()
            ),
            threat_lines,
        ));

        Self { sections }
    }

    /// Find a section by title.
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Fixed-width text rendering.
    pub fn to_text(&self, width: usize) -> String {
        let mut out = title_block(Self::TITLE, width);
        for section in &self.sections {
            out.push_str(&section_block(&section.title, &section.lines, width));
        }
        out
    }
}

/// Centered title between two rules of `=`.
pub fn title_block(title: &str, width: usize) -> String {
    let rule = "=".repeat(width);
    format!("{rule}\n{title:^width$}\n{rule}\n\n")
}

/// `-- TITLE ------` header, wrapped body lines, closing rule.
pub fn section_block(title: &str, lines: &[String], width: usize) -> String {
    let head = format!("-- {title} ");
    let mut out = format!("{head:-<width$}\n");
    for line in lines {
        for part in wrap_words(line, width) {
            out.push_str(&part);
            out.push('\n');
        }
    }
    out.push_str(&"-".repeat(width));
    out.push_str("\n\n");
    out
}

/// Greedy word wrap.
///
/// Words longer than `width` get a line of their own rather than being split.
/// Blank input yields a single empty line.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return vec![String::new()];
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    for word in words {
        if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);
    lines
}

/// Fixed-point formatting with comma thousands separators: `1,234,567.9`.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    if !value.is_finite() {
        return formatted;
    }

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Scientific notation with a signed two-digit exponent: `1.26e+07`.
pub fn format_scientific(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return formatted;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}
