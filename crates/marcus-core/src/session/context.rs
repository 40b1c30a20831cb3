//! Text handed from the analysis phase to the debate phase.

use crate::analysis::{SituationInput, StoicAnalysis};

const LIST_SEPARATOR: &str = ", ";

/// Snapshot of the submitted input, kept for the debate persona.
///
/// Only the literal text and the analysis mode are recorded; an attached
/// image is not described here.
pub fn situation_context(input: &SituationInput) -> String {
    let mode = if input.worst_case {
        "Worst Case"
    } else {
        "Normal"
    };
    format!("Input User: {} \nAnalysis Type: {}", input.text, mode)
}

/// Initial context for a debate: the situation followed by every field of the
/// analysis, in a fixed order.
pub fn debate_context(situation_context: &str, analysis: &StoicAnalysis) -> String {
    format!(
        "{situation}\n\nPREVIOUS ANALYSIS:\nFacts: {facts}\nOpinions: {opinions}\nIn Control: {in_control}\nOut of Control: {out_of_control}\nVerdict: {verdict}",
        situation = situation_context,
        facts = analysis.facts.join(LIST_SEPARATOR),
        opinions = analysis.opinions.join(LIST_SEPARATOR),
        in_control = analysis.in_control.join(LIST_SEPARATOR),
        out_of_control = analysis.out_of_control.join(LIST_SEPARATOR),
        verdict = analysis.verdict,
    )
}
