//! The static interest-code → display-label table.
//!
//! The website form submits a short code; the admin email and the stored
//! record carry a human-readable label resolved here. Unknown codes pass
//! through unchanged so a form/backend drift never loses data.

/// Stored in `interest` when no area was selected on the form.
pub const NOT_SPECIFIED_CODE: &str = "not-specified";

/// Label used when no area was selected on the form.
pub const NOT_SPECIFIED_LABEL: &str = "Not specified";

/// Interest codes offered by the website form, in display order.
pub const LABELS: &[(&str, &str)] = &[
  ("data-engineering", "Data Engineering"),
  ("ai-ml", "AI & Machine Learning"),
  ("genai", "Generative AI"),
  ("bi", "Business Intelligence"),
  ("mlops", "MLOps"),
  ("cloud-migration", "Cloud Migration"),
  ("aws-poc", "AWS POC Program"),
  ("other", "Other"),
];

/// Resolve an interest code to its display label.
///
/// An empty code maps to [`NOT_SPECIFIED_LABEL`]; a code missing from the
/// table falls back to the raw code itself.
pub fn label_for(code: &str) -> &str {
  if code.is_empty() {
    return NOT_SPECIFIED_LABEL;
  }
  LABELS
    .iter()
    .find(|(c, _)| *c == code)
    .map(|(_, label)| *label)
    .unwrap_or(code)
}
