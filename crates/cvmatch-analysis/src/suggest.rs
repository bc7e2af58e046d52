//! Suggested résumé bullets for missing terms.

/// Bullet templates, applied to ranked terms in rotation.
const TEMPLATES: [&str; 4] = [
    "Built a small demo using {term} and documented setup & outcomes.",
    "Practiced {term} by implementing a mini project and writing tests.",
    "Used {term} to solve a real task (data cleaning, API, or CLI) and published code.",
    "Created a short tutorial README explaining how to apply {term}.",
];

/// Writes one bullet per term, in ranking order, up to `max`.
pub fn suggest_bullets<I, S>(terms: I, max: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .take(max)
        .zip(TEMPLATES.iter().cycle())
        .map(|(term, template)| template.replace("{term}", term.as_ref()))
        .collect()
}
