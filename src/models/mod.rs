pub mod experience;
pub mod portfolio;
pub mod settings;

pub use experience::Model as Experience;
pub use portfolio::Model as PortfolioItem;
pub use settings::Model as SiteSetting;

/// Trim entries, drop empty ones, and remove duplicates keeping the first.
pub fn normalize_labels(labels: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        let label = label.trim();
        if !label.is_empty() && !out.iter().any(|l| l == label) {
            out.push(label.to_string());
        }
    }
    out
}
