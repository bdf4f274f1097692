use crate::models::PortfolioItem;

/// Category filter value that matches every item.
pub const ALL: &str = "All";

/// Keep only items visible on public listings.
pub fn published(items: Vec<PortfolioItem>) -> Vec<PortfolioItem> {
    items.into_iter().filter(|i| i.is_published()).collect()
}

/// `All` keeps everything; any other value must equal a category label exactly.
pub fn filter_by_category(items: Vec<PortfolioItem>, filter: &str) -> Vec<PortfolioItem> {
    if filter == ALL {
        return items;
    }
    items
        .into_iter()
        .filter(|i| i.category.label() == filter)
        .collect()
}

/// Case-insensitive match on title, description or any tag.
pub fn search(items: Vec<PortfolioItem>, term: &str) -> Vec<PortfolioItem> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|i| {
            i.title.to_lowercase().contains(&needle)
                || i.description.to_lowercase().contains(&needle)
                || i.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}

/// `All` followed by each distinct category in first-seen order.
pub fn categories(items: &[PortfolioItem]) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for item in items {
        let label = item.category.label();
        if !out.iter().any(|c| c == label) {
            out.push(label.to_string());
        }
    }
    out
}
