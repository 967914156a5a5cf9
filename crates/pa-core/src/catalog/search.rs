use crate::product::Product;

/// Case-insensitive substring match against name, description or id.
///
/// An empty term matches everything.
pub fn matches_term(product: &Product, term: &str) -> bool {
    let needle = term.to_lowercase();
    [
        product.name.as_str(),
        product.description.as_str(),
        product.id.as_str(),
    ]
    .iter()
    .any(|haystack| haystack.to_lowercase().contains(&needle))
}

/// Products matching `term`, in their original order.
pub fn filter_products(products: &[Product], term: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches_term(product, term))
        .cloned()
        .collect()
}
