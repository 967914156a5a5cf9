//! Plain-text rendering of view model state.

use std::fmt::Write;

use pa_app::{FormViewModel, ListViewModel};
use pa_core::product::DATE_FORMAT;
use pa_core::{FormField, PageSize, Product};

const DESCRIPTION_WIDTH: usize = 40;

/// Current page followed by the pager line.
pub fn render_page(list: &ListViewModel) -> String {
    let mut out = render_table(list.page());
    out.push_str(&render_footer(
        list.filtered().len(),
        list.current_page(),
        list.total_pages(),
        list.page_size(),
    ));
    out
}

pub fn render_table(rows: &[Product]) -> String {
    if rows.is_empty() {
        return "No products found\n".to_string();
    }

    let id_width = column_width(rows, "ID", |p| p.id.as_str().chars().count());
    let name_width = column_width(rows, "NAME", |p| p.name.chars().count());
    let desc_width = DESCRIPTION_WIDTH;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<id_width$}  {:<name_width$}  {:<desc_width$}  {:<10}  {:<10}",
        "ID", "NAME", "DESCRIPTION", "RELEASE", "REVISION"
    );
    for product in rows {
        let _ = writeln!(
            out,
            "{:<id_width$}  {:<name_width$}  {:<desc_width$}  {}  {}",
            product.id.as_str(),
            product.name,
            ellipsize(&product.description, DESCRIPTION_WIDTH),
            product.date_release.format(DATE_FORMAT),
            product.date_revision.format(DATE_FORMAT),
        );
    }
    out
}

pub fn render_footer(results: usize, current_page: usize, total_pages: usize, page_size: PageSize) -> String {
    let noun = if results == 1 { "result" } else { "results" };
    format!("{results} {noun} | page {current_page}/{total_pages} | {page_size} per page\n")
}

/// `field: message` for every field that fails validation.
pub fn form_errors(form: &FormViewModel) -> Vec<String> {
    FormField::ALL
        .into_iter()
        .filter_map(|field| form.error(field).map(|err| format!("{field}: {err}")))
        .collect()
}

fn column_width(rows: &[Product], header: &str, width: impl Fn(&Product) -> usize) -> usize {
    rows.iter().map(width).max().unwrap_or(0).max(header.len())
}

fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(3)).collect();
    short.push_str("...");
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pa_core::ProductId;

    fn product(id: &str, name: &str, description: &str) -> Product {
        Product {
            id: ProductId::from(id),
            name: name.to_string(),
            description: description.to_string(),
            logo: "https://cdn.example.com/logo.png".to_string(),
            date_release: NaiveDate::from_ymd_opt(2030, 1, 10).unwrap(),
            date_revision: NaiveDate::from_ymd_opt(2031, 1, 10).unwrap(),
        }
    }

    #[test]
    fn empty_table_says_so() {
        assert_eq!(render_table(&[]), "No products found\n");
    }

    #[test]
    fn table_has_header_and_one_line_per_row() {
        let rows = [
            product("trj-crd", "Credit card", "Card for everyday purchases"),
            product("sav-01", "Savings account", "Account with monthly interest"),
        ];

        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("trj-crd  Credit card"));
        assert!(lines[2].contains("2030-01-10  2031-01-10"));
    }

    #[test]
    fn long_descriptions_are_cut() {
        let long = "x".repeat(60);

        let table = render_table(&[product("p1", "Product one", &long)]);

        assert!(table.contains(&format!("{}...", "x".repeat(37))));
        assert!(!table.contains(&long));
    }

    #[test]
    fn footer_reports_position() {
        assert_eq!(
            render_footer(12, 3, 3, PageSize::Five),
            "12 results | page 3/3 | 5 per page\n"
        );
        assert_eq!(
            render_footer(1, 1, 1, PageSize::Ten),
            "1 result | page 1/1 | 10 per page\n"
        );
    }
}
