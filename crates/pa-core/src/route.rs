//! Navigation targets of the admin UI.

use std::fmt;

use crate::ids::ProductId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Product list (`products`, also the target of the empty path)
    Products,
    /// Create form (`add`)
    Add,
    /// Edit form (`edit/:id`)
    Edit(ProductId),
}

impl Route {
    /// Parse a route path. Leading/trailing slashes are ignored and the empty
    /// path redirects to the product list.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim().trim_matches('/');
        match path.split_once('/') {
            None => match path {
                "" | "products" => Some(Route::Products),
                "add" => Some(Route::Add),
                _ => None,
            },
            Some(("edit", id)) if !id.is_empty() && !id.contains('/') => {
                Some(Route::Edit(ProductId::from(id)))
            }
            Some(_) => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Products => "products".to_string(),
            Route::Add => "add".to_string(),
            Route::Edit(id) => format!("edit/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}
