use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Route {
    #[default]
    Home,
    Catalog,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Catalog => "/products",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Catalog => "Challenge 2: Fix Rendering Anti-patterns",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Accepts a path (`/products`) or a short name (`catalog`).
impl FromStr for Route {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "/" | "home" => Ok(Route::Home),
            "/products" | "products" | "catalog" => Ok(Route::Catalog),
            other => Err(format!(
                "unknown route '{other}' (expected one of: /, /products, home, catalog)"
            )),
        }
    }
}
