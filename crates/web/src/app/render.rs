//! HTML rendering. Templates are embedded at compile time and registered once.

use minijinja::Environment;
use serde::Serialize;

pub const BASE_TEMPLATE: &str = include_str!("../../templates/base.html");
pub const LIST_TEMPLATE: &str = include_str!("../../templates/list.html");
pub const DETAIL_TEMPLATE: &str = include_str!("../../templates/detail.html");
pub const NOT_FOUND_TEMPLATE: &str = include_str!("../../templates/not_found.html");

/// A minijinja environment with all storefront templates registered.
///
/// Names end in `.html`, so output is HTML-escaped.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", BASE_TEMPLATE)?;
        env.add_template("list.html", LIST_TEMPLATE)?;
        env.add_template("detail.html", DETAIL_TEMPLATE)?;
        env.add_template("not_found.html", NOT_FOUND_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: &S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
