/// Public catalog the storefront talks to unless told otherwise.
pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Trailing slashes are dropped so paths can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn product_url(&self, id: &storefront_core::ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
