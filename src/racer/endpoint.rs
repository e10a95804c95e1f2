pub const VIA_CEP_TEMPLATE: &str = "http://viacep.com.br/ws/{cep}/json/";
pub const BRASIL_API_TEMPLATE: &str = "https://brasilapi.com.br/api/cep/v1/{cep}";

/// One of the lookup APIs taking part in the race, described by its URL
/// template. The `{cep}` placeholder is filled in per query.
#[derive(Debug, Clone)]
pub struct Endpoint {
    template: String,
}

impl Endpoint {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn via_cep() -> Self {
        Self::new(VIA_CEP_TEMPLATE)
    }

    pub fn brasil_api() -> Self {
        Self::new(BRASIL_API_TEMPLATE)
    }

    pub fn url_for(&self, cep: &str) -> String {
        self.template.replace("{cep}", cep)
    }
}
