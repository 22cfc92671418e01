mod hymn;

pub use hymn::*;

use url::Url;

/// Location of the hymn service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Backend {
    pub url: Url,
}

/// The bootstrap document served next to the console.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Endpoints {
    pub url: Url,
}

impl Backend {
    pub fn join(&self, input: &str) -> Result<Url, url::ParseError> {
        self.url.join(input)
    }
}
