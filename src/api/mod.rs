pub mod images;
pub mod weather;

use std::sync::OnceLock;

pub use images::{ImageLookup, UnsplashClient};

pub(crate) fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .user_agent(concat!("spotcard/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default()
    })
}
