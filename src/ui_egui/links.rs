//! Detail pages in the web client, opened in the system browser.

use crate::models::schedule_item::{AddressId, ItemId};

pub fn inspection_url(web_base: &str, id: &ItemId) -> String {
    format!(
        "{}/inspection/{}",
        web_base.trim_end_matches('/'),
        urlencoding::encode(id.as_str())
    )
}

pub fn address_url(web_base: &str, id: &AddressId) -> String {
    format!(
        "{}/address/{}",
        web_base.trim_end_matches('/'),
        urlencoding::encode(id.as_str())
    )
}

pub fn open_in_browser(url: &str) -> std::io::Result<()> {
    log::info!("Opening {}", url);
    webbrowser::open(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspection_url() {
        assert_eq!(
            inspection_url("http://localhost:3000/", &ItemId::from(42)),
            "http://localhost:3000/inspection/42"
        );
    }

    #[test]
    fn test_address_url_encodes_id() {
        assert_eq!(
            address_url("https://ons.example.gov", &AddressId::new("12 B")),
            "https://ons.example.gov/address/12%20B"
        );
    }
}
