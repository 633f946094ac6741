//! Search query and URL construction.

/// Terms appended to every tab search to steer the engine at the tab host.
pub const SEARCH_QUERY_SUFFIX: &str = "chords tabs ultimate guitar";

/// DuckDuckGo HTML search endpoint (no JS required to render results).
pub const DDG_SEARCH_URL: &str = "https://duckduckgo.com/html/";

/// Tab host search endpoint, used for the availability check.
pub const SITE_SEARCH_URL: &str = "https://www.ultimate-guitar.com/search.php";

/// Build the search-engine query for a song/artist pair.
pub fn tab_search_query(song_name: &str, artist_name: &str) -> String {
    format!("{} {} {}", artist_name, song_name, SEARCH_QUERY_SUFFIX)
}

/// Build the search-engine results-page URL for a query.
pub fn search_results_url(query: &str) -> String {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .finish();
    format!("{}?{}", DDG_SEARCH_URL, encoded)
}

/// Build the tab host's own search URL for a song/artist pair.
///
/// type=300 restricts results to chord tabs.
pub fn site_search_url(song_name: &str, artist_name: &str) -> String {
    let title = format!("{} {}", artist_name, song_name);
    format!(
        "{}?title={}&page=1&type=300",
        SITE_SEARCH_URL,
        urlencoding::encode(&title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_includes_suffix() {
        let query = tab_search_query("Yesterday", "The Beatles");
        assert_eq!(query, "The Beatles Yesterday chords tabs ultimate guitar");
    }

    #[test]
    fn results_url_is_form_encoded() {
        let url = search_results_url("AC/DC Back in Black chords");
        assert_eq!(
            url,
            "https://duckduckgo.com/html/?q=AC%2FDC+Back+in+Black+chords"
        );
    }

    #[test]
    fn site_search_url_percent_encodes_title() {
        let url = site_search_url("Shook Me", "AC & DC");
        assert!(url.starts_with("https://www.ultimate-guitar.com/search.php?title="));
        assert!(url.contains("AC%20%26%20DC%20Shook%20Me"));
        assert!(url.ends_with("&page=1&type=300"));
    }
}
