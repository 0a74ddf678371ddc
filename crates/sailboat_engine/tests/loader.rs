use std::fs;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use sailboat_core::DisplayElement;
use sailboat_engine::{
    extract, FailureKind, FetchError, FetchMetadata, FetchOutput, FetchSettings, Fetcher,
    PageContent, PageLoader,
};

/// Serves a canned response and records the URLs it was asked for.
struct StubFetcher {
    response: Result<FetchOutput, FetchError>,
    requested: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.response.clone()
    }
}

fn stub_loader(response: Result<FetchOutput, FetchError>) -> (PageLoader, Arc<Mutex<Vec<String>>>) {
    let requested = Arc::new(Mutex::new(Vec::new()));
    let fetcher = StubFetcher {
        response,
        requested: requested.clone(),
    };
    let loader = PageLoader::with_fetcher(Box::new(fetcher)).expect("runtime");
    (loader, requested)
}

fn html_output(bytes: &[u8], content_type: &str) -> FetchOutput {
    FetchOutput {
        bytes: bytes.to_vec(),
        metadata: FetchMetadata {
            original_url: "http://example.com".to_string(),
            final_url: "http://example.com/".to_string(),
            redirect_count: 1,
            content_type: Some(content_type.to_string()),
            byte_len: bytes.len() as u64,
        },
    }
}

#[test]
fn bare_host_is_fetched_over_http() {
    let (loader, requested) = stub_loader(Ok(html_output(b"<p>hi</p>", "text/html")));

    let content = loader.search("example.com");

    assert_eq!(content, PageContent::loaded("<p>hi</p>"));
    assert_eq!(*requested.lock().unwrap(), vec!["http://example.com".to_string()]);
}

#[test]
fn fetched_bytes_are_decoded_with_the_declared_charset() {
    let (loader, _) = stub_loader(Ok(html_output(
        b"<p>caf\xe9</p>",
        "text/html; charset=ISO-8859-1",
    )));

    let content = loader.search("https://example.com");

    assert_eq!(content.html, "<p>caf\u{e9}</p>");
}

#[test]
fn fetch_failure_becomes_failed_content() {
    let (loader, _) = stub_loader(Err(FetchError::new(FailureKind::Timeout, "took too long")));

    let content = loader.search("example.com");

    assert!(!content.success);
    assert_eq!(content.error_message, "timeout: took too long");
    assert_eq!(
        extract(&content),
        vec![DisplayElement::error("timeout: took too long")]
    );
}

#[test]
fn local_html_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.HTML");
    fs::write(&path, "<html><head><title>Local</title></head><body>x</body></html>").unwrap();
    let loader = PageLoader::new(FetchSettings::default()).unwrap();

    let content = loader.search(path.to_str().unwrap());

    assert!(content.success);
    assert_eq!(
        extract(&content),
        vec![
            DisplayElement::Title {
                text: "Local".to_string()
            },
            DisplayElement::text("x"),
        ]
    );
}

#[test]
fn non_html_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "<p>x</p>").unwrap();
    let query = path.to_str().unwrap().to_string();
    let loader = PageLoader::new(FetchSettings::default()).unwrap();

    let content = loader.search(&query);

    assert_eq!(
        content,
        PageContent::failed(format!("'{query}' is not a valid path to an HTML file."))
    );
}

#[test]
fn missing_file_and_directories_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let loader = PageLoader::new(FetchSettings::default()).unwrap();

    let missing = loader.search("./definitely-missing-page.html");
    assert_eq!(
        missing.error_message,
        "'./definitely-missing-page.html' is not a valid path to an HTML file."
    );

    let html_dir = dir.path().join("site.html");
    fs::create_dir(&html_dir).unwrap();
    assert!(!loader.search(html_dir.to_str().unwrap()).success);
}
