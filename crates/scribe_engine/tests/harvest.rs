use scribe_engine::{
    ExtractedItem, FetchSettings, Harvester, ReqwestFetcher,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn harvester() -> Harvester<ReqwestFetcher> {
    Harvester::new(ReqwestFetcher::new(FetchSettings::default()))
}

#[tokio::test]
async fn harvests_items_and_images_from_a_page() {
    let html = r#"
        <html><body>
            <h1>Protocol Architecture Overview</h1>
            <main>
                <p>A paragraph about the protocol that is comfortably inside the length interval required by the extraction rules.</p>
            </main>
            <pre>fn main() { run_the_protocol(); }</pre>
            <img src="/diagram.png" width="640" height="480">
        </body></html>
    "#;
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html; charset=utf-8"))
        .mount(&server)
        .await;

    let result = harvester()
        .harvest_page(&format!("{}/page", server.uri()))
        .await;

    assert!(matches!(
        result.items[0],
        ExtractedItem::Heading { level: 1, .. }
    ));
    assert!(result
        .items
        .iter()
        .any(|item| matches!(item, ExtractedItem::Code { .. })));
    assert!(result
        .items
        .iter()
        .any(|item| matches!(item, ExtractedItem::Paragraph { .. })));
    assert_eq!(result.images.len(), 1);
    assert_eq!(result.images[0].source_url, "/diagram.png");
}

#[tokio::test]
async fn unreachable_url_yields_empty_result() {
    // Nothing listens on this port; connection is refused.
    let result = harvester()
        .harvest_page("http://127.0.0.1:1/unreachable")
        .await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn http_error_yields_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = harvester()
        .harvest_page(&format!("{}/gone", server.uri()))
        .await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn pages_are_visited_sequentially_in_order() {
    let server = MockServer::start().await;
    for (route, body) in [
        ("/a", "<h1>First Page Heading</h1>"),
        ("/b", "<h1>Second Page Heading</h1>"),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
            .mount(&server)
            .await;
    }

    let url_a = format!("{}/a", server.uri());
    let url_b = format!("{}/b", server.uri());
    let results = harvester().harvest_all(&[url_a.as_str(), url_b.as_str()]).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0, url_a);
    assert_eq!(results[0].1.items[0].text(), "First Page Heading");
    assert_eq!(results[1].0, url_b);
    assert_eq!(results[1].1.items[0].text(), "Second Page Heading");
}

#[tokio::test]
async fn failed_page_does_not_stop_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<h1>Surviving Heading</h1>", "text/html"),
        )
        .mount(&server)
        .await;

    let bad = "http://127.0.0.1:1/refused".to_string();
    let good = format!("{}/ok", server.uri());
    let results = harvester().harvest_all(&[bad.as_str(), good.as_str()]).await;

    assert!(results[0].1.is_empty());
    assert_eq!(results[1].1.items[0].text(), "Surviving Heading");
}
