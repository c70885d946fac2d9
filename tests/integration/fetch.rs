//! Fetching remote indexes over HTTP

use keg::config::HttpConfig;
use keg::index::fetch_index_with;
use keg::net::HttpClient;
use keg::{fetch_index, KegError};

use super::helpers::serve;

const REMOTE_INDEX: &str = "\
2\t2023-05-01 08:30:00Z\tSecond\t1
1\t2023-04-01 08:30:00Z\tFirst
";

#[test]
fn test_fetch_index_from_keg_url() {
    let base = serve("200 OK", REMOTE_INDEX.to_string(), 1);

    let index = fetch_index(&base).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.url, Some(format!("{base}/kegdex")));
    assert_eq!(index.encode(), REMOTE_INDEX);
}

#[test]
fn test_fetch_index_with_configured_client() {
    let base = serve("200 OK", REMOTE_INDEX.to_string(), 1);
    let client = HttpClient::from_config(&HttpConfig::default()).unwrap();

    let index = fetch_index_with(&client, &format!("{base}/kegdex")).unwrap();
    assert_eq!(index.map_ids()["2"].include_ids(), ["1"]);
}

#[test]
fn test_fetch_index_bad_status() {
    let base = serve("404 Not Found", "missing".to_string(), 1);

    let err = fetch_index(&base).unwrap_err();
    assert!(matches!(err, KegError::FetchFailed { .. }));
    assert_eq!(err.to_string(), "failed to fetch: 404 Not Found");
}

#[test]
fn test_fetch_index_transport_failure() {
    // bind then drop so nothing listens on the port
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let err = fetch_index(&format!("http://127.0.0.1:{port}")).unwrap_err();
    assert!(matches!(err, KegError::Transport(_)));
}
