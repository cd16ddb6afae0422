use std::{
    io::{Read, Write},
    net::TcpListener,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

use spopcli::spotify::tracks::{get_several_tracks, get_track};

// Minimal HTTP stub that answers every request with 429 and counts how many
// requests it served, so tests can assert the client gives up instead of
// hammering a throttled endpoint.
fn start_rate_limited_stub(requests: Arc<AtomicUsize>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let requests = Arc::clone(&requests);
            thread::spawn(move || {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                requests.fetch_add(1, Ordering::SeqCst);
                let _ = stream.write_all(
                    b"HTTP/1.1 429 Too Many Requests\r\n\
                      retry-after: 0\r\n\
                      content-length: 0\r\n\
                      connection: close\r\n\r\n",
                );
            });
        }
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_persistent_rate_limit_fails_after_one_retry() {
    let requests = Arc::new(AtomicUsize::new(0));
    let base_url = start_rate_limited_stub(Arc::clone(&requests));

    unsafe { std::env::set_var("SPOTIFY_API_URL", &base_url) };

    // Single-track lookup: initial request plus exactly one Retry-After
    // retry, then the 429 surfaces as an error.
    let result = tokio::time::timeout(Duration::from_secs(5), get_track("id1", "token"))
        .await
        .expect("lookup must terminate instead of retrying forever");

    assert!(result.is_err());
    assert_eq!(requests.load(Ordering::SeqCst), 2);

    // Batch lookup: same bound applies.
    let ids = vec!["id1".to_string(), "id2".to_string()];
    let result = tokio::time::timeout(Duration::from_secs(5), get_several_tracks(&ids, "token"))
        .await
        .expect("batch lookup must terminate instead of retrying forever");

    assert!(result.is_err());
    assert_eq!(requests.load(Ordering::SeqCst), 4);
}
