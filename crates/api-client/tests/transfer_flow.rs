use std::collections::HashMap;
use std::io::{Read, Write};
use std::sync::mpsc;
use std::thread;

use netdisk_api::ApiClient;

struct Received {
    url: String,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

fn spawn_server(replies: Vec<&'static str>) -> (ApiClient, mpsc::Receiver<Received>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock server");
    let addr = server.server_addr().to_ip().expect("ip listen addr");
    let base = format!("http://{}", addr);
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for reply in replies {
            let mut request = match server.recv() {
                Ok(r) => r,
                Err(_) => return,
            };
            let headers = request
                .headers()
                .iter()
                .map(|h| (h.field.to_string().to_lowercase(), h.value.to_string()))
                .collect();
            let mut body = Vec::new();
            let _ = request.as_reader().read_to_end(&mut body);
            let _ = tx.send(Received {
                url: request.url().to_string(),
                headers,
                body,
            });
            // 必须关闭 keep-alive：server 线程退出后 tiny_http 仍持有空闲连接，
            // 复用该连接的请求会永远等不到应答。respond() 会丢弃手动设置的
            // Connection 头，所以这里用原始写入带上 Connection: close
            let mut writer = request.into_writer();
            let _ = write!(
                writer,
                "HTTP/1.1 200 OK\r\nConnection: close\r\nContent-Length: {}\r\n\r\n{}",
                reply.len(),
                reply
            );
            let _ = writer.flush();
        }
    });

    (ApiClient::new(base), rx)
}

#[tokio::test]
async fn download_writes_file_with_display_name() {
    let (client, rx) = spawn_server(vec!["file-content"]);
    let dir = tempfile::tempdir().unwrap();

    let dest = client
        .download("/home/a/b.txt?v=1", "b.txt", dir.path())
        .await
        .unwrap();
    assert_eq!(dest, dir.path().join("b.txt"));
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "file-content");

    let received = rx.recv().unwrap();
    assert_eq!(received.url, "/home/a/b.txt?v=1");
}

#[tokio::test]
async fn download_selected_continues_after_failure() {
    // 服务端只应答第一个请求，之后关闭；第二项失败但不影响整体返回
    let (client, _rx) = spawn_server(vec!["one"]);
    let dir = tempfile::tempdir().unwrap();

    let items = vec![
        ("one.txt".to_string(), "/home/one.txt".to_string()),
        ("two.txt".to_string(), "/home/two.txt".to_string()),
    ];
    let results = client.download_selected(&items, dir.path()).await;
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(dir.path().join("one.txt").exists());
}

#[tokio::test]
async fn move_sends_form_with_referer() {
    let (client, rx) = spawn_server(vec!["ok"]);

    client
        .move_entry("/home/docs", "/home/docs/a.txt", "/home/docs/b.txt")
        .await
        .unwrap();

    let received = rx.recv().unwrap();
    assert_eq!(received.url, "/move");
    let referer = received.headers.get("referer").unwrap();
    assert!(referer.ends_with("/home/docs"));
    let body = String::from_utf8(received.body).unwrap();
    assert!(body.contains("frompath=%2Fhome%2Fdocs%2Fa.txt"));
    assert!(body.contains("name=%2Fhome%2Fdocs%2Fb.txt"));
}

#[tokio::test]
async fn archive_saves_attachment() {
    let (client, rx) = spawn_server(vec!["zip-bytes"]);
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("files.zip");

    let paths = vec!["/home/a.txt".to_string()];
    client.archive(&paths, "files.zip", &dest).await.unwrap();
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "zip-bytes");

    let received = rx.recv().unwrap();
    assert_eq!(received.url, "/archive");
    let body = String::from_utf8(received.body).unwrap();
    assert!(body.contains("name=files.zip"));
    assert!(body.contains("pathlist="));
}

#[tokio::test]
async fn upload_builds_multipart_body() {
    let (client, rx) = spawn_server(vec!["ok"]);
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("note.txt");
    std::fs::write(&file, "hello").unwrap();

    client.upload("/home/docs", &[file]).await.unwrap();

    let received = rx.recv().unwrap();
    assert_eq!(received.url, "/upload");
    let content_type = received.headers.get("content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    let body = String::from_utf8(received.body).unwrap();
    assert!(body.contains("name=\"files\"; filename=\"note.txt\""));
    assert!(body.contains("hello"));
}
