#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use simple_http_server::config::ResolveMode;
use simple_http_server::server::ServerContext;
use simple_http_server::server::root::DocumentRoot;

pub const INDEX_HTML: &str = "<html><body><h1>Hello</h1></body></html>\n";

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A scratch directory under the system temp dir, removed on drop.
pub struct TempRoot {
    path: PathBuf,
}

impl TempRoot {
    pub fn empty() -> Self {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "simple_http_server_test_{}_{}",
            std::process::id(),
            n
        ));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    /// Contains `server_root/index.html`.
    pub fn with_index() -> Self {
        let tmp = Self::empty();
        tmp.write("server_root/index.html", INDEX_HTML);
        tmp
    }

    pub fn write(&self, rel: &str, content: &str) {
        let file = self.path.join(rel);
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(file, content).unwrap();
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document_root(&self) -> DocumentRoot {
        DocumentRoot::discover(&self.path, Path::new("server_root")).unwrap()
    }

    pub fn context(&self, resolve_mode: ResolveMode) -> ServerContext {
        ServerContext {
            root: self.document_root(),
            buffer_size: 512,
            resolve_mode,
        }
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Splits a raw response into (status line, headers, body).
pub fn split_response(raw: &str) -> (String, Vec<(String, String)>, String) {
    let (head, body) = raw.split_once("\r\n\r\n").expect("no header/body separator");
    let mut lines = head.split("\r\n");
    let status = lines.next().unwrap().to_string();
    let headers = lines
        .map(|l| {
            let (k, v) = l.split_once(": ").unwrap();
            (k.to_string(), v.to_string())
        })
        .collect();
    (status, headers, body.to_string())
}

pub fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}
