// Pattern: Proxy
// The proxy looks like a server but answers repeated requests from its own
// cache, so the real server only sees each resource once.

use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Backend,
    Cache,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub body: String,
    pub origin: Origin,
    pub log: String,
}

pub trait Server {
    fn request(&mut self, resource: &str) -> Response;
}

#[derive(Debug, Default)]
pub struct RealServer {
    handled: usize,
}

impl RealServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handled(&self) -> usize {
        self.handled
    }
}

impl Server for RealServer {
    fn request(&mut self, resource: &str) -> Response {
        self.handled += 1;
        Response {
            body: format!("Response for '{resource}'"),
            origin: Origin::Backend,
            log: format!("RealServer: Handling request for resource '{resource}'."),
        }
    }
}

pub struct ProxyServer<S: Server> {
    inner: S,
    cache: HashMap<String, String>,
}

impl<S: Server> ProxyServer<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl<S: Server> Server for ProxyServer<S> {
    fn request(&mut self, resource: &str) -> Response {
        if let Some(body) = self.cache.get(resource) {
            debug!(resource, "cache hit");
            return Response {
                body: body.clone(),
                origin: Origin::Cache,
                log: format!("ProxyServer: Serving resource '{resource}' from cache."),
            };
        }

        let response = self.inner.request(resource);
        self.cache.insert(resource.to_string(), response.body.clone());
        response
    }
}

fn client_code(server: &mut dyn Server, resources: &[&str]) {
    for resource in resources {
        println!("{}", server.request(resource).log);
    }
}

pub fn run_demo() {
    println!("Client: Sending requests to the real server:");
    let mut real = RealServer::new();
    client_code(&mut real, &["/data1", "/data2"]);

    println!();
    println!("Client: Sending requests to the proxy server:");
    let mut proxy = ProxyServer::new(RealServer::new());
    client_code(&mut proxy, &["/data1", "/data3", "/data1"]);
    println!("Backend requests behind the proxy: {}", proxy.inner().handled());
}
