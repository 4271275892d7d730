use reqwest::{StatusCode, Url};

use crate::error::Result;

/// Status and full body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

pub trait HttpClient {
    fn get(&self, url: &Url) -> Result<HttpResponse>;
}
