// src/core/net.rs

// HTTPS GET against the BibleGateway host.

use std::error::Error;
use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::params::{HOST, USER_AGENT};

static CLIENT: OnceLock<Client> = OnceLock::new();

fn client() -> Result<&'static Client, reqwest::Error> {
    if let Some(c) = CLIENT.get() {
        return Ok(c);
    }
    let c = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(15))
        .build()?;
    Ok(CLIENT.get_or_init(|| c))
}

/// GET `https://<HOST><path>` and return the response body.
/// `path` is site-relative, e.g. `/passage/?search=Genesis+1&version=ESV`.
pub fn http_get(path: &str) -> Result<String, Box<dyn Error>> {
    let url = join!("https://", HOST, path);
    let resp = client()?.get(&url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}
