//! The external fetch boundary.
//!
//! Posts are retrieved by shelling out to the `bird` CLI, which prints
//! JSON on stdout. The [`TweetFetcher`] trait keeps the pipeline
//! testable without the external binary; [`BirdFetcher`] is the real
//! implementation. Credentials are threaded explicitly through
//! [`FetchConfig`] rather than read from ambient process state.

use crate::error::{Error, Result};
use crate::model::Tweet;
use log::debug;
use regex::Regex;
use std::process::Command;

/// Configuration for the external fetch process.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Program to invoke.
    pub program: String,

    /// `AUTH_TOKEN` credential passed to the fetcher's environment.
    pub auth_token: Option<String>,

    /// `CT0` credential passed to the fetcher's environment.
    pub ct0: Option<String>,
}

impl FetchConfig {
    /// Create a config for the default `bird` program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the auth token credential.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the ct0 credential.
    pub fn with_ct0(mut self, ct0: impl Into<String>) -> Self {
        self.ct0 = Some(ct0.into());
        self
    }

    /// Override the fetcher program.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            program: "bird".to_string(),
            auth_token: None,
            ct0: None,
        }
    }
}

/// Retrieves posts from the upstream source.
///
/// Implement this to substitute a test double for the external process.
pub trait TweetFetcher {
    /// Fetch a single post by id. `Ok(None)` means the post does not
    /// exist upstream, distinct from a fetch failure.
    fn fetch_tweet(&self, id: &str) -> Result<Option<Tweet>>;

    /// Fetch the full thread starting at the given id, replies included.
    fn fetch_thread(&self, id: &str) -> Result<Vec<Tweet>>;
}

/// Fetcher backed by the external `bird` process.
pub struct BirdFetcher {
    config: FetchConfig,
}

impl BirdFetcher {
    /// Create a fetcher with the given config.
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        debug!("running {} {}", self.config.program, args.join(" "));

        let mut cmd = Command::new(&self.config.program);
        cmd.args(args);
        if let Some(ref token) = self.config.auth_token {
            cmd.env("AUTH_TOKEN", token);
        }
        if let Some(ref ct0) = self.config.ct0 {
            cmd.env("CT0", ct0);
        }

        let output = cmd
            .output()
            .map_err(|e| Error::Fetch(format!("failed to run {}: {}", self.config.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Fetch(format!(
                "{} exited with {}: {}",
                self.config.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl TweetFetcher for BirdFetcher {
    fn fetch_tweet(&self, id: &str) -> Result<Option<Tweet>> {
        let stdout = self.run(&["read", id, "--json"])?;
        if stdout.trim().is_empty() {
            return Ok(None);
        }
        let tweet: Option<Tweet> = serde_json::from_str(&stdout)?;
        Ok(tweet)
    }

    fn fetch_thread(&self, id: &str) -> Result<Vec<Tweet>> {
        let stdout = self.run(&["thread", id, "--json"])?;
        if stdout.trim().is_empty() {
            return Ok(Vec::new());
        }
        let tweets: Vec<Tweet> = serde_json::from_str(&stdout)?;
        Ok(tweets)
    }
}

/// Extract the status id from a post URL: the first run of 15 or more
/// digits. Returns `None` for URLs without one.
pub fn extract_tweet_id(url: &str) -> Option<&str> {
    let re = Regex::new(r"\d{15,}").unwrap();
    re.find(url).map(|m| m.as_str())
}
