/*!
 * Git URL detection and parsing
 */

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::error::{GitError, GitResult};

static HTTP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(?:www\.)?[^/\s]+/[^/\s]+/[^/\s]+?(?:\.git)?/?$")
        .expect("static regex is valid")
});

static SSH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^git@([^:\s]+):([^/\s]+)/([^/\s]+?)(?:\.git)?$").expect("static regex is valid")
});

/// Git hosting platform types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHost {
    /// GitHub repository
    GitHub,
    /// GitLab repository
    GitLab,
    /// Bitbucket repository
    Bitbucket,
    /// Other Git hosting
    Other(String),
}

impl GitHost {
    fn from_host(host: &str) -> Self {
        match host.trim_start_matches("www.") {
            "github.com" => GitHost::GitHub,
            "gitlab.com" => GitHost::GitLab,
            "bitbucket.org" => GitHost::Bitbucket,
            other => GitHost::Other(other.to_string()),
        }
    }
}

impl fmt::Display for GitHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitHost::GitHub => write!(f, "GitHub"),
            GitHost::GitLab => write!(f, "GitLab"),
            GitHost::Bitbucket => write!(f, "Bitbucket"),
            GitHost::Other(host) => write!(f, "{}", host),
        }
    }
}

/// A remote repository the input path points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRepoInfo {
    /// URL as given, passed to the clone untouched
    pub url: String,
    /// Git hosting platform
    pub host: GitHost,
    /// Repository owner/username
    pub owner: String,
    /// Repository name without a `.git` suffix
    pub name: String,
}

impl fmt::Display for GitRepoInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.name)
    }
}

impl FromStr for GitRepoInfo {
    type Err = GitError;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        if HTTP_REGEX.is_match(url) {
            parse_http(url)
        } else if SSH_REGEX.is_match(url) {
            parse_ssh(url)
        } else {
            Err(GitError::InvalidUrl(url.to_string()))
        }
    }
}

fn parse_http(raw: &str) -> GitResult<GitRepoInfo> {
    let parsed = Url::parse(raw).map_err(|e| GitError::InvalidUrl(format!("{}: {}", raw, e)))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| GitError::InvalidUrl(format!("Invalid host in URL: {}", raw)))?;

    let mut segments = parsed
        .path_segments()
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty());

    match (segments.next(), segments.next(), segments.next()) {
        (Some(owner), Some(name), None) => Ok(GitRepoInfo {
            url: raw.to_string(),
            host: GitHost::from_host(host),
            owner: owner.to_string(),
            name: strip_git_suffix(name).to_string(),
        }),
        _ => Err(GitError::InvalidUrl(format!(
            "Missing owner or repository in URL: {}",
            raw
        ))),
    }
}

fn parse_ssh(raw: &str) -> GitResult<GitRepoInfo> {
    let captures = SSH_REGEX
        .captures(raw)
        .ok_or_else(|| GitError::InvalidUrl(raw.to_string()))?;

    Ok(GitRepoInfo {
        url: raw.to_string(),
        host: GitHost::from_host(&captures[1]),
        owner: captures[2].to_string(),
        name: strip_git_suffix(&captures[3]).to_string(),
    })
}

fn strip_git_suffix(name: &str) -> &str {
    name.strip_suffix(".git").unwrap_or(name)
}

/// Check whether an input string names a remote repository
pub fn is_git_url(input: &str) -> bool {
    input.parse::<GitRepoInfo>().is_ok()
}

/// Parse a Git repository URL into components
pub fn parse_git_url(url: &str) -> GitResult<GitRepoInfo> {
    url.parse()
}
