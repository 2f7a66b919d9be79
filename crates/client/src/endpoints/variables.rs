//! Project CI/CD variable REST API endpoints.
//!
//! Responsibilities:
//! - Low-level HTTP calls to `/api/v4/projects/:id/variables[/:key]`.
//! - Page aggregation for the list endpoint.
//!
//! Does NOT handle:
//! - Key validation (see client module).
//! - Output formatting.
//!
//! Invariants:
//! - Pages are requested strictly one after another.
//! - Listing stops on an empty page, a last-page header, or `MAX_LIST_PAGES`.

use reqwest::Client;
use reqwest::header::HeaderMap;
use tracing::{debug, warn};

use gitlab_secrets_config::constants::MAX_LIST_PAGES;

use crate::endpoints::encode_path_segment;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{Variable, VariableUpdate};

/// Header carrying the access token.
pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

const TOTAL_PAGES_HEADER: &str = "x-total-pages";
const NEXT_PAGE_HEADER: &str = "x-next-page";

/// One page of the list endpoint plus its pagination headers.
#[derive(Debug, Clone)]
pub struct VariablePage {
    pub variables: Vec<Variable>,
    /// `X-Total-Pages`, when present and numeric
    pub total_pages: Option<u32>,
    /// `X-Next-Page`; `Some("")` on the last page
    pub next_page: Option<String>,
}

impl VariablePage {
    /// Whether `page` was the final page.
    pub fn is_last(&self, page: u32) -> bool {
        if self.variables.is_empty() {
            return true;
        }
        if let Some(total) = self.total_pages
            && page >= total
        {
            return true;
        }
        matches!(self.next_page.as_deref(), Some(next) if next.trim().is_empty())
    }
}

fn variables_url(base_url: &str, project_id: &str) -> String {
    format!(
        "{}/api/v4/projects/{}/variables",
        base_url,
        encode_path_segment(project_id)
    )
}

fn variable_url(base_url: &str, project_id: &str, key: &str) -> String {
    format!(
        "{}/{}",
        variables_url(base_url, project_id),
        encode_path_segment(key)
    )
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
}

/// Fetch a single page of variables.
pub async fn list_variables_page(
    client: &Client,
    base_url: &str,
    token: &str,
    project_id: &str,
    page: u32,
    per_page: u32,
) -> Result<VariablePage> {
    debug!(page, per_page, "Listing variables page");

    let url = variables_url(base_url, project_id);

    let builder = client
        .get(&url)
        .header(TOKEN_HEADER, token)
        .query(&[("page", page), ("per_page", per_page)]);

    let response = send_request(builder).await?;

    let total_pages =
        header_str(response.headers(), TOTAL_PAGES_HEADER).and_then(|v| v.trim().parse().ok());
    let next_page = header_str(response.headers(), NEXT_PAGE_HEADER);

    let variables: Vec<Variable> = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse variables page {page}: {e}"))
    })?;

    Ok(VariablePage {
        variables,
        total_pages,
        next_page,
    })
}

/// List every variable of the project, following pagination.
pub async fn list_variables(
    client: &Client,
    base_url: &str,
    token: &str,
    project_id: &str,
    per_page: u32,
) -> Result<Vec<Variable>> {
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let result = list_variables_page(client, base_url, token, project_id, page, per_page).await?;
        let last = result.is_last(page);
        all.extend(result.variables);

        if last {
            break;
        }
        if page >= MAX_LIST_PAGES {
            warn!(
                pages = page,
                "Stopped listing variables at the page limit; results may be incomplete"
            );
            break;
        }
        page += 1;
    }

    debug!(count = all.len(), pages = page, "Listed variables");
    Ok(all)
}

/// Get a single variable by key.
///
/// # Returns
/// The `Variable`, or `ClientError::NotFound` if it doesn't exist.
pub async fn get_variable(
    client: &Client,
    base_url: &str,
    token: &str,
    project_id: &str,
    key: &str,
) -> Result<Variable> {
    debug!("Getting variable: {}", key);

    let url = variable_url(base_url, project_id, key);
    let builder = client.get(&url).header(TOKEN_HEADER, token);

    let response = match send_request(builder).await {
        Ok(resp) => resp,
        Err(ClientError::NotFound(_)) => {
            return Err(ClientError::NotFound(format!(
                "Variable '{}' not found",
                key
            )));
        }
        Err(e) => return Err(e),
    };

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse variable response: {}", e))
    })
}

/// Create a new variable.
pub async fn create_variable(
    client: &Client,
    base_url: &str,
    token: &str,
    project_id: &str,
    variable: &Variable,
) -> Result<Variable> {
    debug!("Creating variable: {}", variable.key);

    let url = variables_url(base_url, project_id);
    let builder = client
        .post(&url)
        .header(TOKEN_HEADER, token)
        .json(variable);

    let response = send_request(builder).await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse created variable: {}", e))
    })
}

/// Update an existing variable.
///
/// Only the `Some` fields of `update` are sent.
///
/// # Returns
/// The updated `Variable`, or `ClientError::NotFound` if the key doesn't exist.
pub async fn update_variable(
    client: &Client,
    base_url: &str,
    token: &str,
    project_id: &str,
    key: &str,
    update: &VariableUpdate,
) -> Result<Variable> {
    debug!("Updating variable: {}", key);

    let url = variable_url(base_url, project_id, key);
    let builder = client.put(&url).header(TOKEN_HEADER, token).json(update);

    let response = match send_request(builder).await {
        Ok(resp) => resp,
        Err(ClientError::NotFound(_)) => {
            return Err(ClientError::NotFound(format!(
                "Variable '{}' does not exist",
                key
            )));
        }
        Err(e) => return Err(e),
    };

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse updated variable: {}", e))
    })
}

/// Delete a variable.
///
/// # Returns
/// `true` when the variable was deleted, `false` when it did not exist.
pub async fn delete_variable(
    client: &Client,
    base_url: &str,
    token: &str,
    project_id: &str,
    key: &str,
) -> Result<bool> {
    debug!("Deleting variable: {}", key);

    let url = variable_url(base_url, project_id, key);
    let builder = client.delete(&url).header(TOKEN_HEADER, token);

    match send_request(builder).await {
        Ok(_) => Ok(true),
        Err(ClientError::NotFound(_)) => Ok(false),
        Err(e) => Err(e),
    }
}
