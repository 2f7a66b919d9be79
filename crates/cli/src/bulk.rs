//! Bulk create/update runner.
//!
//! Responsibilities:
//! - Apply create (with optional upsert) or update to each parsed item, in file order.
//! - Record one outcome per item and keep going past per-item failures.
//! - Report each outcome to the caller as soon as it is known.
//!
//! Does NOT handle:
//! - Parsing input files (see `input`).
//! - Printing; the caller decides how outcomes are shown.
//!
//! Invariants:
//! - One request in flight at a time; item N+1 starts after item N is recorded.
//! - No rollback: applied items stay applied when later items fail.
//! - An authentication failure stops the run; outcomes already reported stand.

use gitlab_secrets_client::{
    ClientError, GitLabClient, UpdateDefaults, Variable, VariableDefaults, VariableSpec,
    VariableUpdate, validate_variable_key,
};

/// The variable operations a bulk run needs.
pub(crate) trait VariableStore {
    async fn create(&self, variable: &Variable) -> gitlab_secrets_client::Result<Variable>;

    async fn update(
        &self,
        key: &str,
        update: &VariableUpdate,
    ) -> gitlab_secrets_client::Result<Variable>;
}

impl VariableStore for GitLabClient {
    async fn create(&self, variable: &Variable) -> gitlab_secrets_client::Result<Variable> {
        GitLabClient::create(self, variable).await
    }

    async fn update(
        &self,
        key: &str,
        update: &VariableUpdate,
    ) -> gitlab_secrets_client::Result<Variable> {
        GitLabClient::update(self, key, update).await
    }
}

/// What a bulk run does with each item.
#[derive(Debug, Clone)]
pub(crate) enum BulkAction {
    /// Create each item; on a duplicate key, update it instead when `upsert` is set.
    Create {
        defaults: VariableDefaults,
        upsert: bool,
    },
    /// Update each item; missing keys fail.
    Update { defaults: UpdateDefaults },
}

/// Final state of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Created,
    Updated,
    Failed(String),
}

/// Result for one input item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ItemResult {
    pub key: String,
    pub outcome: Outcome,
}

/// Outcomes of a bulk run, in input order.
#[derive(Debug, Default)]
pub(crate) struct BulkReport {
    items: Vec<ItemResult>,
}

impl BulkReport {
    pub fn items(&self) -> &[ItemResult] {
        &self.items
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Created))
    }

    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Updated))
    }

    /// Items that were created or updated.
    pub fn succeeded(&self) -> usize {
        self.created() + self.updated()
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.items.iter().filter(|i| pred(&i.outcome)).count()
    }
}

/// Apply `action` to every item.
///
/// `on_item` is called once per item, immediately after its outcome is known.
///
/// # Errors
/// Only `ClientError::Unauthorized`, which aborts the run. Every other error
/// becomes a `Failed` outcome.
pub(crate) async fn run_bulk<S: VariableStore>(
    store: &S,
    specs: &[VariableSpec],
    action: &BulkAction,
    mut on_item: impl FnMut(&ItemResult),
) -> Result<BulkReport, ClientError> {
    let mut report = BulkReport::default();

    for spec in specs {
        let outcome = match apply_one(store, spec, action).await {
            Err(err) if err.is_auth_error() => {
                tracing::warn!(key = %spec.key, "Authentication failed, aborting bulk run");
                return Err(err);
            }
            Err(err) => Outcome::Failed(err.detail()),
            Ok(outcome) => outcome,
        };

        let item = ItemResult {
            key: spec.key.clone(),
            outcome,
        };
        on_item(&item);
        report.items.push(item);
    }

    tracing::info!(
        succeeded = report.succeeded(),
        created = report.created(),
        updated = report.updated(),
        failed = report.failed(),
        "Bulk run finished"
    );
    Ok(report)
}

async fn apply_one<S: VariableStore>(
    store: &S,
    spec: &VariableSpec,
    action: &BulkAction,
) -> Result<Outcome, ClientError> {
    if spec.key.is_empty() {
        return Ok(Outcome::Failed(
            "Missing key in variable entry".to_string(),
        ));
    }
    if let Err(err) = validate_variable_key(&spec.key) {
        return Ok(Outcome::Failed(err.detail()));
    }

    match action {
        BulkAction::Create { defaults, upsert } => {
            let variable = spec.resolve(defaults);
            match store.create(&variable).await {
                Ok(_) => Ok(Outcome::Created),
                Err(err) if err.is_conflict() && *upsert => {
                    tracing::debug!(key = %spec.key, "Variable exists, updating instead");
                    store
                        .update(&variable.key, &VariableUpdate::from(&variable))
                        .await?;
                    Ok(Outcome::Updated)
                }
                Err(err) if err.is_conflict() => Ok(Outcome::Failed(format!(
                    "Variable '{}' already exists (use --upsert to update it)",
                    spec.key
                ))),
                Err(err) => Err(err),
            }
        }
        BulkAction::Update { defaults } => {
            store.update(&spec.key, &spec.to_update(defaults)).await?;
            Ok(Outcome::Updated)
        }
    }
}
