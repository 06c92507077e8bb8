//! Azure OpenAI client struct and builder.

/// Default API version used when none is specified.
const DEFAULT_API_VERSION: &str = "2024-02-15-preview";

/// Default embeddings deployment used when none is specified.
const DEFAULT_EMBEDDING_DEPLOYMENT: &str = "text-embedding-ada-002";

/// Errors from client construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("environment variable {0} must be set")]
    MissingVar(&'static str),
}

/// Client for the Azure OpenAI chat completions and embeddings APIs.
///
/// Implements [`Provider`](playbook_types::Provider) and
/// [`EmbeddingProvider`](playbook_types::EmbeddingProvider) for use
/// anywhere those traits are accepted.
///
/// # Example
///
/// ```no_run
/// use playbook_provider_azure::AzureOpenAi;
///
/// let client = AzureOpenAi::new("https://my-resource.openai.azure.com", "key")
///     .deployment("gpt-4o")
///     .embedding_deployment("text-embedding-ada-002");
/// ```
pub struct AzureOpenAi {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`.
    pub(crate) endpoint: String,
    /// API key, sent as the `api-key` header on every request.
    pub(crate) api_key: String,
    /// API version query parameter.
    pub(crate) api_version: String,
    /// Default chat deployment used when the request does not specify one.
    pub(crate) deployment: String,
    /// Default embeddings deployment used when the request does not specify one.
    pub(crate) embedding_deployment: String,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl AzureOpenAi {
    /// Create a new client with the given endpoint and API key.
    ///
    /// Default API version: `2024-02-15-preview`.
    /// Default embeddings deployment: `text-embedding-ada-002`.
    /// The chat deployment default is empty and must be set with
    /// [`deployment`](Self::deployment) or supplied per request.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            api_version: DEFAULT_API_VERSION.into(),
            deployment: String::new(),
            embedding_deployment: DEFAULT_EMBEDDING_DEPLOYMENT.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from the standard `AZURE_OPENAI_*` environment
    /// variables.
    ///
    /// `AZURE_OPENAI_ENDPOINT` and `AZURE_OPENAI_KEY` are required.
    /// `AZURE_OPENAI_API_VERSION`, `AZURE_OPENAI_DEPLOYMENT_NAME`, and
    /// `AZURE_OPENAI_EMBEDDING_DEPLOYMENT` override the defaults when set.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingVar`] if a required variable is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = std::env::var("AZURE_OPENAI_ENDPOINT")
            .map_err(|_| ConfigError::MissingVar("AZURE_OPENAI_ENDPOINT"))?;
        let api_key = std::env::var("AZURE_OPENAI_KEY")
            .map_err(|_| ConfigError::MissingVar("AZURE_OPENAI_KEY"))?;

        let mut client = Self::new(endpoint, api_key);
        if let Ok(version) = std::env::var("AZURE_OPENAI_API_VERSION") {
            client = client.api_version(version);
        }
        if let Ok(deployment) = std::env::var("AZURE_OPENAI_DEPLOYMENT_NAME") {
            client = client.deployment(deployment);
        }
        if let Ok(deployment) = std::env::var("AZURE_OPENAI_EMBEDDING_DEPLOYMENT") {
            client = client.embedding_deployment(deployment);
        }
        Ok(client)
    }

    /// Override the API version query parameter.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the default chat deployment.
    ///
    /// This is used when [`ChatRequest::deployment`](playbook_types::ChatRequest)
    /// is empty.
    #[must_use]
    pub fn deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = deployment.into();
        self
    }

    /// Set the default embeddings deployment.
    #[must_use]
    pub fn embedding_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.embedding_deployment = deployment.into();
        self
    }

    /// Build the chat completions endpoint URL for a deployment.
    pub(crate) fn chat_url(&self, deployment: &str) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, deployment, self.api_version
        )
    }

    /// Build the embeddings endpoint URL for a deployment.
    pub(crate) fn embeddings_url(&self, deployment: &str) -> String {
        format!(
            "{}/openai/deployments/{}/embeddings?api-version={}",
            self.endpoint, deployment, self.api_version
        )
    }
}
