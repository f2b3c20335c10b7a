use crate::config::ServerConfig;
use crate::corpus::{CorpusSource, FileCorpus};
use crate::error::ServerResult;
use crate::store::ChatStore;
use crate::telemetry::CORPUS_FAILURES_TOTAL;
use matcher::Matcher;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Chats and their messages
    pub store: Arc<ChatStore>,

    /// Where answers come from
    pub corpus: Arc<dyn CorpusSource>,

    /// Relevance engine, configured from `config.min_score`
    pub matcher: Matcher,

    /// Prometheus renderer, when a recorder is installed
    pub prometheus: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state reading the corpus from `config.corpus_path`
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let corpus = Arc::new(FileCorpus::new(config.corpus_path.clone()));
        Self::with_corpus(config, corpus)
    }

    /// Create new server state with an explicit corpus supplier
    ///
    /// Restores chats from `config.snapshot_path` when that file exists.
    pub fn with_corpus(config: ServerConfig, corpus: Arc<dyn CorpusSource>) -> ServerResult<Self> {
        let matcher = Matcher::new(config.match_config())?;

        let store = match &config.snapshot_path {
            Some(path) if path.exists() => ChatStore::load_from_file(path)?,
            _ => ChatStore::new(),
        };

        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(store),
            corpus,
            matcher,
            prometheus: None,
        })
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Candidate lines for one question
    ///
    /// An unavailable corpus is logged and treated as empty, which the
    /// matcher turns into "no match".
    pub fn candidate_lines(&self) -> Vec<String> {
        match self.corpus.load() {
            Ok(lines) => lines,
            Err(err) => {
                tracing::warn!(
                    corpus = %self.corpus.describe(),
                    error = %err,
                    "corpus unavailable, answering without it"
                );
                metrics::counter!(CORPUS_FAILURES_TOTAL).increment(1);
                Vec::new()
            }
        }
    }

    /// Persist chats to `config.snapshot_path`, if configured
    pub fn save_snapshot(&self) -> ServerResult<()> {
        if let Some(path) = &self.config.snapshot_path {
            self.store.save_to_file(path)?;
        }
        Ok(())
    }
}
