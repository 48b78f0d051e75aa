//! In-memory documentation knowledge base.
//!
//! Everything here is built once at startup and never mutated. Operations are
//! pure reads and always produce a message, including for unknown keys.

pub mod decisions;
pub mod documents;
pub mod naming;
pub mod registry;
pub mod search;
pub mod services;
pub mod templates;

use decisions::DecisionRegistry;
use documents::{Document, DocumentRegistry};
use naming::{NamingRules, NamingVerdict};
use search::{SearchOptions, SearchOutcome};
use services::ServiceCatalog;
use templates::PromptTemplate;

/// Failures while loading the knowledge base.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("duplicate {kind} key: {key}")]
    DuplicateKey { kind: &'static str, key: String },
    #[error("invalid decision record id '{0}' (expected ADR-###)")]
    InvalidRecordId(String),
    #[error("invalid date '{value}' on {id}: {source}")]
    InvalidDate {
        id: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid naming pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// The documents, decision records, service catalog and naming rules the
/// server answers from.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    documents: DocumentRegistry,
    decisions: DecisionRegistry,
    services: ServiceCatalog,
    naming: NamingRules,
    search_options: SearchOptions,
}

impl KnowledgeBase {
    pub fn new(
        documents: DocumentRegistry,
        decisions: DecisionRegistry,
        services: ServiceCatalog,
        search_options: SearchOptions,
    ) -> Result<Self, KnowledgeError> {
        Ok(Self {
            documents,
            decisions,
            services,
            naming: NamingRules::new()?,
            search_options,
        })
    }

    /// Load the reference data set.
    pub fn reference(search_options: SearchOptions) -> Result<Self, KnowledgeError> {
        let kb = Self::new(
            documents::registry(documents::reference_documents())?,
            decisions::registry(decisions::reference_records()?)?,
            services::catalog(services::reference_services())?,
            search_options,
        )?;
        tracing::debug!(
            documents = kb.documents.len(),
            decisions = kb.decisions.len(),
            services = kb.services.len(),
            "knowledge base loaded"
        );
        Ok(kb)
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().map(|(_, doc)| doc)
    }

    /// Full body of a known document.
    pub fn document(&self, name: &str) -> Option<&str> {
        self.documents.get(name).map(|doc| doc.body.as_str())
    }

    pub fn search(&self, query: &str) -> String {
        self.search_outcome(query).to_string()
    }

    pub fn search_outcome<'a>(&'a self, query: &'a str) -> SearchOutcome<'a> {
        search::search(&self.documents, query, &self.search_options)
    }

    pub fn get_record(&self, id: &str) -> String {
        decisions::get_record(&self.decisions, id)
    }

    pub fn list_records(&self) -> String {
        decisions::list_records(&self.decisions)
    }

    pub fn get_service(&self, name: &str) -> String {
        services::get_service(&self.services, name)
    }

    pub fn check_naming_convention(&self, name: &str, context: &str) -> String {
        self.naming_verdict(name, context).to_string()
    }

    pub fn naming_verdict(&self, name: &str, context: &str) -> NamingVerdict {
        self.naming.check(name, context)
    }

    pub fn code_review_checklist(&self) -> &'static str {
        PromptTemplate::CodeReviewChecklist.text()
    }

    pub fn architecture_review(&self) -> &'static str {
        PromptTemplate::ArchitectureReview.text()
    }
}
