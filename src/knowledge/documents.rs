//! Documentation bodies served under the `docs://` namespace.

use super::registry::Registry;
use super::KnowledgeError;

/// A named documentation page. The body is returned verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub description: String,
    pub body: String,
}

impl Document {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            body: body.into(),
        }
    }
}

pub type DocumentRegistry = Registry<Document>;

/// Build a document registry keyed by document name.
pub fn registry(documents: Vec<Document>) -> Result<DocumentRegistry, KnowledgeError> {
    Registry::from_entries(
        "document",
        documents.into_iter().map(|doc| (doc.name.clone(), doc)),
    )
}

/// The reference documentation set, in publication order.
pub fn reference_documents() -> Vec<Document> {
    vec![
        Document::new(
            "architecture",
            "System architecture documentation",
            ARCHITECTURE,
        ),
        Document::new(
            "api-standards",
            "API design standards and conventions",
            API_STANDARDS,
        ),
        Document::new(
            "coding-standards",
            "Coding standards and best practices",
            CODING_STANDARDS,
        ),
        Document::new("onboarding", "Developer onboarding guide", ONBOARDING),
    ]
}

const ARCHITECTURE: &str = r#"
# System Architecture

## Overview
Our system follows a microservices architecture with the following components:

- **API Gateway**: Kong-based gateway handling routing and rate limiting
- **User Service**: Manages authentication and user profiles (Node.js)
- **Order Service**: Handles order processing and payments (Node.js)
- **Notification Service**: Email, SMS, and push notifications (Python)
- **Analytics Service**: Event processing and reporting (Python)

## Communication Patterns
- Synchronous: REST APIs between services
- Asynchronous: RabbitMQ for event-driven communication

## Database Strategy
- PostgreSQL for transactional data
- Redis for caching and sessions
- Elasticsearch for search functionality

## Deployment
- Kubernetes on AWS EKS
- GitOps with ArgoCD
- Prometheus + Grafana for observability
"#;

const API_STANDARDS: &str = r#"
# API Standards

## RESTful Conventions
- Use plural nouns for resources: `/users`, `/orders`
- Use HTTP methods correctly: GET, POST, PUT, PATCH, DELETE
- Return appropriate status codes

## Request/Response Format
```json
{
  "data": { ... },
  "meta": {
    "page": 1,
    "totalPages": 10,
    "totalItems": 100
  }
}
```

## Error Format
```json
{
  "error": {
    "code": "VALIDATION_ERROR",
    "message": "Invalid email format",
    "details": { "field": "email" }
  }
}
```

## Authentication
- Bearer tokens in Authorization header
- JWT with 24-hour expiry
- Refresh token rotation enabled
"#;

const CODING_STANDARDS: &str = r#"
# Coding Standards

## TypeScript
- Strict mode enabled
- No `any` types
- Explicit return types on all functions
- Use interfaces for object shapes

## Naming Conventions
- camelCase for variables and functions
- PascalCase for classes and interfaces
- UPPER_SNAKE_CASE for constants

## Testing Requirements
- Minimum 80% coverage
- Unit tests for all business logic
- Integration tests for API endpoints
- E2E tests for critical user flows

## Code Review Checklist
- [ ] Types are explicit, no `any`
- [ ] Error handling is complete
- [ ] Tests cover happy path and edge cases
- [ ] No hardcoded secrets
- [ ] Logging includes correlation IDs
"#;

const ONBOARDING: &str = r#"
# Developer Onboarding

## Getting Started
1. Clone the monorepo: `git clone git@github.com:company/platform.git`
2. Install dependencies: `pnpm install`
3. Copy environment: `cp .env.example .env`
4. Start services: `pnpm dev`

## Key Contacts
- Architecture questions: #architecture-team on Slack
- DevOps support: #platform-team on Slack
- Security reviews: security@company.com

## Required Reading
- [Architecture Overview](docs://architecture)
- [API Standards](docs://api-standards)
- [Coding Standards](docs://coding-standards)

## Development Environment
- Node.js 20+
- Python 3.11+
- Docker Desktop
- pnpm (not npm or yarn)
"#;
