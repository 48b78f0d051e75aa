//! Service catalog.

use super::registry::Registry;
use super::KnowledgeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub tech: String,
    pub database: String,
    pub responsibilities: Vec<String>,
    pub endpoints: Vec<String>,
    pub owner: String,
}

impl Service {
    pub fn render(&self) -> String {
        format!(
            "# {name}\n\n**Tech Stack:** {tech}\n**Database:** {database}\n**Owner:** {owner}\n\n## Responsibilities\n{responsibilities}\n\n## API Endpoints\n{endpoints}\n",
            name = self.name,
            tech = self.tech,
            database = self.database,
            owner = self.owner,
            responsibilities = bullets(&self.responsibilities),
            endpoints = bullets(&self.endpoints),
        )
    }
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("  - {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type ServiceCatalog = Registry<Service>;

pub fn catalog(services: Vec<Service>) -> Result<ServiceCatalog, KnowledgeError> {
    Registry::from_entries("service", services.into_iter().map(|s| (s.name.clone(), s)))
}

/// Catalog keys are lower-case with hyphens in place of spaces.
pub fn normalize_service_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Look up a service by any spelling that normalizes to its key.
pub fn get_service(services: &ServiceCatalog, name: &str) -> String {
    match services.get(&normalize_service_name(name)) {
        Some(service) => service.render(),
        None => format!(
            "Service '{name}' not found. Available services: {}",
            services.key_list()
        ),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn reference_services() -> Vec<Service> {
    vec![
        Service {
            name: "user-service".into(),
            tech: "Node.js 20, Express, TypeScript, Prisma".into(),
            database: "PostgreSQL (users, profiles, sessions)".into(),
            responsibilities: strings(&[
                "User registration and authentication",
                "Profile management",
                "Session handling with JWT",
                "OAuth2 provider integration",
            ]),
            endpoints: strings(&[
                "POST /auth/login",
                "POST /auth/register",
                "POST /auth/refresh",
                "GET /users/:id",
                "PATCH /users/:id",
            ]),
            owner: "Platform Team".into(),
        },
        Service {
            name: "order-service".into(),
            tech: "Node.js 20, Express, TypeScript, Prisma".into(),
            database: "PostgreSQL (orders, order_items, payments)".into(),
            responsibilities: strings(&[
                "Order creation and management",
                "Payment processing",
                "Order status tracking",
                "Inventory coordination",
            ]),
            endpoints: strings(&[
                "POST /orders",
                "GET /orders/:id",
                "PATCH /orders/:id/status",
                "POST /orders/:id/payment",
            ]),
            owner: "Commerce Team".into(),
        },
        Service {
            name: "notification-service".into(),
            tech: "Python 3.11, FastAPI, Celery".into(),
            database: "PostgreSQL (notifications, templates)".into(),
            responsibilities: strings(&[
                "Email notifications",
                "SMS notifications",
                "Push notifications",
                "Template management",
            ]),
            endpoints: strings(&[
                "POST /notifications/send",
                "GET /notifications/:id",
                "POST /templates",
            ]),
            owner: "Platform Team".into(),
        },
    ]
}
