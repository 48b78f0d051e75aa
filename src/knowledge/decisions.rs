//! Architecture decision records (ADRs).

use std::fmt;

use chrono::NaiveDate;

use super::registry::Registry;
use super::KnowledgeError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lifecycle state of a decision record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionStatus {
    Proposed,
    Accepted,
    Rejected,
    Deprecated,
    Superseded,
}

impl DecisionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Deprecated => "deprecated",
            Self::Superseded => "superseded",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionRecord {
    pub id: String,
    pub title: String,
    pub status: DecisionStatus,
    pub date: NaiveDate,
    pub context: String,
    pub decision: String,
    pub consequences: String,
}

impl DecisionRecord {
    /// Build a record, validating the `ADR-###` id and the ISO date.
    pub fn new(
        id: &str,
        title: &str,
        status: DecisionStatus,
        date: &str,
        context: &str,
        decision: &str,
        consequences: &str,
    ) -> Result<Self, KnowledgeError> {
        if !is_record_id(id) {
            return Err(KnowledgeError::InvalidRecordId(id.to_string()));
        }
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|source| {
            KnowledgeError::InvalidDate {
                id: id.to_string(),
                value: date.to_string(),
                source,
            }
        })?;

        Ok(Self {
            id: id.to_string(),
            title: title.to_string(),
            status,
            date,
            context: context.to_string(),
            decision: decision.to_string(),
            consequences: consequences.to_string(),
        })
    }

    /// Full markdown rendering of a single record.
    pub fn render(&self) -> String {
        format!(
            "# {id}: {title}\n\n**Status:** {status}\n**Date:** {date}\n\n## Context\n{context}\n\n## Decision\n{decision}\n\n## Consequences\n{consequences}\n",
            id = self.id,
            title = self.title,
            status = self.status,
            date = self.date.format(DATE_FORMAT),
            context = self.context,
            decision = self.decision,
            consequences = self.consequences,
        )
    }
}

fn is_record_id(id: &str) -> bool {
    match id.strip_prefix("ADR-") {
        Some(digits) => digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

pub type DecisionRegistry = Registry<DecisionRecord>;

pub fn registry(records: Vec<DecisionRecord>) -> Result<DecisionRegistry, KnowledgeError> {
    Registry::from_entries(
        "decision record",
        records.into_iter().map(|r| (r.id.clone(), r)),
    )
}

/// Look up a record by id, case-insensitively.
///
/// Misses render a message listing every known id; this never fails.
pub fn get_record(records: &DecisionRegistry, id: &str) -> String {
    match records.get(&id.to_uppercase()) {
        Some(record) => record.render(),
        None => format!(
            "ADR '{id}' not found. Available ADRs: {}",
            records.key_list()
        ),
    }
}

/// One line per record, in registry order.
pub fn list_records(records: &DecisionRegistry) -> String {
    let mut out = String::from("# Architecture Decision Records\n\n");
    for (id, record) in records.iter() {
        out.push_str(&format!(
            "- **{id}**: {} ({})\n",
            record.title, record.status
        ));
    }
    out
}

pub fn reference_records() -> Result<Vec<DecisionRecord>, KnowledgeError> {
    Ok(vec![
        DecisionRecord::new(
            "ADR-001",
            "Adopt Monorepo Structure",
            DecisionStatus::Accepted,
            "2024-01-15",
            "We need to share code between multiple services while maintaining separate deployments.",
            "Use Turborepo with pnpm workspaces for monorepo management.",
            "Enables code sharing, requires learning Turborepo, CI/CD needs adjustment.",
        )?,
        DecisionRecord::new(
            "ADR-002",
            "Use PostgreSQL as Primary Database",
            DecisionStatus::Accepted,
            "2024-01-20",
            "We need a reliable, scalable relational database for transactional data.",
            "PostgreSQL 16 with Prisma ORM for type-safe database access.",
            "Strong typing, good tooling, team familiarity. Lock-in to relational model.",
        )?,
        DecisionRecord::new(
            "ADR-003",
            "Event-Driven Communication Between Services",
            DecisionStatus::Accepted,
            "2024-02-01",
            "Services need to communicate without tight coupling.",
            "Use RabbitMQ for async messaging with JSON schemas for events.",
            "Loose coupling, eventual consistency, need for idempotent consumers.",
        )?,
        DecisionRecord::new(
            "ADR-004",
            "JWT-Based Authentication",
            DecisionStatus::Accepted,
            "2024-02-10",
            "We need stateless authentication across microservices.",
            "JWT tokens with 24h expiry, refresh token rotation, stored in HTTP-only cookies.",
            "Stateless verification, need for token revocation strategy.",
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> DecisionRegistry {
        registry(reference_records().unwrap()).unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let records = reference();
        for id in records.keys() {
            assert_eq!(
                get_record(&records, id),
                get_record(&records, &id.to_lowercase())
            );
        }
    }

    #[test]
    fn renders_sections_in_order() {
        let out = get_record(&reference(), "adr-002");
        assert!(out.starts_with("# ADR-002: Use PostgreSQL as Primary Database\n\n"));
        assert!(out.contains("**Status:** accepted\n**Date:** 2024-01-20\n"));

        let context = out.find("## Context").unwrap();
        let decision = out.find("## Decision").unwrap();
        let consequences = out.find("## Consequences").unwrap();
        assert!(context < decision && decision < consequences);
        assert!(out.ends_with("Lock-in to relational model.\n"));
    }

    #[test]
    fn miss_echoes_input_and_lists_ids() {
        let out = get_record(&reference(), "adr-9");
        assert_eq!(
            out,
            "ADR 'adr-9' not found. Available ADRs: ADR-001, ADR-002, ADR-003, ADR-004"
        );
    }

    #[test]
    fn no_partial_matches() {
        let records = reference();
        assert!(get_record(&records, "ADR-00").contains("not found"));
        assert!(get_record(&records, " ADR-001").contains("not found"));
    }

    #[test]
    fn list_is_in_insertion_order() {
        let out = list_records(&reference());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "# Architecture Decision Records");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "- **ADR-001**: Adopt Monorepo Structure (accepted)");
        assert_eq!(lines[5], "- **ADR-004**: JWT-Based Authentication (accepted)");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn rejects_malformed_ids() {
        for bad in ["ADR-1", "adr-001", "ADR-0001", "RFC-001", "ADR-00a"] {
            let err = DecisionRecord::new(bad, "t", DecisionStatus::Proposed, "2024-01-01", "", "", "");
            assert!(matches!(err, Err(KnowledgeError::InvalidRecordId(_))), "{bad}");
        }
    }

    #[test]
    fn rejects_bad_dates() {
        let err = DecisionRecord::new(
            "ADR-010",
            "t",
            DecisionStatus::Proposed,
            "2024-02-30",
            "",
            "",
            "",
        );
        assert!(matches!(err, Err(KnowledgeError::InvalidDate { .. })));
    }

    #[test]
    fn status_renders_lowercase() {
        assert_eq!(DecisionStatus::Superseded.to_string(), "superseded");
        assert_eq!(DecisionStatus::Accepted.as_str(), "accepted");
    }
}
