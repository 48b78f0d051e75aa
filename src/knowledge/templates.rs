//! Fixed prompt templates.

/// The prompt templates the server publishes. None take arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    CodeReviewChecklist,
    ArchitectureReview,
}

impl PromptTemplate {
    pub const ALL: [PromptTemplate; 2] = [Self::CodeReviewChecklist, Self::ArchitectureReview];

    pub fn name(&self) -> &'static str {
        match self {
            Self::CodeReviewChecklist => "code_review_checklist",
            Self::ArchitectureReview => "architecture_review",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::CodeReviewChecklist => "Returns a standard code review checklist.",
            Self::ArchitectureReview => "Returns prompts for architecture review.",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::CodeReviewChecklist => CODE_REVIEW_CHECKLIST,
            Self::ArchitectureReview => ARCHITECTURE_REVIEW,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

pub const CODE_REVIEW_CHECKLIST: &str = "Please review the code using this checklist:

## Code Quality
- [ ] Types are explicit, no `any` types
- [ ] Functions have single responsibility
- [ ] Error handling is complete
- [ ] No commented-out code

## Testing
- [ ] Unit tests cover business logic
- [ ] Edge cases are tested
- [ ] Test descriptions are clear

## Security
- [ ] Input validation is present
- [ ] No hardcoded secrets
- [ ] SQL queries are parameterized
- [ ] Authentication/authorization checked

## Documentation
- [ ] Public functions have JSDoc comments
- [ ] Complex logic has explanatory comments
- [ ] README updated if needed

Please identify any issues and suggest improvements.";

pub const ARCHITECTURE_REVIEW: &str = "Please review this code/design against our architecture standards:

1. **Service Boundaries**: Does this respect service ownership?
2. **Communication**: Is sync/async communication used appropriately?
3. **Data Ownership**: Does this query only data it owns?
4. **Error Handling**: Are failures handled gracefully?
5. **Observability**: Is logging/tracing adequate?

Reference our Architecture ADRs for decisions:
- ADR-001: Monorepo Structure
- ADR-002: PostgreSQL Database
- ADR-003: Event-Driven Communication
- ADR-004: JWT Authentication

Identify any violations and suggest corrections.";
