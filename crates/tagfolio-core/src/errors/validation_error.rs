/// Input validation failures raised before any component runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown region code '{code}'")]
    UnknownRegion { code: String },

    #[error("unknown species '{name}'")]
    UnknownSpecies { name: String },

    #[error("unknown allocation system '{name}'")]
    UnknownAllocationSystem { name: String },

    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("negative {field}: {value} on {context}")]
    Negative {
        field: String,
        value: f64,
        context: String,
    },

    #[error("roadmap years not contiguous: {year} follows {previous}")]
    NonContiguousYears { previous: i32, year: i32 },

    #[error("duplicate ledger entry for {key}")]
    DuplicateLedgerEntry { key: String },

    #[error("missing required field {field} on {context}")]
    MissingField { field: String, context: String },

    #[error("season on {context} ends before it starts")]
    InvalidSeason { context: String },

    #[error("invalid draw pool: {tags} tags for {applicants} applicants")]
    InvalidPool { tags: u32, applicants: u32 },
}
