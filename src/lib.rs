// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod metrics;
pub mod normalize;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    errors::{Error, FieldError},
    BenefitEntry, BenefitWarning, CostCategory, CostEntry, Frequency, MetricResult,
    MigrationScenario, NormalizedFinancials, ToolProfile,
};

pub use crate::comparison::{compare, BestPicks, ComparisonReport, MetricSeries};
pub use crate::metrics::{compute_metrics, MetricReport};
pub use crate::normalize::{normalize, Normalization};
pub use crate::validation::ProfileDraft;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
