pub mod assessment;
pub mod prediction;
pub mod record;
pub mod request;
pub mod risk;

pub use assessment::{AssessmentResult, Signals};
pub use prediction::{AuxiliarySignal, FeatureImportance, Prediction};
pub use record::{RiskUpdate, SymptomRecord};
pub use request::PatientAssessmentRequest;
pub use risk::{PainTrend, RiskLevel};
