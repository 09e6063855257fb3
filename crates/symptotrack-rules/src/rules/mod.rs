pub mod critical_pain;
pub mod critical_tags;
pub mod danger_keywords;
pub mod pain_spike;
