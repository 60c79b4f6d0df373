//! Simulated Strategies - canned, deterministic response backends
//!
//! One strategy per known specialization plus a generic fallback that
//! restates the specialization and topic. Selection is by exact
//! specialization string. No randomness and no external calls: the same
//! topic always yields the same text for a given specialization.

use crate::agents::strategy::{ResponseRequest, ResponseStrategy, StrategyError};
use async_trait::async_trait;
use std::sync::Arc;

pub const VETERINARY_MEDICINE: &str = "Veterinary Medicine";
pub const ANIMAL_NUTRITION: &str = "Animal Nutrition";
pub const ANIMAL_BEHAVIOR: &str = "Animal Behavior";
pub const GENETICS: &str = "Genetics";
pub const EPIDEMIOLOGY: &str = "Epidemiology";

/// Select the canned strategy for a specialization. Unknown specializations
/// get the generic fallback.
pub fn strategy_for(specialization: &str) -> Arc<dyn ResponseStrategy> {
    match specialization {
        VETERINARY_MEDICINE => Arc::new(VeterinaryMedicineStrategy),
        ANIMAL_NUTRITION => Arc::new(AnimalNutritionStrategy),
        ANIMAL_BEHAVIOR => Arc::new(AnimalBehaviorStrategy),
        GENETICS => Arc::new(GeneticsStrategy),
        EPIDEMIOLOGY => Arc::new(EpidemiologyStrategy),
        _ => Arc::new(GenericStrategy),
    }
}

pub struct VeterinaryMedicineStrategy;

#[async_trait]
impl ResponseStrategy for VeterinaryMedicineStrategy {
    async fn respond(&self, request: &ResponseRequest<'_>) -> Result<String, StrategyError> {
        Ok(format!(
            "From a veterinary perspective on {}, I recommend focusing on \
             diagnostic improvements and preventive care protocols.",
            request.topic
        ))
    }
}

pub struct AnimalNutritionStrategy;

#[async_trait]
impl ResponseStrategy for AnimalNutritionStrategy {
    async fn respond(&self, request: &ResponseRequest<'_>) -> Result<String, StrategyError> {
        Ok(format!(
            "Regarding {}, nutritional interventions could play a crucial role. \
             We should explore dietary modifications and supplement optimization.",
            request.topic
        ))
    }
}

pub struct AnimalBehaviorStrategy;

#[async_trait]
impl ResponseStrategy for AnimalBehaviorStrategy {
    async fn respond(&self, request: &ResponseRequest<'_>) -> Result<String, StrategyError> {
        Ok(format!(
            "Understanding behavioral patterns related to {} is essential. \
             Stress reduction and environmental enrichment may be key factors.",
            request.topic
        ))
    }
}

pub struct GeneticsStrategy;

#[async_trait]
impl ResponseStrategy for GeneticsStrategy {
    async fn respond(&self, request: &ResponseRequest<'_>) -> Result<String, StrategyError> {
        Ok(format!(
            "The genetic basis of {} deserves investigation. Gene therapy and \
             selective breeding approaches could offer long-term solutions.",
            request.topic
        ))
    }
}

pub struct EpidemiologyStrategy;

#[async_trait]
impl ResponseStrategy for EpidemiologyStrategy {
    async fn respond(&self, request: &ResponseRequest<'_>) -> Result<String, StrategyError> {
        Ok(format!(
            "From an epidemiological standpoint on {}, we need to track patterns \
             and identify risk factors across populations.",
            request.topic
        ))
    }
}

/// Fallback for specializations without a dedicated strategy.
pub struct GenericStrategy;

#[async_trait]
impl ResponseStrategy for GenericStrategy {
    async fn respond(&self, request: &ResponseRequest<'_>) -> Result<String, StrategyError> {
        Ok(format!(
            "As a {} expert, I have insights on {}.",
            request.specialization, request.topic
        ))
    }
}
