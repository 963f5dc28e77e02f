//! Financial rollup
//!
//! Costs are floating-point euros in major units. Rounding belongs to the
//! presentation layer; nothing here rounds mid-computation.

use nestor_models::{Offer, OfferItem, Project, ProjectIntervention, SubIntervention};

/// Line total for a costed sub-intervention.
/// A missing quantity marks a draft line and prices as zero.
pub fn line_total(item: &SubIntervention) -> f64 {
    item.quantity.unwrap_or(0.0) * item.unit_price
}

/// Intervention cost: the explicit override when set, else the line-item sum
pub fn intervention_cost(intervention: &ProjectIntervention) -> f64 {
    if let Some(cost) = intervention.cost_override {
        return cost;
    }
    intervention.sub_interventions.iter().map(line_total).sum()
}

/// Project budget: sum of its interventions' costs
pub fn project_budget(project: &Project) -> f64 {
    project.interventions.iter().map(intervention_cost).sum()
}

/// Line total for an offer item, same arithmetic as sub-interventions
pub fn offer_item_total(item: &OfferItem) -> f64 {
    item.quantity.unwrap_or(0.0) * item.unit_price
}

/// Total quoted amount of an offer
pub fn offer_total(offer: &Offer) -> f64 {
    offer.items.iter().map(offer_item_total).sum()
}
