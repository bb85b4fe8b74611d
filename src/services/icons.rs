//! Icon attachment for generated variations.
//!
//! The first variation keeps the icon the user already chose. Later ones draw from the
//! candidate pool without replacement, skipping the chosen icon whenever other icons exist.
//! Randomness comes from the caller so tests can pin the draw.

use rand::{Rng, seq::SliceRandom};
use tracing::debug;

use crate::model::{IconRef, LogoVariation};

/// Icons of `catalog` tagged with `industry`, or the whole catalog when none match or no
/// industry is given.
pub fn icon_pool<'a>(catalog: &'a [IconRef], industry: Option<&str>) -> Vec<&'a IconRef> {
    let Some(industry) = industry.map(str::trim).filter(|industry| !industry.is_empty()) else {
        return catalog.iter().collect();
    };
    let matching: Vec<&IconRef> = catalog
        .iter()
        .filter(|icon| icon.matches_industry(industry))
        .collect();
    if matching.is_empty() {
        debug!(industry, "no icon tagged with industry; using the whole catalog");
        catalog.iter().collect()
    } else {
        matching
    }
}

/// Attach icons to `variations` in order.
///
/// An empty pool leaves every variation after the first without an icon.
pub fn assign_icons<R: Rng + ?Sized>(
    variations: &mut [LogoVariation],
    chosen: Option<&IconRef>,
    pool: &[&IconRef],
    rng: &mut R,
) {
    let mut remaining = variations.iter_mut();
    if let Some(chosen) = chosen {
        if let Some(first) = remaining.next() {
            first.icon = Some(chosen.clone());
        }
    }

    let alternatives: Vec<&IconRef> = pool
        .iter()
        .copied()
        .filter(|icon| chosen.is_none_or(|chosen| icon.id != chosen.id))
        .collect();
    let candidates = if alternatives.is_empty() {
        pool.to_vec()
    } else {
        alternatives
    };
    if candidates.is_empty() {
        debug!("icon pool is empty; variations keep no icon");
        return;
    }

    let mut deck: Vec<&IconRef> = Vec::with_capacity(candidates.len());
    for variation in remaining {
        if deck.is_empty() {
            deck.extend(&candidates);
            deck.shuffle(rng);
        }
        variation.icon = deck.pop().cloned();
    }
}
