//! Drink suggestions derived from the order history.
//!
//! The favourite beverage is the one ordered most often, and the suggested
//! condiments are the two that appear in the most orders (each order counts
//! once per condiment, whatever the quantity). Ties go to whichever was ordered
//! first. Without any history a random house pairing is suggested.

use crate::model::{BeverageId, CondimentId, Order, Recommendation};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// House pairings, used when there is nothing better to go on.
pub const DEFAULT_PAIRINGS: &[(&str, &[&str], &str)] = &[
    ("coffee", &["milk", "sugar"], "A classic: milk and sugar round out the coffee"),
    ("latte", &["vanilla", "cream"], "Vanilla syrup and cream for a sweeter latte"),
    ("mocha", &["cream", "chocolate"], "Extra chocolate and cream for chocolate lovers"),
    ("americano", &["ice", "caramel"], "Iced with caramel, refreshing on a warm day"),
];

const MAX_CONDIMENTS: usize = 2;

fn pairing(beverage: &str, condiments: &[&str], reason: &str) -> Recommendation {
    Recommendation {
        beverage: beverage.into(),
        condiments: condiments.iter().map(|&c| CondimentId::from(c)).collect(),
        reason: reason.to_string(),
    }
}

/// One of the [`DEFAULT_PAIRINGS`], chosen at random.
pub fn random_pairing<R: Rng + ?Sized>(rng: &mut R) -> Recommendation {
    let &(beverage, condiments, reason) = DEFAULT_PAIRINGS
        .choose(rng)
        .unwrap_or(&DEFAULT_PAIRINGS[0]);
    pairing(beverage, condiments, reason)
}

/// Counts occurrences, keeping first-seen order.
fn tally<K: PartialEq>(counts: &mut Vec<(K, usize)>, key: K) {
    match counts.iter_mut().find(|(k, _)| *k == key) {
        Some((_, n)) => *n += 1,
        None => counts.push((key, 1)),
    }
}

pub fn recommend<R: Rng + ?Sized>(history: &[Order], rng: &mut R) -> Recommendation {
    let mut beverages: Vec<(BeverageId, usize)> = Vec::new();
    let mut condiments: Vec<(CondimentId, usize)> = Vec::new();

    for order in history {
        if let Some(beverage) = order.beverage_id() {
            tally(&mut beverages, beverage);
        }
        for (condiment, _) in order.condiments() {
            tally(&mut condiments, condiment);
        }
    }

    // max_by_key keeps the last maximum, so fold for first-seen ties.
    let Some((favourite, count)) = beverages.into_iter().fold(None, |best, (id, n)| match best {
        Some((_, best_n)) if best_n >= n => best,
        _ => Some((id, n)),
    }) else {
        debug!("No order history, suggesting a house pairing");
        return random_pairing(rng);
    };

    // Stable sort keeps first-seen order among equal counts.
    condiments.sort_by(|a, b| b.1.cmp(&a.1));
    let preferred: Vec<CondimentId> = condiments
        .into_iter()
        .take(MAX_CONDIMENTS)
        .map(|(id, _)| id)
        .collect();

    if preferred.is_empty() {
        if let Some(&(beverage, condiments, reason)) = DEFAULT_PAIRINGS
            .iter()
            .find(|(beverage, _, _)| *beverage == favourite.0)
        {
            return pairing(beverage, condiments, reason);
        }
    }

    debug!(beverage = %favourite, count, "Suggesting from history");
    Recommendation {
        beverage: favourite,
        condiments: preferred,
        reason: "Based on your order history".to_string(),
    }
}
