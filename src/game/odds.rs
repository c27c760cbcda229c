use super::action::Action;
use super::error::Error;
use crate::Probability;

/// the discrete outcome distribution at a chance node. construction
/// validates the game's declared probabilities: non-negative, non-empty,
/// and summing to one within [crate::CHANCE_TOLERANCE]. a sum inside the
/// tolerance is renormalized so downstream sampling sees an exact
/// distribution; a sum outside it is a rules defect and is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Odds(Vec<(Action, Probability)>);

impl Odds {
    pub fn outcomes(&self) -> &[(Action, Probability)] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.0.iter().map(|(a, _)| *a)
    }
    pub fn contains(&self, action: Action) -> bool {
        self.0.iter().any(|(a, _)| *a == action)
    }
    pub fn probability(&self, action: Action) -> Probability {
        self.0
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, p)| *p)
            .unwrap_or(0.)
    }
    /// sample one outcome according to its declared probability
    pub fn sample<R>(&self, rng: &mut R) -> Action
    where
        R: rand::Rng,
    {
        use rand::distr::Distribution;
        use rand::distr::weighted::WeightedIndex;
        let weights = self.0.iter().map(|(_, p)| *p);
        let index = WeightedIndex::new(weights)
            .expect("validated distribution")
            .sample(rng);
        self.0[index].0
    }
}

impl TryFrom<Vec<(Action, Probability)>> for Odds {
    type Error = Error;
    fn try_from(outcomes: Vec<(Action, Probability)>) -> Result<Self, Error> {
        if outcomes.is_empty() {
            return Err(Error::BadOutcomes {
                sum: 0.,
                reason: "empty outcome set at a chance node".to_string(),
            });
        }
        if let Some((action, p)) = outcomes.iter().find(|(_, p)| *p < 0. || !p.is_finite()) {
            return Err(Error::BadOutcomes {
                sum: *p,
                reason: format!("outcome {} has probability {}", action, p),
            });
        }
        let sum = outcomes.iter().map(|(_, p)| p).sum::<Probability>();
        if (sum - 1.).abs() > crate::CHANCE_TOLERANCE {
            return Err(Error::BadOutcomes {
                sum,
                reason: "probabilities do not sum to one".to_string(),
            });
        }
        Ok(Self(
            outcomes.into_iter().map(|(a, p)| (a, p / sum)).collect(),
        ))
    }
}

impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let outcomes = self
            .0
            .iter()
            .map(|(a, p)| format!("{}@{:.4}", a, p))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}]", outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin() -> Vec<(Action, Probability)> {
        vec![(Action::from(0u32), 0.5), (Action::from(1u32), 0.5)]
    }

    #[test]
    fn accepts_exact_distribution() {
        let odds = Odds::try_from(coin()).unwrap();
        assert_eq!(odds.len(), 2);
        assert_eq!(odds.probability(Action::from(0u32)), 0.5);
    }

    #[test]
    fn renormalizes_within_tolerance() {
        let odds = Odds::try_from(vec![
            (Action::from(0u32), 0.5 + 1e-7),
            (Action::from(1u32), 0.5),
        ])
        .unwrap();
        let sum = odds.outcomes().iter().map(|(_, p)| p).sum::<Probability>();
        assert!((sum - 1.).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_excess_mass() {
        let result = Odds::try_from(vec![
            (Action::from(0u32), 0.75),
            (Action::from(1u32), 0.75),
        ]);
        assert!(matches!(result, Err(Error::BadOutcomes { .. })));
    }

    #[test]
    fn rejects_negative_probability() {
        let result = Odds::try_from(vec![
            (Action::from(0u32), 1.5),
            (Action::from(1u32), -0.5),
        ]);
        assert!(matches!(result, Err(Error::BadOutcomes { .. })));
    }

    #[test]
    fn rejects_empty_set() {
        assert!(matches!(
            Odds::try_from(vec![]),
            Err(Error::BadOutcomes { .. })
        ));
    }

    #[test]
    fn sampling_stays_in_support() {
        use rand::SeedableRng;
        let odds = Odds::try_from(coin()).unwrap();
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(0);
        for _ in 0..64 {
            assert!(odds.contains(odds.sample(rng)));
        }
    }
}
