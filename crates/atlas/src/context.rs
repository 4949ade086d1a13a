//! Analytical contexts and the context-layer policy.

use crate::layers::LayerId;

/// The two analytical views of the dashboard. Exactly one is current at
/// any time (held in [`crate::controls::ActiveContext`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisContext {
    #[default]
    LossAnalysis,
    InvestmentInclusion,
}

/// Both contexts, in tab order.
pub const ALL_CONTEXTS: [AnalysisContext; 2] = [
    AnalysisContext::LossAnalysis,
    AnalysisContext::InvestmentInclusion,
];

impl AnalysisContext {
    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::LossAnalysis => "Loss Analysis",
            Self::InvestmentInclusion => "Investment & Inclusion",
        }
    }

    /// Title of the legend theme block for this context.
    pub fn legend_title(self) -> &'static str {
        match self {
            Self::LossAnalysis => "Fire Intensity Legend",
            Self::InvestmentInclusion => "Investment Legend",
        }
    }

    /// The canonical active-layer set for this context.
    ///
    /// This is the complete replacement set, not a delta: applying it
    /// activates exactly these layers and deactivates every other one.
    /// Invoked on every context switch, overwriting manual toggles made in
    /// the previous context (intended reset-on-switch behavior).
    pub fn active_layers(self) -> &'static [LayerId] {
        match self {
            Self::LossAnalysis => &[LayerId::Satellite, LayerId::Fires, LayerId::Indigenous],
            Self::InvestmentInclusion => &[
                LayerId::Satellite,
                LayerId::Indigenous,
                LayerId::Projects,
                LayerId::Institutional,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::LayerRegistry;

    #[test]
    fn canonical_sets_match_policy() {
        assert_eq!(
            AnalysisContext::LossAnalysis.active_layers(),
            &[LayerId::Satellite, LayerId::Fires, LayerId::Indigenous]
        );
        assert_eq!(
            AnalysisContext::InvestmentInclusion.active_layers(),
            &[
                LayerId::Satellite,
                LayerId::Indigenous,
                LayerId::Projects,
                LayerId::Institutional,
            ]
        );
    }

    #[test]
    fn apply_context_is_idempotent() {
        for context in ALL_CONTEXTS {
            let mut once = LayerRegistry::default();
            once.apply_context(context);
            let mut twice = once.clone();
            twice.apply_context(context);

            let once_flags: Vec<bool> = once.all().iter().map(|l| l.active).collect();
            let twice_flags: Vec<bool> = twice.all().iter().map(|l| l.active).collect();
            assert_eq!(once_flags, twice_flags);
        }
    }

    #[test]
    fn satellite_is_active_in_both_contexts() {
        for context in ALL_CONTEXTS {
            assert!(context.active_layers().contains(&LayerId::Satellite));
        }
    }
}
