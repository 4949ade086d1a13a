//! The thematic layer registry.
//!
//! Eight layers exist for the whole session, created once at startup in a
//! fixed registration order. Toggling flips exactly one `active` flag;
//! switching the analytical context overwrites all of them (see
//! [`crate::context`]). The registry is the only mutable shared state in
//! the core, written solely by [`crate::controls::apply_control_actions`].

use bevy::prelude::*;

use crate::context::AnalysisContext;

/// Identity of a map layer. The enum doubles as the full id space: an
/// unknown layer id is unrepresentable, so the "toggle of an unknown id is
/// a no-op" contract holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerId {
    Satellite,
    Vegetation,
    Fires,
    Boundaries,
    Indigenous,
    Settlements,
    Projects,
    Institutional,
}

/// Registration order; also the order the toggle panel lists layers in.
pub const ALL_LAYERS: [LayerId; 8] = [
    LayerId::Satellite,
    LayerId::Vegetation,
    LayerId::Fires,
    LayerId::Boundaries,
    LayerId::Indigenous,
    LayerId::Settlements,
    LayerId::Projects,
    LayerId::Institutional,
];

impl LayerId {
    /// Display name shown in the toggle panel and the legend.
    pub fn label(self) -> &'static str {
        match self {
            Self::Satellite => "Satellite",
            Self::Vegetation => "Vegetation Index",
            Self::Fires => "Burned Areas",
            Self::Boundaries => "Administrative",
            Self::Indigenous => "Indigenous Lands",
            Self::Settlements => "Settlements",
            Self::Projects => "Investment Projects",
            Self::Institutional => "Institutional Zones",
        }
    }

    /// Symbolic icon reference rendered by the UI next to the layer name.
    pub fn glyph(self) -> LayerGlyph {
        match self {
            Self::Satellite => LayerGlyph::Satellite,
            Self::Vegetation => LayerGlyph::TreePine,
            Self::Fires => LayerGlyph::AlertTriangle,
            Self::Boundaries => LayerGlyph::MapPin,
            Self::Indigenous => LayerGlyph::Users,
            Self::Settlements => LayerGlyph::Home,
            Self::Projects => LayerGlyph::TrendingUp,
            Self::Institutional => LayerGlyph::Building,
        }
    }

    /// Dot color for the "Active Layers" list in the legend panel.
    pub fn legend_dot(self) -> Color {
        match self {
            Self::Fires => Color::srgb(0.937, 0.267, 0.267), // red
            Self::Vegetation => Color::srgb(0.133, 0.773, 0.369), // green
            Self::Indigenous => Color::srgb(0.376, 0.647, 0.980), // blue
            Self::Settlements => Color::srgb(0.659, 0.333, 0.969), // purple
            _ => Color::srgb(0.612, 0.639, 0.686), // gray
        }
    }
}

/// Symbolic icon set for layer rows. The UI maps these to text glyphs;
/// keeping the reference symbolic means the registry stays renderer-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerGlyph {
    Satellite,
    TreePine,
    AlertTriangle,
    MapPin,
    Users,
    Home,
    TrendingUp,
    Building,
}

/// One registry entry.
#[derive(Debug, Clone)]
pub struct Layer {
    pub id: LayerId,
    pub name: &'static str,
    pub glyph: LayerGlyph,
    pub active: bool,
}

/// Ordered collection of all layers. Order is registration order and is
/// stable across toggles and context switches.
#[derive(Resource, Debug, Clone)]
pub struct LayerRegistry {
    layers: Vec<Layer>,
}

impl Default for LayerRegistry {
    /// Startup registry: the Loss Analysis canonical set is active, since
    /// that is the context the session opens in.
    fn default() -> Self {
        let mut registry = Self {
            layers: ALL_LAYERS
                .iter()
                .map(|&id| Layer {
                    id,
                    name: id.label(),
                    glyph: id.glyph(),
                    active: false,
                })
                .collect(),
        };
        registry.apply_context(AnalysisContext::LossAnalysis);
        registry
    }
}

impl LayerRegistry {
    /// Flip one layer's active flag. No other layer is affected.
    pub fn toggle(&mut self, id: LayerId) {
        if let Some(layer) = self.layers.iter_mut().find(|l| l.id == id) {
            layer.active = !layer.active;
        }
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// All layers in registration order.
    pub fn all(&self) -> &[Layer] {
        &self.layers
    }

    pub fn is_active(&self, id: LayerId) -> bool {
        self.get(id).is_some_and(|l| l.active)
    }

    /// Replace every layer's flag with the context's canonical set. This
    /// deliberately discards manual toggles from the previous context:
    /// switching analytical context re-grounds the view.
    pub fn apply_context(&mut self, context: AnalysisContext) {
        let canonical = context.active_layers();
        for layer in &mut self.layers {
            layer.active = canonical.contains(&layer.id);
        }
    }

    /// Ids of currently active layers, in registration order.
    pub fn active_ids(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.layers.iter().filter(|l| l.active).map(|l| l.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_matches_loss_analysis_set() {
        let registry = LayerRegistry::default();
        assert!(registry.is_active(LayerId::Satellite));
        assert!(registry.is_active(LayerId::Fires));
        assert!(registry.is_active(LayerId::Indigenous));
        assert!(!registry.is_active(LayerId::Vegetation));
        assert!(!registry.is_active(LayerId::Boundaries));
        assert!(!registry.is_active(LayerId::Settlements));
        assert!(!registry.is_active(LayerId::Projects));
        assert!(!registry.is_active(LayerId::Institutional));
    }

    #[test]
    fn toggle_flips_exactly_one_layer() {
        let mut registry = LayerRegistry::default();
        let before: Vec<bool> = registry.all().iter().map(|l| l.active).collect();

        registry.toggle(LayerId::Settlements);

        for (i, layer) in registry.all().iter().enumerate() {
            if layer.id == LayerId::Settlements {
                assert_ne!(layer.active, before[i]);
            } else {
                assert_eq!(layer.active, before[i]);
            }
        }
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut registry = LayerRegistry::default();
        registry.toggle(LayerId::Fires);
        registry.toggle(LayerId::Fires);
        assert!(registry.is_active(LayerId::Fires));
    }

    #[test]
    fn order_is_stable_across_toggles() {
        let mut registry = LayerRegistry::default();
        registry.toggle(LayerId::Institutional);
        registry.toggle(LayerId::Satellite);
        let ids: Vec<LayerId> = registry.all().iter().map(|l| l.id).collect();
        assert_eq!(ids, ALL_LAYERS);
    }

    #[test]
    fn apply_context_overwrites_manual_toggles() {
        let mut registry = LayerRegistry::default();
        registry.toggle(LayerId::Settlements);
        assert!(registry.is_active(LayerId::Settlements));

        registry.apply_context(AnalysisContext::InvestmentInclusion);
        assert!(!registry.is_active(LayerId::Settlements));
        assert!(registry.is_active(LayerId::Projects));
        assert!(registry.is_active(LayerId::Institutional));
        assert!(registry.is_active(LayerId::Satellite));
        assert!(registry.is_active(LayerId::Indigenous));
        assert!(!registry.is_active(LayerId::Fires));
    }

    #[test]
    fn labels_are_unique_and_non_empty() {
        let registry = LayerRegistry::default();
        for layer in registry.all() {
            assert!(!layer.name.is_empty());
        }
        let mut names: Vec<&str> = registry.all().iter().map(|l| l.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL_LAYERS.len());
    }
}
