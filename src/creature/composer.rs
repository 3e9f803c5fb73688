use crate::foundation::error::{SpriteError, SpriteResult};
use crate::foundation::rng::RandomSource;
use crate::geometry::fragment::Fragment;
use crate::geometry::primitives::{
    self, CrystalFacets, GearProfile, NoiseScatter, OrganicBlob, ParticleCloud, RingSegment,
};

/// Paint-order bucket a fragment belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    /// Ground shadows; painted first.
    Ground,
    /// Anatomy, textures, eyes, local glows.
    Body,
    /// Ambient aura washes; painted last.
    Aura,
}

/// Accumulates a creature's fragments in paint order.
///
/// Fragments are bucketed by [`Layer`] and concatenated ground, body, aura on
/// [`finish`](Self::finish), so shadows always sit beneath and auras above everything else no
/// matter in which order a compose function emits them. Within a layer, emission order is kept.
pub struct Composer<'r> {
    rng: &'r mut dyn RandomSource,
    ground: Vec<Fragment>,
    body: Vec<Fragment>,
    aura: Vec<Fragment>,
}

impl<'r> Composer<'r> {
    /// Start an empty composition drawing from `rng`.
    pub fn new(rng: &'r mut dyn RandomSource) -> Self {
        Self {
            rng,
            ground: Vec::new(),
            body: Vec::new(),
            aura: Vec::new(),
        }
    }

    /// Random source for composer-level variation (spots, spines, wisps).
    pub fn rng(&mut self) -> &mut dyn RandomSource {
        &mut *self.rng
    }

    /// Add a ground-shadow fragment.
    pub fn ground(&mut self, f: Fragment) -> &mut Self {
        self.ground.push(f);
        self
    }

    /// Add a body fragment.
    pub fn push(&mut self, f: Fragment) -> &mut Self {
        self.body.push(f);
        self
    }

    /// Add body fragments in order.
    pub fn extend(&mut self, fs: impl IntoIterator<Item = Fragment>) -> &mut Self {
        self.body.extend(fs);
        self
    }

    /// Add an ambient aura fragment.
    pub fn aura(&mut self, f: Fragment) -> &mut Self {
        self.aura.push(f);
        self
    }

    /// Body texture via [`primitives::noise_scatter`].
    pub fn scatter(&mut self, req: &NoiseScatter<'_>) -> &mut Self {
        let out = primitives::noise_scatter(req, &mut *self.rng);
        self.extend(out)
    }

    /// Body silhouette via [`primitives::organic_blob`].
    pub fn blob(&mut self, req: &OrganicBlob) -> &mut Self {
        let out = primitives::organic_blob(req, &mut *self.rng);
        self.extend(out)
    }

    /// Particles via [`primitives::particle_cloud`].
    pub fn particles(&mut self, req: &ParticleCloud) -> &mut Self {
        let out = primitives::particle_cloud(req, &mut *self.rng);
        self.extend(out)
    }

    /// Gear via [`primitives::gear_profile`].
    pub fn gear(&mut self, req: &GearProfile) -> &mut Self {
        self.extend(primitives::gear_profile(req))
    }

    /// Facet fan via [`primitives::crystal_facets`].
    pub fn facets(&mut self, req: &CrystalFacets<'_>) -> &mut Self {
        let out = primitives::crystal_facets(req, &mut *self.rng);
        self.extend(out)
    }

    /// Annular panel via [`primitives::ring_segment`].
    pub fn ring_segment(&mut self, req: &RingSegment) -> &mut Self {
        self.extend(primitives::ring_segment(req))
    }

    /// Number of fragments in `layer` so far.
    pub fn len(&self, layer: Layer) -> usize {
        match layer {
            Layer::Ground => self.ground.len(),
            Layer::Body => self.body.len(),
            Layer::Aura => self.aura.len(),
        }
    }

    /// Flatten into paint order. Fails if nothing was emitted.
    pub fn finish(self) -> SpriteResult<Vec<Fragment>> {
        let Self {
            mut ground,
            body,
            aura,
            ..
        } = self;
        if ground.is_empty() && body.is_empty() && aura.is_empty() {
            return Err(SpriteError::validation("composer emitted no fragments"));
        }
        ground.reserve(body.len() + aura.len());
        ground.extend(body);
        ground.extend(aura);
        Ok(ground)
    }

    /// Flatten with layer tags, for inspecting paint order.
    pub fn finish_layered(self) -> Vec<(Layer, Fragment)> {
        let tag = |layer: Layer| move |f: Fragment| (layer, f);
        self.ground
            .into_iter()
            .map(tag(Layer::Ground))
            .chain(self.body.into_iter().map(tag(Layer::Body)))
            .chain(self.aura.into_iter().map(tag(Layer::Aura)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/creature/composer.rs"]
mod tests;
