use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Instances are ordered by render layer; within a layer, spawn order is kept.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();
    buffer.instances.extend(entities.filter_map(RenderInstance::from_entity));
    // Stable sort keeps spawn order inside each layer.
    buffer.instances.sort_by(|a, b| a.layer.total_cmp(&b.layer));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::layer::RenderLayer;
    use crate::components::sprite::SpriteComponent;

    fn sprite_entity(id: u32, layer: RenderLayer) -> Entity {
        Entity::new(EntityId(id))
            .with_layer(layer)
            .with_sprite(SpriteComponent::default())
    }

    #[test]
    fn instances_sorted_back_to_front() {
        let entities = vec![
            sprite_entity(1, RenderLayer::Actors),
            sprite_entity(2, RenderLayer::Terrain),
            sprite_entity(3, RenderLayer::Terrain),
            sprite_entity(4, RenderLayer::Backdrop),
        ];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        let layers: Vec<f32> = buffer.instances.iter().map(|i| i.layer).collect();
        assert_eq!(layers, vec![0.0, 1.0, 1.0, 2.0]);
    }

    #[test]
    fn inactive_entities_are_skipped() {
        let mut entity = sprite_entity(1, RenderLayer::Actors);
        entity.active = false;
        let entities = vec![entity];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }
}
